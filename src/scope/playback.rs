/// Result of one timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not playing; nothing changed.
    Idle,
    Advanced(usize),
    /// Passed the last frame and restarted at 0.
    Wrapped,
    /// Reached the last frame with looping off; playback stopped.
    Finished,
}

/// Frame cursor driven by an external periodic timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback {
    frame: usize,
    len: usize,
    playing: bool,
    looping: bool,
}

impl Playback {
    pub fn new(len: usize, looping: bool) -> Self {
        Self {
            frame: 0,
            len,
            playing: false,
            looping,
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    /// Caller checks the bound.
    pub(crate) fn seek(&mut self, frame: usize) {
        self.frame = frame;
    }

    /// Flips between playing and paused, returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn reset(&mut self) {
        self.playing = false;
        self.frame = 0;
    }

    pub fn tick(&mut self) -> Tick {
        if !self.playing {
            return Tick::Idle;
        }
        if self.frame + 1 < self.len {
            self.frame += 1;
            Tick::Advanced(self.frame)
        } else if self.looping {
            self.frame = 0;
            Tick::Wrapped
        } else {
            self.playing = false;
            Tick::Finished
        }
    }
}
