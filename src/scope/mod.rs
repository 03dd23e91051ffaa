//! # Scope adapter
//!
//! `ClarkeScope` owns the mutable visualization state (parameters, scaling
//! mode, view toggles, playback cursor and trajectory buffers) and re-runs the
//! pure pipeline in [`crate::ops`] whenever a parameter changes. The
//! presentation layer pushes inputs, pulls arrays and per-frame views, and
//! drives playback by calling [`ClarkeScope::tick`] from its own timer.

pub mod frame;
pub mod playback;
pub mod trajectory;

pub use self::frame::{frame_vectors, render_frame, FrameVectors, FrameView, ViewOptions};
pub use self::playback::{Playback, Tick};
pub use self::trajectory::{Trajectories, Trajectory, TrajectoryPoint};

use crate::config::ScopeConfig;
use crate::error::{Result, ScopeError};
use crate::ops::{
    compute, spectrum, time_base, ScalingMode, SequenceParams, Spectrum, SpectrumSource,
    Visibility, Waveforms, HARMONIC_COUNT,
};
use ndarray::{Array1, Array2};
use std::time::Duration;
use tracing::{debug, trace};

pub struct ClarkeScope {
    config: ScopeConfig,
    time: Array1<f64>,
    params: SequenceParams,
    mode: ScalingMode,
    options: ViewOptions,
    waveforms: Waveforms,
    playback: Playback,
    trajectories: Trajectories,
}

impl ClarkeScope {
    pub fn new(config: ScopeConfig) -> Result<Self> {
        config.validate()?;
        let time = time_base(config.samples, config.duration);
        let params = SequenceParams::default();
        let mode = ScalingMode::default();
        let waveforms = compute(&time.view(), &params, mode);
        let playback = Playback::new(config.samples, config.looping);
        debug!(
            samples = config.samples,
            duration = config.duration,
            "scope initialized"
        );
        Ok(Self {
            config,
            time,
            params,
            mode,
            options: ViewOptions::default(),
            waveforms,
            playback,
            trajectories: Trajectories::default(),
        })
    }

    fn recompute(&mut self) {
        self.waveforms = compute(&self.time.view(), &self.params, self.mode);
        debug!(
            harmonics = ?self.params.harmonics,
            negative = self.params.negative,
            mode = %self.mode,
            "sequence signals recomputed"
        );
    }

    // ---- inputs ----

    pub fn set_harmonic_amplitudes(&mut self, harmonics: [f64; HARMONIC_COUNT]) {
        self.params.harmonics = harmonics;
        self.recompute();
    }

    /// Sets one positive-sequence harmonic, `order` in `1..=5`.
    pub fn set_harmonic(&mut self, order: usize, value: f64) -> Result<()> {
        if !(1..=HARMONIC_COUNT).contains(&order) {
            return Err(ScopeError::HarmonicOutOfRange { order });
        }
        self.params.harmonics[order - 1] = value;
        self.recompute();
        Ok(())
    }

    pub fn set_negative_amplitude(&mut self, value: f64) {
        self.params.negative = value;
        self.recompute();
    }

    pub fn set_params(&mut self, params: SequenceParams) {
        self.params = params;
        self.recompute();
    }

    pub fn set_scaling_mode(&mut self, mode: ScalingMode) {
        if self.mode != mode {
            self.mode = mode;
            self.recompute();
        }
    }

    /// Moves to `frame` and renders it, recording trajectories when enabled.
    ///
    /// Staying on the current frame renders without recording again.
    pub fn set_frame(&mut self, frame: usize) -> Result<FrameView> {
        ScopeError::check_frame(frame, self.len())?;
        if frame == self.playback.frame() {
            return self.frame_view(frame);
        }
        self.playback.seek(frame);
        self.refresh()
    }

    /// Renders the current frame, recording trajectories when enabled.
    pub fn refresh(&mut self) -> Result<FrameView> {
        let view = self.frame_view(self.playback.frame())?;
        if self.options.show_trajectory {
            self.trajectories
                .record(&view.trajectory, self.options.extra_trajectory_active());
        }
        trace!(frame = view.frame, time = view.time, "frame rendered");
        Ok(view)
    }

    // ---- view options ----

    pub fn options(&self) -> ViewOptions {
        self.options
    }

    pub fn set_decomposition(&mut self, on: bool) {
        self.options.decomposition = on;
    }

    /// Turning the trajectory off drops every recorded trace.
    pub fn set_show_trajectory(&mut self, on: bool) {
        self.options.show_trajectory = on;
        if !on {
            self.trajectories.clear();
        }
    }

    pub fn set_show_rotating_fields(&mut self, on: bool) {
        self.options.show_rotating_fields = on;
    }

    /// Turning extra trajectories off drops the two field traces.
    pub fn set_extra_trajectory(&mut self, on: bool) {
        self.options.extra_trajectory = on;
        if !on {
            self.trajectories.clear_fields();
        }
    }

    /// The extra-trajectory toggle is only meaningful with both trajectory
    /// and rotating fields shown.
    pub fn extra_trajectory_available(&self) -> bool {
        self.options.show_trajectory && self.options.show_rotating_fields
    }

    // ---- playback ----

    pub fn toggle_play(&mut self) -> bool {
        let playing = self.playback.toggle();
        debug!(playing, frame = self.playback.frame(), "playback toggled");
        playing
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.playback.set_looping(looping);
    }

    pub fn is_looping(&self) -> bool {
        self.playback.is_looping()
    }

    /// Period for the external timer that calls [`ClarkeScope::tick`].
    pub fn frame_interval(&self) -> Duration {
        self.config.frame_interval
    }

    /// Advances playback by one frame.
    ///
    /// Returns the rendered frame, or `None` when paused or just stopped at
    /// the end. A wrap renders frame 0 and leaves every trajectory empty.
    pub fn tick(&mut self) -> Result<Option<FrameView>> {
        match self.playback.tick() {
            Tick::Idle => Ok(None),
            Tick::Advanced(_) => self.refresh().map(Some),
            Tick::Wrapped => {
                let view = self.refresh()?;
                self.trajectories.clear();
                debug!("playback wrapped; trajectories cleared");
                Ok(Some(view))
            }
            Tick::Finished => {
                debug!(frame = self.playback.frame(), "playback finished");
                Ok(None)
            }
        }
    }

    /// Stops playback, rewinds to frame 0 and clears all trajectories.
    pub fn reset(&mut self) {
        self.playback.reset();
        self.trajectories.clear();
        debug!("scope reset");
    }

    // ---- outputs ----

    pub fn config(&self) -> &ScopeConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn frame(&self) -> usize {
        self.playback.frame()
    }

    pub fn params(&self) -> &SequenceParams {
        &self.params
    }

    pub fn scaling_mode(&self) -> ScalingMode {
        self.mode
    }

    pub fn time_base(&self) -> &Array1<f64> {
        &self.time
    }

    pub fn waveforms(&self) -> &Waveforms {
        &self.waveforms
    }

    pub fn positive_signals(&self) -> &Array2<f64> {
        &self.waveforms.sequences.positive
    }

    pub fn negative_signals(&self) -> &Array2<f64> {
        &self.waveforms.sequences.negative
    }

    pub fn combined_signals(&self) -> &Array2<f64> {
        &self.waveforms.sequences.combined
    }

    pub fn alpha_signal(&self) -> &Array1<f64> {
        &self.waveforms.clarke.alpha
    }

    pub fn beta_signal(&self) -> &Array1<f64> {
        &self.waveforms.clarke.beta
    }

    pub fn visibility(&self) -> Visibility {
        Visibility::for_params(&self.params, self.config.visibility_threshold)
    }

    pub fn instant_vectors(&self, frame: usize) -> Result<FrameVectors> {
        frame_vectors(&self.waveforms, frame)
    }

    pub fn trajectory_point(&self, frame: usize) -> Result<TrajectoryPoint> {
        Ok(self.instant_vectors(frame)?.trajectory_point())
    }

    /// Renders `frame` without touching any state.
    pub fn frame_view(&self, frame: usize) -> Result<FrameView> {
        render_frame(
            &self.time.view(),
            &self.waveforms,
            self.visibility(),
            self.options,
            frame,
        )
    }

    pub fn trajectories(&self) -> &Trajectories {
        &self.trajectories
    }

    pub fn spectrum(&self, source: SpectrumSource) -> Spectrum {
        spectrum(
            &self.params,
            self.mode,
            source,
            &self.config.spectrum,
            self.config.time_step(),
        )
    }
}
