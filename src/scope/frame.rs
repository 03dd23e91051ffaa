use crate::error::{Result, ScopeError};
use crate::ops::{
    arrange, clarke_instant_vectors, instant_vectors, rotating_fields, ArrangedVectors,
    ClarkeVectors, RotatingFields, SequenceVectors, Vector2, VectorLayout, Visibility, Waveforms,
    PHASES, PHASE_ANGLES,
};
use crate::scope::trajectory::TrajectoryPoint;
use ndarray::ArrayView1;

/// Display toggles owned by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewOptions {
    /// Chain vectors tip-to-tail instead of drawing them from the origin.
    pub decomposition: bool,
    pub show_trajectory: bool,
    /// Draw the positive and negative resultants as separate fields.
    pub show_rotating_fields: bool,
    /// Trace the rotating fields as well; needs the two options above.
    pub extra_trajectory: bool,
}

impl ViewOptions {
    pub fn layout(&self) -> VectorLayout {
        VectorLayout::from_decomposition(self.decomposition)
    }

    /// Whether the extra-field traces are actually recorded.
    pub fn extra_trajectory_active(&self) -> bool {
        self.extra_trajectory && self.show_trajectory && self.show_rotating_fields
    }
}

/// Every phasor of one frame with its resultants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameVectors {
    pub sequences: SequenceVectors,
    pub clarke: ClarkeVectors,
    pub positive_resultant: Vector2,
    pub negative_resultant: Vector2,
    pub combined_resultant: Vector2,
    pub clarke_resultant: Vector2,
}

impl FrameVectors {
    pub fn trajectory_point(&self) -> TrajectoryPoint {
        TrajectoryPoint {
            combined: self.combined_resultant,
            clarke: self.clarke_resultant,
            positive_field: self.positive_resultant,
            stacked_field: self.positive_resultant + self.negative_resultant,
        }
    }
}

pub fn frame_vectors(waveforms: &Waveforms, frame: usize) -> Result<FrameVectors> {
    let sequences = instant_vectors(
        &waveforms.sequences.positive.view(),
        &waveforms.sequences.negative.view(),
        &PHASE_ANGLES,
        frame,
    )?;
    let clarke = clarke_instant_vectors(
        &waveforms.clarke.alpha.view(),
        &waveforms.clarke.beta.view(),
        frame,
    )?;
    Ok(FrameVectors {
        positive_resultant: sequences.positive_resultant(),
        negative_resultant: sequences.negative_resultant(),
        combined_resultant: sequences.combined_resultant(),
        clarke_resultant: clarke.resultant(),
        sequences,
        clarke,
    })
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameView {
    pub frame: usize,
    pub time: f64,
    /// Combined A, B, C values for the time-domain markers.
    pub phase_values: [f64; PHASES],
    pub alpha: f64,
    pub beta: f64,
    /// Positive A, B, C then negative A, B, C.
    pub combined: ArrangedVectors,
    /// α then β.
    pub clarke: ArrangedVectors,
    pub visibility: Visibility,
    /// `None` unless rotating fields are shown.
    pub rotating_fields: Option<RotatingFields>,
    pub trajectory: TrajectoryPoint,
}

pub fn render_frame(
    time: &ArrayView1<f64>,
    waveforms: &Waveforms,
    visibility: Visibility,
    options: ViewOptions,
    frame: usize,
) -> Result<FrameView> {
    ScopeError::check_frame(frame, time.len())?;
    let vectors = frame_vectors(waveforms, frame)?;
    let layout = options.layout();

    let row = waveforms.sequences.combined.row(frame);
    let mut phase_values = [0.0; PHASES];
    for (p, v) in phase_values.iter_mut().enumerate() {
        *v = row[p];
    }

    Ok(FrameView {
        frame,
        time: time[frame],
        phase_values,
        alpha: waveforms.clarke.alpha[frame],
        beta: waveforms.clarke.beta[frame],
        combined: arrange(&vectors.sequences.all(), layout),
        clarke: arrange(&vectors.clarke.all(), layout),
        visibility,
        rotating_fields: options
            .show_rotating_fields
            .then(|| rotating_fields(&vectors.sequences, visibility)),
        trajectory: vectors.trajectory_point(),
    })
}
