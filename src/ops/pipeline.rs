use crate::ops::clarke::{project, ClarkeSignals, ScalingMode};
use crate::ops::generator::{generate, SequenceParams, SequenceSignals};
use crate::ops::utils::PHASE_ANGLES;
use ndarray::ArrayView1;

/// Every derived array for one parameter set.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveforms {
    pub sequences: SequenceSignals,
    pub clarke: ClarkeSignals,
}

impl Waveforms {
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

/// Generator followed by the Clarke projection.
pub fn compute(time: &ArrayView1<f64>, params: &SequenceParams, mode: ScalingMode) -> Waveforms {
    let sequences = generate(time, &PHASE_ANGLES, params);
    let clarke = project(&sequences.combined.view(), mode);
    Waveforms { sequences, clarke }
}
