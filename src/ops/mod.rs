pub mod clarke;
pub mod generator;
pub mod phasor;
pub mod pipeline;
pub mod spectrum;
pub mod utils;

pub use self::clarke::{clarke_sample, project, try_project, ClarkeSignals, ScalingMode};
pub use self::generator::{generate, sample, PhaseSample, SequenceParams, SequenceSignals};
pub use self::phasor::{
    arrange, clarke_instant_vectors, instant_vectors, resultant, rotating_fields, ArrangedVectors,
    ClarkeVectors, RotatingFields, Segment, SequenceVectors, Vector2, VectorLayout, Visibility,
};
pub use self::pipeline::{compute, Waveforms};
pub use self::spectrum::{spectrum, Spectrum, SpectrumSource};
pub use self::utils::{time_base, HARMONIC_COUNT, PHASES, PHASE_ANGLES};

#[cfg(test)]
mod __test__;
