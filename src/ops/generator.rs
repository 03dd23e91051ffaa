use crate::ops::utils::{HARMONIC_COUNT, HARMONIC_EPS, OMEGA, PHASES};
use ndarray::{Array2, ArrayView1};

/// Amplitudes driving the synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceParams {
    /// Positive-sequence amplitudes for harmonic orders 1..=5.
    pub harmonics: [f64; HARMONIC_COUNT],
    /// Negative-sequence fundamental amplitude.
    pub negative: f64,
}

impl Default for SequenceParams {
    fn default() -> Self {
        Self {
            harmonics: [1.0, 0.0, 0.0, 0.0, 0.0],
            negative: 0.1,
        }
    }
}

impl SequenceParams {
    pub fn new(harmonics: [f64; HARMONIC_COUNT], negative: f64) -> Self {
        Self {
            harmonics,
            negative,
        }
    }

    /// Fundamentals only, no higher harmonics.
    pub fn fundamental(positive: f64, negative: f64) -> Self {
        Self::new([positive, 0.0, 0.0, 0.0, 0.0], negative)
    }

    pub fn zero() -> Self {
        Self::new([0.0; HARMONIC_COUNT], 0.0)
    }

    /// Sum of the positive-sequence harmonic amplitudes.
    pub fn positive_total(&self) -> f64 {
        self.harmonics.iter().sum()
    }
}

/// Phase values of both sequences at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSample {
    pub positive: [f64; PHASES],
    pub negative: [f64; PHASES],
}

impl PhaseSample {
    pub fn combined(&self) -> [f64; PHASES] {
        std::array::from_fn(|p| self.positive[p] + self.negative[p])
    }
}

/// Evaluates both sequences at time `t`.
pub fn sample(t: f64, angles: &[f64; PHASES], params: &SequenceParams) -> PhaseSample {
    let mut positive = [0.0; PHASES];
    for (h_idx, &amp) in params.harmonics.iter().enumerate() {
        if amp.abs() < HARMONIC_EPS {
            continue;
        }
        let order = (h_idx + 1) as f64;
        for (p, angle) in angles.iter().enumerate() {
            positive[p] += amp * (order * (OMEGA * t - angle)).cos();
        }
    }

    // 역상분: 위상각 부호가 반대
    let mut negative = [0.0; PHASES];
    for (p, angle) in angles.iter().enumerate() {
        negative[p] = params.negative * (OMEGA * t + angle).cos();
    }

    PhaseSample { positive, negative }
}

/// Per-phase arrays of shape `(samples, 3)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceSignals {
    pub positive: Array2<f64>,
    pub negative: Array2<f64>,
    pub combined: Array2<f64>,
}

impl SequenceSignals {
    pub fn len(&self) -> usize {
        self.combined.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Synthesizes positive, negative and combined phase signals over `time`.
pub fn generate(
    time: &ArrayView1<f64>,
    angles: &[f64; PHASES],
    params: &SequenceParams,
) -> SequenceSignals {
    let n = time.len();
    let mut positive = Array2::zeros((n, PHASES));
    let mut negative = Array2::zeros((n, PHASES));
    let mut combined = Array2::zeros((n, PHASES));

    for (i, &t) in time.iter().enumerate() {
        let s = sample(t, angles, params);
        for p in 0..PHASES {
            positive[[i, p]] = s.positive[p];
            negative[[i, p]] = s.negative[p];
            combined[[i, p]] = s.positive[p] + s.negative[p];
        }
    }

    SequenceSignals {
        positive,
        negative,
        combined,
    }
}
