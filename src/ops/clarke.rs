use crate::error::{Result, ScopeError};
use crate::ops::utils::{PHASES, SQRT_3_2};
use ndarray::{Array1, ArrayView2, Zip};
use std::fmt;
use std::str::FromStr;

/// Scaling convention of the Clarke transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalingMode {
    /// k = 2/3, preserves peak amplitude.
    AmplitudeInvariant,
    /// k = √(2/3), preserves instantaneous power.
    #[default]
    PowerInvariant,
}

impl ScalingMode {
    pub fn gain(self) -> f64 {
        match self {
            ScalingMode::AmplitudeInvariant => 2.0 / 3.0,
            ScalingMode::PowerInvariant => (2.0f64 / 3.0).sqrt(),
        }
    }
}

impl FromStr for ScalingMode {
    type Err = ScopeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "amp" | "amplitude" | "amplitude_invariant" => Ok(ScalingMode::AmplitudeInvariant),
            "power" | "power_invariant" => Ok(ScalingMode::PowerInvariant),
            _ => Err(ScopeError::UnknownScalingMode(s.to_string())),
        }
    }
}

impl fmt::Display for ScalingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalingMode::AmplitudeInvariant => write!(f, "amplitude"),
            ScalingMode::PowerInvariant => write!(f, "power"),
        }
    }
}

/// Clarke transform of a single instant.
#[inline]
pub fn clarke_sample(a: f64, b: f64, c: f64, mode: ScalingMode) -> (f64, f64) {
    let k = mode.gain();
    let alpha = k * (a - 0.5 * b - 0.5 * c);
    let beta = k * (SQRT_3_2 * b - SQRT_3_2 * c);
    (alpha, beta)
}

/// α and β series aligned with the time base.
#[derive(Debug, Clone, PartialEq)]
pub struct ClarkeSignals {
    pub alpha: Array1<f64>,
    pub beta: Array1<f64>,
}

impl ClarkeSignals {
    pub fn len(&self) -> usize {
        self.alpha.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alpha.is_empty()
    }
}

/// Projects a `(samples, 3)` phase matrix onto the αβ frame, row by row.
///
/// # Panics
/// If `combined` does not have exactly 3 columns.
pub fn project(combined: &ArrayView2<f64>, mode: ScalingMode) -> ClarkeSignals {
    assert_eq!(combined.ncols(), PHASES, "phase matrix must have 3 columns");

    let n = combined.nrows();
    let mut alpha = Array1::zeros(n);
    let mut beta = Array1::zeros(n);

    Zip::from(&mut alpha)
        .and(&mut beta)
        .and(combined.rows())
        .for_each(|al, be, row| {
            let (a, b) = clarke_sample(row[0], row[1], row[2], mode);
            *al = a;
            *be = b;
        });

    ClarkeSignals { alpha, beta }
}

/// Like [`project`], but reports a wrong column count as `ShapeMismatch`.
pub fn try_project(combined: &ArrayView2<f64>, mode: ScalingMode) -> Result<ClarkeSignals> {
    if combined.ncols() != PHASES {
        return Err(ScopeError::ShapeMismatch {
            expected: PHASES,
            actual: combined.ncols(),
        });
    }
    Ok(project(combined, mode))
}
