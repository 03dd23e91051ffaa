use ndarray::Array1;
use std::f64::consts::PI;

/// Fundamental angular frequency: one full cycle per second.
pub const OMEGA: f64 = 2.0 * PI;

pub const PHASES: usize = 3;
pub const HARMONIC_COUNT: usize = 5;

/// Phase offsets of A, B and C (0°, 120°, 240°).
pub const PHASE_ANGLES: [f64; PHASES] = [0.0, 2.0 * PI / 3.0, 4.0 * PI / 3.0];

pub const SQRT_3_2: f64 = 0.866_025_403_784_438_6;

/// Harmonics with a smaller magnitude are skipped during synthesis.
pub const HARMONIC_EPS: f64 = 1e-3;

/// Total sequence amplitude below which its phasors are not drawn.
pub const VISIBILITY_THRESHOLD: f64 = 0.01;

/// `samples` instants evenly spread over `[0, duration]`, both ends included.
pub fn time_base(samples: usize, duration: f64) -> Array1<f64> {
    Array1::linspace(0.0, duration, samples)
}
