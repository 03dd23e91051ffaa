//! Long-run spectrum of a selected scope signal.
//!
//! The signal is synthesized sample by sample (no waveform arrays are kept),
//! weighted with a flat-top window so peak heights read as amplitudes, and
//! transformed with a single forward FFT.

use crate::config::SpectrumConfig;
use crate::error::ScopeError;
use crate::ops::clarke::{clarke_sample, ScalingMode};
use crate::ops::generator::{sample, SequenceParams};
use crate::ops::utils::PHASE_ANGLES;
use rustfft::{num_complex::Complex, FftPlanner};
use std::f64::consts::PI;
use std::str::FromStr;
use tracing::debug;

/// Flat-top window coefficients a0..a4.
const FLAT_TOP: [f64; 5] = [0.21557895, 0.41663158, 0.277263158, 0.083578947, 0.006947368];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpectrumSource {
    #[default]
    PhaseA,
    PhaseB,
    PhaseC,
    Alpha,
    Beta,
    /// α + jβ; separates forward from backward rotation.
    ComplexVector,
}

impl FromStr for SpectrumSource {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['_', '-'], " ").as_str() {
            "phase a" | "a" => Ok(SpectrumSource::PhaseA),
            "phase b" | "b" => Ok(SpectrumSource::PhaseB),
            "phase c" | "c" => Ok(SpectrumSource::PhaseC),
            "alpha" => Ok(SpectrumSource::Alpha),
            "beta" => Ok(SpectrumSource::Beta),
            "complex vector" | "complex" => Ok(SpectrumSource::ComplexVector),
            _ => Err(ScopeError::UnknownSpectrumSource(s.to_string())),
        }
    }
}

/// Peaks found inside the analysis band, sorted by frequency.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Spectrum {
    pub frequencies: Vec<f64>,
    pub magnitudes: Vec<f64>,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Largest peak as `(frequency, magnitude)`.
    pub fn dominant(&self) -> Option<(f64, f64)> {
        self.frequencies
            .iter()
            .zip(&self.magnitudes)
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(f, m)| (*f, *m))
    }

    /// Highest peak within `tolerance` Hz of `frequency`.
    pub fn magnitude_near(&self, frequency: f64, tolerance: f64) -> Option<f64> {
        self.frequencies
            .iter()
            .zip(&self.magnitudes)
            .filter(|(f, _)| (**f - frequency).abs() <= tolerance)
            .map(|(_, m)| *m)
            .max_by(|a, b| a.total_cmp(b))
    }
}

/// Symmetric 5-term flat-top window of length `n`.
pub fn flat_top_window(n: usize) -> Vec<f64> {
    let denom = (n.max(2) - 1) as f64;
    (0..n)
        .map(|i| {
            let x = 2.0 * PI * i as f64 / denom;
            FLAT_TOP[0] - FLAT_TOP[1] * x.cos() + FLAT_TOP[2] * (2.0 * x).cos()
                - FLAT_TOP[3] * (3.0 * x).cos()
                + FLAT_TOP[4] * (4.0 * x).cos()
        })
        .collect()
}

fn source_value(t: f64, params: &SequenceParams, mode: ScalingMode, source: SpectrumSource) -> Complex<f64> {
    let [a, b, c] = sample(t, &PHASE_ANGLES, params).combined();
    match source {
        SpectrumSource::PhaseA => Complex::new(a, 0.0),
        SpectrumSource::PhaseB => Complex::new(b, 0.0),
        SpectrumSource::PhaseC => Complex::new(c, 0.0),
        SpectrumSource::Alpha => Complex::new(clarke_sample(a, b, c, mode).0, 0.0),
        SpectrumSource::Beta => Complex::new(clarke_sample(a, b, c, mode).1, 0.0),
        SpectrumSource::ComplexVector => {
            let (alpha, beta) = clarke_sample(a, b, c, mode);
            Complex::new(alpha, beta)
        }
    }
}

/// Windowed FFT of `source` sampled every `dt` seconds, reduced to band peaks.
pub fn spectrum(
    params: &SequenceParams,
    mode: ScalingMode,
    source: SpectrumSource,
    config: &SpectrumConfig,
    dt: f64,
) -> Spectrum {
    let n = config.points;
    let window = flat_top_window(n);
    let window_sum: f64 = window.iter().sum();

    let mut buffer: Vec<Complex<f64>> = window
        .iter()
        .enumerate()
        .map(|(i, w)| source_value(i as f64 * dt, params, mode, source) * *w)
        .collect();

    let fft = FftPlanner::<f64>::new().plan_fft_forward(n);
    fft.process(&mut buffer);

    let span = n as f64 * dt;
    let mut band: Vec<(f64, f64)> = buffer
        .iter()
        .enumerate()
        .map(|(i, x)| {
            let bin = if i < n / 2 { i as f64 } else { i as f64 - n as f64 };
            (bin / span, x.norm() / window_sum)
        })
        .filter(|(f, _)| f.abs() <= config.band)
        .collect();
    band.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut peaks = Spectrum::default();
    for i in 0..band.len() {
        let (freq, mag) = band[i];
        if mag <= config.peak_threshold {
            continue;
        }
        let prev = if i > 0 { band[i - 1].1 } else { 0.0 };
        let next = band.get(i + 1).map(|b| b.1).unwrap_or(0.0);
        if mag > prev && mag > next {
            peaks.frequencies.push(freq);
            peaks.magnitudes.push(mag);
        }
    }

    debug!(points = n, ?source, %mode, peaks = peaks.len(), "spectrum computed");
    peaks
}
