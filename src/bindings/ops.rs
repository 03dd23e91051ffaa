use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray1, PyReadonlyArray2};
use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::config::SpectrumConfig;
use crate::error::ScopeError;
use crate::ops::{
    clarke, generator, spectrum as spectrum_ops, utils, ScalingMode, SequenceParams,
    SpectrumSource, PHASE_ANGLES,
};

fn parse_mode(mode: &str) -> PyResult<ScalingMode> {
    Ok(mode.parse::<ScalingMode>()?)
}

#[pyfunction]
#[pyo3(signature = (samples = 200, duration = 2.0))]
fn time_base<'py>(py: Python<'py>, samples: usize, duration: f64) -> &'py PyArray1<f64> {
    utils::time_base(samples, duration).into_pyarray(py)
}

/// Returns `(positive, negative, combined)`, each `(len(t), 3)`.
#[pyfunction]
#[pyo3(signature = (t, harmonics, negative))]
fn generate_signals<'py>(
    py: Python<'py>,
    t: PyReadonlyArray1<f64>,
    harmonics: [f64; 5],
    negative: f64,
) -> (&'py PyArray2<f64>, &'py PyArray2<f64>, &'py PyArray2<f64>) {
    let params = SequenceParams::new(harmonics, negative);
    let signals = generator::generate(&t.as_array(), &PHASE_ANGLES, &params);
    (
        signals.positive.into_pyarray(py),
        signals.negative.into_pyarray(py),
        signals.combined.into_pyarray(py),
    )
}

/// Returns `(alpha, beta)` for a `(N, 3)` phase matrix.
#[pyfunction]
#[pyo3(signature = (abc, mode = "power"))]
fn clarke_project<'py>(
    py: Python<'py>,
    abc: PyReadonlyArray2<f64>,
    mode: &str,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let mode = parse_mode(mode)?;
    let signals = clarke::try_project(&abc.as_array(), mode)?;
    Ok((signals.alpha.into_pyarray(py), signals.beta.into_pyarray(py)))
}

/// Returns `(frequencies, magnitudes)` of the detected peaks.
#[pyfunction]
#[pyo3(signature = (harmonics, negative, mode = "power", source = "phase a", dt = 2.0 / 199.0, points = 16384))]
fn spectrum_peaks<'py>(
    py: Python<'py>,
    harmonics: [f64; 5],
    negative: f64,
    mode: &str,
    source: &str,
    dt: f64,
    points: usize,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let mode = parse_mode(mode)?;
    let source = source.parse::<SpectrumSource>()?;
    if points < 2 || !(dt > 0.0) {
        return Err(ScopeError::invalid_config(format!(
            "spectrum needs points >= 2 and dt > 0, got points={points} dt={dt}"
        ))
        .into());
    }
    let config = SpectrumConfig {
        points,
        ..SpectrumConfig::default()
    };
    let params = SequenceParams::new(harmonics, negative);
    let peaks = spectrum_ops::spectrum(&params, mode, source, &config, dt);
    Ok((
        peaks.frequencies.into_pyarray(py),
        peaks.magnitudes.into_pyarray(py),
    ))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(time_base, m)?)?;
    m.add_function(wrap_pyfunction!(generate_signals, m)?)?;
    m.add_function(wrap_pyfunction!(clarke_project, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_peaks, m)?)?;
    Ok(())
}
