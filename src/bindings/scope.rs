use numpy::{PyArray1, PyArray2, ToPyArray};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::config::ScopeConfig;
use crate::ops::{ScalingMode, Segment, SpectrumSource};
use crate::scope::{ClarkeScope, FrameView, TrajectoryPoint};

type Xy = (f64, f64);

fn segment_pair(s: Segment) -> (Xy, Xy) {
    (s.tail.into(), s.tip.into())
}

fn segments(list: &[Segment]) -> Vec<(Xy, Xy)> {
    list.iter().copied().map(segment_pair).collect()
}

/// `{trace name: (x, y)}` for one frame.
fn trajectory_dict<'py>(py: Python<'py>, point: &TrajectoryPoint) -> PyResult<&'py PyDict> {
    let dict = PyDict::new(py);
    for (name, v) in point.named_points() {
        dict.set_item(name, Xy::from(v))?;
    }
    Ok(dict)
}

fn frame_dict<'py>(py: Python<'py>, view: &FrameView) -> PyResult<&'py PyDict> {
    let dict = PyDict::new(py);
    dict.set_item("frame", view.frame)?;
    dict.set_item("time", view.time)?;
    dict.set_item("phase_values", view.phase_values.to_vec())?;
    dict.set_item("alpha", view.alpha)?;
    dict.set_item("beta", view.beta)?;
    dict.set_item("combined_segments", segments(&view.combined.segments))?;
    dict.set_item("combined_resultant", Xy::from(view.combined.resultant.tip))?;
    dict.set_item("clarke_segments", segments(&view.clarke.segments))?;
    dict.set_item("clarke_resultant", Xy::from(view.clarke.resultant.tip))?;
    dict.set_item("positive_visible", view.visibility.positive)?;
    dict.set_item("negative_visible", view.visibility.negative)?;
    if let Some(fields) = &view.rotating_fields {
        dict.set_item("positive_field", fields.positive.map(segment_pair))?;
        dict.set_item("negative_field", fields.negative.map(segment_pair))?;
    }
    dict.set_item("trajectory", trajectory_dict(py, &view.trajectory)?)?;
    Ok(dict)
}

/// Python 측 스코프 객체. 타이머는 호출자가 돌리고 `tick()`을 부른다.
#[pyclass(name = "ClarkeScope")]
pub struct PyClarkeScope {
    inner: ClarkeScope,
}

#[pymethods]
impl PyClarkeScope {
    #[new]
    #[pyo3(signature = (samples = 200, duration = 2.0))]
    fn new(samples: usize, duration: f64) -> PyResult<Self> {
        let config = ScopeConfig::default()
            .with_samples(samples)
            .with_duration(duration);
        Ok(Self {
            inner: ClarkeScope::new(config)?,
        })
    }

    /// Inputs are clamped to `[0, amplitude_max]` like the widget sliders.
    fn set_harmonic(&mut self, order: usize, value: f64) -> PyResult<()> {
        let value = self.inner.config().clamp_amplitude(value);
        Ok(self.inner.set_harmonic(order, value)?)
    }

    fn set_harmonic_amplitudes(&mut self, harmonics: [f64; 5]) {
        let config = self.inner.config();
        let clamped = harmonics.map(|h| config.clamp_amplitude(h));
        self.inner.set_harmonic_amplitudes(clamped);
    }

    fn set_negative_amplitude(&mut self, value: f64) {
        let value = self.inner.config().clamp_amplitude(value);
        self.inner.set_negative_amplitude(value);
    }

    fn set_scaling_mode(&mut self, mode: &str) -> PyResult<()> {
        self.inner.set_scaling_mode(mode.parse::<ScalingMode>()?);
        Ok(())
    }

    #[getter]
    fn scaling_mode(&self) -> String {
        self.inner.scaling_mode().to_string()
    }

    #[getter]
    fn harmonics(&self) -> [f64; 5] {
        self.inner.params().harmonics
    }

    #[getter]
    fn negative(&self) -> f64 {
        self.inner.params().negative
    }

    #[getter]
    fn frame(&self) -> usize {
        self.inner.frame()
    }

    #[getter]
    fn frame_interval_ms(&self) -> u64 {
        self.inner.frame_interval().as_millis() as u64
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn time_base<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        self.inner.time_base().to_pyarray(py)
    }

    fn positive_signals<'py>(&self, py: Python<'py>) -> &'py PyArray2<f64> {
        self.inner.positive_signals().to_pyarray(py)
    }

    fn negative_signals<'py>(&self, py: Python<'py>) -> &'py PyArray2<f64> {
        self.inner.negative_signals().to_pyarray(py)
    }

    fn combined_signals<'py>(&self, py: Python<'py>) -> &'py PyArray2<f64> {
        self.inner.combined_signals().to_pyarray(py)
    }

    fn alpha<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        self.inner.alpha_signal().to_pyarray(py)
    }

    fn beta<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        self.inner.beta_signal().to_pyarray(py)
    }

    fn set_decomposition(&mut self, on: bool) {
        self.inner.set_decomposition(on);
    }

    fn set_show_trajectory(&mut self, on: bool) {
        self.inner.set_show_trajectory(on);
    }

    fn set_show_rotating_fields(&mut self, on: bool) {
        self.inner.set_show_rotating_fields(on);
    }

    fn set_extra_trajectory(&mut self, on: bool) {
        self.inner.set_extra_trajectory(on);
    }

    fn extra_trajectory_available(&self) -> bool {
        self.inner.extra_trajectory_available()
    }

    fn set_frame<'py>(&mut self, py: Python<'py>, frame: usize) -> PyResult<&'py PyDict> {
        let view = self.inner.set_frame(frame)?;
        frame_dict(py, &view)
    }

    /// Re-renders the current frame, e.g. after an amplitude change.
    fn refresh<'py>(&mut self, py: Python<'py>) -> PyResult<&'py PyDict> {
        let view = self.inner.refresh()?;
        frame_dict(py, &view)
    }

    fn trajectory_point<'py>(&self, py: Python<'py>, frame: usize) -> PyResult<&'py PyDict> {
        let point = self.inner.trajectory_point(frame)?;
        trajectory_dict(py, &point)
    }

    fn frame_view<'py>(&self, py: Python<'py>, frame: usize) -> PyResult<&'py PyDict> {
        let view = self.inner.frame_view(frame)?;
        frame_dict(py, &view)
    }

    fn instant_vectors(&self, frame: usize) -> PyResult<(Vec<Xy>, Vec<Xy>)> {
        let v = self.inner.instant_vectors(frame)?;
        let abc = v.sequences.all().iter().map(|p| Xy::from(*p)).collect();
        let ab = v.clarke.all().iter().map(|p| Xy::from(*p)).collect();
        Ok((abc, ab))
    }

    fn toggle_play(&mut self) -> bool {
        self.inner.toggle_play()
    }

    #[getter]
    fn playing(&self) -> bool {
        self.inner.is_playing()
    }

    fn set_looping(&mut self, looping: bool) {
        self.inner.set_looping(looping);
    }

    /// `None` when paused or when playback just ran off the end.
    fn tick<'py>(&mut self, py: Python<'py>) -> PyResult<Option<&'py PyDict>> {
        match self.inner.tick()? {
            Some(view) => Ok(Some(frame_dict(py, &view)?)),
            None => Ok(None),
        }
    }

    fn reset(&mut self) {
        self.inner.reset();
    }

    /// `{name: (xs, ys)}` for every trace.
    fn trajectories<'py>(&self, py: Python<'py>) -> PyResult<&'py PyDict> {
        let t = self.inner.trajectories();
        let dict = PyDict::new(py);
        dict.set_item("combined", t.combined.xy())?;
        dict.set_item("clarke", t.clarke.xy())?;
        dict.set_item("positive_field", t.positive_field.xy())?;
        dict.set_item("stacked_field", t.stacked_field.xy())?;
        Ok(dict)
    }

    #[pyo3(signature = (source = "phase a"))]
    fn spectrum(&self, source: &str) -> PyResult<(Vec<f64>, Vec<f64>)> {
        let peaks = self.inner.spectrum(source.parse::<SpectrumSource>()?);
        Ok((peaks.frequencies, peaks.magnitudes))
    }

    fn __repr__(&self) -> String {
        let p = self.inner.params();
        format!(
            "ClarkeScope(harmonics={:?}, negative={}, mode={}, frame={})",
            p.harmonics,
            p.negative,
            self.inner.scaling_mode(),
            self.inner.frame()
        )
    }
}
