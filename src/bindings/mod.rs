mod ops;
mod scope;

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::error::ScopeError;

impl From<ScopeError> for PyErr {
    fn from(err: ScopeError) -> PyErr {
        match err {
            ScopeError::FrameOutOfRange { .. } | ScopeError::HarmonicOutOfRange { .. } => {
                PyIndexError::new_err(err.to_string())
            }
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Clarke scope - three-phase sequence and Clarke transform core
#[pymodule]
pub fn _rust(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    // 파이프라인 함수
    ops::register(m)?;
    // 상태를 가진 스코프
    m.add_class::<scope::PyClarkeScope>()?;
    Ok(())
}
