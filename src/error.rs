//! Error types for the scope pipeline.

use thiserror::Error;

/// Errors raised by the scope core and its adapter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScopeError {
    /// Frame index outside `[0, len)`.
    #[error("Frame index out of range: index {index}, length {len}")]
    FrameOutOfRange { index: usize, len: usize },

    /// Harmonic order outside `1..=5`.
    #[error("Harmonic order out of range: {order} (expected 1..=5)")]
    HarmonicOutOfRange { order: usize },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A phase matrix with the wrong number of columns.
    #[error("Shape mismatch: expected {expected} phase columns, actual {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Unknown scaling mode: {0}")]
    UnknownScalingMode(String),

    #[error("Unknown spectrum source: {0}")]
    UnknownSpectrumSource(String),
}

impl ScopeError {
    pub fn frame_out_of_range(index: usize, len: usize) -> Self {
        Self::FrameOutOfRange { index, len }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Fails with `FrameOutOfRange` unless `index < len`.
    pub fn check_frame(index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(Self::frame_out_of_range(index, len))
        }
    }
}

pub type Result<T> = std::result::Result<T, ScopeError>;
