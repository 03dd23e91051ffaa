//! Clarke scope - numeric core for a three-phase Clarke transform visualizer.
//!
//! [`ops`] holds the pure, stateless pipeline (sequence generation, Clarke
//! projection, phasor geometry and spectrum analysis). [`scope`] keeps the
//! interactive state on top of it for a presentation layer to drive.

pub mod config;
pub mod error;
pub mod ops;
pub mod scope;

#[cfg(feature = "python")]
mod bindings;

pub use config::{ScopeConfig, SpectrumConfig};
pub use error::{Result, ScopeError};
pub use ops::{ScalingMode, SequenceParams, SpectrumSource};
pub use scope::ClarkeScope;
