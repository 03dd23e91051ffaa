use std::time::Duration;

use crate::error::{Result, ScopeError};

/// Spectrum analyzer settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumConfig {
    /// FFT length; about 100 s of signal at the default time step.
    pub points: usize,
    /// Half-width of the reported band in Hz.
    pub band: f64,
    /// Minimum magnitude for a bin to count as a peak.
    pub peak_threshold: f64,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            points: 16384,
            band: 5.5,
            peak_threshold: 0.004,
        }
    }
}

/// Scope settings fixed for the lifetime of a [`crate::scope::ClarkeScope`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeConfig {
    /// Number of samples in the time base.
    pub samples: usize,
    /// Time span in seconds, both ends included.
    pub duration: f64,
    /// Playback step for the external timer (50 ms is 20 fps).
    pub frame_interval: Duration,
    /// Upper bound of the amplitude inputs.
    pub amplitude_max: f64,
    /// Vectors of a sequence whose total amplitude is below this are hidden.
    pub visibility_threshold: f64,
    /// Start playback with looping enabled.
    pub looping: bool,
    pub spectrum: SpectrumConfig,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            samples: 200,
            duration: 2.0,
            frame_interval: Duration::from_millis(50),
            amplitude_max: 10.0,
            visibility_threshold: 0.01,
            looping: true,
            spectrum: SpectrumConfig::default(),
        }
    }
}

impl ScopeConfig {
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_spectrum(mut self, spectrum: SpectrumConfig) -> Self {
        self.spectrum = spectrum;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.samples < 2 {
            return Err(ScopeError::invalid_config(format!(
                "samples must be at least 2, got {}",
                self.samples
            )));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(ScopeError::invalid_config(format!(
                "duration must be positive and finite, got {}",
                self.duration
            )));
        }
        if !(self.amplitude_max >= 0.0) {
            return Err(ScopeError::invalid_config(format!(
                "amplitude_max must be non-negative, got {}",
                self.amplitude_max
            )));
        }
        if self.spectrum.points < 2 {
            return Err(ScopeError::invalid_config(format!(
                "spectrum points must be at least 2, got {}",
                self.spectrum.points
            )));
        }
        if !(self.spectrum.band > 0.0) {
            return Err(ScopeError::invalid_config(format!(
                "spectrum band must be positive, got {}",
                self.spectrum.band
            )));
        }
        Ok(())
    }

    /// Spacing between consecutive samples of the time base.
    pub fn time_step(&self) -> f64 {
        self.duration / (self.samples - 1) as f64
    }

    /// Clamps a user-entered amplitude into `[0, amplitude_max]`.
    ///
    /// Meant for the input surface; the generator itself accepts any value.
    pub fn clamp_amplitude(&self, value: f64) -> f64 {
        value.clamp(0.0, self.amplitude_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_match_widget() {
        let config = ScopeConfig::default();
        assert_eq!(config.samples, 200);
        assert_relative_eq!(config.duration, 2.0);
        assert_eq!(config.frame_interval, Duration::from_millis(50));
        assert_relative_eq!(config.time_step(), 2.0 / 199.0);
        assert!(config.looping);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(ScopeConfig::default().with_samples(1).validate().is_err());
        assert!(ScopeConfig::default().with_duration(0.0).validate().is_err());
        assert!(ScopeConfig::default()
            .with_duration(f64::NAN)
            .validate()
            .is_err());

        let spectrum = SpectrumConfig {
            points: 1,
            ..SpectrumConfig::default()
        };
        assert!(ScopeConfig::default()
            .with_spectrum(spectrum)
            .validate()
            .is_err());

        let spectrum = SpectrumConfig {
            band: 0.0,
            ..SpectrumConfig::default()
        };
        let err = ScopeConfig::default()
            .with_spectrum(spectrum)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ScopeError::InvalidConfig { .. }));
    }

    #[test]
    fn test_clamp_amplitude() {
        let config = ScopeConfig::default();
        assert_relative_eq!(config.clamp_amplitude(-0.5), 0.0);
        assert_relative_eq!(config.clamp_amplitude(3.3), 3.3);
        assert_relative_eq!(config.clamp_amplitude(42.0), 10.0);
    }
}
