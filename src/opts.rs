use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Options that control how speech detection is performed.
///
/// This struct represents *library-level configuration*, not CLI flags directly.
/// The CLI is responsible for mapping user input into this type so that:
/// - the library remains reusable outside of a CLI context
/// - other frontends (APIs, tests, batch jobs) can construct options programmatically
///
/// All durations are expressed in milliseconds and converted to sample counts
/// using `sample_rate` where needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VadOptions {
    /// Sample rate of the audio buffer, in Hz.
    pub sample_rate: u32,

    /// Duration of each analysis window.
    ///
    /// Should be 32, 64, or 96 ms. Other values work, but Silero models are
    /// tuned for these sizes and may perform poorly outside of them.
    pub window_ms: u32,

    /// Speech confidence threshold (higher = more conservative).
    ///
    /// A window scoring at or above this value counts as speech. Detection
    /// *enters* a speech run slightly below it (see [`crate::merge`]), which
    /// prevents flapping at the decision boundary.
    pub threshold: f32,

    /// How long probabilities must stay below `threshold` before an open
    /// speech run is considered finished.
    pub min_silence_ms: u32,

    /// Drop speech runs shorter than this duration.
    pub min_speech_ms: u32,

    /// Padding added around a finalized segment to avoid clipping soft
    /// onsets and offsets of speech.
    pub speech_pad_ms: u32,
}

impl Default for VadOptions {
    fn default() -> Self {
        Self {
            sample_rate: 16_000,
            window_ms: 64,
            threshold: 0.5,
            min_silence_ms: 2_000,
            min_speech_ms: 250,
            speech_pad_ms: 400,
        }
    }
}

impl VadOptions {
    /// Number of samples covered by one analysis window.
    pub fn window_samples(&self) -> usize {
        (self.sample_rate as usize * self.window_ms as usize) / 1000
    }

    /// Validate the options before any window is scored.
    ///
    /// We check everything up front so a bad configuration never starts a
    /// partial detection pass.
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(Error::InvalidOptions("sample_rate must be positive".into()));
        }
        if self.window_ms == 0 {
            return Err(Error::InvalidOptions("window_ms must be positive".into()));
        }
        if self.window_samples() == 0 {
            return Err(Error::InvalidOptions(format!(
                "window of {} ms covers no samples at {} Hz",
                self.window_ms, self.sample_rate
            )));
        }
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::InvalidOptions(format!(
                "threshold must be within [0.0, 1.0], got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() -> Result<()> {
        let opts = VadOptions::default();
        opts.validate()?;
        assert_eq!(opts.window_samples(), 1024);
        Ok(())
    }

    #[test]
    fn rejects_zero_sample_rate() {
        let opts = VadOptions {
            sample_rate: 0,
            ..VadOptions::default()
        };
        assert!(matches!(opts.validate(), Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn rejects_zero_window() {
        let opts = VadOptions {
            window_ms: 0,
            ..VadOptions::default()
        };
        assert!(matches!(opts.validate(), Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn rejects_window_shorter_than_one_sample() {
        // 1 ms at 500 Hz is half a sample; the window covers nothing.
        let opts = VadOptions {
            sample_rate: 500,
            window_ms: 1,
            ..VadOptions::default()
        };
        assert!(matches!(opts.validate(), Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        for threshold in [-0.1, 1.1, f32::NAN] {
            let opts = VadOptions {
                threshold,
                ..VadOptions::default()
            };
            assert!(matches!(opts.validate(), Err(Error::InvalidOptions(_))));
        }
    }
}
