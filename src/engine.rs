use tracing::warn;

use crate::error::{Error, Result};
use crate::opts::VadOptions;
use crate::scorer::WindowScorer;
use crate::segments::{Window, WindowProb};

/// Slide a fixed-size window across `samples` and score each one.
///
/// Windows are contiguous and non-overlapping; the final window may be
/// shorter than the configured size and is forwarded to the scorer as-is.
/// Recurrent state is threaded through calls, so windows within one buffer
/// are evaluated strictly sequentially.
///
/// A scorer failure is recorded as [`WindowProb::Failed`] and the pass
/// continues; a single bad window must not abort segmentation of the whole
/// buffer. An empty buffer yields an empty window list without invoking the
/// scorer at all.
pub fn score_windows<S: WindowScorer>(
    scorer: &mut S,
    samples: &[f32],
    opts: &VadOptions,
) -> Result<Vec<Window>> {
    opts.validate()?;

    if samples.is_empty() {
        return Ok(Vec::new());
    }

    let window_samples = opts.window_samples();
    if samples.len() < window_samples {
        return Err(Error::InvalidAudio(format!(
            "buffer of {} samples is shorter than one {} ms window ({} samples)",
            samples.len(),
            opts.window_ms,
            window_samples
        )));
    }

    let mut windows = Vec::with_capacity(samples.len().div_ceil(window_samples));
    let mut state = S::State::default();
    let mut start_ms = 0u64;

    for chunk in samples.chunks(window_samples) {
        let end_ms = start_ms + opts.window_ms as u64;

        let prob = match scorer.infer(chunk, &state) {
            Ok((p, next_state)) => {
                state = next_state;
                WindowProb::Scored(p)
            }
            Err(err) => {
                // Fail-soft: keep the previous state and move on.
                warn!(window_start_ms = start_ms, error = %err, "window inference failed");
                WindowProb::Failed
            }
        };

        windows.push(Window {
            start_ms,
            end_ms,
            prob,
        });
        start_ms = end_ms;
    }

    Ok(windows)
}
