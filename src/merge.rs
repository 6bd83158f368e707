use crate::opts::VadOptions;
use crate::segments::{SpeechSegment, Window};

/// How far below `threshold` a probability may sit and still *enter* a speech
/// run. Ongoing speech is confirmed at `threshold` itself; the two-level
/// comparison prevents rapid flapping at the decision boundary.
const HYSTERESIS_MARGIN: f32 = 0.15;

/// Merge an ordered window sequence into non-overlapping speech segments.
///
/// The pass maintains three pieces of state:
/// - `triggered`: whether a speech run is currently open
/// - `segment_start_ms`: where the open run began
/// - `silence_start_ms`: the first window at which probability dropped below
///   `threshold` after speech was triggered (`None` while speech is ongoing)
///
/// A run ends once silence has persisted for `min_silence_ms`; the candidate
/// segment is then emitted with `speech_pad_ms` applied on both ends (clamped
/// to the buffer), or discarded if it is not longer than `min_speech_ms`.
///
/// If the buffer ends while a run is still open, the run is flushed with the
/// leading pad only. Trailing padding is never applied when the audio simply
/// runs out; the asymmetry is deliberate.
///
/// Failed windows never satisfy a speech comparison; they count as silence.
pub fn merge_windows(windows: &[Window], opts: &VadOptions) -> Vec<SpeechSegment> {
    let Some(last) = windows.last() else {
        return Vec::new();
    };

    let threshold = opts.threshold;
    let min_silence = opts.min_silence_ms as u64;
    let min_speech = opts.min_speech_ms as u64;
    let speech_pad = opts.speech_pad_ms as u64;

    let mut segments = Vec::new();
    let mut triggered = false;
    let mut segment_start_ms = 0u64;
    let mut silence_start_ms: Option<u64> = None;

    for w in windows {
        let prob = w.prob.scored();

        if prob.is_some_and(|p| p >= threshold) {
            // Speech is actively ongoing; cancel any pending silence countdown.
            silence_start_ms = None;
        }

        if prob.is_some_and(|p| p >= threshold - HYSTERESIS_MARGIN) && !triggered {
            triggered = true;
            segment_start_ms = w.start_ms;
            continue;
        }

        if prob.is_none_or(|p| p < threshold) && triggered {
            let silence_start = *silence_start_ms.get_or_insert(w.start_ms);

            if w.end_ms - silence_start < min_silence {
                // Speech may still resume; keep waiting.
                continue;
            }

            if silence_start - segment_start_ms > min_speech {
                segments.push(SpeechSegment {
                    start_ms: segment_start_ms.saturating_sub(speech_pad),
                    end_ms: (silence_start + speech_pad).min(last.end_ms),
                });
            }

            triggered = false;
            silence_start_ms = None;
        }
    }

    // Flush a run left open at the end of the buffer. Leading pad only.
    if triggered && last.end_ms - segment_start_ms > min_speech {
        segments.push(SpeechSegment {
            start_ms: segment_start_ms.saturating_sub(speech_pad),
            end_ms: last.end_ms,
        });
    }

    segments
}
