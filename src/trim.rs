//! Helpers for applying detected speech segments back to the audio buffer.
//!
//! Detection produces time ranges; transcription consumers usually want
//! sample ranges, sliced-out speech, or the original buffer with non-speech
//! attenuated. These helpers cover those three shapes:
//! - `segment_sample_ranges` converts segments into clamped index ranges
//! - `slice_speech` copies each speech span out of the buffer
//! - `apply_non_speech_gain_in_place` keeps the buffer length (and therefore
//!   timestamp alignment) while attenuating everything outside speech

use crate::segments::SpeechSegment;

/// Convert speech segments into `(start_idx, end_idx)` sample ranges.
///
/// Index rounding policy:
/// - We floor the start index so we include the first speech sample.
/// - We ceil the end index so we include the last speech sample.
///
/// Indices are clamped into `[0 .. samples_len]` so slicing is always safe;
/// a range that collapses after clamping is dropped. Since input segments
/// are sorted and non-overlapping, the output ranges are too.
pub fn segment_sample_ranges(
    segments: &[SpeechSegment],
    sample_rate: u32,
    samples_len: usize,
) -> Vec<(usize, usize)> {
    let mut ranges = Vec::with_capacity(segments.len());

    for seg in segments {
        let start_idx = ms_to_sample_floor(seg.start_ms, sample_rate).min(samples_len);
        let end_idx = ms_to_sample_ceil(seg.end_ms, sample_rate).min(samples_len);

        if start_idx >= end_idx {
            continue;
        }
        ranges.push((start_idx, end_idx));
    }

    ranges
}

/// Copy each detected speech span out of `samples`.
///
/// Returns one owned buffer per segment, in segment order. This is the shape
/// a transcription consumer wants when it runs per-utterance.
pub fn slice_speech(
    samples: &[f32],
    segments: &[SpeechSegment],
    sample_rate: u32,
) -> Vec<Vec<f32>> {
    segment_sample_ranges(segments, sample_rate, samples.len())
        .into_iter()
        .map(|(s, e)| samples[s..e].to_vec())
        .collect()
}

/// Apply gain to non-speech regions in-place, keeping speech untouched.
///
/// - `gain` is clamped to [0.0, 1.0]; 0.0 mutes, 1.0 leaves the buffer unchanged.
/// - Preserves buffer length, so timestamps stay aligned with the original media.
pub fn apply_non_speech_gain_in_place(
    samples: &mut [f32],
    segments: &[SpeechSegment],
    sample_rate: u32,
    gain: f32,
) {
    let gain = gain.clamp(0.0, 1.0);

    // If gain == 1.0, no change needed.
    if (gain - 1.0).abs() < f32::EPSILON {
        return;
    }

    let mut cursor = 0usize;

    for (s, e) in segment_sample_ranges(segments, sample_rate, samples.len()) {
        // Attenuate the gap before speech.
        if s > cursor {
            scale_samples(&mut samples[cursor..s], gain);
        }

        // Advance cursor to the end of this speech region.
        cursor = cursor.max(e);
    }

    // Attenuate everything after the last speech segment.
    if cursor < samples.len() {
        scale_samples(&mut samples[cursor..], gain);
    }
}

/// Multiply all samples by a gain factor.
fn scale_samples(buf: &mut [f32], gain: f32) {
    if gain == 0.0 {
        buf.fill(0.0);
        return;
    }

    for s in buf.iter_mut() {
        *s *= gain;
    }
}

fn ms_to_sample_floor(ms: u64, sample_rate: u32) -> usize {
    (ms * sample_rate as u64 / 1000) as usize
}

fn ms_to_sample_ceil(ms: u64, sample_rate: u32) -> usize {
    ((ms * sample_rate as u64).div_ceil(1000)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(start_ms: u64, end_ms: u64) -> SpeechSegment {
        SpeechSegment { start_ms, end_ms }
    }

    #[test]
    fn ranges_convert_and_clamp() {
        let segments = [seg(100, 300), seg(500, 2_000)];
        // 1 kHz: 1 ms == 1 sample. The buffer is only 1000 samples long, so
        // the second range clamps to its end.
        let ranges = segment_sample_ranges(&segments, 1_000, 1_000);
        assert_eq!(ranges, vec![(100, 300), (500, 1_000)]);
    }

    #[test]
    fn range_fully_past_the_buffer_is_dropped() {
        let ranges = segment_sample_ranges(&[seg(2_000, 3_000)], 1_000, 1_000);
        assert!(ranges.is_empty());
    }

    #[test]
    fn end_index_rounds_up() {
        // 15 ms at 8 kHz is 120 samples exactly; 1 ms at 3 Hz is 0.003
        // samples and must still cover the partial sample.
        assert_eq!(ms_to_sample_ceil(15, 8_000), 120);
        assert_eq!(ms_to_sample_ceil(1, 3), 1);
        assert_eq!(ms_to_sample_floor(1, 3), 0);
    }

    #[test]
    fn slices_copy_speech_spans() {
        let samples: Vec<f32> = (0..10).map(|i| i as f32).collect();
        let slices = slice_speech(&samples, &[seg(2, 4), seg(7, 9)], 1_000);
        assert_eq!(slices, vec![vec![2.0, 3.0], vec![7.0, 8.0]]);
    }

    #[test]
    fn mute_zeroes_only_non_speech() {
        let mut samples = vec![1.0; 10];
        apply_non_speech_gain_in_place(&mut samples, &[seg(3, 6)], 1_000, 0.0);
        assert_eq!(
            samples,
            vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn partial_gain_attenuates_non_speech() {
        let mut samples = vec![1.0; 4];
        apply_non_speech_gain_in_place(&mut samples, &[seg(0, 2)], 1_000, 0.5);
        assert_eq!(samples, vec![1.0, 1.0, 0.5, 0.5]);
    }

    #[test]
    fn unit_gain_leaves_buffer_unchanged() {
        let mut samples = vec![0.25; 8];
        apply_non_speech_gain_in_place(&mut samples, &[seg(2, 4)], 1_000, 1.0);
        assert_eq!(samples, vec![0.25; 8]);
    }
}
