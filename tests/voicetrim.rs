use voicetrim::opts::VadOptions;
use voicetrim::scorer::{InferenceError, WindowScorer};
use voicetrim::segments::SpeechSegment;
use voicetrim::trim::slice_speech;
use voicetrim::voicetrim::VoiceTrim;

/// A deterministic stand-in for a neural scorer: windows with enough mean
/// amplitude score as speech. Good enough to drive the whole pipeline
/// end-to-end without a model file.
struct EnergyScorer;

impl WindowScorer for EnergyScorer {
    type State = u32;

    fn infer(
        &mut self,
        window: &[f32],
        state: &Self::State,
    ) -> Result<(f32, Self::State), InferenceError> {
        let energy = window.iter().map(|s| s.abs()).sum::<f32>() / window.len() as f32;
        let prob = if energy > 0.1 { 0.95 } else { 0.05 };
        Ok((prob, state + 1))
    }
}

fn test_opts() -> VadOptions {
    // 1 kHz keeps buffers small: 1 ms == 1 sample, 100 samples per window.
    VadOptions {
        sample_rate: 1_000,
        window_ms: 100,
        threshold: 0.5,
        min_silence_ms: 300,
        min_speech_ms: 250,
        speech_pad_ms: 200,
    }
}

fn tone(ms: u64) -> Vec<f32> {
    vec![0.8; ms as usize]
}

fn quiet(ms: u64) -> Vec<f32> {
    vec![0.0; ms as usize]
}

#[test]
fn detects_speech_in_the_middle_of_a_recording() -> anyhow::Result<()> {
    let mut samples = quiet(1_000);
    samples.extend(tone(1_000));
    samples.extend(quiet(2_000));

    let mut detector = VoiceTrim::with_scorer(EnergyScorer);
    let segments = detector.detect(&samples, &test_opts())?;

    assert_eq!(
        segments,
        vec![SpeechSegment {
            start_ms: 800,
            end_ms: 2_200,
        }]
    );

    let slices = slice_speech(&samples, &segments, 1_000);
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].len(), 1_400);
    Ok(())
}

#[test]
fn recording_that_ends_mid_speech_is_flushed() -> anyhow::Result<()> {
    let mut samples = quiet(1_000);
    samples.extend(tone(1_000));

    let mut detector = VoiceTrim::with_scorer(EnergyScorer);
    let segments = detector.detect(&samples, &test_opts())?;

    // The leading pad applies; no trailing pad is added past the buffer end.
    assert_eq!(
        segments,
        vec![SpeechSegment {
            start_ms: 800,
            end_ms: 2_000,
        }]
    );
    Ok(())
}

#[test]
fn silent_recording_yields_no_segments() -> anyhow::Result<()> {
    let mut detector = VoiceTrim::with_scorer(EnergyScorer);
    let segments = detector.detect(&quiet(3_000), &test_opts())?;
    assert!(segments.is_empty());
    Ok(())
}

#[test]
fn empty_recording_yields_no_segments() -> anyhow::Result<()> {
    let mut detector = VoiceTrim::with_scorer(EnergyScorer);
    let segments = detector.detect(&[], &test_opts())?;
    assert!(segments.is_empty());
    Ok(())
}

#[test]
fn raw_window_scores_are_exposed() -> anyhow::Result<()> {
    let mut samples = tone(500);
    samples.extend(quiet(500));

    let mut detector = VoiceTrim::with_scorer(EnergyScorer);
    let windows = detector.score_windows(&samples, &test_opts())?;

    assert_eq!(windows.len(), 10);
    assert_eq!(windows[0].prob.scored(), Some(0.95));
    assert_eq!(windows[9].prob.scored(), Some(0.05));
    Ok(())
}
