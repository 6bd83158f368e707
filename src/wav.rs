use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use anyhow::{Context, Result};
use hound::{SampleFormat, WavReader, WavSpec};

/// Load WAV audio from a reader and return normalized audio samples.
///
/// What we return:
/// - A `Vec<f32>` containing mono audio samples normalized to `[-1.0, 1.0]`
/// - The associated `WavSpec` so callers can carry the sample rate into
///   their detection options
///
/// Format requirements:
/// - Mono (1 channel)
/// - 16-bit integer PCM
///
/// Why we enforce this:
/// - enforcing constraints here keeps downstream detection simple and predictable
pub fn get_samples_from_wav_reader<R>(reader: R) -> Result<(Vec<f32>, WavSpec)>
where
    R: Read + Seek,
{
    let mut reader = WavReader::new(reader).context("failed to read WAV data from reader")?;
    let spec = reader.spec();

    // We require mono audio.
    if spec.channels != 1 {
        anyhow::bail!(
            "expected mono WAV (1 channel), got {} channels",
            spec.channels
        );
    }

    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
        anyhow::bail!(
            "expected 16-bit integer PCM, got {}-bit {:?}",
            spec.bits_per_sample,
            spec.sample_format
        );
    }

    // Read samples and normalize from i16 PCM to f32 in [-1.0, 1.0].
    //
    // Detection and most ASR backends expect audio in this normalized
    // floating-point format.
    let mut samples = Vec::new();
    for sample in reader.samples::<i16>() {
        let pcm = sample?;
        let normalized = pcm as f32 / i16::MAX as f32;
        samples.push(normalized);
    }

    Ok((samples, spec))
}

/// Load WAV audio from a file path. See [`get_samples_from_wav_reader`].
pub fn get_samples_from_wav(path: impl AsRef<Path>) -> Result<(Vec<f32>, WavSpec)> {
    let file = File::open(path.as_ref())
        .with_context(|| format!("failed to open WAV file '{}'", path.as_ref().display()))?;
    get_samples_from_wav_reader(BufReader::new(file))
}
