use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use voicetrim::logging;
use voicetrim::opts::VadOptions;
use voicetrim::voicetrim::VoiceTrim;
use voicetrim::wav::get_samples_from_wav;

fn main() -> Result<()> {
    logging::init();
    let params = Params::parse();

    let (samples, spec) = get_samples_from_wav(&params.audio_path)?;

    let opts = VadOptions {
        sample_rate: spec.sample_rate,
        window_ms: params.window_ms,
        threshold: params.threshold,
        min_silence_ms: params.min_silence_ms,
        min_speech_ms: params.min_speech_ms,
        speech_pad_ms: params.speech_pad_ms,
    };

    let mut detector = VoiceTrim::new(&params.model_path)?;
    let segments = detector.detect(&samples, &opts)?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    serde_json::to_writer_pretty(&mut writer, &segments)?;
    writeln!(writer)?;

    Ok(())
}

#[derive(Parser, Debug)]
#[command(name = "voicetrim")]
#[command(about = "Detect the speech spans of a WAV recording")]
struct Params {
    #[arg(short = 'm', long = "model")]
    pub model_path: String,

    #[arg(short = 'a', long = "audio")]
    pub audio_path: String,

    /// Analysis window duration in ms (32, 64, or 96 recommended).
    #[arg(long = "window-ms", default_value_t = 64)]
    pub window_ms: u32,

    /// Speech confidence threshold.
    #[arg(short = 't', long = "threshold", default_value_t = 0.5)]
    pub threshold: f32,

    /// Silence duration that ends a speech run, in ms.
    #[arg(long = "min-silence-ms", default_value_t = 2_000)]
    pub min_silence_ms: u32,

    /// Drop speech runs shorter than this, in ms.
    #[arg(long = "min-speech-ms", default_value_t = 250)]
    pub min_speech_ms: u32,

    /// Padding added around finalized segments, in ms.
    #[arg(long = "speech-pad-ms", default_value_t = 400)]
    pub speech_pad_ms: u32,
}
