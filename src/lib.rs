//! `voicetrim` — a small, focused voice-activity segmentation library.
//!
//! This crate provides:
//! - A sliding-window scoring loop that threads recurrent scorer state
//! - A hysteresis-based merger that turns window probabilities into speech segments
//! - A Silero VAD scorer backed by ONNX Runtime
//! - Helpers to slice or attenuate audio according to the detected segments
//!
//! The library is designed to sit in front of a transcription stage: it narrows a
//! fully-buffered recording down to the spans that contain speech, so downstream
//! consumers only process meaningful audio.

// High-level API (most consumers should start here).
pub mod opts;
pub mod voicetrim;

// Core segmentation: window scoring and hysteresis merging.
pub mod engine;
pub mod merge;
pub mod segments;

// Scorer interface and the built-in Silero implementation.
pub mod scorer;
pub mod silero;

// Audio ingest and post-detection helpers.
pub mod trim;
pub mod wav;

// Error types.
pub mod error;

// Logging configuration and control.
#[cfg(feature = "logging")]
pub mod logging;

pub use error::{Error, Result};
