//! High-level API for running speech detection with Voicetrim.
//!
//! We expose a single, ergonomic entry point (`VoiceTrim`) that wraps the
//! lower-level scoring and merging logic.
//!
//! The intent is:
//! - We load the scorer's model once (expensive).
//! - We reuse the scorer to detect speech in multiple recordings.
//! - Callers choose detection behavior via `VadOptions`.
//!
//! Each recording gets a fresh recurrent state, so detection results never
//! leak between buffers. Independent recordings may be processed in parallel
//! by giving each its own `VoiceTrim`; a single instance processes one buffer
//! at a time because the scorer's state threading is strictly sequential.

use std::path::Path;

use crate::engine::score_windows;
use crate::error::Result;
use crate::merge::merge_windows;
use crate::opts::VadOptions;
use crate::scorer::WindowScorer;
use crate::segments::{SpeechSegment, Window};
use crate::silero::SileroScorer;

/// The main high-level speech-detection entry point.
///
/// `VoiceTrim` owns the long-lived resource required for detection: a
/// [`WindowScorer`] (for the default Silero scorer, a loaded ONNX session).
///
/// Typical usage:
/// - Construct once (model loading happens here).
/// - Call `detect` many times with different recordings and options.
///
/// Note: `detect` takes `&mut self` because scorers require mutable access to
/// run inference.
pub struct VoiceTrim<S: WindowScorer = SileroScorer> {
    scorer: S,
}

impl VoiceTrim<SileroScorer> {
    /// Create a new `VoiceTrim` instance using the built-in Silero scorer.
    ///
    /// We fail fast if the model cannot be loaded. This keeps invariants
    /// simple: once `VoiceTrim::new` succeeds, every `detect` call has a
    /// working scorer.
    pub fn new(model_path: impl AsRef<Path>) -> Result<Self> {
        let scorer = SileroScorer::new(model_path)?;
        Ok(Self::with_scorer(scorer))
    }
}

impl<S: WindowScorer> VoiceTrim<S> {
    /// Create a new `VoiceTrim` instance using a custom scorer.
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    /// Detect the spans of `samples` that contain speech.
    ///
    /// `samples` must be mono, normalized to `[-1.0, 1.0]`, at
    /// `opts.sample_rate`. The returned segments are ordered by start time
    /// and never overlap; an empty buffer yields an empty list.
    pub fn detect(&mut self, samples: &[f32], opts: &VadOptions) -> Result<Vec<SpeechSegment>> {
        let windows = self.score_windows(samples, opts)?;
        Ok(merge_windows(&windows, opts))
    }

    /// Score every analysis window without merging.
    ///
    /// This is primarily intended for diagnostics and tuning: it exposes the
    /// raw per-window probabilities that `detect` folds into segments.
    pub fn score_windows(&mut self, samples: &[f32], opts: &VadOptions) -> Result<Vec<Window>> {
        score_windows(&mut self.scorer, samples, opts)
    }

    /// Access the configured scorer.
    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Access the configured scorer mutably.
    pub fn scorer_mut(&mut self) -> &mut S {
        &mut self.scorer
    }
}
