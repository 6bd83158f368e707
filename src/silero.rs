use std::path::Path;

use anyhow::{Context, Result, anyhow, ensure};
use ort::session::builder::GraphOptimizationLevel;
use ort::session::{Session, SessionInputValue};
use ort::value::Tensor;

use crate::scorer::{InferenceError, WindowScorer};

/// Shape of the model's recurrent tensors (`h` and `c`): [layers, batch, hidden].
const STATE_DIMS: [usize; 3] = [2, 1, 64];

/// Element count of one recurrent tensor.
const STATE_LEN: usize = 2 * 64;

/// Configuration for [`SileroScorer`].
#[derive(Debug, Clone)]
pub struct SileroOptions {
    /// Sample rate the model is told audio arrives at.
    ///
    /// Silero VAD models accept 8000 or 16000 Hz.
    pub sample_rate: u32,

    /// ONNX Runtime intra-op thread count.
    ///
    /// One window is tiny; a single thread is usually fastest.
    pub intra_threads: usize,

    /// ONNX Runtime inter-op thread count.
    pub inter_threads: usize,
}

impl Default for SileroOptions {
    fn default() -> Self {
        Self {
            sample_rate: 16_000,
            intra_threads: 1,
            inter_threads: 1,
        }
    }
}

/// Recurrent state for [`SileroScorer`]: the LSTM hidden and cell tensors.
///
/// `Default` produces the zero state expected at the start of a buffer.
#[derive(Debug, Clone)]
pub struct SileroState {
    h: Vec<f32>,
    c: Vec<f32>,
}

impl Default for SileroState {
    fn default() -> Self {
        Self {
            h: vec![0.0; STATE_LEN],
            c: vec![0.0; STATE_LEN],
        }
    }
}

/// A [`WindowScorer`] that runs a Silero VAD ONNX model via ONNX Runtime (`ort`).
///
/// The model takes four inputs per window (the audio, the sample rate, and
/// the two recurrent tensors) and produces the speech probability plus the
/// next recurrent tensors.
pub struct SileroScorer {
    session: Session,
    sample_rate: u32,
}

impl SileroScorer {
    /// Load an ONNX model from disk and initialize a scorer with default options.
    pub fn new(model_path: impl AsRef<Path>) -> Result<Self> {
        Self::with_options(model_path, SileroOptions::default())
    }

    /// Load an ONNX model from disk and initialize a scorer with custom options.
    pub fn with_options(model_path: impl AsRef<Path>, opts: SileroOptions) -> Result<Self> {
        ensure!(
            opts.sample_rate == 8_000 || opts.sample_rate == 16_000,
            "Silero VAD supports 8000 or 16000 Hz; got {}",
            opts.sample_rate
        );
        ensure!(opts.intra_threads > 0, "intra_threads must be > 0");
        ensure!(opts.inter_threads > 0, "inter_threads must be > 0");

        let session = Session::builder()
            .context("failed to create ONNX Runtime session builder")?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .context("failed to set graph optimization level")?
            .with_intra_threads(opts.intra_threads)
            .context("failed to set intra-op threads")?
            .with_inter_threads(opts.inter_threads)
            .context("failed to set inter-op threads")?
            .commit_from_file(model_path.as_ref())
            .with_context(|| {
                format!(
                    "failed to load Silero VAD model from '{}'",
                    model_path.as_ref().display()
                )
            })?;

        for name in ["input", "sr", "h", "c"] {
            ensure!(
                session.inputs.iter().any(|i| i.name == name),
                "model is missing input '{name}' (inputs: {:?}); expected a Silero VAD export with h/c recurrent state",
                session
                    .inputs
                    .iter()
                    .map(|i| i.name.as_str())
                    .collect::<Vec<_>>()
            );
        }

        Ok(Self {
            session,
            sample_rate: opts.sample_rate,
        })
    }

    fn run(&mut self, window: &[f32], state: &SileroState) -> Result<(f32, SileroState)> {
        ensure!(!window.is_empty(), "cannot score an empty window");

        let audio = Tensor::from_array(([1usize, window.len()], window.to_vec().into_boxed_slice()))
            .context("failed to build audio input tensor")?;
        let sr = Tensor::from_array((
            vec![1usize],
            vec![self.sample_rate as i64].into_boxed_slice(),
        ))
        .context("failed to build 'sr' input tensor")?;
        let h = Tensor::from_array((STATE_DIMS.to_vec(), state.h.clone().into_boxed_slice()))
            .context("failed to build 'h' input tensor")?;
        let c = Tensor::from_array((STATE_DIMS.to_vec(), state.c.clone().into_boxed_slice()))
            .context("failed to build 'c' input tensor")?;

        let inputs: Vec<(String, SessionInputValue<'static>)> = vec![
            ("input".to_owned(), SessionInputValue::Owned(audio.into_dyn())),
            ("sr".to_owned(), SessionInputValue::Owned(sr.into_dyn())),
            ("h".to_owned(), SessionInputValue::Owned(h.into_dyn())),
            ("c".to_owned(), SessionInputValue::Owned(c.into_dyn())),
        ];

        let outputs = self
            .session
            .run(inputs)
            .context("failed to run Silero VAD model")?;
        ensure!(
            outputs.len() >= 3,
            "expected 3 model outputs (output, hn, cn); got {}",
            outputs.len()
        );

        let (_, prob) = outputs[0]
            .try_extract_tensor::<f32>()
            .context("failed to read probability output")?;
        let prob = *prob
            .first()
            .ok_or_else(|| anyhow!("model produced an empty probability tensor"))?;

        let (_, hn) = outputs[1]
            .try_extract_tensor::<f32>()
            .context("failed to read 'hn' output")?;
        let (_, cn) = outputs[2]
            .try_extract_tensor::<f32>()
            .context("failed to read 'cn' output")?;
        ensure!(
            hn.len() == STATE_LEN && cn.len() == STATE_LEN,
            "unexpected recurrent state size (hn={}, cn={}, want {STATE_LEN})",
            hn.len(),
            cn.len()
        );

        let next = SileroState {
            h: hn.to_vec(),
            c: cn.to_vec(),
        };

        Ok((prob.clamp(0.0, 1.0), next))
    }
}

impl WindowScorer for SileroScorer {
    type State = SileroState;

    fn infer(
        &mut self,
        window: &[f32],
        state: &Self::State,
    ) -> std::result::Result<(f32, Self::State), InferenceError> {
        self.run(window, state).map_err(InferenceError::from)
    }
}
