use thiserror::Error;

/// Error returned when a scorer cannot produce a probability for a window.
///
/// The segmentation engine absorbs these per window (the failed window is
/// recorded and the pass continues); they are never surfaced as an abort of
/// the whole buffer.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct InferenceError(String);

impl InferenceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<anyhow::Error> for InferenceError {
    fn from(err: anyhow::Error) -> Self {
        Self(format!("{err:#}"))
    }
}

/// Pluggable per-window speech scorer used by [`crate::engine::score_windows`].
///
/// A scorer is responsible for turning one fixed-length window of mono `f32`
/// samples into a speech probability. Recurrent models carry state across
/// windows; the engine threads that state through calls as an explicit value,
/// which makes window evaluation strictly sequential within one buffer while
/// keeping independent buffers trivially parallel (each gets its own state).
///
/// The final window of a buffer may be shorter than the configured window
/// size; scorers must accept it as-is.
pub trait WindowScorer {
    /// Recurrent state carried between windows of a single buffer.
    ///
    /// `Default` must produce the zero/initial state for a fresh buffer.
    type State: Default;

    /// Score one window, returning the speech probability and the state to
    /// carry into the next window.
    ///
    /// The previous state is borrowed rather than consumed so the caller can
    /// keep it when inference fails.
    fn infer(
        &mut self,
        window: &[f32],
        state: &Self::State,
    ) -> Result<(f32, Self::State), InferenceError>;
}
