use serde::Serialize;

/// Speech probability produced for one analysis window.
///
/// Inference failures are an explicit variant rather than an out-of-range
/// probability, so downstream logic branches on a case instead of a numeric
/// convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowProb {
    /// The scorer produced a probability in `[0.0, 1.0]`.
    Scored(f32),

    /// The scorer failed for this window; the merger treats it as silence.
    Failed,
}

impl WindowProb {
    /// The probability, or `None` for a failed window.
    pub fn scored(&self) -> Option<f32> {
        match self {
            Self::Scored(p) => Some(*p),
            Self::Failed => None,
        }
    }
}

/// One scored analysis window.
///
/// Windows tile the audio buffer without gaps or overlap. Timestamps are
/// logical: multiples of the window duration, with time zero at the first
/// sample. They are not derived from wall-clock capture time, so upstream
/// jitter or drift is not reflected here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub start_ms: u64,
    pub end_ms: u64,
    pub prob: WindowProb,
}

/// A detected span of speech, in milliseconds from the start of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpeechSegment {
    pub start_ms: u64,
    pub end_ms: u64,
}

impl SpeechSegment {
    pub fn duration_ms(&self) -> u64 {
        self.end_ms.saturating_sub(self.start_ms)
    }
}
