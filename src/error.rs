//! Error types for the motion engine.

/// Top-level error type for motion-engine operations.
///
/// Dimension changes between consecutive frames are deliberately NOT an error:
/// a live camera can renegotiate its resolution at any time, so the engine
/// absorbs that internally by re-priming (see `MotionEngine::process`).
#[derive(Debug, thiserror::Error)]
pub enum MotionError {
    /// The supplied frame is empty, has a zero dimension, or its byte length
    /// does not match the declared geometry and channel layout.
    #[error("invalid frame: {message}")]
    InvalidFrame { message: String },

    /// The engine was constructed with degenerate grid dimensions.
    #[error("invalid engine construction: {message}")]
    Construction { message: String },
}

/// Result type alias using MotionError.
pub type MotionResult<T> = Result<T, MotionError>;

impl MotionError {
    pub fn invalid_frame(msg: impl Into<String>) -> Self {
        Self::InvalidFrame {
            message: msg.into(),
        }
    }

    pub fn construction(msg: impl Into<String>) -> Self {
        Self::Construction {
            message: msg.into(),
        }
    }
}
