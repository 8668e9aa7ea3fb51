/// Convenience result type used across easepath.
pub type PathResult<T> = Result<T, PathError>;

/// Top-level error taxonomy used by solver APIs.
#[derive(thiserror::Error, Debug)]
pub enum PathError {
    /// The path violates an input precondition (ordering, finiteness, negative durations).
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Ease windows do not fit inside a segment (the resolver was skipped or is broken).
    #[error("ease overlap: {0}")]
    EaseOverlap(String),

    /// The refinement loop hit its iteration cap before the error stabilized.
    #[error("refinement did not converge (last total error {last_error})")]
    DidNotConverge {
        /// Total absolute residual of the last measured iteration.
        last_error: f64,
    },

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PathError {
    /// Build a [`PathError::InvalidPath`] value.
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Build a [`PathError::EaseOverlap`] value.
    pub fn ease_overlap(msg: impl Into<String>) -> Self {
        Self::EaseOverlap(msg.into())
    }

    /// Build a [`PathError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
