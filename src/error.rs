use thiserror::Error;

/// Failure modes of the repair passes.
///
/// Every variant is terminal for the run: the passes reconstruct the whole
/// file in memory and only then overwrite it, so a failure never leaves a
/// half-written file behind.
#[derive(Error, Debug)]
pub enum RepairError {
    #[error("marker {marker:?} not found in file content")]
    MarkerNotFound { marker: &'static str },

    #[error("anchor tag {tag:?} not found in base content")]
    AnchorNotFound { tag: &'static str },

    #[error("failed to decode appended content as {encoding}: {message}")]
    Decode {
        encoding: &'static str,
        message: String,
    },
}

impl RepairError {
    /// Create a new decode error for the given encoding
    pub fn decode_error(encoding: &'static str, message: impl Into<String>) -> Self {
        Self::Decode {
            encoding,
            message: message.into(),
        }
    }
}

pub type RepairResult<T> = std::result::Result<T, RepairError>;
