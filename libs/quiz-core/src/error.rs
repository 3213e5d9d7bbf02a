//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using CodecError.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors that can occur while encoding or decoding a question bank.
///
/// Parsing quiz text never fails; malformed blocks are skipped instead.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to encode question bank: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode question bank: {0}")]
    Decode(#[source] serde_json::Error),
}
