//! Error handling for the converter

use std::path::PathBuf;

use thiserror::Error;

/// Fatal conversion errors. Any of these aborts the run before output is written.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Encode error: {0}")]
    Encode(#[from] quiz_core::CodecError),

    #[error("Failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
