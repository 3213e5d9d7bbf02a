//! JSON encoding for question banks.

use crate::error::{CodecError, Result};
use crate::types::QuestionBank;

/// Encode a bank as indented JSON. Level keys keep bank order and non-ASCII
/// text is written as-is.
pub fn to_json(bank: &QuestionBank) -> Result<String> {
    serde_json::to_string_pretty(bank).map_err(CodecError::Encode)
}

/// Decode a bank previously written by [`to_json`].
pub fn from_json(json: &str) -> Result<QuestionBank> {
    serde_json::from_str(json).map_err(CodecError::Decode)
}
