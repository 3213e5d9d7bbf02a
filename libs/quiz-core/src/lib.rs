//! Core quiz bank library.
//!
//! Provides:
//! - Plain-text parser for leveled multiple-choice question banks
//! - Shared types (QuestionBank, Question, QuizOption, LevelId)
//! - JSON encoding of banks
//! - Per-level summaries

pub mod codec;
pub mod error;
pub mod parser;
pub mod summary;
pub mod types;

pub use codec::{from_json, to_json};
pub use error::{CodecError, Result};
pub use parser::{parse, parse_with_report, ParseOptions, ParseReport, SkipReason, SkippedBlock};
pub use summary::{summarize, LevelSummary};
pub use types::{LevelId, Question, QuestionBank, QuizOption};
