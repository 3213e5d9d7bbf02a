//! Per-level question counts.

use crate::types::{LevelId, QuestionBank};
use serde::Serialize;
use std::fmt;

/// Number of questions stored for one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelSummary {
    pub level: LevelId,
    pub questions: usize,
}

impl fmt::Display for LevelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {}: {} questions", self.level, self.questions)
    }
}

/// Summarize a bank, ordered by numeric level id.
pub fn summarize(bank: &QuestionBank) -> Vec<LevelSummary> {
    let mut summary: Vec<LevelSummary> = bank
        .levels()
        .map(|(level, questions)| LevelSummary {
            level: level.clone(),
            questions: questions.len(),
        })
        .collect();

    // ids that are not numbers sort after numeric ones
    summary.sort_by(|a, b| match (a.level.numeric(), b.level.numeric()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.level.as_str().cmp(b.level.as_str()),
    });
    summary
}
