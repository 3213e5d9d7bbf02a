//! Core types for quiz question banks.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Level identifier, kept in the textual form it had in the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelId(String);

impl LevelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, used for ordering reports.
    pub fn numeric(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for LevelId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LevelId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One labeled answer choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub letter: char,
    pub text: String,
}

impl QuizOption {
    pub fn new(letter: char, text: impl Into<String>) -> Self {
        Self {
            letter,
            text: text.into(),
        }
    }
}

/// A multiple-choice question recovered from the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub number: u32,
    pub question: String,
    pub options: Vec<QuizOption>,
    pub answer: char,
}

impl Question {
    /// Whether the answer letter names one of the listed options.
    pub fn has_listed_answer(&self) -> bool {
        self.options.iter().any(|option| option.letter == self.answer)
    }
}

/// Questions grouped by level, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionBank {
    levels: IndexMap<LevelId, Vec<Question>>,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the questions for a level.
    ///
    /// A level that is already present is replaced in place, so it keeps the
    /// position of its first appearance. Returns the replaced questions.
    pub fn insert_level(&mut self, level: LevelId, questions: Vec<Question>) -> Option<Vec<Question>> {
        self.levels.insert(level, questions)
    }

    pub fn get(&self, level: &str) -> Option<&[Question]> {
        self.levels.get(level).map(Vec::as_slice)
    }

    /// Iterate levels in bank order.
    pub fn levels(&self) -> impl Iterator<Item = (&LevelId, &[Question])> {
        self.levels
            .iter()
            .map(|(level, questions)| (level, questions.as_slice()))
    }

    pub fn level_ids(&self) -> Vec<&str> {
        self.levels.keys().map(LevelId::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Total number of questions across all levels.
    pub fn question_count(&self) -> usize {
        self.levels.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(number: u32, answer: char) -> Question {
        Question {
            number,
            question: format!("Question {}?", number),
            options: vec![QuizOption::new('A', "yes"), QuizOption::new('B', "no")],
            answer,
        }
    }

    #[test]
    fn replaced_level_keeps_first_position() {
        let mut bank = QuestionBank::new();
        bank.insert_level("1".into(), vec![question(1, 'A')]);
        bank.insert_level("2".into(), vec![question(1, 'B')]);

        let replaced = bank.insert_level("1".into(), vec![question(7, 'B')]);

        assert_eq!(replaced.map(|q| q[0].number), Some(1));
        assert_eq!(bank.level_ids(), vec!["1", "2"]);
        assert_eq!(bank.get("1").unwrap()[0].number, 7);
    }

    #[test]
    fn counts_questions_across_levels() {
        let mut bank = QuestionBank::new();
        assert!(bank.is_empty());
        bank.insert_level("1".into(), vec![question(1, 'A'), question(2, 'A')]);
        bank.insert_level("3".into(), vec![question(1, 'A')]);
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.question_count(), 3);
    }

    #[test]
    fn answer_outside_options_is_detected() {
        assert!(question(1, 'B').has_listed_answer());
        assert!(!question(1, 'D').has_listed_answer());
    }

    #[test]
    fn level_id_numeric_value() {
        assert_eq!(LevelId::new("07").numeric(), Some(7));
        assert_eq!(LevelId::new("07").to_string(), "07");
        assert_eq!(LevelId::new("x").numeric(), None);
    }
}
