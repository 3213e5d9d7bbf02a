//! Plain-text parser for quiz question banks.
//!
//! # Format
//! ```text
//! Level 1
//! 1. What is the capital of France?
//! A) Berlin
//! B) Paris
//! Answer: B
//!
//! 2. Which of these
//!    is a prime number?
//! ____
//! A. 4
//! B. 7
//! Ans: B
//! ```
//!
//! Parsing never fails. Blocks that do not form a complete question are
//! dropped from the bank and listed in [`ParseReport::skipped`].

use crate::types::{LevelId, Question, QuestionBank, QuizOption};
use thiserror::Error;

const LEVEL_MARKER: &str = "Level";

/// Labels that introduce the answer letter, matched case-insensitively.
const ANSWER_LABELS: [&str; 3] = ["Correct Answer", "Answer", "Ans"];

const MIN_OPTIONS: usize = 2;

/// Parser settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject questions whose answer letter is not one of their options.
    pub strict_answers: bool,
}

/// Why a question block was left out of the bank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("first line is not a numbered question header")]
    MalformedHeader,

    #[error("question text is empty")]
    EmptyQuestion,

    #[error("expected at least 2 options, found {found}")]
    TooFewOptions { found: usize },

    #[error("no answer line")]
    MissingAnswer,

    #[error("answer {answer} is not one of the listed options")]
    AnswerNotListed { answer: char },
}

/// A dropped question block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBlock {
    pub level: LevelId,
    /// Question number, when the header could be read.
    pub number: Option<u32>,
    /// First line of the block, trimmed.
    pub header: String,
    pub reason: SkipReason,
}

/// Parsed bank plus everything that was dropped on the way.
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    pub bank: QuestionBank,
    pub skipped: Vec<SkippedBlock>,
    /// Levels whose questions were replaced by a later section with the same id.
    pub replaced_levels: Vec<LevelId>,
}

/// Parse raw quiz text into a question bank.
pub fn parse(raw: &str) -> QuestionBank {
    parse_with_report(raw, ParseOptions::default()).bank
}

/// Parse raw quiz text, keeping a record of every dropped block.
pub fn parse_with_report(raw: &str, options: ParseOptions) -> ParseReport {
    let mut report = ParseReport::default();

    for section in split_levels(raw) {
        let mut questions = Vec::new();

        for block in split_question_blocks(section.body) {
            match parse_block(block, options) {
                Ok(question) => questions.push(question),
                Err(rejection) => report.skipped.push(SkippedBlock {
                    level: section.id.clone(),
                    number: rejection.number,
                    header: block.lines().next().unwrap_or_default().trim().to_string(),
                    reason: rejection.reason,
                }),
            }
        }

        if questions.is_empty() {
            continue;
        }
        if report
            .bank
            .insert_level(section.id.clone(), questions)
            .is_some()
        {
            report.replaced_levels.push(section.id);
        }
    }

    report
}

struct LevelSection<'a> {
    id: LevelId,
    body: &'a str,
}

/// Split at every `Level <digits>` marker. Text before the first marker is dropped.
fn split_levels(raw: &str) -> Vec<LevelSection<'_>> {
    // (marker start, body start, digits)
    let mut markers: Vec<(usize, usize, &str)> = Vec::new();
    let mut search_from = 0;

    while let Some(offset) = raw[search_from..].find(LEVEL_MARKER) {
        let start = search_from + offset;
        match match_level_marker(&raw[start..]) {
            Some((consumed, digits)) => {
                markers.push((start, start + consumed, digits));
                search_from = start + consumed;
            }
            None => search_from = start + LEVEL_MARKER.len(),
        }
    }

    markers
        .iter()
        .enumerate()
        .map(|(idx, &(_, body_start, digits))| {
            let body_end = markers.get(idx + 1).map_or(raw.len(), |next| next.0);
            LevelSection {
                id: LevelId::new(digits),
                body: &raw[body_start..body_end],
            }
        })
        .collect()
}

/// Match `Level`, whitespace, digits at the start of `text`.
/// Returns the matched length and the digits.
fn match_level_marker(text: &str) -> Option<(usize, &str)> {
    let rest = text.strip_prefix(LEVEL_MARKER)?;
    let after_space = rest.trim_start();
    if after_space.len() == rest.len() {
        return None;
    }

    let digits = leading_digits(after_space);
    if digits.is_empty() {
        return None;
    }

    Some((text.len() - after_space.len() + digits.len(), digits))
}

/// Split a level body before every question header line. Each header line
/// starts its own block; blocks not opening with `<digits>.` are dropped.
fn split_question_blocks(body: &str) -> Vec<&str> {
    let mut starts = vec![0];
    let mut offset = 0;

    for line in body.split_inclusive('\n') {
        if offset > 0 && starts_question(&body[offset..]) {
            starts.push(offset);
        }
        offset += line.len();
    }

    starts
        .iter()
        .enumerate()
        .map(|(idx, &start)| {
            let end = starts.get(idx + 1).copied().unwrap_or(body.len());
            body[start..end].trim()
        })
        .filter(|block| {
            let digits = leading_digits(block);
            !digits.is_empty() && block[digits.len()..].starts_with('.')
        })
        .collect()
}

/// `<digits>.` at column 0, then whitespace and more text. The text may sit
/// on a later line (`2.` alone on its line still opens a block, which is
/// then rejected as a malformed header).
fn starts_question(text: &str) -> bool {
    let digits = leading_digits(text);
    if digits.is_empty() {
        return false;
    }
    let Some(rest) = text[digits.len()..].strip_prefix('.') else {
        return false;
    };

    let mut chars = rest.chars();
    // after the first whitespace char, line breaks are skipped until any
    // other char turns up
    chars.next().is_some_and(char::is_whitespace) && chars.any(|c| c != '\n')
}

/// Read the question number and opening text from a trimmed header line.
fn parse_header(line: &str) -> Option<(u32, &str)> {
    let digits = leading_digits(line);
    let rest = line[digits.len()..].strip_prefix('.')?;
    let text = rest.trim_start();
    if text.len() == rest.len() || text.is_empty() {
        return None;
    }

    let number = digits.parse().ok()?;
    Some((number, text))
}

fn leading_digits(text: &str) -> &str {
    let len = text.bytes().take_while(u8::is_ascii_digit).count();
    &text[..len]
}

struct Rejection {
    number: Option<u32>,
    reason: SkipReason,
}

impl Rejection {
    fn new(number: Option<u32>, reason: SkipReason) -> Self {
        Self { number, reason }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    AccumulatingBody,
    ScanningOptionsAndAnswer,
}

fn parse_block(block: &str, options: ParseOptions) -> Result<Question, Rejection> {
    let mut lines = block.lines();
    let header = lines.next().unwrap_or_default().trim();
    let (number, opening) =
        parse_header(header).ok_or_else(|| Rejection::new(None, SkipReason::MalformedHeader))?;

    let mut phase = Phase::AccumulatingBody;
    let mut body = vec![opening];
    let mut choices = Vec::new();
    let mut answer = None;

    for line in lines {
        let line = line.trim();

        if phase == Phase::AccumulatingBody {
            if line.is_empty() || is_separator(line) {
                continue;
            }
            if !ends_body(line) {
                body.push(line);
                continue;
            }
            phase = Phase::ScanningOptionsAndAnswer;
        }

        match parse_line(line) {
            LineType::Option(option) => choices.push(option),
            LineType::Answer(letter) => answer = Some(letter),
            LineType::Other => {}
        }
    }

    let question = body.join(" ");
    if question.trim().is_empty() {
        return Err(Rejection::new(Some(number), SkipReason::EmptyQuestion));
    }
    if choices.len() < MIN_OPTIONS {
        return Err(Rejection::new(
            Some(number),
            SkipReason::TooFewOptions {
                found: choices.len(),
            },
        ));
    }
    let answer = answer.ok_or_else(|| Rejection::new(Some(number), SkipReason::MissingAnswer))?;

    let question = Question {
        number,
        question,
        options: choices,
        answer,
    };
    if options.strict_answers && !question.has_listed_answer() {
        return Err(Rejection::new(
            Some(number),
            SkipReason::AnswerNotListed { answer },
        ));
    }

    Ok(question)
}

enum LineType {
    Option(QuizOption),
    Answer(char),
    Other,
}

fn parse_line(line: &str) -> LineType {
    if let Some(option) = parse_option(line) {
        LineType::Option(option)
    } else if let Some(letter) = parse_answer(line) {
        LineType::Answer(letter)
    } else {
        LineType::Other
    }
}

/// Lines made only of underscores are decoration.
fn is_separator(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c == '_')
}

/// The body ends at the first option (`A) text`) or answer label.
fn ends_body(line: &str) -> bool {
    option_marker(line).is_some_and(|rest| rest.starts_with(char::is_whitespace))
        || strip_answer_label(line).is_some()
}

/// Letter `A`-`E` followed by `)` or `.`. Returns the letter and what follows.
fn option_marker(line: &str) -> Option<&str> {
    let mut chars = line.chars();
    let letter = chars.next().filter(|c| ('A'..='E').contains(c))?;
    let separator = chars.next().filter(|c| matches!(c, ')' | '.'))?;
    Some(&line[letter.len_utf8() + separator.len_utf8()..])
}

fn parse_option(line: &str) -> Option<QuizOption> {
    let rest = option_marker(line)?;
    let text = rest.trim();
    if text.is_empty() {
        return None;
    }
    // option_marker only accepts ASCII letters
    let letter = line.chars().next()?;
    Some(QuizOption::new(letter, text))
}

/// Strip a case-insensitive answer label and its colon.
fn strip_answer_label(line: &str) -> Option<&str> {
    ANSWER_LABELS.iter().find_map(|label| {
        let head = line.get(..label.len())?;
        if !head.eq_ignore_ascii_case(label) {
            return None;
        }
        line[label.len()..].strip_prefix(':')
    })
}

fn parse_answer(line: &str) -> Option<char> {
    let rest = strip_answer_label(line)?.trim_start();
    rest.chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| ('A'..='E').contains(c))
}
