//! Converter configuration.
//!
//! Values come from defaults, then environment variables (a `.env` file is
//! loaded first), then command-line flags.

use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_INPUT_PATH: &str = "public/assets/Quiz Questions.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "public/assets/quizQuestions.json";

/// Command-line flags for `quiz-convert`.
#[derive(Debug, Default, Parser)]
#[command(name = "quiz-convert", version, about = "Convert a plain-text quiz bank to JSON")]
pub struct Cli {
    /// Quiz text to read
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// JSON file to write
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Drop questions whose answer letter is not one of their options
    #[arg(long)]
    pub strict: bool,

    /// Log every skipped question block as a warning
    #[arg(long)]
    pub report_skipped: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub strict_answers: bool,
    pub report_skipped: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            strict_answers: false,
            report_skipped: false,
        }
    }
}

impl ConverterConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    /// Read `QUIZ_INPUT_PATH`, `QUIZ_OUTPUT_PATH` and `QUIZ_STRICT_ANSWERS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            input_path: lookup("QUIZ_INPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or(default.input_path),
            output_path: lookup("QUIZ_OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or(default.output_path),
            strict_answers: lookup("QUIZ_STRICT_ANSWERS")
                .map(|v| parse_flag(&v))
                .unwrap_or(default.strict_answers),
            report_skipped: default.report_skipped,
        }
    }

    /// Apply command-line flags on top of this config.
    pub fn with_cli(mut self, cli: Cli) -> Self {
        if let Some(input) = cli.input {
            self.input_path = input;
        }
        if let Some(output) = cli.output {
            self.output_path = output;
        }
        self.strict_answers |= cli.strict;
        self.report_skipped |= cli.report_skipped;
        self
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
