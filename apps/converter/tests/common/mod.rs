//! Common test utilities and fixtures for integration tests.

pub mod fixtures;

use std::path::PathBuf;

use tempfile::TempDir;

use quiz_bank_converter::config::ConverterConfig;

/// Scratch directory holding one input and one output path.
pub struct TestContext {
    _dir: TempDir,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl TestContext {
    /// Create a context whose input file does not exist yet.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input_path = dir.path().join("Quiz Questions.txt");
        let output_path = dir.path().join("quizQuestions.json");
        Self {
            _dir: dir,
            input_path,
            output_path,
        }
    }

    /// Create a context with the given quiz text already written.
    pub fn with_input(content: &str) -> Self {
        let ctx = Self::new();
        std::fs::write(&ctx.input_path, content).expect("Failed to write input");
        ctx
    }

    pub fn config(&self) -> ConverterConfig {
        ConverterConfig::new(&self.input_path, &self.output_path)
    }

    pub fn read_output(&self) -> String {
        std::fs::read_to_string(&self.output_path).expect("Failed to read output")
    }
}
