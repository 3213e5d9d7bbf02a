//! Read, parse and write a quiz bank.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use quiz_core::{parse_with_report, summarize, to_json, LevelId, LevelSummary, ParseOptions, SkippedBlock};

use crate::config::ConverterConfig;
use crate::error::ConvertError;

/// What a successful conversion produced.
#[derive(Debug)]
pub struct ConversionOutcome {
    pub output_path: PathBuf,
    /// Question counts per level, in numeric level order.
    pub summary: Vec<LevelSummary>,
    pub skipped: Vec<SkippedBlock>,
    pub replaced_levels: Vec<LevelId>,
}

impl ConversionOutcome {
    pub fn total_questions(&self) -> usize {
        self.summary.iter().map(|level| level.questions).sum()
    }
}

/// Convert the configured input file into a JSON question bank.
///
/// Nothing is written unless the input was read in full.
pub async fn convert(config: &ConverterConfig) -> Result<ConversionOutcome, ConvertError> {
    tracing::info!("Reading from {}", config.input_path.display());
    let raw = read_input(&config.input_path).await?;

    let report = parse_with_report(
        &raw,
        ParseOptions {
            strict_answers: config.strict_answers,
        },
    );

    for block in &report.skipped {
        if config.report_skipped {
            tracing::warn!(
                level_id = %block.level,
                number = ?block.number,
                "Skipped block \"{}\": {}",
                block.header,
                block.reason
            );
        } else {
            tracing::debug!(
                level_id = %block.level,
                number = ?block.number,
                "Skipped block \"{}\": {}",
                block.header,
                block.reason
            );
        }
    }
    for level in &report.replaced_levels {
        tracing::warn!(level_id = %level, "Level defined more than once, keeping the last section");
    }

    let json = to_json(&report.bank)?;
    write_output(&config.output_path, &json).await?;
    tracing::info!("Output written to {}", config.output_path.display());

    Ok(ConversionOutcome {
        output_path: config.output_path.clone(),
        summary: summarize(&report.bank),
        skipped: report.skipped,
        replaced_levels: report.replaced_levels,
    })
}

async fn read_input(path: &Path) -> Result<String, ConvertError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| match source.kind() {
            ErrorKind::NotFound => ConvertError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => ConvertError::ReadInput {
                path: path.to_path_buf(),
                source,
            },
        })
}

async fn write_output(path: &Path, json: &str) -> Result<(), ConvertError> {
    tokio::fs::write(path, json)
        .await
        .map_err(|source| ConvertError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })
}
