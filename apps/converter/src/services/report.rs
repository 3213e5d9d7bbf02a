//! Operator-facing summary of a conversion.

use std::fmt;

use super::convert::ConversionOutcome;

/// The per-level summary printed after a run.
impl fmt::Display for ConversionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Parsed {} levels:", self.summary.len())?;
        for level in &self.summary {
            writeln!(f, "  {}", level)?;
        }
        writeln!(f, "Total: {} questions", self.total_questions())?;
        if !self.skipped.is_empty() {
            writeln!(f, "Skipped: {} blocks", self.skipped.len())?;
        }
        writeln!(f, "Output written to: {}", self.output_path.display())
    }
}
