//! Plain-text report

use std::path::Path;

use crate::core::error::ExtractError;
use crate::core::model::ExtractionResult;

pub const TITLE: &str = "PDF Word Extraction Results";

/// Render the plain-text report
pub fn render_text(result: &ExtractionResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n{}\n", TITLE, "=".repeat(TITLE.len())));
    out.push_str(&format!("Total words: {}\n", result.stats.total_words));
    out.push_str(&format!("Unique words: {}\n", result.stats.unique_words));
    out.push_str(&format!("Generated on: {}\n\n", result.generated_on));

    section(&mut out, "All Words (in order of appearance):");
    for (i, token) in result.tokens.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, token));
    }
    out.push('\n');

    section(&mut out, "Word Frequency (sorted by frequency):");
    for (token, count) in result.stats.frequency.sorted_by_frequency() {
        out.push_str(&format!("{}: {}\n", token, count));
    }

    out
}

fn section(out: &mut String, heading: &str) {
    out.push_str(&format!("{}\n{}\n", heading, "-".repeat(heading.chars().count())));
}

/// Render and write the plain-text report to `path`
pub fn write_text_report(result: &ExtractionResult, path: &Path) -> Result<(), ExtractError> {
    super::write_report(path, &render_text(result))
}
