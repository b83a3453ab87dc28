//! Report formatters
//!
//! Two independent renderers over the same `ExtractionResult`:
//! - text: human-readable `_words.txt`
//! - json: structured `_words.json`
//!
//! Each writer either fully succeeds or fails with an I/O error for its own file.

pub mod json;
pub mod text;

use std::fs;
use std::path::Path;

use crate::core::error::ExtractError;

/// Write a rendered report, attributing failures to `path`
fn write_report(path: &Path, contents: &str) -> Result<(), ExtractError> {
    fs::write(path, contents.as_bytes()).map_err(|e| ExtractError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "report written");
    Ok(())
}
