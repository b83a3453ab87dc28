//! Source scanning backend
//!
//! Uses walkdir to find PDF inputs in the source directory

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::error::ExtractError;
use crate::core::paths::is_pdf;

/// Scan options
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Descend into subdirectories
    pub recursive: bool,
    /// Follow symbolic links
    pub follow_links: bool,
}

/// List PDF files under `source`, sorted by path
pub fn scan_pdfs(source: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>, ExtractError> {
    if !source.is_dir() {
        return Err(ExtractError::io(
            source,
            std::io::Error::new(std::io::ErrorKind::NotFound, "source is not a directory"),
        ));
    }

    let mut walker = WalkDir::new(source)
        .min_depth(1)
        .follow_links(options.follow_links);
    if !options.recursive {
        walker = walker.max_depth(1);
    }

    let mut pdfs = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if entry.file_type().is_file() && is_pdf(entry.path()) {
            pdfs.push(entry.into_path());
        }
    }

    pdfs.sort();
    tracing::debug!(source = %source.display(), count = pdfs.len(), "scanned source directory");
    Ok(pdfs)
}

/// Scan `source`, treating an empty result as `EmptyInput`
pub fn find_inputs(source: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>, ExtractError> {
    let pdfs = scan_pdfs(source, options)?;
    if pdfs.is_empty() {
        return Err(ExtractError::EmptyInput {
            dir: source.to_path_buf(),
        });
    }
    Ok(pdfs)
}
