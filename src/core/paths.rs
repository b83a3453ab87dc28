//! Path utilities
//!
//! Input detection and output file naming.

use std::path::{Path, PathBuf};

/// Suffix of the plain-text report file
pub const TEXT_SUFFIX: &str = "_words.txt";

/// Suffix of the JSON report file
pub const JSON_SUFFIX: &str = "_words.json";

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Check if a path has a `.pdf` extension (ASCII case-insensitive)
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// File name with its last extension stripped
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `{output_dir}/{base}_words.txt`
pub fn text_output_path(output_dir: &Path, base: &str) -> PathBuf {
    output_dir.join(format!("{}{}", base, TEXT_SUFFIX))
}

/// `{output_dir}/{base}_words.json`
pub fn json_output_path(output_dir: &Path, base: &str) -> PathBuf {
    output_dir.join(format!("{}{}", base, JSON_SUFFIX))
}
