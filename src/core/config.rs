//! Pipeline configuration

use std::path::PathBuf;

use crate::core::tokenizer::{TokenizerOptions, DEFAULT_MIN_TOKEN_LEN};

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Settings passed into the extraction pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Directory receiving the `_words.txt` / `_words.json` pairs
    pub output_dir: PathBuf,
    /// Minimum token length in code points
    pub min_token_len: usize,
    /// NFC-normalize extracted text before tokenizing
    pub nfc: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            nfc: false,
        }
    }
}

impl ExtractConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    pub fn with_min_token_len(mut self, min_token_len: usize) -> Self {
        self.min_token_len = min_token_len.max(1);
        self
    }

    pub fn with_nfc(mut self, nfc: bool) -> Self {
        self.nfc = nfc;
        self
    }

    pub fn tokenizer_options(&self) -> TokenizerOptions {
        TokenizerOptions {
            min_len: self.min_token_len,
            nfc: self.nfc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExtractConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.min_token_len, 2);
        assert!(!config.nfc);
    }

    #[test]
    fn test_min_token_len_floor() {
        let config = ExtractConfig::new("out").with_min_token_len(0);
        assert_eq!(config.min_token_len, 1);
    }

    #[test]
    fn test_tokenizer_options() {
        let options = ExtractConfig::new("out")
            .with_min_token_len(3)
            .with_nfc(true)
            .tokenizer_options();
        assert_eq!(options.min_len, 3);
        assert!(options.nfc);
    }
}
