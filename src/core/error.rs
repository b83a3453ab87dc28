//! Error types for extraction and report writing

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to parse PDF {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no PDF files found in {}", dir.display())]
    EmptyInput { dir: PathBuf },

    #[error("output name '{base_name}' for {} is already used by {}", path.display(), previous.display())]
    NameCollision {
        base_name: String,
        path: PathBuf,
        previous: PathBuf,
    },
}

impl ExtractError {
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable error code used in the batch summary
    pub fn code(&self) -> &'static str {
        match self {
            ExtractError::Parse { .. } => "PARSE_ERROR",
            ExtractError::Io { .. } => "IO_ERROR",
            ExtractError::EmptyInput { .. } => "EMPTY_INPUT",
            ExtractError::NameCollision { .. } => "NAME_COLLISION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_file() {
        let err = ExtractError::parse("docs/broken.pdf", "invalid xref");
        let msg = err.to_string();
        assert!(msg.contains("broken.pdf"));
        assert!(msg.contains("invalid xref"));
        assert_eq!(err.code(), "PARSE_ERROR");
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = ExtractError::io(
            "output/a_words.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("a_words.txt"));
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.code(), "IO_ERROR");
    }
}
