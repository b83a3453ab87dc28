//! Word data model
//!
//! Tokens, token sequences and the per-document extraction result consumed by
//! the report formatters.

use serde::Serialize;
use std::fmt;

use crate::core::frequency::FrequencyTable;

/// A lowercased word made of Letter/Mark code points
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// All tokens of one document in order of appearance, repeats included
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl From<Vec<Token>> for TokenSequence {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl<T: Into<Token>> FromIterator<T> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Aggregate counts for one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentStatistics {
    /// Length of the token sequence
    pub total_words: usize,
    /// Number of distinct tokens
    pub unique_words: usize,
    /// Distinct token -> occurrence count
    pub frequency: FrequencyTable,
}

impl DocumentStatistics {
    /// Compute statistics for a token sequence
    pub fn from_sequence(tokens: &TokenSequence) -> Self {
        let frequency = FrequencyTable::from_sequence(tokens);
        Self {
            total_words: tokens.len(),
            unique_words: frequency.len(),
            frequency,
        }
    }
}

/// Everything both report formatters need for one document
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Input file name without its extension
    pub base_name: String,
    pub tokens: TokenSequence,
    pub stats: DocumentStatistics,
    /// Human-readable generation time, opaque to the formatters
    pub generated_on: String,
}

impl ExtractionResult {
    pub fn new(
        base_name: impl Into<String>,
        tokens: TokenSequence,
        generated_on: impl Into<String>,
    ) -> Self {
        let stats = DocumentStatistics::from_sequence(&tokens);
        Self {
            base_name: base_name.into(),
            tokens,
            stats,
            generated_on: generated_on.into(),
        }
    }
}
