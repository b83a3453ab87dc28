//! Word tokenizer - Unicode category scanner
//!
//! Splits text into maximal runs of Letter/Mark code points, lowercases each
//! run and drops runs shorter than the configured minimum length.
//!
//! Classification goes through the Unicode General Category of every code
//! point rather than a regex word boundary, so the behavior only depends on
//! the Unicode tables shipped with `unicode-properties`.
//!
//! Usage:
//! ```ignore
//! let tokens = tokenize("Hello, world! 123", &TokenizerOptions::default());
//! assert_eq!(tokens, vec!["hello", "world"]);
//! ```

use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::core::model::{Token, TokenSequence};

/// Default minimum token length in code points
pub const DEFAULT_MIN_TOKEN_LEN: usize = 2;

/// Tokenizer options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Minimum token length in code points, measured after lowercasing
    pub min_len: usize,
    /// Apply NFC normalization to the text before scanning
    pub nfc: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_TOKEN_LEN,
            nfc: false,
        }
    }
}

/// Check if a code point belongs to a word (General Category L* or M*)
#[inline]
pub fn is_word_char(c: char) -> bool {
    matches!(
        c.general_category_group(),
        GeneralCategoryGroup::Letter | GeneralCategoryGroup::Mark
    )
}

/// Tokenize text into lowercased word tokens in order of appearance
pub fn tokenize(text: &str, options: &TokenizerOptions) -> TokenSequence {
    if options.nfc {
        let normalized: String = text.nfc().collect();
        scan(&normalized, options.min_len)
    } else {
        scan(text, options.min_len)
    }
}

fn scan(text: &str, min_len: usize) -> TokenSequence {
    let mut tokens = Vec::new();
    let mut run_start: Option<usize> = None;

    for (idx, c) in text.char_indices() {
        match (is_word_char(c), run_start) {
            (true, None) => run_start = Some(idx),
            (false, Some(start)) => {
                push_candidate(&mut tokens, &text[start..idx], min_len);
                run_start = None;
            }
            _ => {}
        }
    }

    if let Some(start) = run_start {
        push_candidate(&mut tokens, &text[start..], min_len);
    }

    TokenSequence::from(tokens)
}

fn push_candidate(tokens: &mut Vec<Token>, run: &str, min_len: usize) {
    let folded = run.to_lowercase();
    if folded.chars().count() >= min_len {
        tokens.push(Token::new(folded));
    }
}
