//! Frequency aggregation
//!
//! Counts token occurrences while remembering the order in which each distinct
//! token was first seen. That order is the tiebreak for the frequency view and
//! the serialization order of the table, which keeps reports reproducible.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

use crate::core::model::{Token, TokenSequence};

/// Distinct token -> occurrence count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    /// (token, count) in first-occurrence order
    entries: Vec<(Token, usize)>,
    /// token -> position in `entries`
    index: HashMap<Token, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token of a sequence
    pub fn from_sequence(tokens: &TokenSequence) -> Self {
        let mut table = Self::new();
        for token in tokens {
            table.record(token);
        }
        table
    }

    /// Record one occurrence of a token
    pub fn record(&mut self, token: &Token) {
        match self.index.get(token) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(token.clone(), self.entries.len());
                self.entries.push((token.clone(), 1));
            }
        }
    }

    /// Occurrence count of a token, if present
    #[allow(dead_code)]
    pub fn get(&self, token: &str) -> Option<usize> {
        self.index
            .get(&Token::from(token))
            .map(|&pos| self.entries[pos].1)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    #[allow(dead_code)]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&Token, usize)> {
        self.entries.iter().map(|(token, count)| (token, *count))
    }

    /// Entries by count descending; equal counts keep first-occurrence order
    pub fn sorted_by_frequency(&self) -> Vec<(&Token, usize)> {
        let mut sorted: Vec<_> = self.iter().collect();
        // stable sort: ties stay in first-occurrence order
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (token, count) in &self.entries {
            map.serialize_entry(token.as_str(), count)?;
        }
        map.end()
    }
}
