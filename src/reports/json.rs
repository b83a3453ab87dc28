//! Structured JSON report

use serde::Serialize;
use std::path::Path;

use crate::core::error::ExtractError;
use crate::core::frequency::FrequencyTable;
use crate::core::model::{ExtractionResult, TokenSequence};

/// Extension recorded in `metadata.sourceFile`
pub const SOURCE_EXTENSION: &str = ".pdf";

/// Value of `metadata.encoding`
pub const ENCODING: &str = "UTF-8";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub total_words: usize,
    pub unique_words: usize,
    pub generated_on: String,
    pub source_file: String,
    pub encoding: &'static str,
}

/// JSON document layout: `metadata`, `words`, `wordFrequency`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport<'a> {
    pub metadata: Metadata,
    pub words: &'a TokenSequence,
    pub word_frequency: &'a FrequencyTable,
}

impl<'a> JsonReport<'a> {
    pub fn new(result: &'a ExtractionResult) -> Self {
        Self {
            metadata: Metadata {
                total_words: result.stats.total_words,
                unique_words: result.stats.unique_words,
                generated_on: result.generated_on.clone(),
                source_file: format!("{}{}", result.base_name, SOURCE_EXTENSION),
                encoding: ENCODING,
            },
            words: &result.tokens,
            word_frequency: &result.stats.frequency,
        }
    }
}

/// Render the pretty-printed JSON report; non-ASCII stays raw UTF-8
pub fn render_json(result: &ExtractionResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport::new(result))
}

/// Render and write the JSON report to `path`
pub fn write_json_report(result: &ExtractionResult, path: &Path) -> Result<(), ExtractError> {
    let json = render_json(result).map_err(|e| ExtractError::io(path, e.into()))?;
    super::write_report(path, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    fn sample() -> ExtractionResult {
        let tokens: TokenSequence = ["café", "thé", "café", "niño"].into_iter().collect();
        ExtractionResult::new("menu", tokens, "Mon Jan 01 00:00:00 UTC 2024")
    }

    #[test]
    fn test_top_level_fields() {
        let value: Value = serde_json::from_str(&render_json(&sample()).unwrap()).unwrap();
        let obj = value.as_object().unwrap();

        let keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys.len(), 3);
        assert!(obj.contains_key("metadata"));
        assert!(obj.contains_key("words"));
        assert!(obj.contains_key("wordFrequency"));
    }

    #[test]
    fn test_metadata() {
        let value: Value = serde_json::from_str(&render_json(&sample()).unwrap()).unwrap();
        let meta = &value["metadata"];

        assert_eq!(meta["totalWords"], 4);
        assert_eq!(meta["uniqueWords"], 3);
        assert_eq!(meta["generatedOn"], "Mon Jan 01 00:00:00 UTC 2024");
        assert_eq!(meta["sourceFile"], "menu.pdf");
        assert_eq!(meta["encoding"], "UTF-8");
    }

    #[test]
    fn test_words_and_frequency() {
        let value: Value = serde_json::from_str(&render_json(&sample()).unwrap()).unwrap();

        assert_eq!(
            value["words"],
            serde_json::json!(["café", "thé", "café", "niño"])
        );
        assert_eq!(
            value["wordFrequency"],
            serde_json::json!({"café": 2, "thé": 1, "niño": 1})
        );
    }

    #[test]
    fn test_non_ascii_round_trip() {
        let json = render_json(&sample()).unwrap();

        // raw UTF-8, no \u escapes
        assert!(json.contains("\"café\""));
        assert!(!json.contains("\\u"));

        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["words"][0].as_str(), Some("café"));
    }

    #[test]
    fn test_empty_document() {
        let result = ExtractionResult::new("blank", TokenSequence::new(), "now");
        let value: Value = serde_json::from_str(&render_json(&result).unwrap()).unwrap();

        assert_eq!(value["metadata"]["totalWords"], 0);
        assert_eq!(value["words"], serde_json::json!([]));
        assert_eq!(value["wordFrequency"], serde_json::json!({}));
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render_json(&sample()).unwrap(), render_json(&sample()).unwrap());
    }

    #[test]
    fn test_write_json_report() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("menu_words.json");

        write_json_report(&sample(), &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["wordFrequency"]["café"], 2);
    }
}
