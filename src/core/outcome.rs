//! Batch outcome model
//!
//! Every processed document maps to one `DocumentOutcome` before the batch
//! summary is rendered.

use serde::Serialize;

use crate::core::error::ExtractError;

/// Final status of one document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Both reports written
    Ok,
    /// Text extracted but only one report written
    Partial,
    /// Nothing written
    Failed,
}

/// Error information attached to an outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeError {
    pub code: String,
    pub message: String,
}

impl OutcomeError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&ExtractError> for OutcomeError {
    fn from(err: &ExtractError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

/// Result of processing one input document
#[derive(Debug, Clone, Serialize)]
pub struct DocumentOutcome {
    pub status: Status,

    /// Input path, using '/' as separator
    pub source: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_words: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_words: Option<usize>,

    /// Written report files
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<OutcomeError>,
}

impl DocumentOutcome {
    /// Outcome for a document whose text could not be obtained
    pub fn failed(source: impl Into<String>, error: &ExtractError) -> Self {
        Self {
            status: Status::Failed,
            source: source.into(),
            total_words: None,
            unique_words: None,
            outputs: Vec::new(),
            errors: vec![error.into()],
        }
    }

    /// Outcome for a tokenized document; status follows the report writes
    pub fn extracted(source: impl Into<String>, total_words: usize, unique_words: usize) -> Self {
        Self {
            status: Status::Failed,
            source: source.into(),
            total_words: Some(total_words),
            unique_words: Some(unique_words),
            outputs: Vec::new(),
            errors: Vec::new(),
        }
        .with_status()
    }

    /// Record a written report file
    pub fn with_output(mut self, path: impl Into<String>) -> Self {
        self.outputs.push(path.into());
        self.with_status()
    }

    /// Record a failure
    pub fn with_error(mut self, error: &ExtractError) -> Self {
        self.errors.push(error.into());
        self.with_status()
    }

    fn with_status(mut self) -> Self {
        self.status = match (self.outputs.is_empty(), self.errors.is_empty()) {
            (false, true) => Status::Ok,
            (false, false) => Status::Partial,
            (true, _) => Status::Failed,
        };
        self
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

/// All outcomes of a batch, in processing order
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    pub items: Vec<DocumentOutcome>,
}

impl BatchSummary {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, outcome: DocumentOutcome) {
        self.items.push(outcome);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of documents with both reports written
    pub fn succeeded(&self) -> usize {
        self.items.iter().filter(|o| o.is_ok()).count()
    }

    /// Number of documents with at least one failure
    pub fn failed(&self) -> usize {
        self.len() - self.succeeded()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_error() -> ExtractError {
        ExtractError::io(
            "output/a_words.json",
            std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        )
    }

    #[test]
    fn test_extracted_without_outputs_is_failed() {
        let outcome = DocumentOutcome::extracted("a.pdf", 10, 4);
        assert_eq!(outcome.status, Status::Failed);
    }

    #[test]
    fn test_status_transitions() {
        let ok = DocumentOutcome::extracted("a.pdf", 10, 4)
            .with_output("output/a_words.txt")
            .with_output("output/a_words.json");
        assert_eq!(ok.status, Status::Ok);

        let partial = DocumentOutcome::extracted("a.pdf", 10, 4)
            .with_output("output/a_words.txt")
            .with_error(&write_error());
        assert_eq!(partial.status, Status::Partial);
        assert_eq!(partial.errors[0].code, "IO_ERROR");
    }

    #[test]
    fn test_failed_outcome() {
        let err = ExtractError::parse("bad.pdf", "not a PDF");
        let outcome = DocumentOutcome::failed("bad.pdf", &err);
        assert_eq!(outcome.status, Status::Failed);
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.total_words.is_none());
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = BatchSummary::new();
        summary.push(
            DocumentOutcome::extracted("a.pdf", 1, 1)
                .with_output("a_words.txt")
                .with_output("a_words.json"),
        );
        summary.push(DocumentOutcome::failed(
            "b.pdf",
            &ExtractError::parse("b.pdf", "bad"),
        ));

        assert_eq!(summary.len(), 2);
        assert_eq!(summary.succeeded(), 1);
        assert_eq!(summary.failed(), 1);
        assert!(summary.has_failures());
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let err = ExtractError::parse("bad.pdf", "not a PDF");
        let json = serde_json::to_string(&DocumentOutcome::failed("bad.pdf", &err)).unwrap();
        assert!(json.contains(r#""status":"failed""#));
        assert!(!json.contains("outputs"));
        assert!(!json.contains("total_words"));
    }
}
