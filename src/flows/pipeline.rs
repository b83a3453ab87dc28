//! Extraction pipeline - PDF text to word reports
//!
//! Per document: ensure the output directory, pull text from the PDF backend,
//! tokenize, aggregate, then write the text and JSON reports. A failing
//! document is recorded and the batch moves on.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::backends::pdf::PdfBackend;
use crate::core::config::ExtractConfig;
use crate::core::error::ExtractError;
use crate::core::model::ExtractionResult;
use crate::core::outcome::{BatchSummary, DocumentOutcome};
use crate::core::paths::{base_name, json_output_path, normalize_path, text_output_path};
use crate::core::tokenizer::tokenize;
use crate::core::util::generation_timestamp;
use crate::reports::json::write_json_report;
use crate::reports::text::write_text_report;

/// Progress notifications emitted while a batch runs
#[derive(Debug)]
pub enum Progress<'a> {
    Started(&'a Path),
    Finished(&'a DocumentOutcome),
}

pub struct Pipeline<B: PdfBackend> {
    backend: B,
    config: ExtractConfig,
}

impl<B: PdfBackend> Pipeline<B> {
    pub fn new(backend: B, config: ExtractConfig) -> Self {
        Self { backend, config }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Create the output directory if missing
    pub fn ensure_output_dir(&self) -> Result<(), ExtractError> {
        let dir = &self.config.output_dir;
        if !dir.is_dir() {
            fs::create_dir_all(dir).map_err(|e| ExtractError::io(dir, e))?;
            tracing::debug!(dir = %dir.display(), "created output directory");
        }
        Ok(())
    }

    /// Pull text from the backend and build the extraction result
    pub fn extract(&self, path: &Path) -> Result<ExtractionResult, ExtractError> {
        let text = self.backend.extract_text(path)?;
        let tokens = tokenize(&text, &self.config.tokenizer_options());
        tracing::debug!(
            path = %path.display(),
            chars = text.chars().count(),
            tokens = tokens.len(),
            "tokenized document"
        );
        Ok(ExtractionResult::new(
            base_name(path),
            tokens,
            generation_timestamp(),
        ))
    }

    /// Process one document through to both reports
    pub fn process_document(&self, path: &Path) -> DocumentOutcome {
        let source = normalize_path(path);

        if let Err(err) = self.ensure_output_dir() {
            return DocumentOutcome::failed(source, &err);
        }

        let result = match self.extract(path) {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "extraction failed");
                return DocumentOutcome::failed(source, &err);
            }
        };

        let mut outcome = DocumentOutcome::extracted(
            source,
            result.stats.total_words,
            result.stats.unique_words,
        );

        let text_path = text_output_path(&self.config.output_dir, &result.base_name);
        outcome = record_write(outcome, &text_path, write_text_report(&result, &text_path));

        let json_path = json_output_path(&self.config.output_dir, &result.base_name);
        outcome = record_write(outcome, &json_path, write_json_report(&result, &json_path));

        outcome
    }

    /// Process every input in order; one failure never stops the batch
    pub fn process_batch<F>(&self, inputs: &[PathBuf], mut on_progress: F) -> BatchSummary
    where
        F: FnMut(Progress<'_>),
    {
        let mut summary = BatchSummary::new();
        let mut claimed: HashMap<String, &Path> = HashMap::new();

        for path in inputs {
            on_progress(Progress::Started(path));

            let base = base_name(path);
            let outcome = match claimed.get(&base) {
                Some(previous) => {
                    let err = ExtractError::NameCollision {
                        base_name: base,
                        path: path.clone(),
                        previous: previous.to_path_buf(),
                    };
                    tracing::warn!(error = %err, "skipping document");
                    DocumentOutcome::failed(normalize_path(path), &err)
                }
                None => {
                    let outcome = self.process_document(path);
                    // a base name is taken only once a report was written under it
                    if !outcome.outputs.is_empty() {
                        claimed.insert(base, path.as_path());
                    }
                    outcome
                }
            };

            on_progress(Progress::Finished(&outcome));
            summary.push(outcome);
        }

        summary
    }
}

fn record_write(
    outcome: DocumentOutcome,
    path: &Path,
    written: Result<(), ExtractError>,
) -> DocumentOutcome {
    match written {
        Ok(()) => outcome.with_output(normalize_path(path)),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "report write failed");
            outcome.with_error(&err)
        }
    }
}
