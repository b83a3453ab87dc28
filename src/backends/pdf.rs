//! PDF text backend
//!
//! The pipeline only needs "give me the text of this PDF". Everything else
//! about PDF parsing lives behind the `PdfBackend` trait so the tokenizer,
//! aggregator and report writers can be exercised without real fixtures.

use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use crate::core::error::ExtractError;

/// Extracts the full Unicode text of a PDF file
pub trait PdfBackend {
    fn extract_text(&self, path: &Path) -> Result<String, ExtractError>;
}

/// `pdf-extract` based backend
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for PdfExtractBackend {
    fn extract_text(&self, path: &Path) -> Result<String, ExtractError> {
        let buffer = fs::read(path).map_err(|e| ExtractError::parse(path, e.to_string()))?;

        // pdf-extract panics on some malformed documents instead of erroring
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(&buffer)
        }));

        match outcome {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(ExtractError::parse(path, e.to_string())),
            Err(payload) => Err(ExtractError::parse(
                path,
                format!("parser panicked: {}", panic_message(payload.as_ref())),
            )),
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// One-page Helvetica PDF showing `text`, with a correct xref table
    fn one_page_pdf(text: &str) -> Vec<u8> {
        let content = format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", text);
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R \
             /Resources << /Font << /F1 5 0 R >> >> >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{}\nendstream",
                content.len(),
                content
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
        ];

        let mut pdf = String::from("%PDF-1.4\n");
        let mut offsets = Vec::new();
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
        }

        let xref = pdf.len();
        pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
        for offset in offsets {
            pdf.push_str(&format!("{:010} 00000 n \n", offset));
        }
        pdf.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref
        ));
        pdf.into_bytes()
    }

    #[test]
    fn test_extracts_page_text() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("hello.pdf");
        fs::write(&path, one_page_pdf("Hello World again")).unwrap();

        let text = PdfExtractBackend::new().extract_text(&path).unwrap();
        let words: Vec<_> = text.split_whitespace().collect();
        assert_eq!(words, vec!["Hello", "World", "again"]);
    }

    #[test]
    fn test_missing_file_is_parse_error() {
        let backend = PdfExtractBackend::new();
        let result = backend.extract_text(Path::new("/nonexistent/path/document.pdf"));
        assert!(matches!(result, Err(ExtractError::Parse { .. })));
    }

    #[test]
    fn test_garbage_file_is_parse_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("broken.pdf");
        fs::write(&path, b"this is definitely not a pdf").unwrap();

        let result = PdfExtractBackend::new().extract_text(&path);
        match result {
            Err(ExtractError::Parse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected parse error, got {:?}", other.map(|t| t.len())),
        }
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");

        let payload: Box<dyn std::any::Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");

        let payload: Box<dyn std::any::Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }
}
