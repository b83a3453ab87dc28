//! Backends module - PDF text extraction and source scanning
//!
//! Provides:
//! - pdf: PdfBackend trait and the pdf-extract implementation
//! - scan: PDF discovery with walkdir

pub mod pdf;
pub mod scan;
