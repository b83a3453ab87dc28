//! pdfwords - Extract words from PDF documents
//!
//! pdfwords provides:
//! - Unicode-aware word tokenization of PDF text
//! - Word frequency statistics
//! - Per-document reports as plain text and JSON
//! - A batch summary on stdout (jsonl/json/md)

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;
mod reports;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let code = cli::run(cli)?;
    std::process::exit(code);
}
