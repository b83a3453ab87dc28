//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::builder::TypedValueParser;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::backends::pdf::PdfExtractBackend;
use crate::backends::scan::{find_inputs, ScanOptions};
use crate::core::config::{ExtractConfig, DEFAULT_OUTPUT_DIR};
use crate::core::error::ExtractError;
use crate::core::outcome::{BatchSummary, Status};
use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::core::tokenizer::DEFAULT_MIN_TOKEN_LEN;
use crate::flows::pipeline::{Pipeline, Progress};

/// pdfwords - extract every word from PDF documents into text and JSON reports.
#[derive(Parser, Debug)]
#[command(name = "pdfwords")]
#[command(
    author,
    version,
    about,
    long_about = r#"pdfwords extracts the text of each PDF, splits it into lowercase words
(runs of Unicode letters and combining marks, at least two code points long)
and writes two reports per document into the output directory:

- {name}_words.txt: every word in order of appearance, then word frequencies
- {name}_words.json: metadata, the word list and the frequency table

A summary with one entry per document is printed to stdout (default: jsonl).
Progress and errors go to stderr. The exit status is 1 when any document failed.

Examples:
    pdfwords
    pdfwords --source papers --output reports --recursive
    pdfwords thesis.pdf notes.pdf --format md
"#
)]
pub struct Cli {
    /// PDF files to process (skips directory scanning).
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Directory scanned for PDF files.
    #[arg(
        short,
        long,
        env = "PDFWORDS_SOURCE",
        default_value = ".",
        value_name = "DIR",
        long_help = "Directory scanned for *.pdf files (case-insensitive) when no FILE\n\
arguments are given. Defaults to the current directory."
    )]
    pub source: PathBuf,

    /// Directory receiving the reports.
    #[arg(
        short,
        long,
        env = "PDFWORDS_OUTPUT",
        default_value = DEFAULT_OUTPUT_DIR,
        value_name = "DIR",
        long_help = "Directory receiving the {name}_words.txt / {name}_words.json pairs.\n\n\
Created if missing. Existing reports with the same name are overwritten."
    )]
    pub output: PathBuf,

    /// Scan subdirectories of the source directory too.
    #[arg(short, long)]
    pub recursive: bool,

    /// Minimum word length in code points.
    #[arg(
        long,
        default_value_t = DEFAULT_MIN_TOKEN_LEN,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from),
        value_name = "N",
    )]
    pub min_length: usize,

    /// NFC-normalize extracted text before splitting words.
    #[arg(
        long,
        long_help = "Apply Unicode NFC normalization to the extracted text before splitting\n\
it into words, so that decomposed accents (e + U+0301) and precomposed ones (é)\n\
produce the same word."
    )]
    pub nfc: bool,

    /// Summary format on stdout (jsonl/json/md).
    #[arg(long, default_value = "jsonl", value_name = "FORMAT")]
    pub format: String,

    /// Pretty-print JSON/JSONL summary output.
    #[arg(long)]
    pub pretty: bool,

    /// Disable colored progress output.
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (no progress lines on stderr).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn extract_config(&self) -> ExtractConfig {
        ExtractConfig::new(&self.output)
            .with_min_token_len(self.min_length)
            .with_nfc(self.nfc)
    }

    fn render_config(&self) -> RenderConfig {
        let format: OutputFormat = self.format.parse().unwrap_or_default();
        RenderConfig::with_pretty(format, self.pretty)
    }
}

/// Install the stderr log subscriber; RUST_LOG wins over --verbose
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn print_progress(progress: Progress<'_>) {
    match progress {
        Progress::Started(path) => {
            eprintln!("{} {}", "Processing:".cyan(), path.display());
        }
        Progress::Finished(outcome) => match outcome.status {
            Status::Ok => eprintln!(
                "{} {} ({} words, {} unique)",
                "✓".green(),
                outcome.source,
                outcome.total_words.unwrap_or_default(),
                outcome.unique_words.unwrap_or_default()
            ),
            Status::Partial | Status::Failed => {
                let label = if outcome.status == Status::Partial {
                    "⚠".yellow()
                } else {
                    "✗".red()
                };
                eprintln!("{} {}", label, outcome.source);
                for error in &outcome.errors {
                    eprintln!("    {}: {}", error.code.bold(), error.message);
                }
            }
        },
    }
}

fn print_totals(summary: &BatchSummary) {
    let line = format!(
        "{} document(s): {} succeeded, {} failed",
        summary.len(),
        summary.succeeded(),
        summary.failed()
    );
    if summary.has_failures() {
        eprintln!("{}", line.red().bold());
    } else {
        eprintln!("{}", line.green().bold());
    }
}

/// Run the CLI with parsed arguments, returning the process exit code
pub fn run(cli: Cli) -> Result<i32> {
    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let inputs = if cli.inputs.is_empty() {
        let options = ScanOptions {
            recursive: cli.recursive,
            ..Default::default()
        };
        match find_inputs(&cli.source, &options) {
            Ok(inputs) => inputs,
            Err(err @ ExtractError::EmptyInput { .. }) => {
                eprintln!("{} {}", "⚠".yellow(), err);
                return Ok(0);
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to scan source directory: {}", cli.source.display())
                })
            }
        }
    } else {
        cli.inputs.clone()
    };

    let pipeline = Pipeline::new(PdfExtractBackend::new(), cli.extract_config());
    tracing::debug!(
        inputs = inputs.len(),
        output = %pipeline.config().output_dir.display(),
        "starting batch"
    );

    let summary = pipeline.process_batch(&inputs, |progress| {
        if !cli.quiet {
            print_progress(progress);
        }
    });

    let rendered = Renderer::with_config(cli.render_config()).render(&summary);
    if !rendered.is_empty() {
        println!("{}", rendered);
    }

    if !cli.quiet {
        print_totals(&summary);
    }

    Ok(if summary.has_failures() { 1 } else { 0 })
}
