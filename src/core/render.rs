//! Renderer module
//!
//! Renders a BatchSummary to stdout formats: jsonl, json, md

use crate::core::outcome::{BatchSummary, DocumentOutcome, Status};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for batch summaries
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a batch summary to a string
    pub fn render(&self, summary: &BatchSummary) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(summary),
            OutputFormat::Json => self.render_json(summary),
            OutputFormat::Markdown => self.render_markdown(summary),
        }
    }

    /// Render as JSON Lines (one JSON object per document)
    fn render_jsonl(&self, summary: &BatchSummary) -> String {
        summary
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, summary: &BatchSummary) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&summary.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&summary.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, summary: &BatchSummary) -> String {
        if summary.is_empty() {
            return String::new();
        }

        let mut output = String::new();
        let (processed, failed): (Vec<&DocumentOutcome>, Vec<&DocumentOutcome>) =
            summary.items.iter().partition(|item| item.status != Status::Failed);

        if !failed.is_empty() {
            output.push_str("## Failed\n\n");
            for item in failed {
                output.push_str(&format!("- `{}`\n", item.source));
                for error in &item.errors {
                    output.push_str(&format!("  - **{}**: {}\n", error.code, error.message));
                }
            }
            output.push('\n');
        }

        if !processed.is_empty() {
            output.push_str("## Processed\n\n");
            for item in processed {
                self.render_item_md(&mut output, item);
            }
        }

        output.push_str(&format!(
            "---\n{} document(s): {} succeeded, {} failed\n",
            summary.len(),
            summary.succeeded(),
            summary.failed()
        ));

        output
    }

    fn render_item_md(&self, output: &mut String, item: &DocumentOutcome) {
        output.push_str(&format!("### `{}`\n\n", item.source));

        if let (Some(total), Some(unique)) = (item.total_words, item.unique_words) {
            output.push_str(&format!("- Words: {} ({} unique)\n", total, unique));
        }
        for path in &item.outputs {
            output.push_str(&format!("- Wrote `{}`\n", path));
        }
        if item.status == Status::Partial {
            for error in &item.errors {
                output.push_str(&format!("\n> ⚠️ **{}**: {}\n", error.code, error.message));
            }
        }

        output.push('\n');
    }
}
