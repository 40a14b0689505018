use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use pubmed_publication::{PublicationSummary, PubmedPublication};

use super::Input;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One pretty-printed JSON array
    Json,
    /// One compact JSON object per line
    Jsonl,
}

#[derive(Args, Debug)]
pub struct Export {
    #[command(flatten)]
    pub input: Input,

    /// Export format
    #[arg(short, long, value_enum, env = "PUBMED_CLI_FORMAT", default_value = "json")]
    pub format: ExportFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Export {
    pub fn execute(&self) -> Result<()> {
        let articles = self.input.load_articles()?;
        let summaries: Vec<PublicationSummary> = articles
            .iter()
            .map(|article| PubmedPublication::new(article).summary())
            .collect();

        tracing::info!(
            articles = summaries.len(),
            format = ?self.format,
            "Exporting publication summaries"
        );

        let result = render(&summaries, self.format)?;

        if let Some(ref output_path) = self.output {
            std::fs::write(output_path, &result)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
            tracing::info!(
                path = %output_path.display(),
                articles = summaries.len(),
                "Exported {} articles to {}",
                summaries.len(),
                output_path.display()
            );
        } else {
            write!(std::io::stdout(), "{result}")?;
        }

        Ok(())
    }
}

pub fn render(summaries: &[PublicationSummary], format: ExportFormat) -> Result<String> {
    let mut result = match format {
        ExportFormat::Json => serde_json::to_string_pretty(summaries)?,
        ExportFormat::Jsonl => summaries
            .iter()
            .map(serde_json::to_string)
            .collect::<serde_json::Result<Vec<_>>>()?
            .join("\n"),
    };
    if !result.is_empty() {
        result.push('\n');
    }
    Ok(result)
}
