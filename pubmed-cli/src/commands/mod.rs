pub mod export;
pub mod mesh;
pub mod show;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pubmed_parser::{ParseError, PubmedArticle, parse_articles_from_file};

/// Input files shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct Input {
    /// PubMed EFetch XML files (`<PubmedArticleSet>` documents)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Only use the article with this PMID
    #[arg(long)]
    pub pmid: Option<String>,
}

impl Input {
    /// Parse every file and apply the `--pmid` filter
    ///
    /// A `--pmid` that matches nothing in any file is an error.
    pub fn load_articles(&self) -> Result<Vec<PubmedArticle>> {
        let mut articles = Vec::new();
        for path in &self.files {
            let parsed = parse_articles_from_file(path)
                .with_context(|| format!("Failed to read articles from {}", path.display()))?;
            tracing::debug!(path = %path.display(), articles = parsed.len(), "Loaded article set");
            articles.extend(parsed);
        }

        if let Some(pmid) = self.pmid.as_deref() {
            let pmid = pmid.trim();
            articles.retain(|article| article.pmid() == Some(pmid));
            if articles.is_empty() {
                return Err(ParseError::ArticleNotFound {
                    pmid: pmid.to_string(),
                }
                .into());
            }
        }

        tracing::info!(
            files = self.files.len(),
            articles = articles.len(),
            "Loaded citations"
        );
        Ok(articles)
    }
}
