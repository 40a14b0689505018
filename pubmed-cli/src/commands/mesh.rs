use std::io::Write;

use anyhow::Result;
use clap::Args;
use pubmed_publication::PubmedPublication;

use super::Input;

#[derive(Args, Debug)]
pub struct Mesh {
    #[command(flatten)]
    pub input: Input,

    /// Only list headings that are a major topic of the article
    #[arg(long)]
    pub major_only: bool,
}

impl Mesh {
    pub fn execute(&self) -> Result<()> {
        self.write_to(&mut std::io::stdout().lock())
    }

    /// One `PMID<TAB>descriptor / qualifier` line per pair
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        let articles = self.input.load_articles()?;
        for article in &articles {
            let publication = PubmedPublication::new(article);
            let pmid = publication.authoritative_id().unwrap_or("-");
            let terms = publication.mesh_terms();

            if terms.is_empty() {
                tracing::debug!(pmid, "No MeSH headings");
                continue;
            }

            for term in terms.iter().filter(|t| !self.major_only || t.is_major_topic()) {
                for (descriptor, qualifier) in term.pairs() {
                    match qualifier {
                        Some(qualifier) => writeln!(out, "{pmid}\t{descriptor} / {qualifier}")?,
                        None => writeln!(out, "{pmid}\t{descriptor}")?,
                    }
                }
            }
        }
        Ok(())
    }
}
