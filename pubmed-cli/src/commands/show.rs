use std::io::Write;

use anyhow::Result;
use clap::Args;
use pubmed_publication::{PublicationMetadata, PubmedPublication};

use super::Input;

#[derive(Args, Debug)]
pub struct Show {
    #[command(flatten)]
    pub input: Input,
}

impl Show {
    pub fn execute(&self) -> Result<()> {
        self.write_to(&mut std::io::stdout().lock())
    }

    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        let articles = self.input.load_articles()?;
        for (index, article) in articles.iter().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }
            write_block(out, &PubmedPublication::new(article))?;
        }
        Ok(())
    }
}

fn write_block(out: &mut impl Write, publication: &PubmedPublication<'_>) -> Result<()> {
    writeln!(
        out,
        "PMID:     {}",
        publication.authoritative_id().unwrap_or("-")
    )?;
    writeln!(out, "Title:    {}", publication.title().unwrap_or("-"))?;
    writeln!(out, "Authors:  {}", publication.author_names_string())?;
    writeln!(out, "Citation: {}", publication.journal_publication_info())?;

    let optional = [
        ("Pages", publication.pagination()),
        ("ISSN", publication.issn().map(str::to_string)),
        ("DOI", publication.doi().map(str::to_string)),
        ("PMC", publication.pmc().map(str::to_string)),
        ("Type", publication.ontology_type().map(|kind| kind.to_string())),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            writeln!(out, "{:<10}{value}", format!("{label}:"))?;
        }
    }

    let major = publication.major_mesh_terms();
    if !major.is_empty() {
        writeln!(out, "MeSH:     {}", major.join("; "))?;
    }
    Ok(())
}
