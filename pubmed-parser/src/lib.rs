#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # PubMed Parser
//!
//! Serde bindings for PubMed EFetch citation XML.
//!
//! The types in [`pubmed::record`] follow the element structure of the NLM
//! PubMed DTD rather than flattening it, so that downstream code can decide
//! for itself how to treat a missing element. Every child element is
//! optional; a citation with gaps still deserializes.
//!
//! ```ignore
//! use pubmed_parser::parse_article_from_xml;
//!
//! let article = parse_article_from_xml(xml, "31978945")?;
//! assert_eq!(article.pmid(), Some("31978945"));
//! ```

pub mod error;
pub mod pubmed;

pub use error::{ParseError, Result};
pub use pubmed::{
    PubmedArticle, PubmedArticleSet, parse_article_from_xml, parse_article_set,
    parse_articles_from_file, parse_articles_from_xml,
};
