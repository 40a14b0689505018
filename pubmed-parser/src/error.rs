use std::result;

use thiserror::Error;

/// Error types for PubMed XML parsing
#[derive(Error, Debug)]
pub enum ParseError {
    /// The document is not well-formed or does not fit the citation schema
    #[error("XML parsing failed: {0}")]
    XmlError(String),

    /// No article in the set carries the requested PMID
    #[error("Article not found: PMID {pmid}")]
    ArticleNotFound { pmid: String },

    /// IO error for file operations
    #[error("IO error reading {path}: {message}")]
    IoError { path: String, message: String },
}

pub type Result<T> = result::Result<T, ParseError>;
