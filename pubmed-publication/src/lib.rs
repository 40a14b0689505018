#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # PubMed Publication
//!
//! Read-only publication metadata over citations parsed by [`pubmed_parser`].
//!
//! [`PubmedPublication`] borrows a [`PubmedArticle`] and answers the
//! questions a display or indexing layer asks of a publication: who wrote
//! it, where and when it appeared, which identifiers it carries, what kind
//! of publication it is, and which MeSH headings index it. A missing
//! element anywhere along the way yields `None`, an empty list, or a
//! documented placeholder string; no accessor fails.
//!
//! ```ignore
//! use pubmed_publication::{PublicationMetadata, PubmedPublication};
//!
//! let articles = pubmed_parser::parse_articles_from_xml(xml)?;
//! let publication = PubmedPublication::new(&articles[0]);
//! println!("{}", publication.journal_publication_info());
//! ```

pub mod article;
pub mod author;
pub mod classification;
pub mod date;
pub mod mesh;
pub mod metadata;
pub mod summary;

pub use article::{NO_AUTHORS_LISTED, NO_PUB_DATE_AVAILABLE, PubmedPublication};
pub use author::PubmedAuthor;
pub use classification::PublicationKind;
pub use mesh::{MeshQualifier, MeshTerm};
pub use metadata::PublicationMetadata;
pub use pubmed_parser::PubmedArticle;
pub use summary::{AuthorSummary, PublicationSummary};

/// Trim a text node and treat an empty one as absent
pub(crate) fn non_empty(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}
