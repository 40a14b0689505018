//! PubMed citation XML bindings
//!
//! - `record` - element types mirroring the PubMed DTD
//! - `parser` - entry points that turn EFetch XML into those types
//! - `deserializers` - serde helpers for attribute encodings

mod deserializers;
pub mod parser;
pub mod record;

pub use parser::{
    parse_article_from_xml, parse_article_set, parse_articles_from_file, parse_articles_from_xml,
};
pub use record::{
    AffiliationInfo, Article, ArticleId, ArticleIdList, Author, AuthorList, DescriptorName,
    ELocationId, Identifier, Issn, Journal, JournalIssue, MedlineCitation, MeshHeading,
    MeshHeadingList, Pagination, Pmid, PubDate, PublicationType, PublicationTypeList,
    PubmedArticle, PubmedArticleSet, PubmedData, QualifierName,
};
