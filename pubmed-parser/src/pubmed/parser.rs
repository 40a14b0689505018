//! EFetch XML entry points

use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use quick_xml::Reader;
use quick_xml::de::from_str;
use quick_xml::events::Event;
use regex::Regex;
use tracing::{debug, instrument, warn};

use super::record::{PubmedArticle, PubmedArticleSet};
use crate::error::{ParseError, Result};

/// Inline formatting tags that PubMed leaves inside `ArticleTitle` and
/// friends. quick-xml's serde layer cannot read mixed content into a
/// `String`, so they are removed before deserializing.
static INLINE_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</?(?:i|b|u|sup|sub|em|strong|italic|bold)>")
        .expect("inline tag pattern is valid")
});

/// Remove inline formatting tags, leaving their text in place
///
/// ```ignore
/// let cleaned = strip_inline_html_tags("<ArticleTitle>CO<sub>2</sub> uptake</ArticleTitle>");
/// assert_eq!(cleaned, "<ArticleTitle>CO2 uptake</ArticleTitle>");
/// ```
pub(crate) fn strip_inline_html_tags(xml: &str) -> Cow<'_, str> {
    let cleaned = INLINE_TAG_REGEX.replace_all(xml, "");
    if let Cow::Owned(ref owned) = cleaned {
        debug!(
            removed_bytes = xml.len() - owned.len(),
            "Stripped inline formatting tags"
        );
    }
    cleaned
}

const ROOT_ELEMENT: &[u8] = b"PubmedArticleSet";

/// Fail unless the first element of the document is `<PubmedArticleSet>`
fn check_root_element(xml: &str) -> Result<()> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                if e.name().as_ref() == ROOT_ELEMENT {
                    return Ok(());
                }
                let found = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                return Err(ParseError::XmlError(format!(
                    "Expected root element <PubmedArticleSet>, found <{found}>"
                )));
            }
            Ok(Event::Eof) => {
                return Err(ParseError::XmlError(
                    "Document has no root element".to_string(),
                ));
            }
            Ok(_) => {}
            Err(e) => {
                return Err(ParseError::XmlError(format!(
                    "Failed to read XML at position {}: {e}",
                    reader.error_position()
                )));
            }
        }
    }
}

/// Deserialize a complete `<PubmedArticleSet>` document
///
/// # Errors
///
/// Returns [`ParseError::XmlError`] when the document is malformed or its
/// root is not a `PubmedArticleSet`.
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_article_set(xml: &str) -> Result<PubmedArticleSet> {
    check_root_element(xml)?;
    let cleaned = strip_inline_html_tags(xml);
    let set: PubmedArticleSet = from_str(&cleaned)
        .map_err(|e| ParseError::XmlError(format!("Failed to deserialize XML: {e}")))?;

    let without_pmid = set.articles.iter().filter(|a| a.pmid().is_none()).count();
    if without_pmid > 0 {
        warn!(without_pmid, "Citations without a PMID in article set");
    }
    debug!(articles = set.articles.len(), "Parsed article set");

    Ok(set)
}

/// Parse every `<PubmedArticle>` of an EFetch response, in document order
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_articles_from_xml(xml: &str) -> Result<Vec<PubmedArticle>> {
    parse_article_set(xml).map(|set| set.articles)
}

/// Parse an EFetch response and return the article with the given PMID
///
/// # Errors
///
/// Returns [`ParseError::ArticleNotFound`] if no citation carries `pmid`.
#[instrument(skip(xml), fields(pmid = %pmid, xml_size = xml.len()))]
pub fn parse_article_from_xml(xml: &str, pmid: &str) -> Result<PubmedArticle> {
    let wanted = pmid.trim();
    parse_article_set(xml)?
        .articles
        .into_iter()
        .find(|a| a.pmid() == Some(wanted))
        .ok_or_else(|| ParseError::ArticleNotFound {
            pmid: wanted.to_string(),
        })
}

/// Read an EFetch XML file from disk and parse all of its articles
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn parse_articles_from_file(path: impl AsRef<Path>) -> Result<Vec<PubmedArticle>> {
    let path = path.as_ref();
    let xml = fs::read_to_string(path).map_err(|e| ParseError::IoError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_articles_from_xml(&xml)
}
