//! Publication-type labels and the coarse publication kind derived from them

use std::fmt;

use serde::Serialize;

pub const JOURNAL_ARTICLE: &str = "Journal Article";
pub const LETTER: &str = "Letter";
pub const COMMENT: &str = "Comment";
pub const NEWS: &str = "News";
pub const NEWSPAPER_ARTICLE: &str = "Newspaper Article";

/// Case-insensitive exact comparison of a `PublicationType` value with a label
pub fn matches_label(publication_type: &str, label: &str) -> bool {
    publication_type.trim().to_uppercase() == label.trim().to_uppercase()
}

/// Kind of publication, as used when typing a record in an ontology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationKind {
    /// Journal Article or Letter
    JournalArticle,
    JournalComment,
    JournalNews,
    NewspaperArticle,
}

impl PublicationKind {
    /// Classify a list of `PublicationType` values
    ///
    /// Checked in order: Journal Article or Letter, Comment, News, Newspaper
    /// Article. A record typed both "Comment" and "Letter" is therefore a
    /// journal article.
    pub fn classify(publication_types: &[&str]) -> Option<Self> {
        let has = |label: &str| publication_types.iter().any(|t| matches_label(t, label));

        if has(JOURNAL_ARTICLE) || has(LETTER) {
            Some(Self::JournalArticle)
        } else if has(COMMENT) {
            Some(Self::JournalComment)
        } else if has(NEWS) {
            Some(Self::JournalNews)
        } else if has(NEWSPAPER_ARTICLE) {
            Some(Self::NewspaperArticle)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::JournalArticle => "Journal Article",
            Self::JournalComment => "Journal Comment",
            Self::JournalNews => "Journal News",
            Self::NewspaperArticle => "Newspaper Article",
        }
    }
}

impl fmt::Display for PublicationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
