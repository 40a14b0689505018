//! The publication-metadata interface consumed by display and indexing code

/// Plain-string view of a bibliographic record
///
/// Implementors only answer field lookups; composite strings such as
/// [`journal_publication_info`](Self::journal_publication_info) are built
/// from those lookups here.
pub trait PublicationMetadata {
    /// Identifier assigned by the consuming system, if any
    fn id(&self) -> Option<&str>;

    /// Identifier of the record in its source database
    fn authoritative_id(&self) -> Option<&str>;

    /// Name of the source database, as used by the E-utilities
    fn authoritative_source(&self) -> &str;

    fn title(&self) -> Option<&str>;

    fn doi(&self) -> Option<&str>;

    fn journal_name(&self) -> Option<&str>;

    fn volume(&self) -> Option<&str>;

    fn issue(&self) -> Option<&str>;

    /// Human-readable publication date, or a placeholder when unknown
    fn publication_date_string(&self) -> String;

    /// Short author line, or a placeholder when there are no authors
    fn author_names_string(&self) -> String;

    /// `"{journal}. {date};Vol {volume} Issue {issue}"`
    ///
    /// The volume and issue segments are left out when empty; a missing
    /// journal name renders as an empty string.
    fn journal_publication_info(&self) -> String {
        let mut info = format!(
            "{}. {};",
            self.journal_name().unwrap_or_default(),
            self.publication_date_string()
        );
        if let Some(volume) = self.volume().filter(|v| !v.is_empty()) {
            info.push_str("Vol ");
            info.push_str(volume);
        }
        if let Some(issue) = self.issue().filter(|i| !i.is_empty()) {
            info.push_str(" Issue ");
            info.push_str(issue);
        }
        info
    }
}
