//! Publication metadata accessors over one parsed PubMed citation

use pubmed_parser::PubmedArticle;
use pubmed_parser::pubmed::{Article, Journal, JournalIssue, MedlineCitation, MeshHeading, PubDate};
use tracing::{debug, trace};

use crate::author::PubmedAuthor;
use crate::classification::{
    COMMENT, JOURNAL_ARTICLE, LETTER, NEWS, NEWSPAPER_ARTICLE, PublicationKind, matches_label,
};
use crate::date;
use crate::mesh::MeshTerm;
use crate::metadata::PublicationMetadata;
use crate::non_empty;

/// Author line for a citation without authors
pub const NO_AUTHORS_LISTED: &str = "No Authors Listed";

/// Date string for a citation without a `<PubDate>`
pub const NO_PUB_DATE_AVAILABLE: &str = "no pub date available";

/// Read-only metadata view of a [`PubmedArticle`]
///
/// Every accessor walks the citation from the root and stops at the first
/// missing element, returning `None` (or an empty list) instead of failing.
/// Text values are trimmed and an empty element counts as missing.
#[derive(Debug, Clone)]
pub struct PubmedPublication<'a> {
    article: &'a PubmedArticle,
    id: Option<String>,
}

impl<'a> PubmedPublication<'a> {
    /// Database name reported by [`authoritative_source`](Self::authoritative_source)
    pub const SOURCE: &'static str = "pubmed";

    pub fn new(article: &'a PubmedArticle) -> Self {
        Self { article, id: None }
    }

    /// Attach an identifier assigned by the consuming system
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The underlying citation record
    pub fn record(&self) -> &'a PubmedArticle {
        self.article
    }

    fn citation(&self) -> Option<&'a MedlineCitation> {
        self.article.medline_citation.as_ref()
    }

    fn journal_article(&self) -> Option<&'a Article> {
        self.citation()?.article.as_ref()
    }

    fn journal(&self) -> Option<&'a Journal> {
        self.journal_article()?.journal.as_ref()
    }

    fn journal_issue(&self) -> Option<&'a JournalIssue> {
        self.journal()?.journal_issue.as_ref()
    }

    // --- identifiers ---

    /// The PMID
    pub fn authoritative_id(&self) -> Option<&'a str> {
        non_empty(self.article.pmid())
    }

    pub fn authoritative_source(&self) -> &'static str {
        Self::SOURCE
    }

    /// Value of the first `<ArticleId>` whose `IdType` equals `kind`
    ///
    /// The comparison is exact. An `ArticleId` without an `IdType` has the
    /// DTD default type `pubmed`.
    pub fn article_id(&self, kind: &str) -> Option<&'a str> {
        self.article
            .pubmed_data
            .as_ref()?
            .article_id_list
            .as_ref()?
            .article_ids
            .iter()
            .find(|id| id.id_type.as_deref().unwrap_or("pubmed") == kind)
            .and_then(|id| non_empty(Some(id.value.as_str())))
    }

    /// DOI from the article id list, else from a valid `<ELocationID EIdType="doi">`
    pub fn doi(&self) -> Option<&'a str> {
        self.article_id("doi").or_else(|| {
            self.journal_article()?
                .elocation_ids
                .iter()
                .find(|e| e.valid && e.eid_type.as_deref() == Some("doi"))
                .and_then(|e| non_empty(Some(e.value.as_str())))
        })
    }

    /// PubMed Central id, with its `PMC` prefix as PubMed writes it
    pub fn pmc(&self) -> Option<&'a str> {
        self.article_id("pmc")
    }

    // --- article and journal ---

    pub fn title(&self) -> Option<&'a str> {
        non_empty(self.journal_article()?.article_title.as_deref())
    }

    pub fn journal_name(&self) -> Option<&'a str> {
        non_empty(self.journal()?.title.as_deref())
    }

    /// ISO abbreviation of the journal title (e.g., "N Engl J Med")
    pub fn iso_abbreviation(&self) -> Option<&'a str> {
        non_empty(self.journal()?.iso_abbreviation.as_deref())
    }

    pub fn issn(&self) -> Option<&'a str> {
        non_empty(self.journal()?.issn.as_ref().map(|i| i.value.as_str()))
    }

    pub fn volume(&self) -> Option<&'a str> {
        non_empty(self.journal_issue()?.volume.as_deref())
    }

    pub fn issue(&self) -> Option<&'a str> {
        non_empty(self.journal_issue()?.issue.as_deref())
    }

    /// `MedlinePgn`, else `StartPage-EndPage`, else `StartPage`
    pub fn pagination(&self) -> Option<String> {
        let pagination = self.journal_article()?.pagination.as_ref()?;
        if let Some(pages) = non_empty(pagination.medline_pgn.as_deref()) {
            return Some(pages.to_string());
        }
        let start = non_empty(pagination.start_page.as_deref())?;
        Some(match non_empty(pagination.end_page.as_deref()) {
            Some(end) => format!("{start}-{end}"),
            None => start.to_string(),
        })
    }

    /// Language codes (e.g., "eng") in document order
    pub fn languages(&self) -> Vec<&'a str> {
        self.journal_article()
            .map(|a| {
                a.languages
                    .iter()
                    .filter_map(|l| non_empty(Some(l.as_str())))
                    .collect()
            })
            .unwrap_or_default()
    }

    // --- authors ---

    pub fn authors(&self) -> Vec<PubmedAuthor<'a>> {
        self.journal_article()
            .and_then(|a| a.author_list.as_ref())
            .map(|list| list.authors.iter().map(PubmedAuthor::new).collect())
            .unwrap_or_default()
    }

    /// `Surname Initials` per author, joined by `", "`
    ///
    /// Authors with no usable name are skipped; [`NO_AUTHORS_LISTED`] when
    /// nothing remains.
    pub fn author_names_string(&self) -> String {
        let names: Vec<String> = self
            .authors()
            .iter()
            .filter_map(PubmedAuthor::short_name)
            .collect();
        if names.is_empty() {
            NO_AUTHORS_LISTED.to_string()
        } else {
            names.join(", ")
        }
    }

    // --- publication date ---

    pub fn publication_date(&self) -> Option<&'a PubDate> {
        self.journal_issue()?.pub_date.as_ref()
    }

    /// See [`date::format_pub_date`]; [`NO_PUB_DATE_AVAILABLE`] without a `<PubDate>`
    pub fn publication_date_string(&self) -> String {
        self.publication_date()
            .map_or_else(|| NO_PUB_DATE_AVAILABLE.to_string(), date::format_pub_date)
    }

    pub fn publication_year(&self) -> Option<i32> {
        self.publication_date().and_then(date::year)
    }

    pub fn publication_month(&self) -> Option<u32> {
        self.publication_date().and_then(date::month)
    }

    pub fn publication_day(&self) -> Option<u32> {
        self.publication_date().and_then(date::day)
    }

    /// `YYYY-MM-DD`, see [`date::xsd_date`]
    pub fn publication_xsd_date(&self) -> Option<String> {
        self.publication_date().and_then(date::xsd_date)
    }

    // --- publication types ---

    /// `PublicationType` values in document order
    pub fn publication_types(&self) -> Vec<&'a str> {
        self.journal_article()
            .and_then(|a| a.publication_type_list.as_ref())
            .map(|list| {
                list.publication_types
                    .iter()
                    .filter_map(|t| non_empty(Some(t.value.as_str())))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Case-insensitive exact match of `label` against the publication types
    pub fn is_of_publication_type(&self, label: &str) -> bool {
        self.publication_types()
            .iter()
            .any(|t| matches_label(t, label))
    }

    pub fn is_journal_article(&self) -> bool {
        self.is_of_publication_type(JOURNAL_ARTICLE)
    }

    pub fn is_letter(&self) -> bool {
        self.is_of_publication_type(LETTER)
    }

    pub fn is_journal_comment(&self) -> bool {
        self.is_of_publication_type(COMMENT)
    }

    pub fn is_journal_news(&self) -> bool {
        self.is_of_publication_type(NEWS)
    }

    pub fn is_newspaper_article(&self) -> bool {
        self.is_of_publication_type(NEWSPAPER_ARTICLE)
    }

    pub fn ontology_type(&self) -> Option<PublicationKind> {
        PublicationKind::classify(&self.publication_types())
    }

    // --- MeSH ---

    fn mesh_headings(&self) -> &'a [MeshHeading] {
        self.citation()
            .and_then(|c| c.mesh_heading_list.as_ref())
            .map(|list| list.mesh_headings.as_slice())
            .unwrap_or_default()
    }

    fn iter_mesh_terms(&self) -> impl Iterator<Item = MeshTerm> + 'a {
        self.mesh_headings().iter().filter_map(MeshTerm::from_heading)
    }

    /// MeSH headings in document order; headings without a descriptor are skipped
    pub fn mesh_terms(&self) -> Vec<MeshTerm> {
        let headings = self.mesh_headings();
        if headings.is_empty() {
            return Vec::new();
        }

        let terms: Vec<MeshTerm> = self
            .iter_mesh_terms()
            .inspect(|term| {
                trace!(
                    descriptor = %term.descriptor_name,
                    qualifiers = term.qualifiers.len(),
                    major_topic = term.is_major_topic(),
                    "MeSH heading"
                );
            })
            .collect();

        debug!(
            pmid = self.authoritative_id().unwrap_or_default(),
            mesh_terms = terms.len(),
            skipped = headings.len() - terms.len(),
            "Extracted MeSH terms"
        );
        terms
    }

    /// Flattened `(descriptor, qualifier)` pairs over all headings
    pub fn descriptor_qualifier_pairs(&self) -> Vec<(String, Option<String>)> {
        self.iter_mesh_terms()
            .flat_map(|term| {
                term.pairs()
                    .into_iter()
                    .map(|(d, q)| (d.to_string(), q.map(str::to_string)))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Descriptor names of headings that are a major topic of the article
    pub fn major_mesh_terms(&self) -> Vec<String> {
        self.iter_mesh_terms()
            .filter(MeshTerm::is_major_topic)
            .map(|term| term.descriptor_name)
            .collect()
    }

    /// Whether any heading's descriptor equals `term`, ignoring case
    pub fn has_mesh_term(&self, term: &str) -> bool {
        let term = term.trim();
        self.iter_mesh_terms()
            .any(|t| t.descriptor_name.eq_ignore_ascii_case(term))
    }
}

impl PublicationMetadata for PubmedPublication<'_> {
    fn id(&self) -> Option<&str> {
        PubmedPublication::id(self)
    }

    fn authoritative_id(&self) -> Option<&str> {
        PubmedPublication::authoritative_id(self)
    }

    fn authoritative_source(&self) -> &str {
        PubmedPublication::authoritative_source(self)
    }

    fn title(&self) -> Option<&str> {
        PubmedPublication::title(self)
    }

    fn doi(&self) -> Option<&str> {
        PubmedPublication::doi(self)
    }

    fn journal_name(&self) -> Option<&str> {
        PubmedPublication::journal_name(self)
    }

    fn volume(&self) -> Option<&str> {
        PubmedPublication::volume(self)
    }

    fn issue(&self) -> Option<&str> {
        PubmedPublication::issue(self)
    }

    fn publication_date_string(&self) -> String {
        PubmedPublication::publication_date_string(self)
    }

    fn author_names_string(&self) -> String {
        PubmedPublication::author_names_string(self)
    }
}
