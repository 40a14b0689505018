//! Owned, serializable snapshot of a publication

use serde::Serialize;

use crate::article::PubmedPublication;
use crate::author::PubmedAuthor;
use crate::classification::PublicationKind;
use crate::mesh::MeshTerm;
use crate::metadata::PublicationMetadata;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorSummary {
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orcid: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affiliations: Vec<String>,
}

impl From<PubmedAuthor<'_>> for AuthorSummary {
    fn from(author: PubmedAuthor<'_>) -> Self {
        let owned = |value: Option<&str>| value.map(str::to_string);
        Self {
            full_name: author.full_name(),
            first_name: owned(author.first_name()),
            middle_name: owned(author.middle_name()),
            surname: owned(author.surname()),
            initials: owned(author.initials()),
            suffix: owned(author.suffix()),
            orcid: owned(author.orcid()),
            affiliations: author
                .affiliations()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Every accessor of a [`PubmedPublication`], detached from the parsed record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicationSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub source: String,
    pub pmid: Option<String>,
    pub title: Option<String>,
    pub doi: Option<String>,
    pub pmc: Option<String>,
    pub issn: Option<String>,
    pub journal: Option<String>,
    pub iso_abbreviation: Option<String>,
    pub volume: Option<String>,
    pub issue: Option<String>,
    pub pagination: Option<String>,
    pub publication_date: String,
    pub publication_xsd_date: Option<String>,
    pub journal_publication_info: String,
    pub authors: Vec<AuthorSummary>,
    pub author_names: String,
    pub publication_types: Vec<String>,
    pub ontology_type: Option<PublicationKind>,
    pub mesh_terms: Vec<MeshTerm>,
    pub languages: Vec<String>,
}

impl PubmedPublication<'_> {
    pub fn summary(&self) -> PublicationSummary {
        let owned = |value: Option<&str>| value.map(str::to_string);
        let owned_all =
            |values: Vec<&str>| -> Vec<String> { values.into_iter().map(str::to_string).collect() };

        PublicationSummary {
            id: owned(self.id()),
            source: self.authoritative_source().to_string(),
            pmid: owned(self.authoritative_id()),
            title: owned(self.title()),
            doi: owned(self.doi()),
            pmc: owned(self.pmc()),
            issn: owned(self.issn()),
            journal: owned(self.journal_name()),
            iso_abbreviation: owned(self.iso_abbreviation()),
            volume: owned(self.volume()),
            issue: owned(self.issue()),
            pagination: self.pagination(),
            publication_date: self.publication_date_string(),
            publication_xsd_date: self.publication_xsd_date(),
            journal_publication_info: self.journal_publication_info(),
            authors: self.authors().into_iter().map(AuthorSummary::from).collect(),
            author_names: self.author_names_string(),
            publication_types: owned_all(self.publication_types()),
            ontology_type: self.ontology_type(),
            mesh_terms: self.mesh_terms(),
            languages: owned_all(self.languages()),
        }
    }
}
