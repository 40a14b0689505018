//! Citation record types
//!
//! One struct per PubMed DTD element that the metadata layer reads. Elements
//! the DTD marks optional, and several it marks required but which real
//! EFetch output still omits, are `Option` here; repeated elements are
//! defaulted `Vec`s. Unknown elements and attributes are ignored.

use serde::Deserialize;

use super::deserializers::{deserialize_bool_yn, yes};

/// Root `<PubmedArticleSet>` element of an EFetch response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename = "PubmedArticleSet")]
pub struct PubmedArticleSet {
    #[serde(rename = "PubmedArticle", default)]
    pub articles: Vec<PubmedArticle>,
}

/// One `<PubmedArticle>`: the citation plus PubMed processing data
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PubmedArticle {
    #[serde(rename = "MedlineCitation")]
    pub medline_citation: Option<MedlineCitation>,
    #[serde(rename = "PubmedData")]
    pub pubmed_data: Option<PubmedData>,
}

impl PubmedArticle {
    /// PMID of the citation, if the record carries one
    pub fn pmid(&self) -> Option<&str> {
        self.medline_citation
            .as_ref()?
            .pmid
            .as_ref()
            .map(|p| p.value.trim())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MedlineCitation {
    #[serde(rename = "@Status")]
    pub status: Option<String>,
    #[serde(rename = "@Owner")]
    pub owner: Option<String>,
    #[serde(rename = "PMID")]
    pub pmid: Option<Pmid>,
    #[serde(rename = "Article")]
    pub article: Option<Article>,
    #[serde(rename = "MeshHeadingList")]
    pub mesh_heading_list: Option<MeshHeadingList>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Pmid {
    #[serde(rename = "$text", default)]
    pub value: String,
    #[serde(rename = "@Version")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Article {
    #[serde(rename = "@PubModel")]
    pub pub_model: Option<String>,
    #[serde(rename = "Journal")]
    pub journal: Option<Journal>,
    #[serde(rename = "ArticleTitle")]
    pub article_title: Option<String>,
    #[serde(rename = "Pagination")]
    pub pagination: Option<Pagination>,
    #[serde(rename = "ELocationID", default)]
    pub elocation_ids: Vec<ELocationId>,
    #[serde(rename = "AuthorList")]
    pub author_list: Option<AuthorList>,
    #[serde(rename = "Language", default)]
    pub languages: Vec<String>,
    #[serde(rename = "PublicationTypeList")]
    pub publication_type_list: Option<PublicationTypeList>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Journal {
    #[serde(rename = "ISSN")]
    pub issn: Option<Issn>,
    #[serde(rename = "JournalIssue")]
    pub journal_issue: Option<JournalIssue>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "ISOAbbreviation")]
    pub iso_abbreviation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Issn {
    #[serde(rename = "$text", default)]
    pub value: String,
    /// `Print` or `Electronic`
    #[serde(rename = "@IssnType")]
    pub issn_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JournalIssue {
    #[serde(rename = "@CitedMedium")]
    pub cited_medium: Option<String>,
    #[serde(rename = "Volume")]
    pub volume: Option<String>,
    #[serde(rename = "Issue")]
    pub issue: Option<String>,
    #[serde(rename = "PubDate")]
    pub pub_date: Option<PubDate>,
}

/// `<PubDate>`: either structured Year/Month/Day (or Season) parts, or a
/// free-text `MedlineDate` such as `1998 Dec-1999 Jan`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PubDate {
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Month")]
    pub month: Option<String>,
    #[serde(rename = "Day")]
    pub day: Option<String>,
    #[serde(rename = "Season")]
    pub season: Option<String>,
    #[serde(rename = "MedlineDate")]
    pub medline_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Pagination {
    #[serde(rename = "StartPage")]
    pub start_page: Option<String>,
    #[serde(rename = "EndPage")]
    pub end_page: Option<String>,
    #[serde(rename = "MedlinePgn")]
    pub medline_pgn: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ELocationId {
    #[serde(rename = "$text", default)]
    pub value: String,
    /// `doi` or `pii`
    #[serde(rename = "@EIdType")]
    pub eid_type: Option<String>,
    #[serde(rename = "@ValidYN", default = "yes", deserialize_with = "deserialize_bool_yn")]
    pub valid: bool,
}

impl Default for ELocationId {
    fn default() -> Self {
        Self {
            value: String::new(),
            eid_type: None,
            valid: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthorList {
    #[serde(rename = "@CompleteYN", default = "yes", deserialize_with = "deserialize_bool_yn")]
    pub complete: bool,
    #[serde(rename = "Author", default)]
    pub authors: Vec<Author>,
}

impl Default for AuthorList {
    fn default() -> Self {
        Self {
            complete: true,
            authors: Vec::new(),
        }
    }
}

/// `<Author>`: a personal name split into parts, or a `CollectiveName`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Author {
    #[serde(rename = "@ValidYN", default = "yes", deserialize_with = "deserialize_bool_yn")]
    pub valid: bool,
    #[serde(rename = "LastName")]
    pub last_name: Option<String>,
    #[serde(rename = "ForeName")]
    pub fore_name: Option<String>,
    #[serde(rename = "Initials")]
    pub initials: Option<String>,
    #[serde(rename = "Suffix")]
    pub suffix: Option<String>,
    #[serde(rename = "CollectiveName")]
    pub collective_name: Option<String>,
    #[serde(rename = "Identifier", default)]
    pub identifiers: Vec<Identifier>,
    #[serde(rename = "AffiliationInfo", default)]
    pub affiliation_info: Vec<AffiliationInfo>,
}

impl Default for Author {
    fn default() -> Self {
        Self {
            valid: true,
            last_name: None,
            fore_name: None,
            initials: None,
            suffix: None,
            collective_name: None,
            identifiers: Vec::new(),
            affiliation_info: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Identifier {
    #[serde(rename = "$text", default)]
    pub value: String,
    #[serde(rename = "@Source")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AffiliationInfo {
    #[serde(rename = "Affiliation")]
    pub affiliation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PublicationTypeList {
    #[serde(rename = "PublicationType", default)]
    pub publication_types: Vec<PublicationType>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PublicationType {
    #[serde(rename = "$text", default)]
    pub value: String,
    #[serde(rename = "@UI")]
    pub ui: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MeshHeadingList {
    #[serde(rename = "MeshHeading", default)]
    pub mesh_headings: Vec<MeshHeading>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MeshHeading {
    #[serde(rename = "DescriptorName")]
    pub descriptor_name: Option<DescriptorName>,
    #[serde(rename = "QualifierName", default)]
    pub qualifier_names: Vec<QualifierName>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DescriptorName {
    #[serde(rename = "$text", default)]
    pub value: String,
    #[serde(rename = "@UI")]
    pub ui: Option<String>,
    #[serde(rename = "@MajorTopicYN", default, deserialize_with = "deserialize_bool_yn")]
    pub major_topic: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QualifierName {
    #[serde(rename = "$text", default)]
    pub value: String,
    #[serde(rename = "@UI")]
    pub ui: Option<String>,
    #[serde(rename = "@MajorTopicYN", default, deserialize_with = "deserialize_bool_yn")]
    pub major_topic: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PubmedData {
    #[serde(rename = "PublicationStatus")]
    pub publication_status: Option<String>,
    #[serde(rename = "ArticleIdList")]
    pub article_id_list: Option<ArticleIdList>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ArticleIdList {
    #[serde(rename = "ArticleId", default)]
    pub article_ids: Vec<ArticleId>,
}

/// `<ArticleId IdType="doi">10.1000/xyz</ArticleId>`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ArticleId {
    #[serde(rename = "$text", default)]
    pub value: String,
    /// `pubmed`, `doi`, `pmc`, `pii`, `mid`, ...
    #[serde(rename = "@IdType")]
    pub id_type: Option<String>,
}
