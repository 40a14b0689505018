//! Metadata extraction over the EFetch XML fixtures in `test_data/pubmed_xml`

use std::fs;
use std::path::{Path, PathBuf};

use pubmed_parser::{PubmedArticle, parse_article_from_xml};
use pubmed_publication::{
    NO_AUTHORS_LISTED, NO_PUB_DATE_AVAILABLE, PublicationKind, PublicationMetadata,
    PubmedPublication,
};
use rstest::rstest;

fn fixture_path(pmid: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("crate lives inside the workspace")
        .join("test_data/pubmed_xml")
        .join(format!("{pmid}.xml"))
}

fn load(pmid: &str) -> PubmedArticle {
    let path = fixture_path(pmid);
    let xml = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to read XML file: {path:?}"));
    parse_article_from_xml(&xml, pmid)
        .unwrap_or_else(|e| panic!("Failed to parse {pmid}: {e}"))
}

#[test]
fn test_full_record() {
    let record = load("31978945");
    let publication = PubmedPublication::new(&record);

    assert_eq!(publication.authoritative_id(), Some("31978945"));
    assert_eq!(
        publication.title(),
        Some("A Novel Coronavirus from Patients with Pneumonia in China, 2019.")
    );
    assert_eq!(publication.doi(), Some("10.1056/NEJMoa2001017"));
    assert_eq!(publication.pmc(), Some("PMC7092803"));
    assert_eq!(publication.issn(), Some("1533-4406"));
    assert_eq!(publication.volume(), Some("382"));
    assert_eq!(publication.issue(), Some("8"));
    assert_eq!(publication.iso_abbreviation(), Some("N Engl J Med"));
    assert_eq!(publication.pagination().as_deref(), Some("727-733"));
    assert_eq!(publication.languages(), vec!["eng"]);
    assert_eq!(publication.publication_date_string(), "2020 Feb 20");
    assert_eq!(publication.publication_xsd_date().as_deref(), Some("2020-02-20"));
    assert_eq!(
        publication.journal_publication_info(),
        "The New England journal of medicine. 2020 Feb 20;Vol 382 Issue 8"
    );
}

#[test]
fn test_full_record_authors() {
    let record = load("31978945");
    let publication = PubmedPublication::new(&record);
    let authors = publication.authors();

    assert_eq!(authors.len(), 4);
    assert_eq!(authors[0].full_name(), "Zhu, Na (N)");
    assert_eq!(authors[0].affiliations().len(), 1);
    assert_eq!(authors[2].first_name(), Some("Wen"));
    assert_eq!(authors[2].middle_name(), Some("Jie"));
    assert_eq!(authors[2].orcid(), Some("0000-0002-1825-0097"));
    assert_eq!(
        authors[3].full_name(),
        "China Novel Coronavirus Investigating and Research Team"
    );
    assert_eq!(
        publication.author_names_string(),
        "Zhu N, Zhang D, Tan WJ, China Novel Coronavirus Investigating and Research Team"
    );
}

#[test]
fn test_full_record_mesh() {
    let record = load("31978945");
    let publication = PubmedPublication::new(&record);

    let terms = publication.mesh_terms();
    assert_eq!(terms.len(), 3);
    assert_eq!(terms[0].descriptor_ui.as_deref(), Some("D000073640"));
    assert_eq!(terms[0].qualifiers[1].qualifier_name, "isolation & purification");

    assert_eq!(
        publication.major_mesh_terms(),
        vec!["Betacoronavirus".to_string(), "Coronavirus Infections".to_string()]
    );
    assert_eq!(publication.descriptor_qualifier_pairs().len(), 4);
    assert!(publication.has_mesh_term("coronavirus infections"));
}

#[test]
fn test_medline_date_record() {
    let record = load("10000001");
    let publication = PubmedPublication::new(&record);

    assert_eq!(publication.publication_date_string(), "1998 Dec-1999 Jan");
    assert_eq!(publication.publication_year(), Some(1998));
    assert_eq!(publication.publication_month(), Some(12));
    assert!(publication.publication_day().is_none());
    assert_eq!(publication.doi(), Some("10.1016/S0140-6736(98)00001-1"));
    assert!(publication.pmc().is_none());
    assert!(publication.issue().is_none());
    assert_eq!(publication.pagination().as_deref(), Some("1950"));
    assert_eq!(publication.author_names_string(), "Smith J, Ana");
    assert_eq!(publication.authors()[0].suffix(), Some("Jr"));
    assert_eq!(
        publication.journal_publication_info(),
        "Lancet (London, England). 1998 Dec-1999 Jan;Vol 352"
    );
    assert!(publication.mesh_terms().is_empty());
}

#[test]
fn test_sparse_record() {
    let record = load("20000002");
    let publication = PubmedPublication::new(&record);

    assert_eq!(publication.author_names_string(), NO_AUTHORS_LISTED);
    assert_eq!(publication.publication_date_string(), NO_PUB_DATE_AVAILABLE);
    assert_eq!(
        publication.journal_publication_info(),
        "Sparse Reports. no pub date available;"
    );
    assert!(publication.doi().is_none());
    assert!(publication.issn().is_none());
    assert!(publication.ontology_type().is_none());
    assert!(publication.publication_xsd_date().is_none());
}

#[rstest]
#[case("31978945", Some(PublicationKind::JournalArticle), true, false, false)]
#[case("10000001", Some(PublicationKind::JournalArticle), false, true, true)]
#[case("20000002", None, false, false, false)]
fn test_publication_types(
    #[case] pmid: &str,
    #[case] kind: Option<PublicationKind>,
    #[case] journal_article: bool,
    #[case] letter: bool,
    #[case] comment: bool,
) {
    let record = load(pmid);
    let publication = PubmedPublication::new(&record);

    assert_eq!(publication.ontology_type(), kind);
    assert_eq!(publication.is_journal_article(), journal_article);
    assert_eq!(publication.is_letter(), letter);
    assert_eq!(publication.is_journal_comment(), comment);
    assert!(!publication.is_journal_news());
    assert!(!publication.is_newspaper_article());
}

#[rstest]
#[case("31978945")]
#[case("10000001")]
#[case("20000002")]
fn test_trait_object_view(#[case] pmid: &str) {
    let record = load(pmid);
    let publication = PubmedPublication::new(&record).with_id(format!("local-{pmid}"));
    let metadata: &dyn PublicationMetadata = &publication;

    assert_eq!(metadata.authoritative_source(), "pubmed");
    assert_eq!(metadata.authoritative_id(), Some(pmid));
    assert_eq!(metadata.id(), Some(format!("local-{pmid}").as_str()));
    assert_eq!(
        metadata.journal_publication_info(),
        publication.journal_publication_info()
    );
}

#[test]
fn test_summary_serializes() {
    let record = load("31978945");
    let summary = PubmedPublication::new(&record).summary();
    let json = serde_json::to_value(&summary).expect("summary serializes");

    assert_eq!(json["doi"], "10.1056/NEJMoa2001017");
    assert_eq!(json["ontology_type"], "journal_article");
    assert_eq!(json["authors"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["mesh_terms"][1]["major_topic"], true);
}
