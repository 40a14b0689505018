//! Fixture-based parsing tests for PubMed EFetch XML

#[path = "../common/mod.rs"]
mod common;

use common::{get_pubmed_xml_test_case, get_pubmed_xml_test_cases};
use pubmed_parser::{ParseError, parse_article_from_xml, parse_articles_from_file};
use rstest::rstest;
use tracing::info;

#[test]
fn test_every_fixture_parses_with_its_pmid() {
    let test_cases = get_pubmed_xml_test_cases();
    assert!(!test_cases.is_empty(), "fixture directory should not be empty");

    for test_case in test_cases {
        info!(filename = test_case.filename(), "Parsing fixture");
        let xml = test_case.read_xml_content_or_panic();
        let article = parse_article_from_xml(&xml, &test_case.pmid)
            .unwrap_or_else(|e| panic!("{} failed to parse: {e}", test_case.filename()));
        assert_eq!(article.pmid(), Some(test_case.pmid.as_str()));
    }
}

#[test]
fn test_full_citation_fixture() {
    let test_case = get_pubmed_xml_test_case("31978945").expect("fixture present");
    let article = parse_articles_from_file(&test_case.file_path)
        .unwrap()
        .into_iter()
        .next()
        .unwrap();

    let citation = article.medline_citation.as_ref().unwrap();
    let journal_article = citation.article.as_ref().unwrap();
    assert_eq!(journal_article.pub_model.as_deref(), Some("Print-Electronic"));

    let authors = &journal_article.author_list.as_ref().unwrap().authors;
    assert_eq!(authors.len(), 4);
    assert_eq!(authors[2].identifiers[0].source.as_deref(), Some("ORCID"));
    assert_eq!(
        authors[3].collective_name.as_deref(),
        Some("China Novel Coronavirus Investigating and Research Team")
    );
    assert!(authors[3].last_name.is_none());

    let headings = &citation.mesh_heading_list.as_ref().unwrap().mesh_headings;
    assert_eq!(headings.len(), 3);
    let first = &headings[0];
    assert_eq!(first.descriptor_name.as_ref().unwrap().value, "Betacoronavirus");
    assert_eq!(first.qualifier_names.len(), 2);
    assert_eq!(first.qualifier_names[1].value, "isolation & purification");
    assert!(first.qualifier_names[1].major_topic);
    assert!(headings[1].descriptor_name.as_ref().unwrap().major_topic);
    assert!(headings[2].qualifier_names.is_empty());

    let types = &journal_article
        .publication_type_list
        .as_ref()
        .unwrap()
        .publication_types;
    assert_eq!(types[0].value, "Journal Article");
    assert_eq!(types[0].ui.as_deref(), Some("D016428"));
}

#[test]
fn test_medline_date_fixture() {
    let xml = get_pubmed_xml_test_case("10000001")
        .unwrap()
        .read_xml_content_or_panic();
    let article = parse_article_from_xml(&xml, "10000001").unwrap();
    let journal_article = article.medline_citation.unwrap().article.unwrap();

    let pub_date = journal_article
        .journal
        .unwrap()
        .journal_issue
        .unwrap()
        .pub_date
        .unwrap();
    assert_eq!(pub_date.medline_date.as_deref(), Some("1998 Dec-1999 Jan"));
    assert!(pub_date.year.is_none());

    let author_list = journal_article.author_list.unwrap();
    assert!(!author_list.complete);
    assert_eq!(author_list.authors[0].suffix.as_deref(), Some("Jr"));
    assert_eq!(journal_article.elocation_ids[0].eid_type.as_deref(), Some("doi"));
}

#[rstest]
#[case("31978945", true, true)]
#[case("10000001", true, true)]
#[case("20000002", false, false)]
fn test_optional_sections(#[case] pmid: &str, #[case] has_authors: bool, #[case] has_ids: bool) {
    let xml = get_pubmed_xml_test_case(pmid)
        .unwrap()
        .read_xml_content_or_panic();
    let article = parse_article_from_xml(&xml, pmid).unwrap();

    let author_list = article
        .medline_citation
        .as_ref()
        .and_then(|c| c.article.as_ref())
        .and_then(|a| a.author_list.as_ref());
    assert_eq!(author_list.is_some(), has_authors);
    assert_eq!(article.pubmed_data.is_some(), has_ids);
}

#[test]
fn test_wrong_pmid_is_reported() {
    let xml = get_pubmed_xml_test_case("20000002")
        .unwrap()
        .read_xml_content_or_panic();
    let err = parse_article_from_xml(&xml, "31978945").unwrap_err();
    assert!(matches!(err, ParseError::ArticleNotFound { .. }));
    assert_eq!(err.to_string(), "Article not found: PMID 31978945");
}
