//! Fixture helpers for PubMed XML parsing tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// One EFetch XML fixture, named after the PMID it contains
#[derive(Debug, Clone)]
pub struct PubMedXmlTestCase {
    pub file_path: PathBuf,
    pub pmid: String,
}

impl PubMedXmlTestCase {
    pub fn new(file_path: PathBuf) -> Self {
        let pmid = file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();
        Self { file_path, pmid }
    }

    pub fn filename(&self) -> &str {
        self.file_path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown.xml")
    }

    pub fn read_xml_content_or_panic(&self) -> String {
        fs::read_to_string(&self.file_path)
            .unwrap_or_else(|_| panic!("Failed to read XML file: {:?}", self.file_path))
    }
}

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("crate lives inside the workspace")
        .join("test_data/pubmed_xml")
}

/// All PubMed XML fixtures, sorted by file name
pub fn get_pubmed_xml_test_cases() -> Vec<PubMedXmlTestCase> {
    let dir = fixture_dir();
    let mut xml_files: Vec<PathBuf> = fs::read_dir(&dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|entry| entry.path())
                .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("xml"))
                .collect()
        })
        .unwrap_or_default();
    xml_files.sort();
    xml_files.into_iter().map(PubMedXmlTestCase::new).collect()
}

/// The fixture for a specific PMID
pub fn get_pubmed_xml_test_case(pmid: &str) -> Option<PubMedXmlTestCase> {
    let path = fixture_dir().join(format!("{pmid}.xml"));
    path.exists().then(|| PubMedXmlTestCase::new(path))
}
