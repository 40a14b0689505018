//! MeSH descriptor and qualifier terms taken from a citation's heading list

use pubmed_parser::pubmed::MeshHeading;
use serde::Serialize;

use crate::non_empty;

/// Medical Subject Heading (MeSH) qualifier/subheading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeshQualifier {
    /// Qualifier name (e.g., "drug therapy", "genetics")
    pub qualifier_name: String,
    /// Unique identifier for the qualifier
    pub qualifier_ui: Option<String>,
    /// Whether this qualifier is a major topic
    pub major_topic: bool,
}

/// One MeSH heading: a descriptor with its qualifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeshTerm {
    /// Descriptor name (e.g., "Diabetes Mellitus, Type 2")
    pub descriptor_name: String,
    /// Unique identifier for the descriptor
    pub descriptor_ui: Option<String>,
    /// Whether the descriptor itself is a major topic of the article
    pub major_topic: bool,
    pub qualifiers: Vec<MeshQualifier>,
}

impl MeshTerm {
    /// `None` for a heading without a usable descriptor
    pub(crate) fn from_heading(heading: &MeshHeading) -> Option<Self> {
        let descriptor = heading.descriptor_name.as_ref()?;
        let descriptor_name = non_empty(Some(descriptor.value.as_str()))?;

        let qualifiers = heading
            .qualifier_names
            .iter()
            .filter_map(|q| {
                non_empty(Some(q.value.as_str())).map(|name| MeshQualifier {
                    qualifier_name: name.to_string(),
                    qualifier_ui: q.ui.clone(),
                    major_topic: q.major_topic,
                })
            })
            .collect();

        Some(Self {
            descriptor_name: descriptor_name.to_string(),
            descriptor_ui: descriptor.ui.clone(),
            major_topic: descriptor.major_topic,
            qualifiers,
        })
    }

    /// Major topic on the descriptor or on any of its qualifiers
    pub fn is_major_topic(&self) -> bool {
        self.major_topic || self.qualifiers.iter().any(|q| q.major_topic)
    }

    /// `(descriptor, qualifier)` pairs; a bare descriptor yields `(descriptor, None)`
    pub fn pairs(&self) -> Vec<(&str, Option<&str>)> {
        if self.qualifiers.is_empty() {
            return vec![(self.descriptor_name.as_str(), None)];
        }
        self.qualifiers
            .iter()
            .map(|q| (self.descriptor_name.as_str(), Some(q.qualifier_name.as_str())))
            .collect()
    }
}
