//! Serde helpers for PubMed attribute encodings

use serde::{Deserialize, Deserializer};
use std::result;

/// Deserialize a `Y`/`N` attribute into a boolean
///
/// PubMed marks flags such as `MajorTopicYN`, `ValidYN` and `CompleteYN`
/// with the literal strings `Y` and `N`. Only `Y` (case-insensitive) is
/// `true`. Pair with `#[serde(default)]` or `#[serde(default = "yes")]` so
/// that an absent attribute takes the DTD default.
pub(super) fn deserialize_bool_yn<'de, D>(deserializer: D) -> result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let flag: Option<String> = Option::deserialize(deserializer)?;
    Ok(flag.is_some_and(|f| f.trim().eq_ignore_ascii_case("Y")))
}

/// DTD default for `ValidYN` and `CompleteYN`
pub(super) fn yes() -> bool {
    true
}
