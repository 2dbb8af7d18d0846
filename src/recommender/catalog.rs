use std::fmt;
use std::io;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single destination record.
///
/// Only the fields consumed by the matching core are modeled; `eco_score`
/// and `budget_level` ride along so callers can display them without a
/// second lookup. Unknown fields in the input are ignored, and every
/// optional field defaults to empty rather than failing the load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    /// Category tags, e.g. "adventure", "nature". Serialized as `type`.
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient_string_seq"
    )]
    pub kinds: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sustainability_features: Vec<String>,
    #[serde(default)]
    pub eco_score: f64,
    #[serde(default)]
    pub budget_level: String,
}

/// Accept a sequence of strings, and treat anything else (null, a bare
/// string, a number...) as an empty tag list instead of a load failure.
fn lenient_string_seq<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct SeqOrEmpty;

    impl<'de> Visitor<'de> for SeqOrEmpty {
        type Value = Vec<String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a sequence of strings or any other value")
        }

        fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut kinds = Vec::new();
            while let Some(kind) = seq.next_element::<String>()? {
                kinds.push(kind);
            }
            Ok(kinds)
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: de::MapAccess<'de>,
        {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(Vec::new())
        }

        fn visit_str<E: de::Error>(self, _: &str) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_i64<E: de::Error>(self, _: i64) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_u64<E: de::Error>(self, _: u64) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_f64<E: de::Error>(self, _: f64) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(SeqOrEmpty)
}

/// Destination catalog: an insertion-ordered map from destination id to
/// record.
///
/// Iteration order is the order entries were inserted (for a JSON source,
/// the order they appear in the file). That order is a contract, not an
/// accident: it decides how equal-similarity results tie-break and the
/// order category suggestions come back in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: IndexMap<String, Destination>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a destination under `id`, replacing any previous entry
    pub fn insert(&mut self, id: impl Into<String>, destination: Destination) -> &mut Self {
        self.entries.insert(id.into(), destination);
        self
    }

    /// Look up a destination by id
    #[inline]
    pub fn get(&self, id: &str) -> Option<&Destination> {
        self.entries.get(id)
    }

    /// Look up the entry at a catalog position
    #[inline]
    pub fn get_index(&self, position: usize) -> Option<(&String, &Destination)> {
        self.entries.get_index(position)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(id, destination)` pairs in catalog order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Destination)> {
        self.entries.iter()
    }

    /// Parse a catalog from a JSON object of `id -> destination`.
    ///
    /// Anything that is not an object at the top level is a malformed
    /// catalog and fails here, once, instead of per query.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse a catalog from a JSON reader
    pub fn from_json_reader<R: io::Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// The bundled sustainable-tourism sample catalog (ten destinations).
    /// Used by the CLI when no catalog file is given, and by the test and
    /// bench suites as a realistic fixture.
    pub fn sample() -> Self {
        Self::from_json_str(include_str!("../../data/destinations.json"))
            .expect("bundled sample catalog is valid JSON")
    }
}

impl FromIterator<(String, Destination)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Destination)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let catalog = Catalog::from_json_str(r#"{"bare": {"name": "Bare Rock"}}"#).unwrap();
        let dest = catalog.get("bare").unwrap();
        assert_eq!(dest.name, "Bare Rock");
        assert!(dest.kinds.is_empty());
        assert!(dest.description.is_empty());
        assert!(dest.sustainability_features.is_empty());
        assert_eq!(dest.eco_score, 0.0);
    }

    #[test]
    fn non_sequence_tags_are_treated_as_empty() {
        let catalog = Catalog::from_json_str(
            r#"{
                "a": {"name": "A", "type": "adventure"},
                "b": {"name": "B", "type": 7},
                "c": {"name": "C", "type": null},
                "d": {"name": "D", "type": ["beach", "nature"]}
            }"#,
        )
        .unwrap();
        assert!(catalog.get("a").unwrap().kinds.is_empty());
        assert!(catalog.get("b").unwrap().kinds.is_empty());
        assert!(catalog.get("c").unwrap().kinds.is_empty());
        assert_eq!(catalog.get("d").unwrap().kinds, vec!["beach", "nature"]);
    }

    #[test]
    fn top_level_non_object_is_malformed() {
        assert!(Catalog::from_json_str("[1, 2, 3]").is_err());
        assert!(Catalog::from_json_str("\"nope\"").is_err());
        assert!(Catalog::from_json_str("not json at all").is_err());
    }

    #[test]
    fn iteration_preserves_file_order() {
        let catalog = Catalog::from_json_str(
            r#"{"z": {"name": "Z"}, "a": {"name": "A"}, "m": {"name": "M"}}"#,
        )
        .unwrap();
        let ids: Vec<&str> = catalog.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[test]
    fn sample_catalog_loads() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 10);
        let manali = catalog.get("manali").unwrap();
        assert!(manali.kinds.iter().any(|kind| kind == "adventure"));
        assert_eq!(manali.eco_score, 8.0);
    }
}
