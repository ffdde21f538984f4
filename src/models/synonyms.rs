//! Lithology synonym table
//!
//! Entries keep their insertion order, which is also the order
//! `canonical_name` searches in when surface forms overlap.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Canonical lithology name to alternative surface forms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Synonyms {
    entries: Vec<(String, Vec<String>)>,
}

impl Synonyms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    ///
    /// A new canonical name is appended; an existing one keeps its position
    /// and has its alternatives replaced.
    pub fn with_entry<I, S>(mut self, canonical: impl Into<String>, alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(
            canonical.into(),
            alternatives.into_iter().map(Into::into).collect(),
        );
        self
    }

    fn insert(&mut self, canonical: String, alternatives: Vec<String>) {
        match self.entries.iter_mut().find(|(c, _)| *c == canonical) {
            Some((_, existing)) => *existing = alternatives,
            None => self.entries.push((canonical, alternatives)),
        }
    }

    /// Alternatives for a canonical name
    pub fn get(&self, canonical: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(c, _)| c == canonical)
            .map(|(_, alternatives)| alternatives.as_slice())
    }

    /// Resolve a surface form to its canonical name.
    ///
    /// Matching is case-insensitive. A canonical name resolves to itself.
    pub fn canonical_name(&self, form: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(canonical, alternatives)| {
                canonical.eq_ignore_ascii_case(form)
                    || alternatives.iter().any(|a| a.eq_ignore_ascii_case(form))
            })
            .map(|(canonical, _)| canonical.as_str())
    }

    /// Iterate over `(canonical, alternatives)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(canonical, alternatives)| (canonical.as_str(), alternatives.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Synonyms {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (canonical, alternatives) in &self.entries {
            map.serialize_entry(canonical, alternatives)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Synonyms {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SynonymsVisitor;

        impl<'de> Visitor<'de> for SynonymsVisitor {
            type Value = Synonyms;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of canonical names to lists of synonyms")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Synonyms, A::Error> {
                let mut synonyms = Synonyms::new();
                while let Some((canonical, alternatives)) =
                    access.next_entry::<String, Vec<String>>()?
                {
                    synonyms.insert(canonical, alternatives);
                }
                Ok(synonyms)
            }
        }

        deserializer.deserialize_map(SynonymsVisitor)
    }
}

impl std::ops::Index<&str> for Synonyms {
    type Output = [String];

    fn index(&self, canonical: &str) -> &Self::Output {
        match self.get(canonical) {
            Some(alternatives) => alternatives,
            None => panic!("no synonym entry for '{}'", canonical),
        }
    }
}
