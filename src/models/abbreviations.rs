//! Well-log and core-description abbreviation table
//!
//! Keys are case-sensitive tokens and may contain punctuation or spaces
//! (`w/`, `D & A`, `n.v.p.`). Expansions are free text and are kept exactly
//! as supplied.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Abbreviation token to expansion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Abbreviations {
    entries: BTreeMap<String, String>,
}

impl Abbreviations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expansion for an exact, case-sensitive token
    pub fn expand(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Iterate over `(abbreviation, expansion)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Abbreviations {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl std::ops::Index<&str> for Abbreviations {
    type Output = str;

    fn index(&self, token: &str) -> &Self::Output {
        match self.expand(token) {
            Some(expansion) => expansion,
            None => panic!("no abbreviation entry for '{}'", token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_is_case_sensitive() {
        let abbreviations: Abbreviations =
            [("tr", "trace"), ("Tr", "trace"), ("Sh", "shale")].into_iter().collect();

        assert_eq!(abbreviations.expand("Sh"), Some("shale"));
        assert_eq!(abbreviations.expand("sh"), None);
        assert_eq!(&abbreviations["tr"], "trace");
        assert_eq!(abbreviations.len(), 3);
    }

    #[test]
    fn test_later_duplicate_wins() {
        let abbreviations: Abbreviations = [("gy", "grey"), ("gy", "gray")].into_iter().collect();
        assert_eq!(abbreviations.len(), 1);
        assert_eq!(abbreviations.expand("gy"), Some("gray"));
    }
}
