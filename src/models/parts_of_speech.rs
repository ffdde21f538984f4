//! Grammatical roles played by lexicon categories
//!
//! Used by description assemblers to decide which parsed tokens become the
//! noun, which qualify it, and which are subordinate amounts.

use super::lexicon::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Grammatical role
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Adjective,
    Subordinate,
}

/// Role to the lexicon categories that fill it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartsOfSpeech {
    entries: BTreeMap<PartOfSpeech, Vec<Category>>,
}

impl PartsOfSpeech {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, replacing any existing categories for `role`
    pub fn with_role(mut self, role: PartOfSpeech, categories: impl IntoIterator<Item = Category>) -> Self {
        self.entries.insert(role, categories.into_iter().collect());
        self
    }

    /// Categories filling a role
    pub fn get(&self, role: PartOfSpeech) -> &[Category] {
        self.entries.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Role played by a category, if any
    pub fn role_of(&self, category: Category) -> Option<PartOfSpeech> {
        self.entries
            .iter()
            .find(|(_, categories)| categories.contains(&category))
            .map(|(role, _)| *role)
    }

    /// Every category referenced by any role, in first-seen order without repeats
    pub fn referenced_categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for category in self.entries.values().flatten() {
            if !seen.contains(category) {
                seen.push(*category);
            }
        }
        seen
    }

    /// Iterate over `(role, categories)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (PartOfSpeech, &[Category])> {
        self.entries.iter().map(|(role, c)| (*role, c.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
