//! Lexicon model
//!
//! Regex fragments grouped by category. Fragment order within a category is
//! significant: consumers building alternations should try earlier fragments
//! first. Fragments are written for case-insensitive matching.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Lexicon category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Lithology,
    Amount,
    Grainsize,
    Colour,
}

impl Category {
    /// All categories, in canonical order
    pub const ALL: [Category; 4] = [
        Category::Lithology,
        Category::Amount,
        Category::Grainsize,
        Category::Colour,
    ];

    /// Lowercase category name as used in serialized lexicons
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Lithology => "lithology",
            Category::Amount => "amount",
            Category::Grainsize => "grainsize",
            Category::Colour => "colour",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lithology" => Ok(Category::Lithology),
            "amount" => Ok(Category::Amount),
            "grainsize" => Ok(Category::Grainsize),
            "colour" | "color" => Ok(Category::Colour),
            other => Err(format!("Unknown lexicon category: {}", other)),
        }
    }
}

/// Category to ordered regex fragments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lexicon {
    entries: BTreeMap<Category, Vec<String>>,
}

impl Lexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a category's fragments, replacing any existing list
    pub fn with_category<I, S>(mut self, category: Category, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .insert(category, fragments.into_iter().map(Into::into).collect());
        self
    }

    /// Fragments for a category, or `None` if the category is absent
    pub fn get(&self, category: Category) -> Option<&[String]> {
        self.entries.get(&category).map(Vec::as_slice)
    }

    /// Fragments for a category, empty if absent
    pub fn fragments(&self, category: Category) -> &[String] {
        self.get(category).unwrap_or(&[])
    }

    /// Whether the category is present as a key
    pub fn contains(&self, category: Category) -> bool {
        self.entries.contains_key(&category)
    }

    /// Categories present, in canonical order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.keys().copied()
    }

    /// Iterate over `(category, fragments)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.entries.iter().map(|(c, f)| (*c, f.as_slice()))
    }

    /// Total number of fragments across all categories
    pub fn fragment_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
