//! Reference data bundle and its serialized document form
//!
//! `ReferenceData` groups the legend, lexicon, synonyms, parts of speech and
//! abbreviations a description parser needs. Instances are never mutated by
//! this crate; consumers substitute a whole instance to customize vocabulary.

use super::abbreviations::Abbreviations;
use super::legend::LegendEntry;
use super::lexicon::{Category, Lexicon};
use super::parts_of_speech::PartsOfSpeech;
use super::synonyms::Synonyms;
use serde::{Deserialize, Serialize};

/// Complete set of parsing vocabulary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub legend: Vec<LegendEntry>,
    pub lexicon: Lexicon,
    pub synonyms: Synonyms,
    pub parts_of_speech: PartsOfSpeech,
    pub abbreviations: Abbreviations,
}

/// Flat lexicon document, as supplied in a custom lexicon JSON or YAML file.
///
/// ```json
/// {
///   "lithology": ["sandstone", "shale"],
///   "colour": ["grey(?:ish)?"],
///   "synonyms": {"Salt": ["Halite"]},
///   "parts_of_speech": {"noun": ["lithology"], "adjective": ["colour"]},
///   "abbreviations": {"ss": "sandstone"}
/// }
/// ```
///
/// Category lists that are absent stay absent from the resulting [`Lexicon`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lithology: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grainsize: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "color")]
    pub colour: Option<Vec<String>>,
    #[serde(default)]
    pub synonyms: Synonyms,
    #[serde(default)]
    pub parts_of_speech: PartsOfSpeech,
    #[serde(default)]
    pub abbreviations: Abbreviations,
}

impl LexiconDocument {
    /// Build the document form of a reference data instance (legend excluded)
    pub fn from_reference_data(data: &ReferenceData) -> Self {
        let list = |category| data.lexicon.get(category).map(<[String]>::to_vec);
        Self {
            lithology: list(Category::Lithology),
            amount: list(Category::Amount),
            grainsize: list(Category::Grainsize),
            colour: list(Category::Colour),
            synonyms: data.synonyms.clone(),
            parts_of_speech: data.parts_of_speech.clone(),
            abbreviations: data.abbreviations.clone(),
        }
    }

    /// The category lists as a [`Lexicon`]
    pub fn lexicon(&self) -> Lexicon {
        let mut lexicon = Lexicon::new();
        for (category, fragments) in [
            (Category::Lithology, &self.lithology),
            (Category::Amount, &self.amount),
            (Category::Grainsize, &self.grainsize),
            (Category::Colour, &self.colour),
        ] {
            if let Some(fragments) = fragments {
                lexicon = lexicon.with_category(category, fragments.iter().cloned());
            }
        }
        lexicon
    }

    /// Combine with a legend into a complete [`ReferenceData`]
    pub fn into_reference_data(self, legend: Vec<LegendEntry>) -> ReferenceData {
        let lexicon = self.lexicon();
        ReferenceData {
            legend,
            lexicon,
            synonyms: self.synonyms,
            parts_of_speech: self.parts_of_speech,
            abbreviations: self.abbreviations,
        }
    }
}
