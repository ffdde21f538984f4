//! Default reference data
//!
//! The embedded legend, lexicon, synonyms, parts of speech and abbreviations.
//! Structured tables are built once on first access and shared as `'static`
//! references; the legend is re-parsed from its text block on each call.

mod abbreviations;
mod legend;
mod lexicon;

pub use legend::DEFAULT_LEGEND;

use crate::error::MalformedDataError;
use crate::import::parse_legend;
use crate::models::{Abbreviations, LegendEntry, Lexicon, PartsOfSpeech, ReferenceData, Synonyms};
use once_cell::sync::Lazy;
use tracing::debug;

static DEFAULT_LEXICON: Lazy<Lexicon> = Lazy::new(|| {
    let lexicon = lexicon::CATEGORIES
        .iter()
        .fold(Lexicon::new(), |acc, (category, fragments)| {
            acc.with_category(*category, fragments.iter().copied())
        });
    debug!("Built default lexicon with {} fragments", lexicon.fragment_count());
    lexicon
});

static DEFAULT_SYNONYMS: Lazy<Synonyms> = Lazy::new(|| {
    lexicon::SYNONYMS
        .iter()
        .fold(Synonyms::new(), |acc, (canonical, alternatives)| {
            acc.with_entry(*canonical, alternatives.iter().copied())
        })
});

static DEFAULT_PARTS_OF_SPEECH: Lazy<PartsOfSpeech> = Lazy::new(|| {
    lexicon::PARTS_OF_SPEECH
        .iter()
        .fold(PartsOfSpeech::new(), |pos, (role, categories)| {
            pos.with_role(*role, categories.iter().copied())
        })
});

static DEFAULT_ABBREVIATIONS: Lazy<Abbreviations> = Lazy::new(|| {
    let table: Abbreviations = abbreviations::ABBREVIATIONS.iter().copied().collect();
    debug!("Built default abbreviation table with {} entries", table.len());
    table
});

static DEFAULT_REFERENCE_DATA: Lazy<ReferenceData> = Lazy::new(|| ReferenceData {
    legend: get_default_legend().expect("embedded default legend is well-formed"),
    lexicon: DEFAULT_LEXICON.clone(),
    synonyms: DEFAULT_SYNONYMS.clone(),
    parts_of_speech: DEFAULT_PARTS_OF_SPEECH.clone(),
    abbreviations: DEFAULT_ABBREVIATIONS.clone(),
});

/// Parse the embedded default legend into typed rows.
///
/// Deterministic: every call returns an equal sequence.
pub fn get_default_legend() -> Result<Vec<LegendEntry>, MalformedDataError> {
    parse_legend(DEFAULT_LEGEND)
}

/// Default lexicon: `lithology`, `amount`, `grainsize` and `colour` fragments
pub fn get_default_lexicon() -> &'static Lexicon {
    &DEFAULT_LEXICON
}

/// Default canonical-name to synonym mapping
pub fn get_default_synonyms() -> &'static Synonyms {
    &DEFAULT_SYNONYMS
}

/// Default grammatical role of each lexicon category
pub fn get_default_parts_of_speech() -> &'static PartsOfSpeech {
    &DEFAULT_PARTS_OF_SPEECH
}

/// Default abbreviation table
pub fn get_default_abbreviations() -> &'static Abbreviations {
    &DEFAULT_ABBREVIATIONS
}

impl ReferenceData {
    /// All default tables together
    pub fn defaults() -> &'static ReferenceData {
        &DEFAULT_REFERENCE_DATA
    }
}
