//! Models module
//!
//! Defines the reference data structures consumed by cuttings-description
//! parsers: legend rows, the regex-fragment lexicon, synonyms, parts of
//! speech and abbreviations.

pub mod abbreviations;
pub mod legend;
pub mod lexicon;
pub mod parts_of_speech;
pub mod reference_data;
pub mod synonyms;

pub use abbreviations::Abbreviations;
pub use legend::{LegendEntry, is_hex_colour};
pub use lexicon::{Category, Lexicon};
pub use parts_of_speech::{PartOfSpeech, PartsOfSpeech};
pub use reference_data::{LexiconDocument, ReferenceData};
pub use synonyms::Synonyms;
