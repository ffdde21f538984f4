//! Lithology Lexicon - default vocabulary for parsing cuttings descriptions
//!
//! Provides reference data for parsers of free-text geological cuttings
//! descriptions:
//! - A colour/lithology legend, embedded as a text block and parsed on demand
//! - A lexicon of regex fragments for lithology, amount, grain size and colour
//! - Lithology synonyms and the parts of speech each lexicon category plays
//! - A table of petroleum well-log abbreviations
//!
//! Default tables are built once per process and shared immutably. To use a
//! different vocabulary, load a [`LexiconDocument`] and substitute the
//! resulting [`ReferenceData`] wholesale.
//!
//! ```
//! use lithology_lexicon::{get_default_abbreviations, get_default_legend, get_default_synonyms};
//!
//! let legend = get_default_legend().unwrap();
//! assert_eq!(legend[0].primary_lithology, "Sandstone");
//! assert!(get_default_synonyms()["Salt"].contains(&"Halite".to_string()));
//! assert_eq!(get_default_abbreviations().expand("tr"), Some("trace"));
//! ```

pub mod config;
pub mod defaults;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::{LegendParseConfig, LegendParseConfigBuilder};
pub use defaults::{
    DEFAULT_LEGEND, get_default_abbreviations, get_default_legend, get_default_lexicon,
    get_default_parts_of_speech, get_default_synonyms,
};
pub use error::{ExportError, LexiconLoadError, MalformedDataError};
pub use export::{LegendExporter, LexiconExporter};
pub use import::{LegendImporter, LexiconImporter, parse_legend, parse_legend_line};
pub use validation::{ConsistencyReport, IssueKind, Severity, validate_reference_data};

// Re-export models
pub use models::{
    Abbreviations, Category, LegendEntry, Lexicon, LexiconDocument, PartOfSpeech, PartsOfSpeech,
    ReferenceData, Synonyms,
};
