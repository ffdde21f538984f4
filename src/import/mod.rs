//! Import functionality
//!
//! Provides parsers for bringing reference data in from text:
//! - Legend text blocks (comma-separated rows with a header line)
//! - Lexicon documents (JSON or YAML)

pub mod legend;
pub mod lexicon;

pub use legend::{LegendImporter, parse_legend, parse_legend_line};
pub use lexicon::LexiconImporter;
