//! Export functionality
//!
//! Renders reference data back to its text forms:
//! - Legend text blocks
//! - Lexicon documents (JSON or YAML)

pub mod legend;
pub mod lexicon;

pub use legend::{LEGEND_HEADER, LegendExporter};
pub use lexicon::LexiconExporter;
