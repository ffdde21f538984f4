//! Custom lexicon import
//!
//! Loads a [`LexiconDocument`] from a JSON or YAML string so that a consumer
//! can substitute its own vocabulary for the defaults. Loading does not
//! validate the document; run [`crate::validation::validate_reference_data`]
//! on the resulting [`ReferenceData`](crate::models::ReferenceData) for that.

use crate::error::LexiconLoadError;
use crate::models::LexiconDocument;
use tracing::debug;

/// Lexicon importer - deserializes lexicon documents
pub struct LexiconImporter;

impl LexiconImporter {
    /// Parse a lexicon document from JSON
    pub fn from_json(json: &str) -> Result<LexiconDocument, LexiconLoadError> {
        let doc: LexiconDocument = serde_json::from_str(json)?;
        log_loaded(&doc, "JSON");
        Ok(doc)
    }

    /// Parse a lexicon document from YAML
    pub fn from_yaml(yaml: &str) -> Result<LexiconDocument, LexiconLoadError> {
        let doc: LexiconDocument = serde_yaml::from_str(yaml)?;
        log_loaded(&doc, "YAML");
        Ok(doc)
    }
}

fn log_loaded(doc: &LexiconDocument, format: &str) {
    debug!(
        "Loaded {} lexicon document: {} fragments, {} synonym entries, {} abbreviations",
        format,
        doc.lexicon().fragment_count(),
        doc.synonyms.len(),
        doc.abbreviations.len()
    );
}
