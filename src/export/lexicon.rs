//! Lexicon document export

use crate::error::ExportError;
use crate::models::LexiconDocument;

/// Lexicon exporter - serializes lexicon documents
pub struct LexiconExporter;

impl LexiconExporter {
    /// Serialize to pretty-printed JSON
    pub fn to_json(doc: &LexiconDocument) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(doc)?)
    }

    /// Serialize to YAML
    pub fn to_yaml(doc: &LexiconDocument) -> Result<String, ExportError> {
        Ok(serde_yaml::to_string(doc)?)
    }
}
