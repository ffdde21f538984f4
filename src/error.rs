//! Error types for reference data parsing, loading and export

use thiserror::Error;

/// Errors raised while parsing a legend text block.
///
/// Parsing is all-or-nothing: the first offending row aborts the parse and
/// its 1-based line number is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedDataError {
    /// The text block has no header line at all
    #[error("Legend text is empty")]
    Empty,

    /// A mandatory field (`colour` or `primary_lithology`) is absent or blank
    #[error("Line {line}: missing mandatory field '{field}'")]
    MissingField { line: usize, field: &'static str },

    /// The width field is not a positive integer
    #[error("Line {line}: width '{value}' is not a positive integer")]
    InvalidWidth { line: usize, value: String },

    /// The colour field is not a `#RRGGBB` hex string (strict mode only)
    #[error("Line {line}: colour '{value}' is not a #RRGGBB hex string")]
    InvalidColour { line: usize, value: String },

    /// The row has more than the five legend columns
    #[error("Line {line}: expected at most 5 fields, found {count}")]
    TooManyFields { line: usize, count: usize },
}

impl MalformedDataError {
    /// Line number of the offending row, if the error is row-specific
    pub fn line(&self) -> Option<usize> {
        match self {
            MalformedDataError::Empty => None,
            MalformedDataError::MissingField { line, .. }
            | MalformedDataError::InvalidWidth { line, .. }
            | MalformedDataError::InvalidColour { line, .. }
            | MalformedDataError::TooManyFields { line, .. } => Some(*line),
        }
    }
}

/// Errors raised while loading a custom lexicon document
#[derive(Error, Debug, Clone)]
pub enum LexiconLoadError {
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(String),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(String),
}

impl From<serde_json::Error> for LexiconLoadError {
    fn from(e: serde_json::Error) -> Self {
        LexiconLoadError::Json(e.to_string())
    }
}

impl From<serde_yaml::Error> for LexiconLoadError {
    fn from(e: serde_yaml::Error) -> Self {
        LexiconLoadError::Yaml(e.to_string())
    }
}

/// Errors raised while exporting reference data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A legend field cannot be written as plain text and read back unchanged
    #[error("Legend field '{field}' cannot be exported: {value:?} {reason}")]
    UnrepresentableField {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    /// Legend widths are positive; a zero width would not parse back
    #[error("Legend width must be positive, got 0 for '{lithology}'")]
    ZeroWidth { lithology: String },
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        ExportError::Serialization(e.to_string())
    }
}

impl From<serde_yaml::Error> for ExportError {
    fn from(e: serde_yaml::Error) -> Self {
        ExportError::Serialization(e.to_string())
    }
}
