//! Validation functionality
//!
//! Provides consistency checks over reference data:
//! - Legend lithologies known to the lexicon, colour format, widths
//! - Parts-of-speech categories present in the lexicon
//! - Lexicon fragments compile as case-insensitive regexes
//! - Synonym and abbreviation table invariants

pub mod consistency;

pub use consistency::{
    ConsistencyIssue, ConsistencyReport, IssueKind, Severity, compile_fragment,
    validate_reference_data,
};
