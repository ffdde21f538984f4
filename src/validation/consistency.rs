//! Cross-consistency checks for reference data
//!
//! Checks that the tables agree with each other and with their own
//! invariants. Findings are reported, never corrected: the data is kept
//! verbatim and the caller decides what to do with the report.

use crate::models::{
    Abbreviations, Category, LegendEntry, Lexicon, PartsOfSpeech, ReferenceData, Synonyms,
    is_hex_colour,
};
use regex::{Regex, RegexBuilder};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// How serious a finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Worth knowing, not a defect
    Info,
    /// Breaks a documented invariant
    Warning,
}

/// What kind of inconsistency was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    /// Legend lithology not matched by any lithology fragment
    UnknownLegendLithology,
    /// Legend colour is not `#RRGGBB`
    InvalidLegendColour,
    /// Legend width is zero
    ZeroLegendWidth,
    /// Parts-of-speech table references a category missing from the lexicon
    UnknownPartOfSpeechCategory,
    /// Lexicon fragment does not compile as a case-insensitive regex
    InvalidFragment,
    /// Synonym key does not start with an uppercase letter
    UncapitalizedSynonym,
    /// Synonym key has no alternatives
    EmptySynonymList,
    /// Abbreviation has an empty expansion
    EmptyExpansion,
    /// Abbreviation expansion contains another abbreviation as a word
    ExpansionReferencesAbbreviation,
}

impl IssueKind {
    pub fn severity(&self) -> Severity {
        match self {
            IssueKind::ExpansionReferencesAbbreviation => Severity::Info,
            _ => Severity::Warning,
        }
    }
}

/// A single finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistencyIssue {
    pub kind: IssueKind,
    /// The offending value (lithology name, fragment, key, ...)
    pub subject: String,
    pub message: String,
}

impl ConsistencyIssue {
    fn new(kind: IssueKind, subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

/// Result of a consistency check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsistencyReport {
    pub issues: Vec<ConsistencyIssue>,
}

impl ConsistencyReport {
    /// No findings of any severity
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// At least one warning-level finding
    pub fn has_warnings(&self) -> bool {
        self.issues.iter().any(|i| i.severity() == Severity::Warning)
    }

    /// Findings of one kind
    pub fn issues_of(&self, kind: IssueKind) -> impl Iterator<Item = &ConsistencyIssue> {
        self.issues.iter().filter(move |i| i.kind == kind)
    }

    /// Subjects of findings of one kind
    pub fn subjects_of(&self, kind: IssueKind) -> Vec<&str> {
        self.issues_of(kind).map(|i| i.subject.as_str()).collect()
    }

    fn extend(&mut self, issues: Vec<ConsistencyIssue>) {
        self.issues.extend(issues);
    }
}

/// Compile a lexicon fragment the way consumers are expected to use it
pub fn compile_fragment(fragment: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(fragment).case_insensitive(true).build()
}

/// Run every check over a reference data instance
pub fn validate_reference_data(data: &ReferenceData) -> ConsistencyReport {
    let mut report = ConsistencyReport::default();
    report.extend(check_fragments(&data.lexicon));
    report.extend(check_legend(&data.legend, &data.lexicon));
    report.extend(check_parts_of_speech(&data.parts_of_speech, &data.lexicon));
    report.extend(check_synonyms(&data.synonyms));
    report.extend(check_abbreviations(&data.abbreviations));

    for issue in &report.issues {
        match issue.severity() {
            Severity::Warning => warn!("{:?}: {}", issue.kind, issue.message),
            Severity::Info => debug!("{:?}: {}", issue.kind, issue.message),
        }
    }
    report
}

/// Every fragment must compile as a case-insensitive regex
pub fn check_fragments(lexicon: &Lexicon) -> Vec<ConsistencyIssue> {
    let mut issues = Vec::new();
    for (category, fragments) in lexicon.iter() {
        for fragment in fragments {
            if let Err(e) = compile_fragment(fragment) {
                issues.push(ConsistencyIssue::new(
                    IssueKind::InvalidFragment,
                    fragment.as_str(),
                    format!("{} fragment '{}' does not compile: {}", category, fragment, e),
                ));
            }
        }
    }
    issues
}

/// Legend rows: colour format, positive width, lithology known to the lexicon.
///
/// Each unknown lithology name is reported once, in legend order.
pub fn check_legend(legend: &[LegendEntry], lexicon: &Lexicon) -> Vec<ConsistencyIssue> {
    let matchers: Vec<Regex> = lexicon
        .fragments(Category::Lithology)
        .iter()
        .filter_map(|f| compile_fragment(&format!("^(?:{})$", f)).ok())
        .collect();

    let mut issues = Vec::new();
    let mut reported = BTreeSet::new();
    for entry in legend {
        if !is_hex_colour(&entry.colour) {
            issues.push(ConsistencyIssue::new(
                IssueKind::InvalidLegendColour,
                entry.colour.as_str(),
                format!("legend colour '{}' is not #RRGGBB", entry.colour),
            ));
        }
        if entry.width == 0 {
            issues.push(ConsistencyIssue::new(
                IssueKind::ZeroLegendWidth,
                entry.colour.as_str(),
                format!("legend row {} has zero width", entry.colour),
            ));
        }
        let lithology = entry.primary_lithology.as_str();
        if !matchers.iter().any(|m| m.is_match(lithology)) && reported.insert(lithology) {
            issues.push(ConsistencyIssue::new(
                IssueKind::UnknownLegendLithology,
                lithology,
                format!("legend lithology '{}' matches no lithology fragment", lithology),
            ));
        }
    }
    issues
}

/// Every category named by a role must be a lexicon key
pub fn check_parts_of_speech(pos: &PartsOfSpeech, lexicon: &Lexicon) -> Vec<ConsistencyIssue> {
    let mut issues = Vec::new();
    for (role, categories) in pos.iter() {
        for category in categories.iter().filter(|c| !lexicon.contains(**c)) {
            issues.push(ConsistencyIssue::new(
                IssueKind::UnknownPartOfSpeechCategory,
                category.as_str(),
                format!(
                    "{:?} references category '{}' missing from the lexicon",
                    role, category
                ),
            ));
        }
    }
    issues
}

/// Synonym keys are capitalized and have at least one alternative
pub fn check_synonyms(synonyms: &Synonyms) -> Vec<ConsistencyIssue> {
    let mut issues = Vec::new();
    for (canonical, alternatives) in synonyms.iter() {
        if !canonical.chars().next().is_some_and(char::is_uppercase) {
            issues.push(ConsistencyIssue::new(
                IssueKind::UncapitalizedSynonym,
                canonical,
                format!("synonym key '{}' is not capitalized", canonical),
            ));
        }
        if alternatives.is_empty() {
            issues.push(ConsistencyIssue::new(
                IssueKind::EmptySynonymList,
                canonical,
                format!("synonym key '{}' has no alternatives", canonical),
            ));
        }
    }
    issues
}

/// Expansions are non-empty; expansions naming other abbreviations are noted
pub fn check_abbreviations(abbreviations: &Abbreviations) -> Vec<ConsistencyIssue> {
    let mut issues = Vec::new();
    for (token, expansion) in abbreviations.iter() {
        if expansion.trim().is_empty() {
            issues.push(ConsistencyIssue::new(
                IssueKind::EmptyExpansion,
                token,
                format!("abbreviation '{}' has an empty expansion", token),
            ));
            continue;
        }
        let nested: Vec<&str> = expansion
            .split_whitespace()
            .filter(|word| *word != token && abbreviations.contains(word))
            .collect();
        if !nested.is_empty() {
            issues.push(ConsistencyIssue::new(
                IssueKind::ExpansionReferencesAbbreviation,
                token,
                format!(
                    "expansion '{}' of '{}' contains abbreviation(s) {}",
                    expansion,
                    token,
                    nested.join(", ")
                ),
            ));
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PartOfSpeech;

    #[test]
    fn test_invalid_fragment() {
        let lexicon = Lexicon::new().with_category(Category::Amount, ["streaks?", "(unclosed"]);
        let issues = check_fragments(&lexicon);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::InvalidFragment);
        assert_eq!(issues[0].subject, "(unclosed");
    }

    #[test]
    fn test_legend_lithology_matching_is_whole_word_and_case_insensitive() {
        let lexicon = Lexicon::new().with_category(Category::Lithology, ["sand", "shale"]);
        let legend = vec![
            LegendEntry::new("#F7E9A6", 3, "Sand"),
            LegendEntry::new("#F7E9A6", 3, "Sandstone"),
            LegendEntry::new("#F7E9A6", 3, "Sandstone"),
            LegendEntry::new("#666666", 1, "SHALE"),
        ];
        let issues = check_legend(&legend, &lexicon);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::UnknownLegendLithology);
        assert_eq!(issues[0].subject, "Sandstone");
    }

    #[test]
    fn test_legend_colour_and_width() {
        let lexicon = Lexicon::new().with_category(Category::Lithology, ["coal"]);
        let legend = vec![LegendEntry::new("black", 0, "Coal")];
        let kinds: Vec<IssueKind> = check_legend(&legend, &lexicon).iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![IssueKind::InvalidLegendColour, IssueKind::ZeroLegendWidth]);
    }

    #[test]
    fn test_parts_of_speech_missing_category() {
        let lexicon = Lexicon::new().with_category(Category::Lithology, ["shale"]);
        let pos = PartsOfSpeech::new()
            .with_role(PartOfSpeech::Noun, [Category::Lithology])
            .with_role(PartOfSpeech::Subordinate, [Category::Amount]);
        let issues = check_parts_of_speech(&pos, &lexicon);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].subject, "amount");
    }

    #[test]
    fn test_synonym_checks() {
        let synonyms = Synonyms::new()
            .with_entry("salt", ["Halite"])
            .with_entry("Drift", Vec::<String>::new());
        let report = ConsistencyReport {
            issues: check_synonyms(&synonyms),
        };
        assert_eq!(report.subjects_of(IssueKind::UncapitalizedSynonym), vec!["salt"]);
        assert_eq!(report.subjects_of(IssueKind::EmptySynonymList), vec!["Drift"]);
    }

    #[test]
    fn test_abbreviation_checks() {
        let abbreviations: Abbreviations = [
            ("V.P.S.", "very poor sample V.P.S."),
            ("w/o", "without w/o"),
            ("wo", "without"),
            ("x", " "),
        ]
        .into_iter()
        .collect();

        let report = ConsistencyReport {
            issues: check_abbreviations(&abbreviations),
        };
        assert_eq!(report.subjects_of(IssueKind::EmptyExpansion), vec!["x"]);
        assert!(report.subjects_of(IssueKind::ExpansionReferencesAbbreviation).is_empty());
        assert!(report.has_warnings());
    }

    #[test]
    fn test_nested_abbreviation_is_info() {
        let abbreviations: Abbreviations =
            [("ss", "sandstone"), ("sdy", "sandy ss")].into_iter().collect();
        let report = ConsistencyReport {
            issues: check_abbreviations(&abbreviations),
        };
        assert_eq!(report.subjects_of(IssueKind::ExpansionReferencesAbbreviation), vec!["sdy"]);
        assert!(!report.has_warnings());
        assert!(!report.is_clean());
    }
}
