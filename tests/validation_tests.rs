//! Consistency validation tests

use lithology_lexicon::models::{Category, LegendEntry, PartOfSpeech, PartsOfSpeech};
use lithology_lexicon::validation::consistency::{check_fragments, check_legend};
use lithology_lexicon::{IssueKind, LexiconImporter, ReferenceData, Severity, validate_reference_data};

mod default_data_tests {
    use super::*;

    #[test]
    fn test_unknown_legend_lithologies_are_reported() {
        let report = validate_reference_data(ReferenceData::defaults());
        assert_eq!(
            report.subjects_of(IssueKind::UnknownLegendLithology),
            vec!["Heterolithic", "Volcanic", "Conglomerate", "Coal"]
        );
        assert!(report.has_warnings());
    }

    #[test]
    fn test_default_tables_meet_structural_invariants() {
        let report = validate_reference_data(ReferenceData::defaults());
        for kind in [
            IssueKind::InvalidFragment,
            IssueKind::InvalidLegendColour,
            IssueKind::ZeroLegendWidth,
            IssueKind::UnknownPartOfSpeechCategory,
            IssueKind::UncapitalizedSynonym,
            IssueKind::EmptySynonymList,
            IssueKind::EmptyExpansion,
        ] {
            assert_eq!(report.issues_of(kind).count(), 0, "unexpected {:?}", kind);
        }
    }

    #[test]
    fn test_nested_abbreviations_are_informational() {
        let report = validate_reference_data(ReferenceData::defaults());
        let nested = report.subjects_of(IssueKind::ExpansionReferencesAbbreviation);
        assert_eq!(nested, vec!["Vug", "s&p"]);
        assert!(
            report
                .issues_of(IssueKind::ExpansionReferencesAbbreviation)
                .all(|i| i.severity() == Severity::Info)
        );
    }

    #[test]
    fn test_validation_does_not_alter_data() {
        let before = ReferenceData::defaults().clone();
        let _ = validate_reference_data(ReferenceData::defaults());
        assert_eq!(&before, ReferenceData::defaults());
    }
}

mod custom_data_tests {
    use super::*;

    #[test]
    fn test_missing_category_for_part_of_speech() {
        let data = LexiconImporter::from_yaml(
            r#"
lithology: [shale]
parts_of_speech:
  noun: [lithology]
  subordinate: [amount]
"#,
        )
        .unwrap()
        .into_reference_data(vec![LegendEntry::new("#666666", 1, "Shale")]);

        let report = validate_reference_data(&data);
        assert_eq!(
            report.subjects_of(IssueKind::UnknownPartOfSpeechCategory),
            vec!["amount"]
        );
        assert!(report.subjects_of(IssueKind::UnknownLegendLithology).is_empty());
    }

    #[test]
    fn test_clean_custom_data() {
        let mut data = ReferenceData::default();
        data.lexicon = data.lexicon.with_category(Category::Lithology, ["coal"]);
        data.parts_of_speech = PartsOfSpeech::new().with_role(PartOfSpeech::Noun, [Category::Lithology]);
        data.legend = vec![LegendEntry::new("#363434", 1, "Coal")];

        assert!(validate_reference_data(&data).is_clean());
    }

    #[test]
    fn test_individual_checks() {
        let data = ReferenceData::defaults();
        assert!(check_fragments(&data.lexicon).is_empty());
        assert_eq!(check_legend(&data.legend, &data.lexicon).len(), 4);
    }
}
