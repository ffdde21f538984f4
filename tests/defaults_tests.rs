//! Default reference data tests

use lithology_lexicon::models::is_hex_colour;
use lithology_lexicon::{
    Category, PartOfSpeech, ReferenceData, get_default_abbreviations, get_default_legend,
    get_default_lexicon, get_default_parts_of_speech, get_default_synonyms,
};
use std::thread;

mod legend_tests {
    use super::*;

    #[test]
    fn test_rows_have_positive_width_and_hex_colour() {
        let legend = get_default_legend().unwrap();
        assert!(!legend.is_empty());
        for entry in &legend {
            assert!(entry.width > 0, "zero width for {:?}", entry);
            assert!(is_hex_colour(&entry.colour), "bad colour {}", entry.colour);
        }
    }

    #[test]
    fn test_parsing_is_idempotent() {
        assert_eq!(get_default_legend().unwrap(), get_default_legend().unwrap());
    }

    #[test]
    fn test_first_row() {
        let legend = get_default_legend().unwrap();
        let first = &legend[0];
        assert_eq!(first.colour, "#F7E9A6");
        assert_eq!(first.width, 3);
        assert_eq!(first.primary_lithology, "Sandstone");
        assert_eq!(first.component_colour, "Grey");
        assert_eq!(first.component_grainsize, "VF-F");
    }

    #[test]
    fn test_blank_components_are_empty_strings() {
        let legend = get_default_legend().unwrap();
        let anhydrite = legend
            .iter()
            .find(|e| e.primary_lithology == "Anhydrite")
            .unwrap();
        assert_eq!(anhydrite.colour, "#FF99CC");
        assert_eq!(anhydrite.component_colour, "");
        assert_eq!(anhydrite.component_grainsize, "");
    }

    #[test]
    fn test_row_order_is_preserved() {
        let lithologies: Vec<String> = get_default_legend()
            .unwrap()
            .into_iter()
            .map(|e| e.primary_lithology)
            .take(6)
            .collect();
        assert_eq!(
            lithologies,
            vec!["Sandstone", "Anhydrite", "Heterolithic", "Volcanic", "Conglomerate", "Halite"]
        );
    }
}

mod lexicon_tests {
    use super::*;
    use lithology_lexicon::validation::compile_fragment;

    #[test]
    fn test_parts_of_speech_categories_exist_in_lexicon() {
        let lexicon = get_default_lexicon();
        for category in get_default_parts_of_speech().referenced_categories() {
            assert!(lexicon.contains(category), "missing {}", category);
        }
    }

    #[test]
    fn test_every_fragment_compiles() {
        for (category, fragments) in get_default_lexicon().iter() {
            for fragment in fragments {
                assert!(
                    compile_fragment(fragment).is_ok(),
                    "{} fragment {} does not compile",
                    category,
                    fragment
                );
            }
        }
    }

    #[test]
    fn test_fragments_match_case_insensitively() {
        let lexicon = get_default_lexicon();
        let colour = compile_fragment(&lexicon.fragments(Category::Colour)[1]).unwrap();
        assert!(colour.is_match("Greyish GRAYISH"));

        let amount = compile_fragment(&lexicon.fragments(Category::Amount)[3]).unwrap();
        assert!(amount.is_match("Interbedded"));

        let percent = compile_fragment(&lexicon.fragments(Category::Amount)[13]).unwrap();
        assert!(percent.is_match("10%"));
    }

    #[test]
    fn test_sandstone_before_sand() {
        let lithology = get_default_lexicon().fragments(Category::Lithology);
        let sandstone = lithology.iter().position(|f| f == "sandstone").unwrap();
        let sand = lithology.iter().position(|f| f == "sand").unwrap();
        assert!(sandstone < sand);
    }

    #[test]
    fn test_noun_is_lithology() {
        assert_eq!(
            get_default_parts_of_speech().role_of(Category::Lithology),
            Some(PartOfSpeech::Noun)
        );
    }
}

mod synonym_tests {
    use super::*;

    #[test]
    fn test_salt_synonyms() {
        let salt = &get_default_synonyms()["Salt"];
        assert!(salt.contains(&"Halite".to_string()));
        assert!(salt.contains(&"Sylvite".to_string()));
    }

    #[test]
    fn test_keys_capitalized_and_values_non_empty() {
        let synonyms = get_default_synonyms();
        assert_eq!(synonyms.len(), 3);
        for (canonical, alternatives) in synonyms.iter() {
            assert!(canonical.chars().next().unwrap().is_uppercase());
            assert!(!alternatives.is_empty());
        }
    }

    #[test]
    fn test_source_order_is_kept() {
        let names: Vec<&str> = get_default_synonyms().iter().map(|(c, _)| c).collect();
        assert_eq!(names, vec!["Overburden", "Anhydrite", "Salt"]);
    }

    #[test]
    fn test_canonical_name_resolution() {
        let synonyms = get_default_synonyms();
        assert_eq!(synonyms.canonical_name("gypsum"), Some("Anhydrite"));
        assert_eq!(synonyms.canonical_name("Drift"), Some("Overburden"));
    }
}

mod abbreviation_tests {
    use super::*;

    #[test]
    fn test_tr_is_trace() {
        assert_eq!(&get_default_abbreviations()["tr"], "trace");
    }

    #[test]
    fn test_values_non_empty() {
        let abbreviations = get_default_abbreviations();
        assert!(abbreviations.len() > 800);
        for (token, expansion) in abbreviations.iter() {
            assert!(!expansion.is_empty(), "empty expansion for {}", token);
        }
    }

    #[test]
    fn test_punctuated_keys() {
        let abbreviations = get_default_abbreviations();
        assert_eq!(abbreviations.expand("w/"), Some("with"));
        assert_eq!(abbreviations.expand("D & A"), Some("dry and abandoned"));
        assert_eq!(abbreviations.expand("n.v.p."), Some("no visible porosity"));
        assert_eq!(abbreviations.expand("'' or do"), Some("ditto"));
        assert_eq!(abbreviations.expand("F.Q.G."), Some("frosted quartz  grains"));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let abbreviations = get_default_abbreviations();
        assert_eq!(abbreviations.expand("Sh"), Some("shale"));
        assert_eq!(abbreviations.expand("SH"), None);
        assert_eq!(abbreviations.expand("G"), Some("gas"));
        assert_eq!(abbreviations.expand("g"), Some("good"));
    }
}

mod shared_state_tests {
    use super::*;

    #[test]
    fn test_defaults_are_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| thread::spawn(|| get_default_lexicon() as *const _ as usize))
            .collect();
        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_reference_data_bundle() {
        let data = ReferenceData::defaults();
        assert_eq!(data.legend.len(), 18);
        assert!(std::ptr::eq(data, ReferenceData::defaults()));
    }
}
