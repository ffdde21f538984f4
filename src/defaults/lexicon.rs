//! Default lexicon literals
//!
//! Fragments are listed in match-priority order within each category.

use crate::models::{Category, PartOfSpeech};

pub(crate) const LITHOLOGY: &[&str] = &[
    r"overburden",
    r"sandstone",
    r"siltstone",
    r"shale",
    r"mudstone",
    r"limestone",
    r"dolomite",
    r"salt",
    r"halite",
    r"anhydrite",
    r"gypsum",
    r"sylvite",
    r"clay",
    r"mud",
    r"silt",
    r"sand",
    r"gravel",
    r"boulders",
];

pub(crate) const AMOUNT: &[&str] = &[
    r"streaks?",
    r"veins?",
    r"stringers?",
    r"interbed(?:s|ded)?",
    r"blotch(?:es)?",
    r"bands?",
    r"fragments?",
    r"impurit(?:y|ies)",
    r"minor",
    r"some",
    r"abundant",
    r"rare",
    r"flakes?",
    r"[-\.\d]+%",
];

pub(crate) const GRAINSIZE: &[&str] = &[
    r"vf(?:-)?",
    r"f(?:-)?",
    r"m(?:-)?",
    r"c(?:-)?",
    r"vc",
    r"very fine(?: to)?",
    r"fine(?: to)?",
    r"medium(?: to)?",
    r"coarse(?: to)?",
    r"very coarse",
    r"v fine(?: to)?",
    r"med(?: to)?",
    r"med.(?: to)?",
    r"v coarse",
    r"grains?",
    r"granules?",
    r"pebbles?",
    r"cobbles?",
    r"boulders?",
];

pub(crate) const COLOUR: &[&str] = &[
    r"red(?:dish)?",
    r"gray(?:ish)?",
    r"grey(?:ish)?",
    r"black(?:ish)?",
    r"whit(?:e|ish)",
    r"blu(?:e|ish)",
    r"purpl(?:e|ish)",
    r"yellow(?:ish)?",
    r"green(?:ish)?",
    r"brown(?:ish)?",
    r"light",
    r"dark",
    r"sandy",
];

pub(crate) const CATEGORIES: &[(Category, &[&str])] = &[
    (Category::Lithology, LITHOLOGY),
    (Category::Amount, AMOUNT),
    (Category::Grainsize, GRAINSIZE),
    (Category::Colour, COLOUR),
];

pub(crate) const SYNONYMS: &[(&str, &[&str])] = &[
    ("Overburden", &["Drift"]),
    ("Anhydrite", &["Gypsum"]),
    ("Salt", &["Halite", "Sylvite"]),
];

pub(crate) const PARTS_OF_SPEECH: &[(PartOfSpeech, &[Category])] = &[
    (PartOfSpeech::Noun, &[Category::Lithology]),
    (PartOfSpeech::Adjective, &[Category::Colour, Category::Grainsize]),
    (PartOfSpeech::Subordinate, &[Category::Amount]),
];
