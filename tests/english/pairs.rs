//! Integration tests for singular/plural pairs
//!
//! Every pair must inflect in both directions, be recognized in its own
//! form, and stay put when inflected towards the form it already has.

use pluralize_english::english;

/// (singular, plural) pairs resolved by pattern rules.
const REGULAR: &[(&str, &str)] = &[
    ("cat", "cats"),
    ("box", "boxes"),
    ("baby", "babies"),
    ("city", "cities"),
    ("day", "days"),
    ("knife", "knives"),
    ("wife", "wives"),
    ("leaf", "leaves"),
    ("wolf", "wolves"),
    ("church", "churches"),
    ("dish", "dishes"),
    ("buzz", "buzzes"),
    ("bus", "buses"),
    ("hero", "heroes"),
    ("potato", "potatoes"),
    ("photo", "photos"),
    ("movie", "movies"),
    ("emu", "emus"),
    ("analysis", "analyses"),
    ("thesis", "theses"),
    ("criterion", "criteria"),
    ("datum", "data"),
    ("alumnus", "alumni"),
    ("cherub", "cherubim"),
    ("matrix", "matrices"),
    ("index", "indices"),
    ("mouse", "mice"),
    ("child", "children"),
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
];

/// (singular, plural) pairs resolved by the irregular table.
const IRREGULAR: &[(&str, &str)] = &[
    ("quiz", "quizzes"),
    ("tooth", "teeth"),
    ("goose", "geese"),
    ("foot", "feet"),
    ("ox", "oxen"),
    ("axe", "axes"),
    ("echo", "echoes"),
    ("genus", "genera"),
    ("schema", "schemata"),
    ("thief", "thieves"),
    ("passerby", "passersby"),
];

fn all_pairs() -> impl Iterator<Item = &'static (&'static str, &'static str)> {
    REGULAR.iter().chain(IRREGULAR)
}

// =============================================================================
// Inflection
// =============================================================================

#[test]
fn plural_of_singular() {
    let p = english();
    for (single, plural) in all_pairs() {
        assert_eq!(p.plural(single), *plural, "plural({single})");
    }
}

#[test]
fn singular_of_plural() {
    let p = english();
    for (single, plural) in all_pairs() {
        assert_eq!(p.singular(plural), *single, "singular({plural})");
    }
}

#[test]
fn already_inflected_words_are_kept() {
    let p = english();
    for (single, plural) in all_pairs() {
        assert_eq!(p.plural(plural), *plural, "plural({plural})");
        assert_eq!(p.singular(single), *single, "singular({single})");
    }
}

// =============================================================================
// Checks
// =============================================================================

#[test]
fn forms_are_recognized() {
    let p = english();
    for (single, plural) in all_pairs() {
        assert!(p.is_plural(plural), "is_plural({plural})");
        assert!(p.is_singular(single), "is_singular({single})");
    }
}

#[test]
fn regular_forms_are_not_confused() {
    let p = english();
    for (single, plural) in REGULAR {
        assert!(!p.is_plural(single), "is_plural({single})");
        assert!(!p.is_singular(plural), "is_singular({plural})");
    }
}

#[test]
fn irregular_forms_are_not_confused() {
    let p = english();
    for (single, plural) in IRREGULAR {
        assert!(!p.is_plural(single), "is_plural({single})");
        assert!(!p.is_singular(plural), "is_singular({plural})");
    }
}

// =============================================================================
// Pronouns
// =============================================================================

#[test]
fn pronouns() {
    let p = english();
    assert_eq!(p.plural("i"), "we");
    assert_eq!(p.singular("we"), "i");
    assert_eq!(p.plural("me"), "us");
    assert_eq!(p.singular("us"), "me");
    assert_eq!(p.plural("he"), "they");
    assert_eq!(p.plural("thou"), "you");
    assert_eq!(p.plural("them"), "them");
    assert_eq!(p.singular("them"), "them");
}

#[test]
fn shared_plural_singularizes_to_last_pair() {
    let p = english();
    assert_eq!(p.singular("they"), "she");
    assert_eq!(p.singular("themselves"), "themself");
    assert_eq!(p.plural("herself"), "themselves");
}
