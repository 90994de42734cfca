//! Integration tests for caller-added rules

use pluralize_engine::{ErrorKind, RuleSource};
use pluralize_english::english;

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn uncountable_word() {
    let mut p = english();
    assert_eq!(p.plural("paper"), "papers");

    p.add_uncountable_rule("paper").unwrap();
    assert_eq!(p.plural("paper"), "paper");
    assert_eq!(p.singular("paper"), "paper");
}

#[test]
fn irregular_pair() {
    let mut p = english();
    assert_eq!(p.plural("irregular"), "irregulars");

    p.add_irregular_rule("irregular", "regular");
    assert_eq!(p.plural("irregular"), "regular");
    assert_eq!(p.singular("regular"), "irregular");
}

#[test]
fn plural_pattern() {
    let mut p = english();
    assert_eq!(p.plural("regex"), "regexes");

    p.add_plural_rule(RuleSource::pattern("gex$"), "gexii").unwrap();
    assert_eq!(p.plural("regex"), "regexii");
    assert_eq!(p.plural("REGEX"), "REGEXII");
}

#[test]
fn singular_pattern() {
    let mut p = english();
    assert_eq!(p.singular("singles"), "single");

    p.add_singular_rule(RuleSource::pattern("singles$"), "singular")
        .unwrap();
    assert_eq!(p.singular("singles"), "singular");
}

#[test]
fn plural_word() {
    let mut p = english();
    assert_eq!(p.plural("person"), "people");

    p.add_plural_rule("person", "peeps").unwrap();
    assert_eq!(p.plural("person"), "peeps");
    assert_eq!(p.plural("salesperson"), "salespeople");
}

#[test]
fn singular_word() {
    let mut p = english();
    assert_eq!(p.singular("mornings"), "morning");

    p.add_singular_rule("mornings", "suck").unwrap();
    assert_eq!(p.singular("mornings"), "suck");
    assert_eq!(p.singular("evenings"), "evening");
}

#[test]
fn literal_words_are_not_patterns() {
    let mut p = english();
    p.add_plural_rule("c++", "c++ compilers").unwrap();
    assert_eq!(p.plural("c++"), "c++ compilers");
    assert_eq!(p.plural("cc"), "ccs");
}

#[test]
fn lookaround_patterns() {
    let mut p = english();
    p.add_plural_rule(RuleSource::pattern("(?<=o)x$"), "xen").unwrap();
    assert_eq!(p.plural("box"), "boxen");
    assert_eq!(p.plural("fax"), "faxes");
}

#[test]
fn later_rule_overrides_uncountable_pattern() {
    let mut p = english();
    assert_eq!(p.plural("swordfish"), "swordfish");

    p.add_plural_rule(RuleSource::pattern("(sword)fish$"), "$1fishes")
        .unwrap();
    assert_eq!(p.plural("swordfish"), "swordfishes");
    assert_eq!(p.plural("goldfish"), "goldfish");
}

// =============================================================================
// Precedence
// =============================================================================

#[test]
fn irregular_beats_later_rules() {
    let mut p = english();
    p.add_plural_rule("goose", "gooses").unwrap();
    assert_eq!(p.plural("goose"), "geese");
}

#[test]
fn uncountable_word_beats_later_rules() {
    let mut p = english();
    p.add_uncountable_rule("paper").unwrap();
    p.add_plural_rule("paper", "papyri").unwrap();
    assert_eq!(p.plural("paper"), "paper");
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn malformed_pattern_is_rejected() {
    let mut p = english();
    let before = p.plural_rules().len();

    let err = p
        .add_plural_rule(RuleSource::pattern("(gex"), "x")
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidPattern { .. }));
    assert_eq!(err.pattern(), "(gex");

    assert_eq!(p.plural_rules().len(), before);
    assert_eq!(p.plural("regex"), "regexes");
}
