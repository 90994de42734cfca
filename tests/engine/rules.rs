//! Integration tests for rule sets
//!
//! Tests newest-first scanning, search semantics, and replacement.

use pluralize_engine::{Pattern, Rule, RuleSet};

/// Helper to build a rule set from (pattern, replacement) pairs in order.
fn rule_set(rules: &[(&str, &str)]) -> RuleSet {
    let mut set = RuleSet::new();
    for (pattern, replacement) in rules {
        set.push(Rule::new(Pattern::new(pattern).unwrap(), *replacement));
    }
    set
}

// =============================================================================
// Precedence
// =============================================================================

#[test]
fn newest_matching_rule_wins() {
    let set = rule_set(&[("s?$", "s"), ("y$", "ies"), ("ey$", "eys")]);

    let found = set.find("key").unwrap().unwrap();
    assert_eq!(found.index, 2);
    assert_eq!(found.rule.replacement(), "eys");
    assert_eq!(found.apply(), "keys");
}

#[test]
fn older_rule_applies_when_newer_ones_miss() {
    let set = rule_set(&[("s?$", "s"), ("y$", "ies"), ("ey$", "eys")]);
    assert_eq!(set.apply("fly").unwrap(), "flies");
    assert_eq!(set.apply("cat").unwrap(), "cats");
}

#[test]
fn no_match_returns_word() {
    let set = rule_set(&[("y$", "ies")]);
    assert!(set.find("cat").unwrap().is_none());
    assert_eq!(set.apply("cat").unwrap(), "cat");
}

// =============================================================================
// Search Semantics
// =============================================================================

#[test]
fn unanchored_patterns_match_mid_word() {
    let set = rule_set(&[("oo", "ee")]);
    assert_eq!(set.apply("goose").unwrap(), "geese");
}

#[test]
fn only_first_occurrence_is_replaced() {
    let set = rule_set(&[("o", "0")]);
    assert_eq!(set.apply("foot").unwrap(), "f0ot");
}

#[test]
fn word_boundary_patterns() {
    let set = rule_set(&[("\\b((?:tit)?m|l)(?:ice|ouse)$", "$1ice")]);
    assert_eq!(set.apply("mouse").unwrap(), "mice");
    assert_eq!(set.apply("titmouse").unwrap(), "titmice");
    assert_eq!(set.apply("house").unwrap(), "house");
}

// =============================================================================
// Replacement
// =============================================================================

#[test]
fn capture_groups_are_interpolated() {
    let set = rule_set(&[("(matr|append)(?:ix|ex)$", "$1ices")]);
    let found = set.find("appendix").unwrap().unwrap();
    assert_eq!(found.groups(), &["appendix", "append"]);
    assert_eq!(found.replacement(), "appendices");
    assert_eq!(found.apply(), "appendices");
}

#[test]
fn casing_follows_the_matched_text() {
    let set = rule_set(&[("([^aeiouy]|qu)y$", "$1ies")]);
    assert_eq!(set.apply("WHISKY").unwrap(), "WHISKIES");
    assert_eq!(set.apply("Fly").unwrap(), "Flies");
    assert_eq!(set.apply("pony").unwrap(), "ponies");
}

#[test]
fn empty_match_takes_last_character_casing() {
    let set = rule_set(&[("s?$", "s")]);
    assert_eq!(set.apply("DOG").unwrap(), "DOGS");
    assert_eq!(set.apply("doG").unwrap(), "doGS");
    assert_eq!(set.apply("Dog").unwrap(), "Dogs");
}

#[test]
fn empty_replacement_removes_match() {
    let set = rule_set(&[("s$", "")]);
    assert_eq!(set.apply("DOGS").unwrap(), "DOG");
}

#[test]
fn identity_rule_preserves_odd_casing() {
    let mut set = rule_set(&[("s?$", "s")]);
    set.push(Rule::identity(Pattern::new("sheep$").unwrap()));
    assert_eq!(set.apply("ShEeP").unwrap(), "ShEeP");
}
