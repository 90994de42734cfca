//! Pluralize - English noun inflection
//!
//! This crate re-exports both layers and provides free functions backed by a
//! shared, read-only English registry.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: pluralize_english - Built-in irregular, uncountable, and pattern data
//! Layer 0: pluralize_engine  - Rule sets, lookup tables, interpolation, casing
//! ```
//!
//! # Example
//!
//! ```
//! assert_eq!(pluralize::plural("person"), "people");
//! assert_eq!(pluralize::singular("Wolves"), "Wolf");
//! assert_eq!(pluralize::pluralize("duck", Some(3), true), "3 ducks");
//!
//! // Custom rules go on an owned registry.
//! let mut english = pluralize::english::english();
//! english.add_uncountable_rule("paper").unwrap();
//! assert_eq!(english.plural("paper"), "paper");
//! ```

use std::sync::LazyLock;

pub use pluralize_engine as engine;
pub use pluralize_english as english;

pub use pluralize_engine::{EngineConfig, Error, ErrorKind, Pluralizer, Result, RuleSource};

static DEFAULT: LazyLock<Pluralizer> = LazyLock::new(pluralize_english::english);

/// The shared English registry used by the free functions.
///
/// It cannot be modified; clone it to add rules.
#[must_use]
pub fn default_pluralizer() -> &'static Pluralizer {
    &DEFAULT
}

/// Pluralizes `word` with the default English rules.
#[must_use]
pub fn plural(word: &str) -> String {
    DEFAULT.plural(word)
}

/// Singularizes `word` with the default English rules.
#[must_use]
pub fn singular(word: &str) -> String {
    DEFAULT.singular(word)
}

/// Returns true if `word` is plural under the default English rules.
#[must_use]
pub fn is_plural(word: &str) -> bool {
    DEFAULT.is_plural(word)
}

/// Returns true if `word` is singular under the default English rules.
#[must_use]
pub fn is_singular(word: &str) -> bool {
    DEFAULT.is_singular(word)
}

/// Inflects `word` for `count` with the default English rules.
///
/// See [`Pluralizer::pluralize`].
#[must_use]
pub fn pluralize(word: &str, count: Option<i64>, inclusive: bool) -> String {
    DEFAULT.pluralize(word, count, inclusive)
}
