//! Standard English inflection data.
//!
//! Contains the irregular pairs, uncountable words, and pattern rules that
//! make a [`Pluralizer`] handle everyday English nouns.
//!
//! # Modules
//!
//! - [`irregular`] - Irregular singular/plural pairs
//! - [`rules`] - Ordered pluralization and singularization patterns
//! - [`uncountable`] - Words and patterns that never change form

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod irregular;
pub mod rules;
pub mod uncountable;

use pluralize_engine::{EngineConfig, Pluralizer, Result, RuleSource};
use tracing::debug;

pub use irregular::IRREGULARS;
pub use rules::{PLURAL_RULES, SINGULAR_RULES};
pub use uncountable::{UNCOUNTABLE_PATTERNS, UNCOUNTABLE_WORDS};

/// Appends the English data to `pluralizer`.
///
/// Uncountable patterns are registered last, so they take precedence over
/// every built-in rule but not over rules the caller adds afterwards.
///
/// # Errors
///
/// Returns an error if a built-in pattern fails to compile under the
/// registry's configuration (for example, a very small delegate size limit).
pub fn install(pluralizer: &mut Pluralizer) -> Result<()> {
    for (single, plural) in IRREGULARS {
        pluralizer.add_irregular_rule(single, plural);
    }
    for (pattern, replacement) in PLURAL_RULES {
        pluralizer.add_plural_rule(RuleSource::pattern(*pattern), replacement)?;
    }
    for (pattern, replacement) in SINGULAR_RULES {
        pluralizer.add_singular_rule(RuleSource::pattern(*pattern), replacement)?;
    }
    for word in UNCOUNTABLE_WORDS {
        pluralizer.add_uncountable_rule(*word)?;
    }
    for pattern in UNCOUNTABLE_PATTERNS {
        pluralizer.add_uncountable_rule(RuleSource::pattern(*pattern))?;
    }

    debug!(
        plural_rules = pluralizer.plural_rules().len(),
        singular_rules = pluralizer.singular_rules().len(),
        irregulars = pluralizer.irregulars().len(),
        uncountables = pluralizer.uncountables().len(),
        "installed English inflection data"
    );
    Ok(())
}

/// Builds a registry with the English data and the given configuration.
///
/// # Errors
///
/// Returns an error if a built-in pattern fails to compile under `config`.
pub fn english_with_config(config: EngineConfig) -> Result<Pluralizer> {
    let mut pluralizer = Pluralizer::with_config(config);
    install(&mut pluralizer)?;
    Ok(pluralizer)
}

/// Builds a registry with the English data and the default configuration.
#[must_use]
pub fn english() -> Pluralizer {
    english_with_config(EngineConfig::default()).expect("built-in English rules compile")
}
