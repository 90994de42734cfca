//! The inflection registry.
//!
//! A [`Pluralizer`] owns two rule sets, the irregular table, and the
//! uncountable set. Lookups go exact-match first (irregular, then
//! uncountable) and fall back to the rule sets.

use tracing::{debug, warn};

use crate::case::restore_case;
use crate::config::EngineConfig;
use crate::error::{ErrorContext, Result};
use crate::interpolate::markers;
use crate::pattern::{Pattern, RuleSource};
use crate::rule::{Rule, RuleSet};
use crate::tables::{IrregularTable, UncountableSet};

/// Direction of an inflection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Inflection {
    Plural,
    Singular,
}

impl Inflection {
    fn operation(self) -> &'static str {
        match self {
            Self::Plural => "plural",
            Self::Singular => "singular",
        }
    }

    fn check_operation(self) -> &'static str {
        match self {
            Self::Plural => "is_plural",
            Self::Singular => "is_singular",
        }
    }
}

/// Registry of inflection rules.
///
/// Reads take `&self`; registrations take `&mut self` and are visible to
/// every later call. Nothing is ever removed.
#[derive(Clone, Debug, Default)]
pub struct Pluralizer {
    config: EngineConfig,
    plural_rules: RuleSet,
    singular_rules: RuleSet,
    irregulars: IrregularTable,
    uncountables: UncountableSet,
}

impl Pluralizer {
    /// Creates an empty registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry that compiles patterns with `config`.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The pattern configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Pluralization rules, in registration order.
    #[must_use]
    pub fn plural_rules(&self) -> &RuleSet {
        &self.plural_rules
    }

    /// Singularization rules, in registration order.
    #[must_use]
    pub fn singular_rules(&self) -> &RuleSet {
        &self.singular_rules
    }

    /// Irregular word pairs.
    #[must_use]
    pub fn irregulars(&self) -> &IrregularTable {
        &self.irregulars
    }

    /// Literal uncountable words.
    #[must_use]
    pub fn uncountables(&self) -> &UncountableSet {
        &self.uncountables
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Adds a pluralization rule.
    ///
    /// # Errors
    ///
    /// Returns an invalid pattern error if `rule` does not compile; the
    /// registry is left unchanged.
    pub fn add_plural_rule(
        &mut self,
        rule: impl Into<RuleSource>,
        replacement: &str,
    ) -> Result<()> {
        let rule = self.compile_rule(rule.into(), replacement, "add_plural_rule")?;
        debug!(pattern = rule.pattern_source(), replacement, "added plural rule");
        self.plural_rules.push(rule);
        Ok(())
    }

    /// Adds a singularization rule.
    ///
    /// # Errors
    ///
    /// Returns an invalid pattern error if `rule` does not compile; the
    /// registry is left unchanged.
    pub fn add_singular_rule(
        &mut self,
        rule: impl Into<RuleSource>,
        replacement: &str,
    ) -> Result<()> {
        let rule = self.compile_rule(rule.into(), replacement, "add_singular_rule")?;
        debug!(pattern = rule.pattern_source(), replacement, "added singular rule");
        self.singular_rules.push(rule);
        Ok(())
    }

    /// Marks a word or pattern as uncountable.
    ///
    /// Words go into the uncountable set. Patterns become identity rules in
    /// both rule sets, so a later rule can still override them.
    ///
    /// # Errors
    ///
    /// Returns an invalid pattern error if a pattern does not compile; the
    /// registry is left unchanged.
    pub fn add_uncountable_rule(&mut self, rule: impl Into<RuleSource>) -> Result<()> {
        match rule.into() {
            RuleSource::Word(word) => {
                debug!(word = word.as_str(), "added uncountable word");
                self.uncountables.insert(&word);
            }
            source @ RuleSource::Pattern(_) => {
                let pattern = self.compile(&source, "add_uncountable_rule")?;
                debug!(pattern = pattern.as_str(), "added uncountable pattern");
                self.singular_rules.push(Rule::identity(pattern.clone()));
                self.plural_rules.push(Rule::identity(pattern));
            }
        }
        Ok(())
    }

    /// Adds an irregular singular/plural pair. Both words are lowercased.
    pub fn add_irregular_rule(&mut self, single: &str, plural: &str) {
        debug!(single, plural, "added irregular pair");
        self.irregulars.insert(single, plural);
    }

    fn compile(&self, source: &RuleSource, operation: &str) -> Result<Pattern> {
        source
            .compile(&self.config)
            .map_err(|err| err.with_context(ErrorContext::new().with_operation(operation)))
    }

    fn compile_rule(
        &self,
        source: RuleSource,
        replacement: &str,
        operation: &str,
    ) -> Result<Rule> {
        let pattern = self.compile(&source, operation)?;
        if let Some(index) = markers(replacement).find(|&i| i >= pattern.captures_len()) {
            warn!(
                pattern = pattern.as_str(),
                replacement,
                index,
                "replacement references a group the pattern does not have"
            );
        }
        Ok(Rule::new(pattern, replacement))
    }

    // =========================================================================
    // Inflection
    // =========================================================================

    /// Returns the plural form of `word`.
    ///
    /// Words no rule recognizes come back unchanged.
    #[must_use]
    pub fn plural(&self, word: &str) -> String {
        self.inflect_or_keep(word, Inflection::Plural)
    }

    /// Returns the singular form of `word`.
    ///
    /// Words no rule recognizes come back unchanged.
    #[must_use]
    pub fn singular(&self, word: &str) -> String {
        self.inflect_or_keep(word, Inflection::Singular)
    }

    /// Like [`plural`](Self::plural), but reports regex engine failures.
    ///
    /// # Errors
    ///
    /// Returns a match failure if a caller-supplied pattern exhausts its
    /// backtracking budget.
    pub fn try_plural(&self, word: &str) -> Result<String> {
        self.inflect(word, Inflection::Plural)
    }

    /// Like [`singular`](Self::singular), but reports regex engine failures.
    ///
    /// # Errors
    ///
    /// Returns a match failure if a caller-supplied pattern exhausts its
    /// backtracking budget.
    pub fn try_singular(&self, word: &str) -> Result<String> {
        self.inflect(word, Inflection::Singular)
    }

    /// Returns true if `word` is already plural.
    #[must_use]
    pub fn is_plural(&self, word: &str) -> bool {
        self.check_or_false(word, Inflection::Plural)
    }

    /// Returns true if `word` is already singular.
    #[must_use]
    pub fn is_singular(&self, word: &str) -> bool {
        self.check_or_false(word, Inflection::Singular)
    }

    /// Inflects `word` to agree with `count`, optionally prefixing the count.
    ///
    /// A count of exactly 1 gives the singular; anything else, including no
    /// count, gives the plural.
    #[must_use]
    pub fn pluralize(&self, word: &str, count: Option<i64>, inclusive: bool) -> String {
        let inflected = if count == Some(1) {
            self.singular(word)
        } else {
            self.plural(word)
        };

        match count {
            Some(count) if inclusive => format!("{count} {inflected}"),
            _ => inflected,
        }
    }

    fn rules(&self, inflection: Inflection) -> &RuleSet {
        match inflection {
            Inflection::Plural => &self.plural_rules,
            Inflection::Singular => &self.singular_rules,
        }
    }

    /// Returns (already in target form, target form) for an irregular token.
    fn irregular(&self, token: &str, inflection: Inflection) -> (bool, Option<&str>) {
        match inflection {
            Inflection::Plural => (
                self.irregulars.is_plural(token),
                self.irregulars.plural_of(token),
            ),
            Inflection::Singular => (
                self.irregulars.is_single(token),
                self.irregulars.singular_of(token),
            ),
        }
    }

    fn inflect(&self, word: &str, inflection: Inflection) -> Result<String> {
        let token = word.to_lowercase();

        match self.irregular(&token, inflection) {
            (true, _) => Ok(restore_case(word, &token)),
            (false, Some(replacement)) => Ok(restore_case(word, replacement)),
            (false, None) => self
                .sanitize(&token, word, inflection)
                .map_err(|err| err.with_context(Self::word_context(inflection.operation(), word))),
        }
    }

    fn check(&self, word: &str, inflection: Inflection) -> Result<bool> {
        let token = word.to_lowercase();

        match self.irregular(&token, inflection) {
            (true, _) => Ok(true),
            (false, Some(_)) => Ok(false),
            (false, None) => {
                let checked = self
                    .sanitize(&token, &token, inflection)
                    .map_err(|err| {
                        err.with_context(Self::word_context(inflection.check_operation(), word))
                    })?;
                Ok(checked == token)
            }
        }
    }

    fn word_context(operation: &str, word: &str) -> ErrorContext {
        ErrorContext::new().with_operation(operation).with_word(word)
    }

    fn sanitize(&self, token: &str, word: &str, inflection: Inflection) -> Result<String> {
        if token.is_empty() || self.uncountables.contains(token) {
            return Ok(word.to_string());
        }
        self.rules(inflection).apply(word)
    }

    fn inflect_or_keep(&self, word: &str, inflection: Inflection) -> String {
        self.inflect(word, inflection).unwrap_or_else(|err| {
            warn!(%err, word, ?inflection, "inflection failed, keeping word");
            word.to_string()
        })
    }

    fn check_or_false(&self, word: &str, inflection: Inflection) -> bool {
        self.check(word, inflection).unwrap_or_else(|err| {
            warn!(%err, word, ?inflection, "inflection check failed");
            false
        })
    }
}
