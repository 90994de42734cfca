//! Inflection rules and ordered rule sets.
//!
//! A [`RuleSet`] is append-only and searched from the newest rule to the
//! oldest, so a rule registered later shadows any earlier rule that matches
//! the same word.

use std::ops::Range;

use tracing::trace;

use crate::case::restore_case;
use crate::error::Result;
use crate::interpolate::interpolate;
use crate::pattern::Pattern;

/// Template that reproduces the whole match.
pub const IDENTITY: &str = "$0";

// =============================================================================
// Rule
// =============================================================================

/// A pattern paired with a replacement template.
#[derive(Clone, Debug)]
pub struct Rule {
    pattern: Pattern,
    replacement: String,
}

impl Rule {
    /// Creates a new rule.
    #[must_use]
    pub fn new(pattern: Pattern, replacement: impl Into<String>) -> Self {
        Self {
            pattern,
            replacement: replacement.into(),
        }
    }

    /// Creates a rule that leaves any match untouched.
    #[must_use]
    pub fn identity(pattern: Pattern) -> Self {
        Self::new(pattern, IDENTITY)
    }

    /// The compiled pattern.
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The pattern source text.
    #[must_use]
    pub fn pattern_source(&self) -> &str {
        self.pattern.as_str()
    }

    /// The replacement template.
    #[must_use]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Returns true if this rule reproduces its match unchanged.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.replacement == IDENTITY
    }

    /// Searches `word` with this rule's pattern.
    ///
    /// # Errors
    ///
    /// Returns a match failure if the regex engine gives up.
    pub fn search<'r, 't>(
        &'r self,
        index: usize,
        word: &'t str,
    ) -> Result<Option<RuleMatch<'r, 't>>> {
        let Some(ranges) = self.pattern.captures(word)? else {
            return Ok(None);
        };
        let Some(Some(range)) = ranges.first().cloned() else {
            return Ok(None);
        };

        // Group text comes from the original word so its casing survives.
        let groups = ranges
            .into_iter()
            .map(|group| group.map_or("", |group| &word[group]))
            .collect();

        Ok(Some(RuleMatch {
            rule: self,
            index,
            word,
            range,
            groups,
        }))
    }
}

// =============================================================================
// Rule Match
// =============================================================================

/// The winning rule for a word, together with what it matched.
#[derive(Clone, Debug)]
pub struct RuleMatch<'r, 't> {
    /// The rule that matched.
    pub rule: &'r Rule,
    /// Position of the rule in its set (insertion order).
    pub index: usize,
    word: &'t str,
    range: Range<usize>,
    groups: Vec<&'t str>,
}

impl<'r, 't> RuleMatch<'r, 't> {
    /// The word that was searched.
    #[must_use]
    pub fn word(&self) -> &'t str {
        self.word
    }

    /// Byte range of the match within the word.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// The matched text.
    #[must_use]
    pub fn matched(&self) -> &'t str {
        &self.word[self.range.clone()]
    }

    /// Captured groups; non-participating groups are empty strings.
    #[must_use]
    pub fn groups(&self) -> &[&'t str] {
        &self.groups
    }

    /// Text whose casing the replacement takes on.
    ///
    /// An empty match (a pure suffix rule such as `s?$` on "cat") borrows the
    /// casing of the word's last character.
    #[must_use]
    pub fn case_source(&self) -> &'t str {
        if self.range.is_empty() {
            self.word
                .char_indices()
                .next_back()
                .map_or("", |(i, _)| &self.word[i..])
        } else {
            self.matched()
        }
    }

    /// The interpolated, case-restored replacement for the matched text.
    #[must_use]
    pub fn replacement(&self) -> String {
        let candidate = interpolate(self.rule.replacement(), &self.groups);
        restore_case(self.case_source(), &candidate)
    }

    /// The word with the matched text replaced.
    #[must_use]
    pub fn apply(&self) -> String {
        let replacement = self.replacement();
        let mut out =
            String::with_capacity(self.word.len() - self.range.len() + replacement.len());
        out.push_str(&self.word[..self.range.start]);
        out.push_str(&replacement);
        out.push_str(&self.word[self.range.end..]);
        out
    }
}

// =============================================================================
// Rule Set
// =============================================================================

/// An ordered, append-only list of rules.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule. It takes precedence over every rule already present.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the set has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in insertion order (lowest precedence first).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Rule> + ExactSizeIterator {
        self.rules.iter()
    }

    /// Finds the most recently added rule that matches `word`.
    ///
    /// # Errors
    ///
    /// Returns a match failure if a pattern's regex engine gives up.
    pub fn find<'r, 't>(&'r self, word: &'t str) -> Result<Option<RuleMatch<'r, 't>>> {
        for (index, rule) in self.rules.iter().enumerate().rev() {
            if let Some(found) = rule.search(index, word)? {
                trace!(pattern = rule.pattern_source(), index, word, "rule matched");
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    /// Rewrites `word` with the winning rule, or returns it unchanged.
    ///
    /// # Errors
    ///
    /// Returns a match failure if a pattern's regex engine gives up.
    pub fn apply(&self, word: &str) -> Result<String> {
        Ok(self
            .find(word)?
            .map_or_else(|| word.to_string(), |found| found.apply()))
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
