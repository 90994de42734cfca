//! Exact-match lookup tables.
//!
//! Irregular pairs and uncountable words are checked by lowercase token
//! before any pattern rule runs.

use std::collections::{HashMap, HashSet};

/// Irregular singular/plural pairs.
///
/// The two directions are stored separately and are not guaranteed to be
/// inverses: "he" and "she" both pluralize to "they", and "they" singularizes
/// to whichever pair was registered last.
#[derive(Clone, Debug, Default)]
pub struct IrregularTable {
    /// Singular token -> plural token
    single_to_plural: HashMap<String, String>,
    /// Plural token -> singular token
    plural_to_single: HashMap<String, String>,
}

impl IrregularTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an irregular pair, overwriting earlier pairs with the same keys.
    pub fn insert(&mut self, single: &str, plural: &str) {
        let single = single.to_lowercase();
        let plural = plural.to_lowercase();
        self.single_to_plural.insert(single.clone(), plural.clone());
        self.plural_to_single.insert(plural, single);
    }

    /// Looks up the plural of a singular token.
    #[must_use]
    pub fn plural_of(&self, single: &str) -> Option<&str> {
        self.single_to_plural.get(single).map(String::as_str)
    }

    /// Looks up the singular of a plural token.
    #[must_use]
    pub fn singular_of(&self, plural: &str) -> Option<&str> {
        self.plural_to_single.get(plural).map(String::as_str)
    }

    /// Returns true if `token` is a registered irregular singular.
    #[must_use]
    pub fn is_single(&self, token: &str) -> bool {
        self.single_to_plural.contains_key(token)
    }

    /// Returns true if `token` is a registered irregular plural.
    #[must_use]
    pub fn is_plural(&self, token: &str) -> bool {
        self.plural_to_single.contains_key(token)
    }

    /// Number of distinct singular keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.single_to_plural.len()
    }

    /// Returns true if no pairs are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.single_to_plural.is_empty()
    }
}

/// Words that have no distinct plural form.
#[derive(Clone, Debug, Default)]
pub struct UncountableSet {
    words: HashSet<String>,
}

impl UncountableSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a word (lowercased).
    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.to_lowercase());
    }

    /// Returns true if `token` is uncountable. `token` must already be lowercase.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the words in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
