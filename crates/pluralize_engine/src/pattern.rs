//! Rule patterns.
//!
//! Patterns ignore case for ASCII letters only. Both the pattern's literal
//! letters and the searched text are ASCII-lowercased, so non-ASCII
//! characters such as `ſ` or `K` never fold into `s` or `k`. Literal words
//! are escaped and anchored to the whole input; raw patterns are used as
//! given, so anchoring is up to the caller.

use std::fmt;
use std::ops::Range;

use fancy_regex::{Regex, RegexBuilder};

use crate::config::EngineConfig;
use crate::error::{Error, Result};

/// What a caller hands to a rule registration: a literal word or a raw pattern.
///
/// Plain strings convert into [`RuleSource::Word`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleSource {
    /// A literal word, matched against the entire input.
    ///
    /// Regex metacharacters in the word are escaped, not interpreted.
    Word(String),
    /// A regular expression, matched anywhere in the input.
    Pattern(String),
}

impl RuleSource {
    /// Creates a literal word source.
    #[must_use]
    pub fn word(word: impl Into<String>) -> Self {
        Self::Word(word.into())
    }

    /// Creates a raw pattern source.
    #[must_use]
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::Pattern(pattern.into())
    }

    /// Returns the regular expression this source compiles to.
    #[must_use]
    pub fn to_regex_source(&self) -> String {
        match self {
            Self::Word(word) => format!("^{}$", fancy_regex::escape(word)),
            Self::Pattern(pattern) => pattern.clone(),
        }
    }

    /// Compiles this source with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidPattern`](crate::ErrorKind::InvalidPattern)
    /// if the regular expression does not compile.
    pub fn compile(&self, config: &EngineConfig) -> Result<Pattern> {
        Pattern::with_config(&self.to_regex_source(), config)
    }
}

impl From<&str> for RuleSource {
    fn from(word: &str) -> Self {
        Self::Word(word.to_string())
    }
}

impl From<String> for RuleSource {
    fn from(word: String) -> Self {
        Self::Word(word)
    }
}

/// A compiled rule pattern that ignores ASCII case.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compiles a pattern with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an invalid pattern error if `source` does not compile.
    pub fn new(source: &str) -> Result<Self> {
        Self::with_config(source, &EngineConfig::default())
    }

    /// Compiles a pattern with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an invalid pattern error if `source` does not compile.
    pub fn with_config(source: &str, config: &EngineConfig) -> Result<Self> {
        let mut builder = RegexBuilder::new(&fold_pattern(source));
        builder.backtrack_limit(config.backtrack_limit);
        if let Some(limit) = config.delegate_size_limit {
            builder.delegate_size_limit(limit);
        }
        let regex = builder
            .build()
            .map_err(|err| Error::invalid_pattern(source, err))?;

        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// Returns the pattern source as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Number of capture groups, including the implicit whole-match group.
    #[must_use]
    pub fn captures_len(&self) -> usize {
        self.regex.captures_len()
    }

    /// Searches `text` for the leftmost match and returns the byte range of
    /// every capture group (`None` for groups that did not participate).
    ///
    /// # Errors
    ///
    /// Returns a match failure if the backtracking engine gives up.
    pub fn captures(&self, text: &str) -> Result<Option<Vec<Option<Range<usize>>>>> {
        let folded = text.to_ascii_lowercase();
        let caps = self
            .regex
            .captures(&folded)
            .map_err(|err| Error::match_failed(&self.source, err))?;

        Ok(caps.map(|caps| {
            (0..caps.len())
                .map(|i| caps.get(i).map(|m| m.start()..m.end()))
                .collect()
        }))
    }

    /// Returns true if the pattern matches anywhere in `text`.
    ///
    /// # Errors
    ///
    /// Returns a match failure if the backtracking engine gives up.
    pub fn is_match(&self, text: &str) -> Result<bool> {
        self.regex
            .is_match(&text.to_ascii_lowercase())
            .map_err(|err| Error::match_failed(&self.source, err))
    }
}

/// Lowercases the ASCII letters of a pattern. Escaped characters and inline
/// flag groups such as `(?x)` or `(?P<name>` keep their case.
fn fold_pattern(source: &str) -> String {
    let mut folded = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                folded.push(c);
                folded.extend(chars.next());
            }
            '(' if chars.peek() == Some(&'?') => {
                folded.push(c);
                folded.extend(chars.next());
                while let Some(flag) = chars.next_if(|&f| f.is_ascii_alphabetic() || f == '-') {
                    folded.push(flag);
                }
            }
            _ => folded.push(c.to_ascii_lowercase()),
        }
    }
    folded
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
