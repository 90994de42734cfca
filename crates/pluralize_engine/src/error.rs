//! Error types for the inflection engine.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the engine.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The main error type for inflection operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid pattern error.
    #[must_use]
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::new(ErrorKind::InvalidPattern {
            pattern: pattern.into(),
            message: message.to_string(),
        })
    }

    /// Creates a match failure error.
    #[must_use]
    pub fn match_failed(pattern: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::new(ErrorKind::MatchFailed {
            pattern: pattern.into(),
            message: message.to_string(),
        })
    }

    /// Returns the pattern source this error refers to.
    #[must_use]
    pub fn pattern(&self) -> &str {
        match &self.kind {
            ErrorKind::InvalidPattern { pattern, .. } | ErrorKind::MatchFailed { pattern, .. } => {
                pattern
            }
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A rule pattern failed to compile.
    #[error("invalid pattern `{pattern}`: {message}")]
    InvalidPattern {
        /// The pattern source as supplied.
        pattern: String,
        /// Message from the regex compiler.
        message: String,
    },

    /// A compiled pattern failed while searching a word.
    #[error("pattern `{pattern}` failed to match: {message}")]
    MatchFailed {
        /// The pattern source that failed.
        pattern: String,
        /// Message from the regex engine.
        message: String,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Registry operation that produced the error.
    pub operation: Option<String>,
    /// Word being inflected, if any.
    pub word: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Sets the word being inflected.
    #[must_use]
    pub fn with_word(mut self, word: impl Into<String>) -> Self {
        self.word = Some(word.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = &self.operation {
            write!(f, "in {operation}")?;
        }
        if let Some(word) = &self.word {
            if self.operation.is_some() {
                write!(f, " ")?;
            }
            write!(f, "while inflecting {word:?}")?;
        }
        Ok(())
    }
}
