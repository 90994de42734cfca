//! Configuration for pattern compilation.

/// Default backtracking budget for patterns that need the backtracking VM.
pub const DEFAULT_BACKTRACK_LIMIT: usize = 1_000_000;

/// Configuration applied to every pattern a registry compiles.
///
/// Patterns without lookaround or backreferences are delegated to the
/// linear-time `regex` engine, so the backtrack limit only matters for
/// caller-supplied rules that use those features.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of backtracking steps per search.
    pub backtrack_limit: usize,

    /// Size limit for compiled delegate programs (`None` = library default).
    pub delegate_size_limit: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            backtrack_limit: DEFAULT_BACKTRACK_LIMIT,
            delegate_size_limit: None,
        }
    }
}

impl EngineConfig {
    /// Builder method to set the backtrack limit.
    #[must_use]
    pub fn with_backtrack_limit(mut self, limit: usize) -> Self {
        self.backtrack_limit = limit;
        self
    }

    /// Builder method to set the delegate size limit.
    #[must_use]
    pub fn with_delegate_size_limit(mut self, limit: usize) -> Self {
        self.delegate_size_limit = Some(limit);
        self
    }
}
