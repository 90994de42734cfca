//! Case restoration.
//!
//! A replacement is always computed from rule text, so its casing has to be
//! copied back from the part of the input it replaces.

/// The casing style of a piece of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Casing {
    /// No uppercase characters, e.g. "hello".
    Lower,
    /// No lowercase characters, e.g. "WHISKY".
    Upper,
    /// Leading ASCII capital followed by anything, e.g. "Title" or "McDonald".
    Title,
    /// Anything else, e.g. "iPhone".
    Mixed,
}

impl Casing {
    /// Classifies `text`.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        if text == text.to_lowercase() {
            Self::Lower
        } else if text == text.to_uppercase() {
            Self::Upper
        } else if text.starts_with(|c: char| c.is_ascii_uppercase()) {
            Self::Title
        } else {
            Self::Mixed
        }
    }

    /// Rewrites `text` in this casing style. Mixed text falls back to lowercase.
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Lower | Self::Mixed => text.to_lowercase(),
            Self::Upper => text.to_uppercase(),
            Self::Title => {
                let mut chars = text.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.as_str().to_lowercase().chars())
                        .collect(),
                }
            }
        }
    }
}

/// Copies the casing of `original` onto `candidate`.
///
/// Identical text is returned as-is, which keeps identity rules (`$0`)
/// from normalizing oddly-cased input.
#[must_use]
pub fn restore_case(original: &str, candidate: &str) -> String {
    if candidate.is_empty() || original == candidate {
        return candidate.to_string();
    }
    Casing::detect(original).apply(candidate)
}
