//! Replacement template interpolation.
//!
//! Templates reference capture groups with `$0` through `$99`. A marker
//! takes at most two digits, so `$123` is group 12 followed by a literal `3`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([0-9]{1,2})").expect("marker pattern is valid"));

/// Expands the `$N` markers in `template` using `groups`.
///
/// `groups[0]` is the whole match. Markers naming a group that did not
/// participate, or that the pattern does not have, expand to nothing.
#[must_use]
pub fn interpolate(template: &str, groups: &[&str]) -> String {
    MARKER
        .replace_all(template, |caps: &Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| groups.get(index).copied())
                .unwrap_or_default()
        })
        .into_owned()
}

/// Returns the group indices referenced by `template`, in order of appearance.
pub fn markers(template: &str) -> impl Iterator<Item = usize> + '_ {
    MARKER
        .captures_iter(template)
        .filter_map(|caps| caps[1].parse().ok())
}
