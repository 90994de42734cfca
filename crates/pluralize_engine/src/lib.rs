//! Rule engine for English noun inflection.
//!
//! This crate provides:
//! - [`Pluralizer`] - The registry that resolves plural and singular forms
//! - [`RuleSet`] - Ordered pattern rules where the newest match wins
//! - [`IrregularTable`] / [`UncountableSet`] - Exact-match lookups
//! - [`interpolate`](interpolate::interpolate) - `$N` template expansion
//! - [`restore_case`](case::restore_case) - Casing transfer onto replacements
//! - [`Error`] - Registration and matching errors
//!
//! # Resolution
//!
//! ```text
//! "Boxes"
//!    │ lowercase
//!    ▼
//! "boxes" ── irregular table ──► case-restored pair
//!    │
//!    ├────── uncountable set ──► word unchanged
//!    ▼
//! rule set (newest → oldest) ──► interpolate "$1" ──► restore case ──► "Box"
//! ```
//!
//! The registry ships empty; `pluralize_english` installs the standard
//! English data.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod case;
pub mod config;
pub mod engine;
pub mod error;
pub mod interpolate;
pub mod pattern;
pub mod rule;
pub mod tables;

pub use case::{Casing, restore_case};
pub use config::EngineConfig;
pub use engine::Pluralizer;
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use pattern::{Pattern, RuleSource};
pub use rule::{Rule, RuleMatch, RuleSet};
pub use tables::{IrregularTable, UncountableSet};
