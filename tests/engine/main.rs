//! Integration tests for the pluralize_engine crate.
//!
//! Tests for the rule engine on hand-built registries:
//! - Rule set scanning and precedence
//! - Interpolation and case restoration through rules
//! - Irregular and uncountable tables
//! - Registry resolution order

mod rules;
