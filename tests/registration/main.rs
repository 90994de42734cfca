//! Integration tests for runtime registration.
//!
//! Tests that rules added to an English registry take effect immediately:
//! - Custom words and patterns override the built-in data
//! - Exact-match tables keep precedence over later rules
//! - Failed registrations leave the registry untouched
//! - Clones are independent

mod custom_rules;
