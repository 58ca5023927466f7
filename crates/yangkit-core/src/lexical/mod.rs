//! Lexical vocabulary of YANG path expressions.
//!
//! This module defines the anchored recognizers that higher layers (the
//! path parser and XPath evaluator) use to cut tokens out of an input
//! string: identifiers, prefixed names, bracketed predicates, whitespace
//! runs, and numeric literals.
//!
//! Recognition and interpretation are kept separate: a recognizer reports
//! a [`Span`] and typed captures, and never decides whether a failed match
//! is a syntax error. Callers routinely probe several token kinds at the
//! same offset and treat `None` as "try the next kind".
//!
//! ```
//! use yangkit_core::lexical::{match_predicate, Predicate, Quoted};
//!
//! let m = match_predicate("[if:name=\"eth0\"]", 0).unwrap();
//! match m.predicate {
//!     Predicate::NameEq { name, value } => {
//!         assert_eq!(name.unwrap().prefix, Some("if"));
//!         assert_eq!(value, Quoted::Double("eth0"));
//!     }
//!     Predicate::Position(_) => unreachable!(),
//! }
//! ```

mod patterns;
mod span;

// Property-based tests for the recognizers
#[cfg(test)]
mod pattern_property_tests;

pub use patterns::{
    Predicate, PredicateMatch, PrefixedName, Quoted, match_decimal, match_identifier,
    match_integer, match_predicate, match_prefixed_name, match_whitespace,
};
pub use span::Span;
