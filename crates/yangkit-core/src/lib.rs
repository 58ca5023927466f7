//! Yangkit toolkit core.
//!
//! This crate contains the foundation of the toolkit:
//! - Lexical recognizers for YANG path expressions
//! - Closed enumerations (XPath axes, NACM policies, content types)
//! - Schema patterns for validating instance members
//! - The toolkit error taxonomy and the single-instance registry
//!
//! Parsing and path evaluation live in higher-level crates and consume
//! the spans, captures, and value sets defined here.

#![doc = include_str!("../../../README.md")]

pub mod enumerations;
pub mod error;
pub mod lexical;
pub mod registry;
pub mod schema_pattern;

use ecow::EcoString;

/// A YANG identifier (module, node, or prefix name), as cheap shared text.
pub type YangIdentifier = EcoString;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::YangIdentifier;
    pub use crate::enumerations::{Axis, ContentType, DefaultDeny, MultiplicativeOp};
    pub use crate::error::{Error, NonexistentSchemaNode};
    pub use crate::lexical::Span;
    pub use crate::schema_pattern::SchemaPattern;
}
