//! Error taxonomy for the toolkit core.
//!
//! Errors are structured values matched by variant, not by downcasting.
//! They integrate with [`miette`] for diagnostic reporting. Lexical
//! recognizers never appear here: a failed match is a routine `None`, not
//! an error.

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

use crate::YangIdentifier;

/// Any error produced by the toolkit core.
///
/// Higher-level crates wrap this into their own taxonomies; at this layer
/// the only failure mode is a schema-node lookup that found nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    NonexistentSchemaNode(#[from] NonexistentSchemaNode),
}

/// A schema-node lookup failed: no node named `name` exists, optionally
/// qualified by the module `ns` in which the lookup took place.
///
/// Renders as `"<name> in module <ns>"`, or just `"<name>"` when no module
/// context is known.
///
/// ```
/// use yangkit_core::error::NonexistentSchemaNode;
///
/// let err = NonexistentSchemaNode::new("foo").in_module("bar");
/// assert_eq!(err.to_string(), "foo in module bar");
///
/// let err = NonexistentSchemaNode::new("foo");
/// assert_eq!(err.to_string(), "foo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[diagnostic(code(yangkit::schema::nonexistent_node))]
pub struct NonexistentSchemaNode {
    /// The identifier that failed to resolve.
    pub name: YangIdentifier,
    /// The module searched, when a specific module context applies.
    pub ns: Option<YangIdentifier>,
}

impl NonexistentSchemaNode {
    /// Creates an error for `name` with no module context.
    #[must_use]
    pub fn new(name: impl Into<YangIdentifier>) -> Self {
        Self {
            name: name.into(),
            ns: None,
        }
    }

    /// Attaches the module in which the lookup took place.
    #[must_use]
    pub fn in_module(mut self, ns: impl Into<YangIdentifier>) -> Self {
        self.ns = Some(ns.into());
        self
    }
}

impl fmt::Display for NonexistentSchemaNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ns {
            Some(ns) => write!(f, "{} in module {}", self.name, ns),
            None => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_with_module() {
        let err = NonexistentSchemaNode::new("foo").in_module("bar");
        assert_eq!(err.to_string(), "foo in module bar");
    }

    #[test]
    fn renders_without_module() {
        let err = NonexistentSchemaNode::new("foo");
        assert_eq!(err.to_string(), "foo");
    }

    #[test]
    fn wraps_into_crate_error() {
        let err: Error = NonexistentSchemaNode::new("mtu").in_module("ietf-ip").into();
        assert_eq!(err.to_string(), "mtu in module ietf-ip");
        let Error::NonexistentSchemaNode(inner) = err;
        assert_eq!(inner.name, "mtu");
        assert_eq!(inner.ns.as_deref(), Some("ietf-ip"));
    }
}
