//! Schema patterns for validating the members of an instance node.
//!
//! A schema node's children induce a pattern over member names; validation
//! asks two questions of it: "may this instance stop here?" (nullability)
//! and "what remains after consuming member `x`?" (the Brzozowski
//! derivative). An instance's member set is valid when repeatedly deriving
//! by each present member leaves a nullable pattern.
//!
//! Patterns are content-type aware: a `config`-only member is invisible
//! when validating state data, and vice versa (see
//! [`ContentType::intersects`]). Subpatterns are shared via [`Arc`]
//! because derivatives reuse whole branches of the original pattern.

use std::fmt;
use std::sync::Arc;

use ecow::EcoString;

use crate::enumerations::ContentType;
use crate::registry;

/// A pattern over the member names of an instance node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaPattern {
    /// Accepts exactly the empty member set.
    Empty,
    /// Accepts nothing.
    NotAllowed,
    /// Accepts exactly one member with the given name, applicable only to
    /// the given content type.
    Member { name: EcoString, ctype: ContentType },
    /// A named choice between two alternatives, applicable only to the
    /// given content type.
    Choice {
        name: EcoString,
        left: Arc<SchemaPattern>,
        right: Arc<SchemaPattern>,
        ctype: ContentType,
    },
    /// Accepts what either branch accepts.
    Alternative {
        left: Arc<SchemaPattern>,
        right: Arc<SchemaPattern>,
    },
    /// Accepts any interleaving of what the two branches accept.
    Pair {
        left: Arc<SchemaPattern>,
        right: Arc<SchemaPattern>,
    },
}

impl SchemaPattern {
    /// The process-wide empty pattern.
    ///
    /// `Empty` terminates every derivation chain, so sharing one instance
    /// keeps derivatives from allocating at the leaves.
    #[must_use]
    pub fn empty() -> Arc<SchemaPattern> {
        registry::instance_of(|| SchemaPattern::Empty)
    }

    /// A member pattern for `name`, applicable to `ctype`.
    #[must_use]
    pub fn member(name: impl Into<EcoString>, ctype: ContentType) -> Arc<SchemaPattern> {
        Arc::new(SchemaPattern::Member {
            name: name.into(),
            ctype,
        })
    }

    /// A named choice between `left` and `right`.
    #[must_use]
    pub fn choice(
        name: impl Into<EcoString>,
        left: Arc<SchemaPattern>,
        right: Arc<SchemaPattern>,
        ctype: ContentType,
    ) -> Arc<SchemaPattern> {
        Arc::new(SchemaPattern::Choice {
            name: name.into(),
            left,
            right,
            ctype,
        })
    }

    /// Combines two patterns into an alternative, dropping `NotAllowed`
    /// branches.
    #[must_use]
    pub fn alternative(left: Arc<SchemaPattern>, right: Arc<SchemaPattern>) -> Arc<SchemaPattern> {
        if matches!(*left, SchemaPattern::NotAllowed) {
            return right;
        }
        if matches!(*right, SchemaPattern::NotAllowed) {
            return left;
        }
        Arc::new(SchemaPattern::Alternative { left, right })
    }

    /// Combines two patterns into an interleaving pair, dropping `Empty`
    /// branches and short-circuiting `NotAllowed`.
    #[must_use]
    pub fn pair(left: Arc<SchemaPattern>, right: Arc<SchemaPattern>) -> Arc<SchemaPattern> {
        if matches!(*left, SchemaPattern::Empty) {
            return right;
        }
        if matches!(*right, SchemaPattern::Empty) {
            return left;
        }
        if matches!(*left, SchemaPattern::NotAllowed) {
            return left;
        }
        if matches!(*right, SchemaPattern::NotAllowed) {
            return right;
        }
        Arc::new(SchemaPattern::Pair { left, right })
    }

    /// Makes `pattern` optional: an alternative with `Empty`.
    #[must_use]
    pub fn optional(pattern: Arc<SchemaPattern>) -> Arc<SchemaPattern> {
        Self::alternative(Self::empty(), pattern)
    }

    /// Returns true when the pattern accepts the empty member set for the
    /// given content type.
    ///
    /// A member (or choice) whose content type does not intersect `ctype`
    /// does not apply at all, and is therefore nullable.
    #[must_use]
    pub fn nullable(&self, ctype: ContentType) -> bool {
        match self {
            SchemaPattern::Empty => true,
            SchemaPattern::NotAllowed => false,
            SchemaPattern::Member { ctype: ct, .. } | SchemaPattern::Choice { ctype: ct, .. } => {
                !ct.intersects(ctype)
            }
            SchemaPattern::Alternative { left, right } => {
                left.nullable(ctype) || right.nullable(ctype)
            }
            SchemaPattern::Pair { left, right } => left.nullable(ctype) && right.nullable(ctype),
        }
    }

    /// Returns the derivative of the pattern with respect to member `name`:
    /// what must still be matched after that member has been consumed.
    #[must_use]
    pub fn deriv(&self, name: &str, ctype: ContentType) -> Arc<SchemaPattern> {
        match self {
            SchemaPattern::Empty | SchemaPattern::NotAllowed => {
                Arc::new(SchemaPattern::NotAllowed)
            }
            SchemaPattern::Member { name: member, ctype: ct } => {
                if member.as_str() == name && ct.intersects(ctype) {
                    Self::empty()
                } else {
                    Arc::new(SchemaPattern::NotAllowed)
                }
            }
            SchemaPattern::Choice { left, right, ctype: ct, .. } => {
                if ct.intersects(ctype) {
                    Self::alternative(left.deriv(name, ctype), right.deriv(name, ctype))
                } else {
                    Arc::new(SchemaPattern::NotAllowed)
                }
            }
            SchemaPattern::Alternative { left, right } => {
                Self::alternative(left.deriv(name, ctype), right.deriv(name, ctype))
            }
            SchemaPattern::Pair { left, right } => Self::alternative(
                Self::pair(left.deriv(name, ctype), Arc::clone(right)),
                Self::pair(right.deriv(name, ctype), Arc::clone(left)),
            ),
        }
    }

    /// Renders the pattern as an indented tree, for debugging schema
    /// construction.
    #[must_use]
    pub fn tree(&self, indent: usize) -> String {
        let pad = " ".repeat(indent);
        match self {
            SchemaPattern::Empty => format!("{pad}Empty"),
            SchemaPattern::NotAllowed => format!("{pad}NotAllowed"),
            SchemaPattern::Member { name, .. } => format!("{pad}Member {name}"),
            SchemaPattern::Choice { name, left, right, .. } => format!(
                "{pad}Choice {name}\n{}\n{}",
                left.tree(indent + 2),
                right.tree(indent + 2)
            ),
            SchemaPattern::Alternative { left, right } => format!(
                "{pad}Alternative\n{}\n{}",
                left.tree(indent + 2),
                right.tree(indent + 2)
            ),
            SchemaPattern::Pair { left, right } => format!(
                "{pad}Pair\n{}\n{}",
                left.tree(indent + 2),
                right.tree(indent + 2)
            ),
        }
    }
}

impl fmt::Display for SchemaPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaPattern::Empty => f.write_str("Empty"),
            SchemaPattern::NotAllowed => f.write_str("NotAllowed"),
            SchemaPattern::Member { name, .. } => write!(f, "member '{name}'"),
            SchemaPattern::Choice { name, .. } => write!(f, "choice '{name}'"),
            SchemaPattern::Alternative { .. } => f.write_str("alternative"),
            SchemaPattern::Pair { left, right } => write!(f, "{left}, {right}"),
        }
    }
}
