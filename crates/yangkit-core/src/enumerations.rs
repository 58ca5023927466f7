//! Closed enumerations shared across the toolkit.
//!
//! These are fixed value sets consumed by the access-control,
//! path-evaluation, and data-filtering layers. Each has a stable keyword
//! form, exposed through `Display` and [`FromStr`], that external
//! serializations rely on.

use std::fmt;
use std::str::FromStr;

use ecow::EcoString;
use thiserror::Error;

/// A keyword that does not name a value of the target enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown keyword '{0}'")]
pub struct UnknownKeyword(pub EcoString);

/// NACM default-deny policy (RFC 8341) attached to a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultDeny {
    /// No default restriction.
    None,
    /// Write access denied by default (`nacm:default-deny-write`).
    Write,
    /// All access denied by default (`nacm:default-deny-all`).
    All,
}

impl DefaultDeny {
    /// The stable keyword form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DefaultDeny::None => "none",
            DefaultDeny::Write => "write",
            DefaultDeny::All => "all",
        }
    }
}

impl fmt::Display for DefaultDeny {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DefaultDeny {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(DefaultDeny::None),
            "write" => Ok(DefaultDeny::Write),
            "all" => Ok(DefaultDeny::All),
            _ => Err(UnknownKeyword(s.into())),
        }
    }
}

/// XPath traversal axes implemented by the path evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Ancestor,
    AncestorOrSelf,
    Attribute,
    Child,
    Descendant,
    DescendantOrSelf,
    FollowingSibling,
    Parent,
    PrecedingSibling,
    Self_,
}

impl Axis {
    /// The axis keyword as spelled in path expressions.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Axis::Ancestor => "ancestor",
            Axis::AncestorOrSelf => "ancestor-or-self",
            Axis::Attribute => "attribute",
            Axis::Child => "child",
            Axis::Descendant => "descendant",
            Axis::DescendantOrSelf => "descendant-or-self",
            Axis::FollowingSibling => "following-sibling",
            Axis::Parent => "parent",
            Axis::PrecedingSibling => "preceding-sibling",
            Axis::Self_ => "self",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ancestor" => Ok(Axis::Ancestor),
            "ancestor-or-self" => Ok(Axis::AncestorOrSelf),
            "attribute" => Ok(Axis::Attribute),
            "child" => Ok(Axis::Child),
            "descendant" => Ok(Axis::Descendant),
            "descendant-or-self" => Ok(Axis::DescendantOrSelf),
            "following-sibling" => Ok(Axis::FollowingSibling),
            "parent" => Ok(Axis::Parent),
            "preceding-sibling" => Ok(Axis::PrecedingSibling),
            "self" => Ok(Axis::Self_),
            _ => Err(UnknownKeyword(s.into())),
        }
    }
}

/// XPath multiplicative operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MultiplicativeOp {
    Multiply,
    Divide,
    Modulo,
}

impl MultiplicativeOp {
    /// The operator as spelled in XPath expressions.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MultiplicativeOp::Multiply => "*",
            MultiplicativeOp::Divide => "div",
            MultiplicativeOp::Modulo => "mod",
        }
    }
}

impl fmt::Display for MultiplicativeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MultiplicativeOp {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "*" => Ok(MultiplicativeOp::Multiply),
            "div" => Ok(MultiplicativeOp::Divide),
            "mod" => Ok(MultiplicativeOp::Modulo),
            _ => Err(UnknownKeyword(s.into())),
        }
    }
}

/// Classification of data nodes by the kind of content they carry.
///
/// The discriminants form a bitmask: `All` is the union of `Config` and
/// `Nonconfig`, and content-type compatibility checks are bitwise
/// intersections (see [`ContentType::intersects`]). The schema-pattern
/// machinery depends on this encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ContentType {
    /// Configuration data only.
    Config = 0b01,
    /// State (non-configuration) data only.
    Nonconfig = 0b10,
    /// Both kinds of content.
    All = 0b11,
}

impl ContentType {
    /// Returns true when the two content types have any overlap.
    ///
    /// `All` overlaps everything; `Config` and `Nonconfig` are disjoint.
    #[must_use]
    pub const fn intersects(self, other: ContentType) -> bool {
        (self as u8) & (other as u8) != 0
    }

    /// The stable keyword form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ContentType::Config => "config",
            ContentType::Nonconfig => "nonconfig",
            ContentType::All => "all",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "config" => Ok(ContentType::Config),
            "nonconfig" => Ok(ContentType::Nonconfig),
            "all" => Ok(ContentType::All),
            _ => Err(UnknownKeyword(s.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_round_trips() {
        for axis in [
            Axis::Ancestor,
            Axis::AncestorOrSelf,
            Axis::Attribute,
            Axis::Child,
            Axis::Descendant,
            Axis::DescendantOrSelf,
            Axis::FollowingSibling,
            Axis::Parent,
            Axis::PrecedingSibling,
            Axis::Self_,
        ] {
            assert_eq!(axis.as_str().parse::<Axis>().unwrap(), axis);
        }
        assert_eq!("write".parse::<DefaultDeny>().unwrap(), DefaultDeny::Write);
        assert_eq!("mod".parse::<MultiplicativeOp>().unwrap(), MultiplicativeOp::Modulo);
        assert_eq!("nonconfig".parse::<ContentType>().unwrap(), ContentType::Nonconfig);
    }

    #[test]
    fn unknown_keyword_is_rejected() {
        let err = "sibling".parse::<Axis>().unwrap_err();
        assert_eq!(err.to_string(), "unknown keyword 'sibling'");
    }

    #[test]
    fn axis_keywords_are_hyphenated() {
        assert_eq!(Axis::AncestorOrSelf.to_string(), "ancestor-or-self");
        assert_eq!(Axis::FollowingSibling.to_string(), "following-sibling");
    }

    #[test]
    fn content_type_intersection() {
        assert!(ContentType::All.intersects(ContentType::Config));
        assert!(ContentType::All.intersects(ContentType::Nonconfig));
        assert!(ContentType::Config.intersects(ContentType::All));
        assert!(ContentType::Config.intersects(ContentType::Config));
        assert!(!ContentType::Config.intersects(ContentType::Nonconfig));
        assert!(!ContentType::Nonconfig.intersects(ContentType::Config));
    }
}
