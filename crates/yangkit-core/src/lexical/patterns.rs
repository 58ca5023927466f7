//! Anchored recognizers for the lexical vocabulary of YANG path expressions.
//!
//! Each recognizer inspects `input` at byte offset `pos` and either matches a
//! prefix of the remaining text or reports no match. Callers typically try
//! several token kinds at the same offset, so "no match" is an ordinary
//! `None`, never an error. All recognizers are pure functions over immutable
//! input and are safe to call concurrently.
//!
//! The grammar is ASCII throughout; a non-ASCII byte simply terminates (or
//! fails to start) a token. Matches report [`Span`]s in byte offsets and
//! borrow capture text directly from the input.
//!
//! # Example
//!
//! ```
//! use yangkit_core::lexical::{match_identifier, match_whitespace};
//!
//! let input = "  leaf-name rest";
//! let ws = match_whitespace(input, 0);
//! let ident = match_identifier(input, ws.end() as usize).unwrap();
//! assert_eq!(&input[ident.as_range()], "leaf-name");
//! ```

use super::Span;

/// A prefixed (namespace-qualified) name: `prefix:local` or bare `local`.
///
/// Produced by [`match_prefixed_name`]. `prefix` is `None` when the input
/// carried no `prefix:` part; the span covers everything consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixedName<'src> {
    /// The namespace prefix, without the colon.
    pub prefix: Option<&'src str>,
    /// The local part of the name.
    pub local: &'src str,
    /// The full matched span, including the colon if present.
    pub span: Span,
}

/// A quoted literal inside a predicate, tagged with its delimiter style.
///
/// YANG path predicates accept both quote styles; some callers need to know
/// which one was used (for example when echoing the predicate back).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quoted<'src> {
    /// `"..."`: may contain anything except a double quote.
    Double(&'src str),
    /// `'...'`: may contain anything except a single quote.
    Single(&'src str),
}

impl<'src> Quoted<'src> {
    /// Returns the quoted text without its delimiters.
    #[must_use]
    pub fn text(self) -> &'src str {
        match self {
            Quoted::Double(text) | Quoted::Single(text) => text,
        }
    }
}

/// The interior of a matched predicate.
///
/// Exactly one form is produced per successful [`match_predicate`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate<'src> {
    /// A positional index: `[3]`. The digit run may be empty (`[]`),
    /// meaning the position is left unspecified.
    Position(&'src str),
    /// An equality test: `[name='x']` or `[.='x']`. `name` is `None` for
    /// the `.` (current node) form.
    NameEq {
        name: Option<PrefixedName<'src>>,
        value: Quoted<'src>,
    },
}

/// A successful predicate match: the captured interior plus the span of the
/// whole bracketed expression (brackets included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredicateMatch<'src> {
    pub predicate: Predicate<'src>,
    pub span: Span,
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-')
}

/// A byte cursor over the input, anchored at the recognizer's start offset.
///
/// The grammar is ASCII, so all boundaries the scanner stops at are valid
/// `str` indices and captured slices are always well-formed.
#[derive(Clone)]
struct Scanner<'src> {
    input: &'src str,
    pos: usize,
}

impl<'src> Scanner<'src> {
    fn new(input: &'src str, pos: usize) -> Self {
        Self { input, pos }
    }

    /// Peeks at the next byte without consuming it.
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Peeks `n+1` bytes ahead (n=0 is the same as `peek`).
    fn peek_at(&self, n: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + n).copied()
    }

    /// Consumes one byte.
    fn bump(&mut self) {
        self.pos += 1;
    }

    /// Consumes the next byte if it equals `expected`.
    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes bytes while the predicate holds.
    fn eat_while(&mut self, predicate: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&predicate) {
            self.bump();
        }
    }

    /// Consumes a run of space, tab, newline, and carriage-return bytes.
    fn skip_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'));
    }

    /// Extracts input text from `start` to the current position.
    fn text_from(&self, start: usize) -> &'src str {
        &self.input[start..self.pos]
    }

    /// Creates a span from `start` to the current position.
    fn span_from(&self, start: usize) -> Span {
        Span::from(start..self.pos)
    }
}

/// Matches a YANG identifier at `pos`: an ASCII letter or underscore
/// followed by letters, digits, `_`, `.`, or `-`, maximally.
///
/// Returns `None` when the byte at `pos` is not a valid identifier start.
///
/// ```
/// use yangkit_core::lexical::match_identifier;
///
/// let span = match_identifier("if:mtu", 0).unwrap();
/// assert_eq!(span.as_range(), 0..2);
/// assert!(match_identifier("9x", 0).is_none());
/// ```
#[must_use]
pub fn match_identifier(input: &str, pos: usize) -> Option<Span> {
    let mut scanner = Scanner::new(input, pos);
    if !scanner.peek().is_some_and(is_ident_start) {
        return None;
    }
    scanner.bump();
    scanner.eat_while(is_ident_continue);
    Some(scanner.span_from(pos))
}

/// Matches a prefixed name at `pos`: `prefix:local` or a bare `local`.
///
/// The prefixed form is tried first; it applies only when a second
/// identifier immediately follows the colon. Otherwise the match falls back
/// to the bare local name, leaving any trailing colon unconsumed.
///
/// ```
/// use yangkit_core::lexical::match_prefixed_name;
///
/// let pname = match_prefixed_name("if:mtu", 0).unwrap();
/// assert_eq!(pname.prefix, Some("if"));
/// assert_eq!(pname.local, "mtu");
///
/// // No identifier after the colon: the colon is not consumed.
/// let pname = match_prefixed_name("if:", 0).unwrap();
/// assert_eq!(pname.prefix, None);
/// assert_eq!(pname.local, "if");
/// ```
#[must_use]
pub fn match_prefixed_name(input: &str, pos: usize) -> Option<PrefixedName<'_>> {
    let first = match_identifier(input, pos)?;
    let after_first = first.end() as usize;
    let scanner = Scanner::new(input, after_first);
    if scanner.peek() == Some(b':')
        && let Some(second) = match_identifier(input, after_first + 1)
    {
        return Some(PrefixedName {
            prefix: Some(&input[first.as_range()]),
            local: &input[second.as_range()],
            span: Span::new(first.start(), second.end()),
        });
    }
    Some(PrefixedName {
        prefix: None,
        local: &input[first.as_range()],
        span: first,
    })
}

/// Matches a bracketed predicate at `pos`.
///
/// The interior is either an equality test (`name='x'`, `name="x"`, or the
/// `.` form) or a possibly-empty positional digit run; the equality form is
/// tried first so that non-digit content never falls through to an empty
/// positional match. Whitespace around the interior parts is permitted.
/// The brackets anchor the match and are included in the reported span but
/// produce no capture.
///
/// ```
/// use yangkit_core::lexical::{match_predicate, Predicate, Quoted};
///
/// let m = match_predicate("[ 10 ]", 0).unwrap();
/// assert_eq!(m.predicate, Predicate::Position("10"));
///
/// let m = match_predicate("[.='up']", 0).unwrap();
/// let Predicate::NameEq { name, value } = m.predicate else {
///     unreachable!()
/// };
/// assert_eq!(name, None);
/// assert_eq!(value, Quoted::Single("up"));
/// ```
#[must_use]
pub fn match_predicate(input: &str, pos: usize) -> Option<PredicateMatch<'_>> {
    let mut scanner = Scanner::new(input, pos);
    if !scanner.eat(b'[') {
        return None;
    }
    scanner.skip_whitespace();

    // Equality before positional, so `[x]` is a no-match rather than an
    // empty positional index followed by garbage.
    if let Some(m) = match_equality(input, &scanner, pos) {
        return Some(m);
    }

    let digits_start = scanner.pos;
    scanner.eat_while(|b| b.is_ascii_digit());
    let digits = scanner.text_from(digits_start);
    scanner.skip_whitespace();
    if !scanner.eat(b']') {
        return None;
    }
    Some(PredicateMatch {
        predicate: Predicate::Position(digits),
        span: scanner.span_from(pos),
    })
}

/// Attempts the equality alternative of a predicate, starting just inside
/// the opening bracket. Consumes nothing on failure (works on a clone).
fn match_equality<'src>(
    input: &'src str,
    start: &Scanner<'src>,
    open: usize,
) -> Option<PredicateMatch<'src>> {
    let mut scanner = start.clone();
    let name = if scanner.eat(b'.') {
        None
    } else {
        let pname = match_prefixed_name(input, scanner.pos)?;
        scanner.pos = pname.span.end() as usize;
        Some(pname)
    };
    scanner.skip_whitespace();
    if !scanner.eat(b'=') {
        return None;
    }
    scanner.skip_whitespace();
    let value = match scanner.peek()? {
        b'"' => {
            scanner.bump();
            let text_start = scanner.pos;
            scanner.eat_while(|b| b != b'"');
            let text = scanner.text_from(text_start);
            if !scanner.eat(b'"') {
                return None;
            }
            Quoted::Double(text)
        }
        b'\'' => {
            scanner.bump();
            let text_start = scanner.pos;
            scanner.eat_while(|b| b != b'\'');
            let text = scanner.text_from(text_start);
            if !scanner.eat(b'\'') {
                return None;
            }
            Quoted::Single(text)
        }
        _ => return None,
    };
    scanner.skip_whitespace();
    if !scanner.eat(b']') {
        return None;
    }
    Some(PredicateMatch {
        predicate: Predicate::NameEq { name, value },
        span: scanner.span_from(open),
    })
}

/// Matches a maximal run of space, tab, newline, and carriage-return bytes
/// at `pos`. Always succeeds; the span is empty when no whitespace is
/// present (including at end of input).
#[must_use]
pub fn match_whitespace(input: &str, pos: usize) -> Span {
    let mut scanner = Scanner::new(input, pos);
    scanner.skip_whitespace();
    Span::from(pos..scanner.pos)
}

/// Matches an integer literal at `pos`: one or more decimal digits.
#[must_use]
pub fn match_integer(input: &str, pos: usize) -> Option<Span> {
    let mut scanner = Scanner::new(input, pos);
    if !scanner.peek().is_some_and(|b| b.is_ascii_digit()) {
        return None;
    }
    scanner.eat_while(|b| b.is_ascii_digit());
    Some(scanner.span_from(pos))
}

/// Matches a decimal literal at `pos`: `digits`, `digits.digits`, or
/// `.digits`.
///
/// A trailing dot is never consumed: for `"123."` only `123` matches. A
/// bare `.` does not match at all.
///
/// ```
/// use yangkit_core::lexical::match_decimal;
///
/// assert_eq!(match_decimal("123.45", 0).unwrap().as_range(), 0..6);
/// assert_eq!(match_decimal(".45", 0).unwrap().as_range(), 0..3);
/// assert_eq!(match_decimal("123.", 0).unwrap().as_range(), 0..3);
/// assert!(match_decimal(".", 0).is_none());
/// ```
#[must_use]
pub fn match_decimal(input: &str, pos: usize) -> Option<Span> {
    let mut scanner = Scanner::new(input, pos);
    if scanner.peek().is_some_and(|b| b.is_ascii_digit()) {
        scanner.eat_while(|b| b.is_ascii_digit());
        // Fractional part only when a digit follows the dot.
        if scanner.peek() == Some(b'.') && scanner.peek_at(1).is_some_and(|b| b.is_ascii_digit()) {
            scanner.bump();
            scanner.eat_while(|b| b.is_ascii_digit());
        }
        Some(scanner.span_from(pos))
    } else if scanner.peek() == Some(b'.') && scanner.peek_at(1).is_some_and(|b| b.is_ascii_digit())
    {
        scanner.bump();
        scanner.eat_while(|b| b.is_ascii_digit());
        Some(scanner.span_from(pos))
    } else {
        None
    }
}
