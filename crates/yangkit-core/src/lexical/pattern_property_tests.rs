//! Property-based tests for the lexical recognizers.
//!
//! These tests use `proptest` to verify recognizer invariants over generated
//! inputs:
//!
//! 1. **Recognizers never panic** — arbitrary input and offsets are safe
//! 2. **Spans stay within input** — every match satisfies `end <= input.len()`
//! 3. **Matches are anchored** — every match starts at the requested offset
//! 4. **Recognizers are deterministic** — same input, same result
//! 5. **Valid shapes always match** — generated identifiers, prefixed names,
//!    positional predicates, and decimals are recognized in full

use proptest::prelude::*;

use super::patterns::{
    Predicate, match_decimal, match_identifier, match_integer, match_predicate,
    match_prefixed_name, match_whitespace,
};

/// Strategy for valid identifiers.
fn identifier() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_.-]{0,20}"
}

proptest! {
    /// Property 1: no recognizer panics on arbitrary input and offset.
    #[test]
    fn recognizers_never_panic(input in "\\PC{0,100}", pos in 0usize..120) {
        let _ = match_identifier(&input, pos);
        let _ = match_prefixed_name(&input, pos);
        let _ = match_predicate(&input, pos);
        let _ = match_whitespace(&input, pos);
        let _ = match_integer(&input, pos);
        let _ = match_decimal(&input, pos);
    }

    /// Property 2 and 3: matches are anchored at `pos` and bounded by the
    /// input length.
    #[test]
    fn matches_are_anchored_and_bounded(input in "\\PC{0,100}", pos in 0usize..120) {
        let len = input.len();
        for span in [
            match_identifier(&input, pos),
            match_integer(&input, pos),
            match_decimal(&input, pos),
            match_prefixed_name(&input, pos).map(|p| p.span),
            match_predicate(&input, pos).map(|m| m.span),
        ]
        .into_iter()
        .flatten()
        {
            prop_assert_eq!(span.start() as usize, pos);
            prop_assert!(span.end() as usize <= len);
            prop_assert!(span.end() >= span.start());
        }
        let ws = match_whitespace(&input, pos);
        prop_assert_eq!(ws.start() as usize, pos);
    }

    /// Property 4: recognizers are pure functions of their arguments.
    #[test]
    fn recognizers_are_deterministic(input in "\\PC{0,100}") {
        prop_assert_eq!(match_identifier(&input, 0), match_identifier(&input, 0));
        prop_assert_eq!(match_prefixed_name(&input, 0), match_prefixed_name(&input, 0));
        prop_assert_eq!(match_predicate(&input, 0), match_predicate(&input, 0));
        prop_assert_eq!(match_decimal(&input, 0), match_decimal(&input, 0));
    }

    /// Property 5a: a valid identifier matches maximally; appending a
    /// non-identifier byte never changes the matched prefix.
    #[test]
    fn identifier_matches_maximal_prefix(ident in identifier(), tail in "[ /\\[\\]=:']{0,5}") {
        let input = format!("{ident}{tail}");
        let span = match_identifier(&input, 0).unwrap();
        prop_assert_eq!(&input[span.as_range()], ident.as_str());
    }

    /// Property 5b: `p:l` captures prefix and local; bare `l` has no prefix.
    #[test]
    fn prefixed_name_captures(p in identifier(), l in identifier()) {
        let input = format!("{p}:{l}");
        let pname = match_prefixed_name(&input, 0).unwrap();
        prop_assert_eq!(pname.prefix, Some(p.as_str()));
        prop_assert_eq!(pname.local, l.as_str());
        prop_assert_eq!(pname.span.end() as usize, input.len());

        let pname = match_prefixed_name(&l, 0).unwrap();
        prop_assert_eq!(pname.prefix, None);
        prop_assert_eq!(pname.local, l.as_str());
    }

    /// Property 5c: any digit run (possibly empty) in brackets is a
    /// positional predicate capturing exactly those digits.
    #[test]
    fn positional_predicate_captures_digits(digits in "[0-9]{0,8}") {
        let input = format!("[{digits}]");
        let m = match_predicate(&input, 0).unwrap();
        prop_assert_eq!(m.predicate, Predicate::Position(digits.as_str()));
        prop_assert_eq!(m.span.end() as usize, input.len());
    }

    /// Property 5d: every decimal shape is matched in full, and a trailing
    /// dot is never consumed.
    #[test]
    fn decimal_shapes(int in "[0-9]{1,8}", frac in "[0-9]{1,8}") {
        let whole = format!("{int}.{frac}");
        prop_assert_eq!(match_decimal(&whole, 0).unwrap().len() as usize, whole.len());

        let leading_dot = format!(".{frac}");
        prop_assert_eq!(
            match_decimal(&leading_dot, 0).unwrap().len() as usize,
            leading_dot.len()
        );

        let trailing_dot = format!("{int}.");
        prop_assert_eq!(
            match_decimal(&trailing_dot, 0).unwrap().len() as usize,
            int.len()
        );
    }

    /// Whitespace always succeeds and consumes a maximal run.
    #[test]
    fn whitespace_consumes_maximal_run(ws in "[ \t\r\n]{0,10}", tail in "[a-z]{0,5}") {
        let input = format!("{ws}{tail}");
        let span = match_whitespace(&input, 0);
        prop_assert_eq!(span.len() as usize, ws.len());
    }
}
