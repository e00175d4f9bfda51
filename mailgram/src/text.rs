//! Parsers for byte grammars whose value is the matched text.
//!
//! Grammars like RFC 5234 and RFC 5322 describe which input is valid, not what it means. Their rules
//! are [`Rule`]s: parsers whose value is exactly the text they matched. The combinators of this
//! module keep that property by concatenating the matched text of their parts, so that a rule built
//! from other rules is again a [`Rule`].
use bstr::BString;

use crate::{combinator, from_fn, BoxedParser, Failure, Parser};

/// A parser whose value is the text it matched.
pub type Rule = BoxedParser<BString>;

/// Matches a single byte accepted by `check`.
///
/// When `check` rejects the byte, the failure it returns is placed at the position of the byte.
/// This allows the author of a predicate to pick the severity and message. At the end of the input
/// this fails softly.
pub fn byte_check<F>(check: F) -> Rule
where
    F: Fn(u8) -> Result<(), Failure> + Send + Sync + 'static,
{
    from_fn(move |input| match input.peek() {
        Some(byte) => match check(byte) {
            Ok(()) => {
                let rest = input.advance(1);
                Ok((rest.consumed_since(&input).into(), rest))
            }
            Err(failure) => Err(failure.at(input.position())),
        },
        None => Err(Failure::soft("unexpected end of input").at(input.position())),
    })
}

/// Matches a single byte for which `predicate` holds, failing softly with `reason` otherwise.
pub fn byte_where<F>(reason: &'static str, predicate: F) -> Rule
where
    F: Fn(u8) -> bool + Send + Sync + 'static,
{
    byte_check(move |byte| {
        if predicate(byte) {
            Ok(())
        } else {
            Err(Failure::soft(reason))
        }
    })
}

/// Matches a single byte within any of the inclusive `ranges`.
pub fn byte_ranges(reason: &'static str, ranges: &[(u8, u8)]) -> Rule {
    let ranges = ranges.to_vec();
    byte_where(reason, move |byte| {
        ranges.iter().any(|&(low, high)| (low..=high).contains(&byte))
    })
}

/// Matches the single byte `expected`.
pub fn byte(reason: &'static str, expected: u8) -> Rule {
    byte_where(reason, move |byte| byte == expected)
}

/// Matches a single byte contained in `bytes`.
pub fn one_of(reason: &'static str, bytes: &'static [u8]) -> Rule {
    byte_where(reason, move |byte| bytes.contains(&byte))
}

/// Matches the fixed byte sequence `fixed`.
pub fn literal(fixed: &'static str) -> Rule {
    let reason = format!("expected {fixed:?}");
    from_fn(move |input| {
        if input.rest().starts_with(fixed.as_bytes()) {
            let rest = input.advance(fixed.len());
            Ok((rest.consumed_since(&input).into(), rest))
        } else {
            Err(Failure::soft(reason.clone()).at(input.position()))
        }
    })
}

/// Concatenates the text matched by a sequence of parsers.
pub fn flat(parser: BoxedParser<Vec<BString>>) -> Rule {
    parser.map(|parts| match <[_; 1]>::try_from(parts) {
        Ok([single]) => single,
        Err(parts) => {
            let mut text = BString::default();
            for part in parts {
                text.extend_from_slice(&part);
            }
            text
        }
    })
}

/// Runs `parts` one after the other and matches their concatenated text.
///
/// See [`combinator::sequence`].
pub fn seq(parts: impl IntoIterator<Item = Rule>) -> Rule {
    flat(combinator::sequence(parts))
}

/// Matches the first of `alternatives` that matches.
///
/// See [`combinator::choice`].
pub fn alt(alternatives: impl IntoIterator<Item = Rule>) -> Rule {
    combinator::choice(alternatives)
}

/// Matches `rule` zero or more times.
///
/// See [`combinator::many`].
pub fn many(rule: Rule) -> Rule {
    flat(combinator::many(rule))
}

/// Matches `rule` exactly `count` times.
///
/// See [`combinator::exactly`].
pub fn exactly(count: usize, rule: Rule) -> Rule {
    flat(combinator::exactly(count, rule))
}

/// Matches `rule` at least `count` times.
///
/// See [`combinator::at_least`].
pub fn at_least(count: usize, rule: Rule) -> Rule {
    flat(combinator::at_least(count, rule))
}

/// Matches `rule` or the empty text.
///
/// See [`combinator::optional`].
pub fn maybe(rule: Rule) -> Rule {
    combinator::optional(rule).map(Option::unwrap_or_default)
}

/// Matches `inner` surrounded by `before` and `after`.
pub fn wrapped(before: Rule, inner: Rule, after: Rule) -> Rule {
    seq([before, inner, after])
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::{FailKind, ParseResult};

    fn matched(result: ParseResult<BString>) -> Option<String> {
        result.ok().map(|(text, _)| text.to_string())
    }

    #[test]
    fn byte_level() {
        let digit = byte_ranges("invalid DIGIT", &[(b'0', b'9')]);
        assert_eq!(matched(digit.parse_bytes(b"42")), Some("4".into()));
        assert_matches!(
            digit.parse_bytes(b"x"),
            Err(Failure { kind: FailKind::Soft, offset: 0, ref reason }) if reason == "invalid DIGIT"
        );
        assert_matches!(
            digit.parse_bytes(b""),
            Err(Failure { ref reason, .. }) if reason == "unexpected end of input"
        );
        assert_eq!(matched(one_of("sign", b"+-").parse_bytes(b"-1")), Some("-".into()));
        assert_eq!(matched(byte("x", b'x').parse_bytes(b"y")), None);
    }

    #[test]
    fn predicate_chooses_severity() {
        let ascii = byte_check(|byte| {
            if byte.is_ascii() {
                Ok(())
            } else {
                Err(Failure::hard("8-bit byte"))
            }
        });
        let parser = seq([literal("a"), ascii]);
        assert_matches!(
            parser.parse_bytes(b"a\xff"),
            Err(Failure { kind: FailKind::Hard, offset: 1, .. })
        );
    }

    #[test]
    fn literals() {
        let at = literal("@");
        assert_eq!(matched(at.parse_bytes(b"@x")), Some("@".into()));
        assert_eq!(at.parse_bytes(b"x").unwrap_err().reason, "expected \"@\"");
        assert_eq!(literal("\r\n").parse_bytes(b"\r").unwrap_err().offset, 0);
    }

    #[test]
    fn text_is_concatenated() {
        let a = literal("a");
        let b = literal("b");
        let parser = seq([at_least(1, a.clone()), maybe(b.clone()), many(a.clone())]);
        assert_eq!(matched(parser.parse_bytes(b"aabaa!")), Some("aabaa".into()));
        assert_eq!(matched(parser.parse_bytes(b"aa")), Some("aa".into()));
        assert_eq!(matched(parser.parse_bytes(b"b")), None);
        assert_eq!(matched(exactly(2, b).parse_bytes(b"bbb")), Some("bb".into()));
        assert_eq!(matched(many(a).parse_bytes(b"")), Some("".into()));
    }

    #[test]
    fn alternatives_and_wrapping() {
        let parser = wrapped(
            literal("("),
            alt([literal("ab"), literal("a")]),
            literal(")"),
        );
        assert_eq!(matched(parser.parse_bytes(b"(a)")), Some("(a)".into()));
        assert_eq!(matched(parser.parse_bytes(b"(ab)")), Some("(ab)".into()));
        assert_eq!(matched(parser.parse_bytes(b"(b)")), None);
    }

    #[test]
    fn matched_text_equals_consumed_input() {
        let parser = seq([many(literal(" ")), literal("x"), maybe(literal("y"))]);
        let input = b"  xyz";
        let (text, rest) = parser.parse_bytes(input).unwrap();
        assert_eq!(text.as_slice(), &input[..rest.position()]);
    }
}
