//! The core rules of [RFC 5234 Appendix B.1](https://datatracker.ietf.org/doc/html/rfc5234#appendix-B.1).
//!
//! Each function returns a fresh [`Rule`] for one production. All rules of this crate fail softly:
//! a mismatch at this level only means that the enclosing grammar has to try something else.
//!
//! ```text
//! ALPHA   =  %x41-5A / %x61-7A   ; A-Z / a-z
//! BIT     =  "0" / "1"
//! CHAR    =  %x01-7F
//! CR      =  %x0D
//! CRLF    =  CR LF
//! CTL     =  %x00-1F / %x7F
//! DIGIT   =  %x30-39
//! DQUOTE  =  %x22
//! HEXDIG  =  DIGIT / "A" / "B" / "C" / "D" / "E" / "F"
//! HTAB    =  %x09
//! LF      =  %x0A
//! LWSP    =  *(WSP / CRLF WSP)
//! OCTET   =  %x00-FF
//! SP      =  %x20
//! VCHAR   =  %x21-7E
//! WSP     =  SP / HTAB
//! ```
#![warn(missing_docs)]

use mailgram::text::{self, Rule};

/// `ALPHA = %x41-5A / %x61-7A`
pub fn alpha() -> Rule {
    text::byte_ranges("invalid ALPHA", &[(0x41, 0x5a), (0x61, 0x7a)])
}

/// `BIT = "0" / "1"`
pub fn bit() -> Rule {
    text::one_of("invalid BIT", b"01")
}

/// `CHAR = %x01-7F`, any 7-bit US-ASCII character except NUL.
pub fn char() -> Rule {
    text::byte_ranges("invalid CHAR", &[(0x01, 0x7f)])
}

/// `CR = %x0D`
pub fn cr() -> Rule {
    text::byte("invalid CR", 0x0d)
}

/// `LF = %x0A`
pub fn lf() -> Rule {
    text::byte("invalid LF", 0x0a)
}

/// `CRLF = CR LF`
pub fn crlf() -> Rule {
    text::seq([cr(), lf()])
}

/// `CTL = %x00-1F / %x7F`
pub fn ctl() -> Rule {
    text::byte_ranges("invalid CTL", &[(0x00, 0x1f), (0x7f, 0x7f)])
}

/// `DIGIT = %x30-39`
pub fn digit() -> Rule {
    text::byte_ranges("invalid DIGIT", &[(0x30, 0x39)])
}

/// `DQUOTE = %x22`
pub fn dquote() -> Rule {
    text::byte("invalid DQUOTE", 0x22)
}

/// `HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"`
///
/// Like all ABNF literals these letters are case-insensitive, so `a` to `f` are accepted as well.
pub fn hexdig() -> Rule {
    text::alt([
        digit(),
        text::byte_ranges("invalid HEXDIG", &[(b'A', b'F'), (b'a', b'f')]),
    ])
}

/// `HTAB = %x09`
pub fn htab() -> Rule {
    text::byte("invalid HTAB", 0x09)
}

/// `OCTET = %x00-FF`
pub fn octet() -> Rule {
    text::byte_where("invalid OCTET", |_| true)
}

/// `SP = %x20`
pub fn sp() -> Rule {
    text::byte("invalid SP", 0x20)
}

/// `VCHAR = %x21-7E`, the visible (printing) characters.
pub fn vchar() -> Rule {
    text::byte_ranges("invalid VCHAR", &[(0x21, 0x7e)])
}

/// `WSP = SP / HTAB`
pub fn wsp() -> Rule {
    text::alt([sp(), htab()])
}

/// `LWSP = *(WSP / CRLF WSP)`
///
/// RFC 5234 advises against using this rule for mail headers, as it permits lines consisting only
/// of white space.
pub fn lwsp() -> Rule {
    text::many(text::alt([wsp(), text::seq([crlf(), wsp()])]))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use mailgram::{FailKind, Failure, Parser};

    use super::*;

    fn accepts(rule: &Rule, input: &str) -> bool {
        matches!(rule.parse_bytes(input.as_bytes()), Ok((_, rest)) if rest.is_at_end())
    }

    #[test]
    fn single_bytes() {
        assert!(accepts(&cr(), "\r"));
        assert!(accepts(&lf(), "\n"));
        assert!(accepts(&sp(), " "));
        assert!(accepts(&htab(), "\t"));
        assert!(accepts(&dquote(), "\""));
        assert!(!accepts(&cr(), "\n"));
        assert!(!accepts(&sp(), "\t"));

        for byte in 0..=0xffu8 {
            let input = [byte];
            let check = |rule: Rule| rule.parse_bytes(&input).is_ok();
            assert_eq!(check(alpha()), byte.is_ascii_alphabetic(), "ALPHA {byte:#x}");
            assert_eq!(check(digit()), byte.is_ascii_digit(), "DIGIT {byte:#x}");
            assert_eq!(check(hexdig()), byte.is_ascii_hexdigit(), "HEXDIG {byte:#x}");
            assert_eq!(check(vchar()), byte.is_ascii_graphic(), "VCHAR {byte:#x}");
            assert_eq!(check(ctl()), byte.is_ascii_control(), "CTL {byte:#x}");
            assert_eq!(check(char()), byte != 0 && byte.is_ascii(), "CHAR {byte:#x}");
            assert_eq!(check(bit()), byte == b'0' || byte == b'1', "BIT {byte:#x}");
            assert!(check(octet()), "OCTET {byte:#x}");
        }
    }

    #[test]
    fn crlf_needs_both_bytes() {
        assert!(accepts(&crlf(), "\r\n"));
        assert!(!accepts(&crlf(), "\r"));
        assert!(!accepts(&crlf(), "\n"));
        assert_matches!(
            crlf().parse_bytes(b"\r\r"),
            Err(Failure { kind: FailKind::Soft, offset: 1, ref reason }) if reason == "invalid LF"
        );
    }

    #[test]
    fn white_space() {
        assert!(accepts(&wsp(), " "));
        assert!(accepts(&wsp(), "\t"));
        assert!(!accepts(&wsp(), "\n"));

        assert!(accepts(&lwsp(), ""));
        assert!(accepts(&lwsp(), " "));
        assert!(accepts(&lwsp(), "\t \t"));
        assert!(accepts(&lwsp(), " \r\n\t"));
        assert!(!accepts(&lwsp(), "\t \t\n"));
        assert!(!accepts(&lwsp(), " \r\n"));
    }

    #[test]
    fn end_of_input_is_a_soft_failure() {
        for rule in [alpha(), cr(), crlf(), wsp(), vchar(), octet()] {
            assert_matches!(rule.parse_bytes(b""), Err(Failure { kind: FailKind::Soft, .. }));
        }
    }
}
