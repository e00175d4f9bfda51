//! The Mailgram crate is a small engine for writing backtracking parsers of ABNF grammars.
//!
//! It aims to make a grammar written down in an RFC directly executable: every production becomes
//! a parser, and parsers for larger productions are built by combining the parsers of smaller ones
//! with the same operators the grammar uses (concatenation, alternation, repetition, optional
//! parts). It is not intended as a replacement for parser generators or for hand-written parsers
//! that produce a syntax tree.
//!
//! The properties it is built around are:
//!
//! * _Immutable input_: The input is read through a [`Cursor`], which is a position within a byte
//!   slice. Parsers take a cursor by value and return a new cursor for the input following their
//!   match. A failed alternative therefore never has to be undone, and the next alternative is
//!   simply given the same cursor.
//!
//! * _Two kinds of failure_: A parser that does not match returns a [`Failure`]. Most failures are
//!   [soft][FailKind::Soft]: this rule does not apply here, try the next alternative. Some input is
//!   invalid in a way no alternative can fix, for example comments nested deeper than the
//!   configured limit. Such failures are [hard][FailKind::Hard] and stop every enclosing
//!   [`choice`] without trying further alternatives. Only [`optional`] absorbs them.
//!
//! * _Shareable grammars_: Parsers are immutable values behind an [`Arc`][std::sync::Arc]. A
//!   grammar is built once and can then be used from any number of threads.
//!
//! * _Recursive rules_: A [`Later`] is a placeholder for a rule that is defined after rules that
//!   refer to it, which is needed for self-referential productions.
//!
//! ## Using Mailgram
//!
//! Most grammars only need the [`text`] module, whose rules produce the text they matched:
//! ```rust
//! use mailgram::{text, Parser};
//!
//! // digits = 1*DIGIT *("." 1*DIGIT)
//! let digit = text::byte_ranges("invalid DIGIT", &[(b'0', b'9')]);
//! let digits = text::seq([
//!     text::at_least(1, digit.clone()),
//!     text::many(text::seq([text::literal("."), text::at_least(1, digit)])),
//! ]);
//!
//! let (matched, rest) = digits.parse_bytes(b"1.22.333 rest").unwrap();
//! assert_eq!(matched, "1.22.333");
//! assert_eq!(rest.rest(), " rest");
//! ```
//!
//! Parsers can also be written by hand, as functions from a [`Cursor`] to a [`ParseResult`]. The
//! [`ParseResultExt`] trait provides methods for combining results within such functions.

#![warn(missing_docs)]
pub mod combinator;
mod cursor;
mod failure;
mod parser;
pub mod text;

pub use combinator::{at_least, choice, exactly, many, nested, optional, sequence, Later};
pub use cursor::Cursor;
pub use failure::{FailKind, Failure};
pub use parser::{from_fn, BoxedParser, ParseResult, ParseResultExt, Parser};
