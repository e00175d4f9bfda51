//! Validation of Internet message addresses following [RFC 5322].
//!
//! This crate checks whether text is an address as defined by the `addr-spec`, `angle-addr`,
//! `name-addr` and `mailbox` productions of RFC 5322, including their obsolete forms. It only
//! checks the syntax: it does not look up domains, does not verify that mailboxes exist and does
//! not normalize addresses.
//!
//! The result of a successful match is the matched text itself. A [`Grammar`] gives access to the
//! individual productions as well, which all produce the text they matched.
//!
//! ```rust
//! use mailgram_rfc5322::{mailbox, validate, Entry};
//!
//! let (matched, rest) = mailbox("Jane Doe <jane@example.com>, more").unwrap();
//! assert_eq!(matched, "Jane Doe <jane@example.com>");
//! assert_eq!(rest.rest(), ", more");
//!
//! assert!(validate(Entry::AddrSpec, "jane@example.com").is_ok());
//! assert!(validate(Entry::AddrSpec, "jane@example.com, more").is_err());
//! ```
//!
//! Parsing failures are reported as [`Failure`]s. A [soft][FailKind::Soft] failure means that
//! the input does not match the requested production. A [hard][FailKind::Hard] failure means that
//! the input is invalid regardless of the production, as happens for comments nested deeper than
//! [`Config::max_comment_depth`].
//!
//! [RFC 5322]: https://datatracker.ietf.org/doc/html/rfc5322

#![warn(missing_docs)]
mod config;
mod entry;
mod error;
mod grammar;

pub use config::Config;
pub use entry::{addr_spec, angle_addr, default_grammar, mailbox, name_addr, validate, Entry};
pub use error::{UnknownEntry, ValidationError};
pub use grammar::Grammar;
pub use mailgram::{Cursor, FailKind, Failure, ParseResult};
