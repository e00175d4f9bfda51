//! Named entry points into the grammar.
use std::{fmt, str::FromStr};

use bstr::BString;
use mailgram::{text::Rule, ParseResult, Parser};
use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::{
    error::{UnknownEntry, ValidationError},
    Grammar,
};

/// A top-level production that inputs can be checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Entry {
    /// `addr-spec`, a bare `local-part@domain` address.
    AddrSpec,
    /// `angle-addr`, an address in angle brackets with optional surrounding comments and white
    /// space.
    AngleAddr,
    /// `name-addr`, an optional display name followed by an `angle-addr`.
    NameAddr,
    /// `mailbox`, a `name-addr` or a bare `addr-spec`.
    Mailbox,
}

impl Entry {
    /// All entry points.
    pub const ALL: [Entry; 4] = [
        Entry::AddrSpec,
        Entry::AngleAddr,
        Entry::NameAddr,
        Entry::Mailbox,
    ];

    /// The name of the RFC 5322 production.
    pub fn name(self) -> &'static str {
        match self {
            Entry::AddrSpec => "addr-spec",
            Entry::AngleAddr => "angle-addr",
            Entry::NameAddr => "name-addr",
            Entry::Mailbox => "mailbox",
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Entry {
    type Err = UnknownEntry;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Entry::ALL
            .into_iter()
            .find(|entry| entry.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownEntry(name.to_owned()))
    }
}

impl Grammar {
    /// Returns the rule of an entry point.
    pub fn rule(&self, entry: Entry) -> &Rule {
        match entry {
            Entry::AddrSpec => &self.addr_spec,
            Entry::AngleAddr => &self.angle_addr,
            Entry::NameAddr => &self.name_addr,
            Entry::Mailbox => &self.mailbox,
        }
    }

    /// Matches a prefix of `input` against an entry point.
    ///
    /// On success, the returned text is the matched prefix and the returned cursor points at the
    /// remaining input. The match does not have to extend to the end of the input; use
    /// [`validate`][Self::validate] to check a complete input.
    pub fn parse<'a, I>(&self, entry: Entry, input: &'a I) -> ParseResult<'a, BString>
    where
        I: AsRef<[u8]> + ?Sized,
    {
        let result = self.rule(entry).parse_bytes(input.as_ref());
        match &result {
            Ok((matched, rest)) => {
                trace!(%entry, %matched, remaining = rest.rest().len(), "matched");
            }
            Err(failure) => {
                trace!(%entry, %failure, kind = %failure.kind, "no match");
            }
        }
        result
    }

    /// Checks that all of `input` matches an entry point.
    ///
    /// Returns the matched text, which is equal to `input` on success.
    pub fn validate<I>(&self, entry: Entry, input: &I) -> Result<BString, ValidationError>
    where
        I: AsRef<[u8]> + ?Sized,
    {
        let (matched, rest) = self.parse(entry, input).map_err(|failure| {
            debug!(%entry, %failure, "rejected");
            ValidationError::Rejected { entry, failure }
        })?;
        if !rest.is_at_end() {
            debug!(%entry, offset = rest.position(), "trailing input");
            return Err(ValidationError::TrailingInput {
                entry,
                matched,
                offset: rest.position(),
            });
        }
        Ok(matched)
    }
}

static DEFAULT_GRAMMAR: Lazy<Grammar> = Lazy::new(Grammar::default);

/// Returns the grammar built with the default [`Config`][crate::Config].
pub fn default_grammar() -> &'static Grammar {
    &DEFAULT_GRAMMAR
}

/// Matches a prefix of `input` against `addr-spec`, using the [default grammar][default_grammar].
pub fn addr_spec<I: AsRef<[u8]> + ?Sized>(input: &I) -> ParseResult<'_, BString> {
    DEFAULT_GRAMMAR.parse(Entry::AddrSpec, input)
}

/// Matches a prefix of `input` against `angle-addr`, using the [default grammar][default_grammar].
pub fn angle_addr<I: AsRef<[u8]> + ?Sized>(input: &I) -> ParseResult<'_, BString> {
    DEFAULT_GRAMMAR.parse(Entry::AngleAddr, input)
}

/// Matches a prefix of `input` against `name-addr`, using the [default grammar][default_grammar].
pub fn name_addr<I: AsRef<[u8]> + ?Sized>(input: &I) -> ParseResult<'_, BString> {
    DEFAULT_GRAMMAR.parse(Entry::NameAddr, input)
}

/// Matches a prefix of `input` against `mailbox`, using the [default grammar][default_grammar].
pub fn mailbox<I: AsRef<[u8]> + ?Sized>(input: &I) -> ParseResult<'_, BString> {
    DEFAULT_GRAMMAR.parse(Entry::Mailbox, input)
}

/// Checks that all of `input` matches an entry point, using the [default grammar][default_grammar].
pub fn validate<I: AsRef<[u8]> + ?Sized>(entry: Entry, input: &I) -> Result<BString, ValidationError> {
    DEFAULT_GRAMMAR.validate(entry, input)
}
