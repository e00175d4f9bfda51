use std::{borrow::Cow, fmt, sync::Arc};

use crate::{Cursor, Failure};

/// Return type of every parse attempt.
///
/// On success this holds the parsed value together with a [`Cursor`] for the remaining input. On
/// failure it holds a [`Failure`]; the caller still has the cursor it passed in, so a failed
/// attempt never consumes input.
///
/// See [`ParseResultExt`] for the methods used to combine parse results by hand.
pub type ParseResult<'a, T> = Result<(T, Cursor<'a>), Failure>;

/// A parser producing values of type `T`.
///
/// Parsers are immutable values. Combining parsers builds new parsers and leaves the combined ones
/// unchanged, so a parser can be shared between several rules and used from several threads at
/// once.
pub trait Parser<T> {
    /// Attempts to match a prefix of the input following `input`.
    fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, T>;

    /// Attempts to match a prefix of `input`, starting at its first byte.
    fn parse_bytes<'a>(&self, input: &'a [u8]) -> ParseResult<'a, T> {
        self.parse(Cursor::new(input))
    }

    /// Erases the concrete type of this parser.
    fn boxed(self) -> BoxedParser<T>
    where
        Self: Sized + Send + Sync + 'static,
        T: 'static,
    {
        from_fn(move |input| self.parse(input))
    }

    /// Replaces a successfully parsed value with the value returned when applying `f` to it.
    ///
    /// Failures are returned unchanged.
    fn map<U, F>(self, f: F) -> BoxedParser<U>
    where
        Self: Sized + Send + Sync + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
        T: 'static,
    {
        from_fn(move |input| self.parse(input).map(|(value, rest)| (f(value), rest)))
    }

    /// Tries `other` on the same input when this parser fails softly.
    ///
    /// This is the two-way case of [`choice`][crate::choice].
    fn or<P>(self, other: P) -> BoxedParser<T>
    where
        Self: Sized + Send + Sync + 'static,
        P: Parser<T> + Send + Sync + 'static,
        T: 'static,
    {
        from_fn(move |input| self.parse(input).or_parse(|| other.parse(input)))
    }

    /// Names this parser in failure messages.
    ///
    /// When the parser fails softly without getting past its first byte, the failure reason is
    /// replaced by `expected {name}`. Failures further into the input and hard failures keep their
    /// more specific reason.
    fn label(self, name: impl Into<Cow<'static, str>>) -> BoxedParser<T>
    where
        Self: Sized + Send + Sync + 'static,
        T: 'static,
    {
        let expected: Cow<'static, str> = format!("expected {}", name.into()).into();
        from_fn(move |input| {
            self.parse(input).map_err(|mut failure| {
                if failure.is_soft() && failure.offset == input.position() {
                    failure.reason = expected.clone();
                }
                failure
            })
        })
    }
}

type ParseFn<T> = dyn for<'a> Fn(Cursor<'a>) -> ParseResult<'a, T> + Send + Sync;

/// A type erased, cheaply clonable [`Parser`].
///
/// Cloning a `BoxedParser` shares the underlying parser.
pub struct BoxedParser<T> {
    parse: Arc<ParseFn<T>>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        Self {
            parse: Arc::clone(&self.parse),
        }
    }
}

impl<T> fmt::Debug for BoxedParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedParser").finish_non_exhaustive()
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    #[inline]
    fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, T> {
        (self.parse)(input)
    }

    fn boxed(self) -> BoxedParser<T>
    where
        Self: Sized + Send + Sync + 'static,
        T: 'static,
    {
        self
    }
}

/// Turns a parsing function into a [`BoxedParser`].
///
/// The function receives the cursor to parse from and must not return a cursor pointing before
/// it.
pub fn from_fn<T, F>(parse: F) -> BoxedParser<T>
where
    F: for<'a> Fn(Cursor<'a>) -> ParseResult<'a, T> + Send + Sync + 'static,
{
    BoxedParser {
        parse: Arc::new(parse),
    }
}

/// This trait implements additional methods for [`ParseResult`] values, which are useful for
/// writing parsers by hand.
pub trait ParseResultExt<'a, T> {
    /// Tries a different parser when the current input did not match the expected input of the
    /// returning parser.
    ///
    /// Only soft failures fall through to `parse`. A hard failure is returned unchanged, as is a
    /// success.
    fn or_parse(self, parse: impl FnOnce() -> ParseResult<'a, T>) -> ParseResult<'a, T>;

    /// Returns `None` and `input` when the returning parser failed, with either severity.
    ///
    /// This makes the expected input of the returning parser optional. `input` must be the cursor
    /// the returning parser was called with.
    fn optional(self, input: Cursor<'a>) -> (Option<T>, Cursor<'a>);

    /// Makes any failure of the returning parser irrecoverable.
    ///
    /// This makes the expected input of the returning parser a mandatory part of the input.
    fn or_give_up(self) -> ParseResult<'a, T>;

    /// Returns whether the returning parser failed softly.
    fn is_soft_failure(&self) -> bool;
}

impl<'a, T> ParseResultExt<'a, T> for ParseResult<'a, T> {
    #[inline]
    fn or_parse(self, parse: impl FnOnce() -> ParseResult<'a, T>) -> ParseResult<'a, T> {
        match self {
            Err(failure) if failure.is_soft() => parse(),
            result => result,
        }
    }

    #[inline]
    fn optional(self, input: Cursor<'a>) -> (Option<T>, Cursor<'a>) {
        match self {
            Ok((value, rest)) => (Some(value), rest),
            Err(_) => (None, input),
        }
    }

    #[inline]
    fn or_give_up(self) -> ParseResult<'a, T> {
        self.map_err(Failure::into_hard)
    }

    #[inline]
    fn is_soft_failure(&self) -> bool {
        matches!(self, Err(failure) if failure.is_soft())
    }
}
