//! Generic combinators working on parsers of any value type.
//!
//! The combinators in this module collect the values of their parts. See the [`text`][crate::text]
//! module for variants that concatenate matched text instead.
use std::{borrow::Cow, fmt, sync::Arc};

use once_cell::sync::OnceCell;

use crate::{from_fn, BoxedParser, Cursor, Failure, ParseResult, ParseResultExt, Parser};

/// Runs `parts` one after the other, each starting where the previous one stopped.
///
/// Fails with the failure of the first part that fails. As cursors are never modified, nothing is
/// consumed in that case.
pub fn sequence<T: 'static>(parts: impl IntoIterator<Item = BoxedParser<T>>) -> BoxedParser<Vec<T>> {
    let parts: Vec<_> = parts.into_iter().collect();
    from_fn(move |input| {
        let mut values = Vec::with_capacity(parts.len());
        let mut rest = input;
        for part in &parts {
            let (value, next) = part.parse(rest)?;
            values.push(value);
            rest = next;
        }
        Ok((values, rest))
    })
}

/// Tries `alternatives` in order against the same input, returning the first success.
///
/// A soft failure moves on to the next alternative. A hard failure is returned immediately and the
/// remaining alternatives are not tried. When every alternative fails softly, the failure that got
/// furthest into the input is returned, preferring earlier alternatives on ties.
///
/// This will panic if `alternatives` is empty.
pub fn choice<T: 'static>(alternatives: impl IntoIterator<Item = BoxedParser<T>>) -> BoxedParser<T> {
    let alternatives: Vec<_> = alternatives.into_iter().collect();
    assert!(!alternatives.is_empty(), "choice without alternatives");
    from_fn(move |input| {
        let mut furthest: Option<Failure> = None;
        for alternative in &alternatives {
            match alternative.parse(input) {
                Err(failure) if failure.is_soft() => {
                    furthest = Some(match furthest {
                        Some(previous) => previous.furthest(failure),
                        None => failure,
                    });
                }
                result => return result,
            }
        }
        Err(furthest.unwrap_or_else(|| Failure::soft("no alternative").at(input.position())))
    })
}

/// Matches `parser` zero or more times.
///
/// Repetition stops at the first soft failure, which is not an error. A hard failure is returned.
/// Repetition also stops after a match that did not consume any input, as it would repeat forever
/// otherwise; the empty match is not included.
pub fn many<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    from_fn(move |input| {
        let mut values = vec![];
        let mut rest = input;
        loop {
            match parser.parse(rest) {
                Ok((value, next)) if next.position() > rest.position() => {
                    values.push(value);
                    rest = next;
                }
                Ok(_) => break,
                Err(failure) if failure.is_soft() => break,
                Err(failure) => return Err(failure),
            }
        }
        Ok((values, rest))
    })
}

/// Matches `parser` exactly `count` times in a row.
///
/// Fails with the failure that broke the chain.
pub fn exactly<T: 'static>(count: usize, parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    from_fn(move |input| {
        let mut values = Vec::with_capacity(count);
        let mut rest = input;
        for _ in 0..count {
            let (value, next) = parser.parse(rest)?;
            values.push(value);
            rest = next;
        }
        Ok((values, rest))
    })
}

/// Matches `parser` at least `count` times, as many times as possible.
///
/// Equivalent to [`exactly`] followed by [`many`].
pub fn at_least<T: 'static>(count: usize, parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    let required = exactly(count, parser.clone());
    let more = many(parser);
    from_fn(move |input| {
        let (mut values, rest) = required.parse(input)?;
        let (tail, rest) = more.parse(rest)?;
        values.extend(tail);
        Ok((values, rest))
    })
}

/// Matches `parser` if possible, otherwise matches nothing.
///
/// This never fails. It absorbs failures of both severities, so it must only be used where the
/// grammar marks a construct as optional.
pub fn optional<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Option<T>> {
    from_fn(move |input| Ok(parser.parse(input).optional(input)))
}

/// Limits how deeply `parser` may be nested within itself.
///
/// Each invocation of the returned parser counts as one level. When the input is already nested
/// `limit` levels deep, the parser fails with a hard failure carrying `reason` instead of
/// recursing further.
///
/// The depth is checked before `parser` sees any input. For a construct with an opening
/// delimiter, guard the part after the delimiter, so that a position where the construct does not
/// start is still a soft failure at the deepest level.
pub fn nested<T: 'static>(
    limit: usize,
    reason: impl Into<Cow<'static, str>>,
    parser: BoxedParser<T>,
) -> BoxedParser<T> {
    let reason = reason.into();
    from_fn(move |input| {
        if input.depth() >= limit {
            return Err(Failure::hard(reason.clone()).at(input.position()));
        }
        let (value, rest) = parser.parse(input.descend())?;
        Ok((value, rest.ascend()))
    })
}

/// A parser that is defined after it is first referenced.
///
/// Grammars with recursive rules cannot be built bottom-up: the rule for a comment contains the
/// rule for comment content, which in turn contains the rule for a comment. A `Later` is created
/// empty, used like any other parser while building the rules that refer to it, and finally
/// initialized with its definition using [`init`][Self::init].
///
/// The definition is looked up each time the parser runs, so it only has to be present before
/// parsing starts.
///
/// Note that a recursive grammar built this way contains a reference cycle and is never freed.
pub struct Later<T> {
    name: &'static str,
    definition: Arc<OnceCell<BoxedParser<T>>>,
}

impl<T> Clone for Later<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            definition: Arc::clone(&self.definition),
        }
    }
}

impl<T> fmt::Debug for Later<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Later")
            .field("name", &self.name)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

impl<T> Later<T> {
    /// Creates an uninitialized parser, named `name` in panic messages.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            definition: Arc::new(OnceCell::new()),
        }
    }

    /// Returns whether [`init`][Self::init] was called.
    pub fn is_initialized(&self) -> bool {
        self.definition.get().is_some()
    }

    /// Sets the definition of this parser and of all its clones.
    ///
    /// # Panics
    ///
    /// Panics when the definition was already set.
    pub fn init(&self, definition: BoxedParser<T>) {
        if self.definition.set(definition).is_err() {
            panic!("rule `{}` initialized twice", self.name);
        }
    }
}

impl<T> Parser<T> for Later<T> {
    /// Runs the definition of this parser.
    ///
    /// # Panics
    ///
    /// Panics when [`init`][Self::init] was not called yet. This is a mistake in the grammar, not
    /// in the input.
    fn parse<'a>(&self, input: Cursor<'a>) -> ParseResult<'a, T> {
        match self.definition.get() {
            Some(definition) => definition.parse(input),
            None => panic!("rule `{}` used before it was initialized", self.name),
        }
    }
}

impl<T: 'static> From<Later<T>> for BoxedParser<T> {
    fn from(later: Later<T>) -> Self {
        later.boxed()
    }
}
