use std::{borrow::Cow, fmt};

use thiserror::Error;

/// Severity of a [`Failure`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailKind {
    /// The rule did not match at this position.
    ///
    /// This is expected during parsing. An ordered choice reacts to it by trying its next
    /// alternative against the same input, and an optional rule reacts to it by matching nothing.
    Soft,
    /// The input is invalid in a way no alternative can recover from.
    ///
    /// An ordered choice that sees this stops immediately and fails with it, without trying any
    /// further alternatives. Only [`optional`][crate::optional] absorbs it.
    Hard,
}

impl fmt::Display for FailKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailKind::Soft => f.write_str("soft"),
            FailKind::Hard => f.write_str("hard"),
        }
    }
}

/// Why and where a parse attempt failed.
///
/// Every failing parser returns exactly one `Failure`. Failures are plain data; a failed parse never
/// panics and never leaves the input partially consumed.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{reason} at offset {offset}")]
pub struct Failure {
    /// Human readable description of what was expected.
    pub reason: Cow<'static, str>,
    /// Whether alternatives may still be tried.
    pub kind: FailKind,
    /// Byte offset into the input at which the rejecting rule failed.
    pub offset: usize,
}

impl Failure {
    /// Creates a recoverable failure at offset `0`.
    ///
    /// Use [`at`][Self::at] to place it; the byte level parsers of this crate do so for failures
    /// returned by their predicates.
    pub fn soft(reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            reason: reason.into(),
            kind: FailKind::Soft,
            offset: 0,
        }
    }

    /// Creates an unrecoverable failure at offset `0`.
    pub fn hard(reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            reason: reason.into(),
            kind: FailKind::Hard,
            offset: 0,
        }
    }

    /// Moves the failure to `offset`.
    #[inline]
    pub fn at(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Returns the same failure as [`FailKind::Hard`].
    #[inline]
    pub fn into_hard(mut self) -> Self {
        self.kind = FailKind::Hard;
        self
    }

    /// Returns whether this failure allows trying an alternative.
    #[inline]
    pub fn is_soft(&self) -> bool {
        self.kind == FailKind::Soft
    }

    /// Returns whether this failure aborts enclosing choices.
    #[inline]
    pub fn is_hard(&self) -> bool {
        self.kind == FailKind::Hard
    }

    /// Keeps whichever of two failures got further into the input, preferring `self` on ties.
    pub(crate) fn furthest(self, other: Failure) -> Failure {
        if other.offset > self.offset {
            other
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            Failure::soft("invalid CR").at(3).to_string(),
            "invalid CR at offset 3"
        );
    }

    #[test]
    fn furthest_prefers_earlier_on_ties() {
        let first = Failure::soft("first").at(2);
        let second = Failure::soft("second").at(2);
        let third = Failure::soft("third").at(5);
        assert_eq!(first.clone().furthest(second).reason, "first");
        assert_eq!(first.furthest(third).reason, "third");
    }

    #[test]
    fn promotion() {
        let failure = Failure::soft("x").at(1).into_hard();
        assert!(failure.is_hard());
        assert!(!failure.is_soft());
        assert_eq!(failure.offset, 1);
    }
}
