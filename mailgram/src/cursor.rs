use bstr::{BStr, ByteSlice};

/// An immutable view of the input that remains to be matched.
///
/// A `Cursor` is never advanced in place. Parsers receive a cursor by value and return a new cursor
/// for the input following their match, so the cursor a failed alternative started from is still
/// available to the next alternative.
///
/// Besides the position, a cursor also tracks the nesting depth of guarded rules (see
/// [`nested`][crate::nested]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor<'a> {
    input: &'a [u8],
    position: usize,
    depth: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `input`.
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            position: 0,
            depth: 0,
        }
    }

    /// Byte offset of the cursor relative to the start of the input.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current nesting depth of guarded rules.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The complete input this cursor is a view of.
    #[inline]
    pub fn input(&self) -> &'a BStr {
        self.input.as_bstr()
    }

    /// The input that has not been matched yet.
    #[inline]
    pub fn rest(&self) -> &'a BStr {
        self.input[self.position..].as_bstr()
    }

    /// Returns whether the whole input has been matched.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position == self.input.len()
    }

    /// Returns the next byte without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    /// Returns a cursor `len` bytes further into the input.
    ///
    /// This will panic if fewer than `len` bytes remain.
    #[inline]
    pub fn advance(self, len: usize) -> Self {
        assert!(
            len <= self.input.len() - self.position,
            "advanced past the end of the input"
        );
        Self {
            position: self.position + len,
            ..self
        }
    }

    /// Returns the input matched between `start` and this cursor.
    ///
    /// Both cursors must be views of the same input with `start` not past `self`.
    #[inline]
    pub fn consumed_since(&self, start: &Cursor<'a>) -> &'a BStr {
        debug_assert!(std::ptr::eq(self.input, start.input));
        self.input[start.position..self.position].as_bstr()
    }

    /// Returns this cursor one nesting level deeper.
    #[inline]
    pub(crate) fn descend(self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self
        }
    }

    /// Returns this cursor one nesting level shallower.
    #[inline]
    pub(crate) fn ascend(self) -> Self {
        Self {
            depth: self.depth.saturating_sub(1),
            ..self
        }
    }
}

impl<'a> From<&'a [u8]> for Cursor<'a> {
    fn from(input: &'a [u8]) -> Self {
        Self::new(input)
    }
}

impl<'a> From<&'a str> for Cursor<'a> {
    fn from(input: &'a str) -> Self {
        Self::new(input.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_leaves_the_original_untouched() {
        let start = Cursor::from("a@b");
        let next = start.advance(2);
        assert_eq!(start.position(), 0);
        assert_eq!(start.rest(), "a@b");
        assert_eq!(next.rest(), "b");
        assert_eq!(next.consumed_since(&start), "a@");
        assert_eq!(next.peek(), Some(b'b'));
        assert!(next.advance(1).is_at_end());
        assert_eq!(next.advance(1).peek(), None);
    }

    #[test]
    fn depth_round_trip() {
        let start = Cursor::from("()");
        let inner = start.descend().descend();
        assert_eq!(inner.depth(), 2);
        assert_eq!(inner.ascend().ascend(), start);
        assert_eq!(start.ascend().depth(), 0);
    }

    #[test]
    #[should_panic]
    fn advancing_past_the_end_panics() {
        let _ = Cursor::from("ab").advance(3);
    }
}
