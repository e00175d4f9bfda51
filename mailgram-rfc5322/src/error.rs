use bstr::BString;
use mailgram::Failure;
use thiserror::Error;

use crate::Entry;

/// Why an input is not a complete match of an entry point.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// The grammar rejected the input.
    #[error("invalid {entry}: {failure}")]
    Rejected {
        /// The entry point that was used.
        entry: Entry,
        /// The failure of the entry point's rule.
        #[source]
        failure: Failure,
    },
    /// A prefix of the input matched, but more input followed it.
    #[error("invalid {entry}: unexpected input at offset {offset} after {matched:?}")]
    TrailingInput {
        /// The entry point that was used.
        entry: Entry,
        /// The matching prefix.
        matched: BString,
        /// Offset of the first byte that is not part of the match.
        offset: usize,
    },
}

impl ValidationError {
    /// Returns the failure when the grammar rejected the input.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            ValidationError::Rejected { failure, .. } => Some(failure),
            ValidationError::TrailingInput { .. } => None,
        }
    }

    /// Byte offset at which the input stopped being valid.
    pub fn offset(&self) -> usize {
        match self {
            ValidationError::Rejected { failure, .. } => failure.offset,
            ValidationError::TrailingInput { offset, .. } => *offset,
        }
    }
}

/// The name passed to [`Entry::from_str`][std::str::FromStr::from_str] is not an entry point.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("unknown entry point {0:?}, expected one of addr-spec, angle-addr, name-addr, mailbox")]
pub struct UnknownEntry(pub String);
