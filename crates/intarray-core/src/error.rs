//! Error types for fallible array operations.
//!
//! Indexing and the infallible constructors fail fast with a panic. The
//! variants here back the opt-in fallible surface: `try_new`,
//! `with_config`, `checked`, and the bulk text reader.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors returned by the fallible [`IntArray`](crate::IntArray) API.
#[derive(Debug)]
pub enum IntArrayError {
    /// Index outside `0..len`.
    OutOfBounds {
        /// The rejected index, as requested (may be negative).
        index: isize,
        /// Length of the array that was indexed.
        len: usize,
    },
    /// The element buffer could not be allocated.
    AllocationFailed {
        /// Number of `i32` elements requested.
        requested: usize,
    },
    /// A non-positive size was requested under [`SizePolicy::Reject`](crate::SizePolicy::Reject).
    InvalidSize {
        /// The requested size.
        requested: isize,
    },
    /// An [`ArrayConfig`](crate::ArrayConfig) failed validation.
    InvalidConfig {
        /// What was wrong with it.
        reason: String,
    },
    /// A token in the input stream is not a valid `i32`.
    MalformedToken {
        /// Zero-based element position the token was destined for.
        position: usize,
        /// The offending token text.
        token: String,
    },
    /// The input stream ended before every element was read.
    UnexpectedEof {
        /// Number of values the array needed.
        expected: usize,
        /// Number of values actually available.
        read: usize,
    },
    /// The underlying reader failed.
    Io(io::Error),
}

impl fmt::Display for IntArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, len } => {
                write!(
                    f,
                    "index out of bounds: the len is {len} but the index is {index}"
                )
            }
            Self::AllocationFailed { requested } => {
                write!(f, "failed to allocate {requested} elements")
            }
            Self::InvalidSize { requested } => {
                write!(f, "invalid array size {requested}: size must be positive")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
            Self::MalformedToken { position, token } => {
                write!(f, "malformed integer {token:?} for element {position}")
            }
            Self::UnexpectedEof { expected, read } => {
                write!(
                    f,
                    "unexpected end of input: expected {expected} values, read {read}"
                )
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl Error for IntArrayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for IntArrayError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_len_and_index() {
        let err = IntArrayError::OutOfBounds { index: -1, len: 4 };
        assert_eq!(
            err.to_string(),
            "index out of bounds: the len is 4 but the index is -1"
        );
    }

    #[test]
    fn io_error_is_exposed_as_source() {
        let err = IntArrayError::from(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn non_io_errors_have_no_source() {
        let err = IntArrayError::UnexpectedEof {
            expected: 3,
            read: 1,
        };
        assert!(err.source().is_none());
    }
}
