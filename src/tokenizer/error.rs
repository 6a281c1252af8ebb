//! # Tokenizer Errors
//!
//! Error values produced while scanning a token. An error either carries no
//! position (nothing recognizable ever started) or is anchored to the exact
//! byte offset where the grammar was violated. Either shape may wrap an
//! underlying cause.
use std::error::Error;
use std::fmt;
use std::io;

/// Underlying cause attached to a [`ParseError`].
#[derive(Debug)]
pub enum ErrorCause {
    /// The stream ended before the grammar allowed it to
    UnexpectedEof,
    /// A `\u` escape contained a byte outside `0-9A-Fa-f`
    InvalidHexDigit,
    /// The byte source failed
    Io(io::Error),
}

impl ErrorCause {
    /// Whether this cause is an end-of-stream condition.
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::UnexpectedEof)
    }
}

impl fmt::Display for ErrorCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of stream"),
            Self::InvalidHexDigit => {
                write!(f, "invalid hex digit in \\u escape")
            }
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ErrorCause {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::UnexpectedEof | Self::InvalidHexDigit => None,
        }
    }
}

/// Error produced by a single tokenizer call.
///
/// Together with the tokenizer's value buffer (the bytes consumed from
/// token start through the offending byte) this carries enough information
/// for a precise diagnostic, or for the caller to resynchronize by
/// re-scanning from a different offset.
#[derive(Debug)]
pub enum ParseError {
    /// The first significant byte opened no recognized token, or the
    /// stream was empty.
    InvalidJson {
        /// Underlying cause, if any
        cause: Option<ErrorCause>,
    },
    /// The grammar was violated at a known byte offset.
    InvalidJsonAt {
        /// Zero-based byte offset into the overall stream
        pos: usize,
        /// Underlying cause, if any
        cause: Option<ErrorCause>,
    },
}

impl ParseError {
    /// The byte offset this error is anchored to, if any.
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::InvalidJson { .. } => None,
            Self::InvalidJsonAt { pos, .. } => Some(*pos),
        }
    }

    /// The underlying cause, if any.
    pub const fn cause(&self) -> Option<&ErrorCause> {
        match self {
            Self::InvalidJson { cause } | Self::InvalidJsonAt { cause, .. } => {
                cause.as_ref()
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson { cause: None } => write!(f, "invalid json"),
            Self::InvalidJson { cause: Some(cause) } => {
                write!(f, "invalid json: {cause}")
            }
            Self::InvalidJsonAt { pos, cause: None } => {
                write!(f, "invalid json at offset {pos}")
            }
            Self::InvalidJsonAt { pos, cause: Some(cause) } => {
                write!(f, "invalid json at offset {pos}: {cause}")
            }
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause().map(|cause| cause as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unanchored() {
        let err = ParseError::InvalidJson { cause: None };
        assert_eq!(err.to_string(), "invalid json");

        let err = ParseError::InvalidJson {
            cause: Some(ErrorCause::UnexpectedEof),
        };
        assert_eq!(err.to_string(), "invalid json: unexpected end of stream");
    }

    #[test]
    fn display_anchored() {
        let err = ParseError::InvalidJsonAt { pos: 4, cause: None };
        assert_eq!(err.to_string(), "invalid json at offset 4");

        let err = ParseError::InvalidJsonAt {
            pos: 5,
            cause: Some(ErrorCause::InvalidHexDigit),
        };
        assert_eq!(
            err.to_string(),
            "invalid json at offset 5: invalid hex digit in \\u escape"
        );
    }

    #[test]
    fn position_accessor() {
        let err = ParseError::InvalidJson { cause: None };
        assert_eq!(err.position(), None);

        let err = ParseError::InvalidJsonAt { pos: 7, cause: None };
        assert_eq!(err.position(), Some(7));
    }

    #[test]
    fn source_chains_to_cause() {
        let err = ParseError::InvalidJsonAt {
            pos: 0,
            cause: Some(ErrorCause::Io(io::Error::other("boom"))),
        };
        let source = err.source().expect("cause should chain");
        assert_eq!(source.to_string(), "boom");
    }
}
