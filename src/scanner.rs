//! # Byte Scanner
//!
//! A buffered, position-tracking byte reader over any [`Read`] source. The
//! scanner delivers bytes on demand and counts how many have been consumed;
//! it has no JSON knowledge. End-of-stream is surfaced as `Ok(None)` so that
//! callers can tell it apart from a genuine I/O failure.
use std::io::{self, ErrorKind, Read};

/// Internal read buffer size in bytes.
const BUF_SIZE: usize = 4096;

/// A forward-only byte cursor over an underlying source.
///
/// The cursor only moves forward: once a byte has been consumed through
/// [`advance`](Scanner::advance) it is never re-read, and
/// [`position`](Scanner::position) increases monotonically.
pub struct Scanner<R> {
    /// The underlying byte source
    source: R,
    /// Read buffer refilled from `source`
    buf: Vec<u8>,
    /// Index of the next unread byte in `buf`
    head: usize,
    /// Number of valid bytes in `buf`
    filled: usize,
    /// Total bytes consumed from the stream so far
    consumed: usize,
    /// Whether the source has reported end-of-stream
    eof: bool,
}

impl<R: Read> Scanner<R> {
    /// Creates a scanner over the given source.
    pub fn new(source: R) -> Self {
        Self {
            source,
            buf: vec![0; BUF_SIZE],
            head: 0,
            filled: 0,
            consumed: 0,
            eof: false,
        }
    }

    /// Returns the next unread byte without consuming it, or `None` at
    /// end-of-stream.
    ///
    /// # Errors
    ///
    /// Returns any failure reported by the underlying source while
    /// refilling the buffer.
    pub fn peek(&mut self) -> io::Result<Option<u8>> {
        if self.head == self.filled {
            self.fill()?;
        }
        if self.head == self.filled {
            return Ok(None);
        }
        Ok(Some(self.buf[self.head]))
    }

    /// Consumes and returns the next byte, incrementing the cursor, or
    /// returns `None` at end-of-stream.
    ///
    /// # Errors
    ///
    /// Returns any failure reported by the underlying source while
    /// refilling the buffer.
    pub fn advance(&mut self) -> io::Result<Option<u8>> {
        let byte = self.peek()?;
        if byte.is_some() {
            self.head += 1;
            self.consumed += 1;
        }
        Ok(byte)
    }

    /// Number of bytes consumed from the stream so far.
    pub const fn position(&self) -> usize {
        self.consumed
    }

    /// Refill the buffer from the source, retrying interrupted reads.
    fn fill(&mut self) -> io::Result<()> {
        if self.eof {
            return Ok(());
        }
        self.head = 0;
        self.filled = 0;
        loop {
            match self.source.read(&mut self.buf) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.filled = n;
                    return Ok(());
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_does_not_consume() {
        let mut scanner = Scanner::new(&b"ab"[..]);
        assert_eq!(scanner.peek().unwrap(), Some(b'a'));
        assert_eq!(scanner.peek().unwrap(), Some(b'a'));
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn advance_tracks_position() {
        let mut scanner = Scanner::new(&b"abc"[..]);
        assert_eq!(scanner.advance().unwrap(), Some(b'a'));
        assert_eq!(scanner.advance().unwrap(), Some(b'b'));
        assert_eq!(scanner.position(), 2);
        assert_eq!(scanner.advance().unwrap(), Some(b'c'));
        assert_eq!(scanner.advance().unwrap(), None);
        // EOF does not move the cursor
        assert_eq!(scanner.position(), 3);
    }

    #[test]
    fn empty_source_is_eof_immediately() {
        let mut scanner = Scanner::new(&b""[..]);
        assert_eq!(scanner.peek().unwrap(), None);
        assert_eq!(scanner.advance().unwrap(), None);
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn eof_is_sticky() {
        let mut scanner = Scanner::new(&b"x"[..]);
        assert_eq!(scanner.advance().unwrap(), Some(b'x'));
        assert_eq!(scanner.peek().unwrap(), None);
        assert_eq!(scanner.peek().unwrap(), None);
    }

    /// A reader that yields its bytes one at a time to force repeated
    /// buffer refills.
    struct TrickleReader<'a> {
        data: &'a [u8],
        at: usize,
    }

    impl Read for TrickleReader<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.at == self.data.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.data[self.at];
            self.at += 1;
            Ok(1)
        }
    }

    #[test]
    fn refills_across_short_reads() {
        let mut scanner = Scanner::new(TrickleReader { data: b"null", at: 0 });
        let mut collected = Vec::new();
        while let Some(byte) = scanner.advance().unwrap() {
            collected.push(byte);
        }
        assert_eq!(collected, b"null");
        assert_eq!(scanner.position(), 4);
    }

    /// A reader that fails after yielding a prefix.
    struct FailingReader {
        remaining: usize,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::other("source went away"));
            }
            self.remaining -= 1;
            buf[0] = b'1';
            Ok(1)
        }
    }

    #[test]
    fn source_failures_propagate() {
        let mut scanner = Scanner::new(FailingReader { remaining: 1 });
        assert_eq!(scanner.advance().unwrap(), Some(b'1'));
        assert!(scanner.peek().is_err());
    }
}
