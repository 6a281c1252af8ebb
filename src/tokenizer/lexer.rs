//! # Extended JSON Tokenizer
//!
//! The state machine that classifies one JSON value per call. Each call
//! skips leading whitespace, dispatches on the first significant byte into
//! a literal, number, or string sub-matcher, then verifies that nothing but
//! whitespace remains. Values are preserved verbatim: numeric text of any
//! length is never parsed into a machine number, and string escapes are
//! left exactly as they appeared in the input.
use regex::bytes::Regex;
use std::io::Read;
use std::sync::LazyLock;

use crate::scanner::Scanner;
use crate::tokenizer::error::{ErrorCause, ParseError};
use crate::tokenizer::token::TokenKind;

/// The quoted RFC 3339 timestamp shape, quotes included.
///
/// Field values are not checked for calendar validity; the match is purely
/// syntactic, except that the seconds field is capped at `60` to admit leap
/// seconds. Fractional seconds may have any length.
static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^"[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:(?:[0-5][0-9]|60)(?:\.[0-9]+)?(?:Z|[+-][0-9]{2}:[0-9]{2})"$"#,
    )
    .expect("timestamp pattern is valid")
});

/// Streaming tokenizer producing one classified value per
/// [`next_token`](Tokenizer::next_token) call.
///
/// The tokenizer owns its [`Scanner`] and holds no cross-call state beyond
/// the scanner's cursor: after a call returns, [`kind`](Tokenizer::kind)
/// and [`value`](Tokenizer::value) reflect that call only.
pub struct Tokenizer<R> {
    scanner: Scanner<R>,
    kind: TokenKind,
    value: Vec<u8>,
}

impl<R: Read> Tokenizer<R> {
    /// Creates a tokenizer over an existing scanner.
    pub fn new(scanner: Scanner<R>) -> Self {
        Self {
            scanner,
            kind: TokenKind::Unknown,
            value: Vec::new(),
        }
    }

    /// Creates a tokenizer directly over a byte source.
    pub fn from_reader(source: R) -> Self {
        Self::new(Scanner::new(source))
    }

    /// Kind assigned by the most recent call; `Unknown` after a failure.
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Raw bytes of the most recent token.
    ///
    /// After a successful call this is exactly the token text with no
    /// surrounding whitespace. After a failure it holds the bytes consumed
    /// from token start through the offending byte, for diagnostics.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Bytes consumed from the stream so far.
    pub const fn position(&self) -> usize {
        self.scanner.position()
    }

    /// Scans and classifies the next value in the stream.
    ///
    /// Exactly one of {successful kind + value, `Unknown` + error} results
    /// from each call. The stream must contain exactly one value optionally
    /// padded by whitespace; anything further fails the call with an error
    /// anchored at the first trailing byte.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidJson`] when no recognizable token
    /// starts (or the stream is empty), and [`ParseError::InvalidJsonAt`]
    /// for a grammar violation at a known byte offset. Source failures are
    /// wrapped as the error's cause.
    pub fn next_token(&mut self) -> Result<TokenKind, ParseError> {
        self.kind = TokenKind::Unknown;
        self.value.clear();

        let first = self.skip_whitespace()?;
        let kind = match first {
            b'n' => {
                self.consume_peeked(first);
                self.scan_literal(b"ull", TokenKind::Null)?
            }
            b't' => {
                self.consume_peeked(first);
                self.scan_literal(b"rue", TokenKind::True)?
            }
            b'f' => {
                self.consume_peeked(first);
                self.scan_literal(b"alse", TokenKind::False)?
            }
            b'-' | b'0'..=b'9' => {
                self.consume_peeked(first);
                self.scan_number(first == b'-')?
            }
            b'"' => {
                self.consume_peeked(first);
                self.scan_string()?
            }
            // nothing recognizable starts here; the byte stays unread
            _ => return Err(ParseError::InvalidJson { cause: None }),
        };
        self.expect_end_of_value()?;
        self.kind = kind;
        log::trace!("scanned {kind} token ({} bytes)", self.value.len());
        Ok(kind)
    }

    /// Skip whitespace without buffering it and peek the first byte of the
    /// token. An empty stream is an unanchored error wrapping end-of-stream.
    fn skip_whitespace(&mut self) -> Result<u8, ParseError> {
        loop {
            let byte = self.scanner.peek().map_err(|err| {
                ParseError::InvalidJson {
                    cause: Some(ErrorCause::Io(err)),
                }
            })?;
            match byte {
                None => {
                    return Err(ParseError::InvalidJson {
                        cause: Some(ErrorCause::UnexpectedEof),
                    });
                }
                Some(b' ' | b'\t' | b'\n' | b'\r') => self.discard_peeked(),
                Some(byte) => return Ok(byte),
            }
        }
    }

    /// Compare the remaining literal bytes one-for-one.
    ///
    /// On mismatch the error is anchored at the failed comparison, one past
    /// the last byte successfully matched; at end-of-stream it is anchored
    /// where the next expected byte would have been (see
    /// [`eof_at_next_byte`](Self::eof_at_next_byte)).
    fn scan_literal(
        &mut self,
        rest: &'static [u8],
        kind: TokenKind,
    ) -> Result<TokenKind, ParseError> {
        for &expected in rest {
            let pos = self.scanner.position();
            match self.advance_anchored(pos)? {
                None => return Err(self.eof_at_next_byte()),
                Some(byte) => {
                    self.value.push(byte);
                    if byte != expected {
                        return Err(ParseError::InvalidJsonAt {
                            pos,
                            cause: None,
                        });
                    }
                }
            }
        }
        Ok(kind)
    }

    /// Scan the digits of a number after its first byte was consumed.
    ///
    /// The grammar is `['-'] digits ['.' digits] [('e'|'E') ['+'|'-']
    /// digits]`. Whitespace or end-of-stream legitimately terminates a
    /// complete number; any other byte that cannot extend the grammar is
    /// consumed into the value and rejected at its own offset.
    fn scan_number(&mut self, has_sign: bool) -> Result<TokenKind, ParseError> {
        if has_sign {
            // a lone '-' is not a number
            self.expect_digit()?;
        }
        loop {
            match self.peek_anchored()? {
                Some(byte @ b'0'..=b'9') => self.consume_peeked(byte),
                Some(byte @ b'.') => {
                    self.consume_peeked(byte);
                    return self.scan_fraction();
                }
                Some(byte @ (b'e' | b'E')) => {
                    self.consume_peeked(byte);
                    return self.scan_exponent();
                }
                Some(b' ' | b'\t' | b'\n' | b'\r') | None => {
                    return Ok(TokenKind::IntNumber);
                }
                Some(byte) => return Err(self.reject_byte(byte)),
            }
        }
    }

    /// Scan the digits after the decimal point; at least one is mandatory.
    fn scan_fraction(&mut self) -> Result<TokenKind, ParseError> {
        self.expect_digit()?;
        loop {
            match self.peek_anchored()? {
                Some(byte @ b'0'..=b'9') => self.consume_peeked(byte),
                Some(byte @ (b'e' | b'E')) => {
                    self.consume_peeked(byte);
                    return self.scan_exponent();
                }
                Some(b' ' | b'\t' | b'\n' | b'\r') | None => {
                    return Ok(TokenKind::FloatNumber);
                }
                Some(byte) => return Err(self.reject_byte(byte)),
            }
        }
    }

    /// Scan an exponent after `e`/`E`: an optional sign, then at least one
    /// digit.
    fn scan_exponent(&mut self) -> Result<TokenKind, ParseError> {
        match self.peek_anchored()? {
            Some(byte @ (b'+' | b'-')) => {
                self.consume_peeked(byte);
                self.expect_digit()?;
            }
            Some(byte @ b'0'..=b'9') => self.consume_peeked(byte),
            Some(byte) => return Err(self.reject_byte(byte)),
            None => return Err(self.eof_at_last_byte()),
        }
        loop {
            match self.peek_anchored()? {
                Some(byte @ b'0'..=b'9') => self.consume_peeked(byte),
                Some(b' ' | b'\t' | b'\n' | b'\r') | None => {
                    return Ok(TokenKind::FloatNumber);
                }
                Some(byte) => return Err(self.reject_byte(byte)),
            }
        }
    }

    /// Scan a string body after the opening quote, then attempt time
    /// promotion on the full quoted text.
    fn scan_string(&mut self) -> Result<TokenKind, ParseError> {
        loop {
            match self.peek_anchored()? {
                None => return Err(self.eof_at_last_byte()),
                Some(byte @ b'"') => {
                    self.consume_peeked(byte);
                    break;
                }
                Some(byte @ b'\\') => {
                    self.consume_peeked(byte);
                    self.scan_escape()?;
                }
                // content bytes pass through untouched; UTF-8 validation
                // and unescaping belong to a higher layer
                Some(byte) => self.consume_peeked(byte),
            }
        }
        if TIME_PATTERN.is_match(&self.value) {
            Ok(TokenKind::Time)
        } else {
            Ok(TokenKind::String)
        }
    }

    /// Scan the byte(s) after a backslash: a single escape character, or
    /// `u` followed by exactly four hex digits.
    fn scan_escape(&mut self) -> Result<(), ParseError> {
        match self.peek_anchored()? {
            None => Err(self.eof_at_last_byte()),
            Some(
                byte @ (b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't'),
            ) => {
                self.consume_peeked(byte);
                Ok(())
            }
            Some(byte @ b'u') => {
                self.consume_peeked(byte);
                for _ in 0..4 {
                    match self.peek_anchored()? {
                        None => return Err(self.eof_at_last_byte()),
                        Some(hex) if hex.is_ascii_hexdigit() => {
                            self.consume_peeked(hex);
                        }
                        Some(other) => {
                            let pos = self.scanner.position();
                            self.consume_peeked(other);
                            return Err(ParseError::InvalidJsonAt {
                                pos,
                                cause: Some(ErrorCause::InvalidHexDigit),
                            });
                        }
                    }
                }
                Ok(())
            }
            Some(byte) => Err(self.reject_byte(byte)),
        }
    }

    /// Require one decimal digit at the cursor.
    ///
    /// At end-of-stream the error follows the number convention and anchors
    /// to the last consumed byte rather than the missing one.
    fn expect_digit(&mut self) -> Result<(), ParseError> {
        match self.peek_anchored()? {
            Some(byte @ b'0'..=b'9') => {
                self.consume_peeked(byte);
                Ok(())
            }
            Some(byte) => Err(self.reject_byte(byte)),
            None => Err(self.eof_at_last_byte()),
        }
    }

    /// After a complete token, only whitespace then end-of-stream may
    /// remain. A trailing byte fails the call, anchored at that byte, with
    /// the value extended by the skipped whitespace and the byte itself; on
    /// success the value is truncated back to the bare token.
    fn expect_end_of_value(&mut self) -> Result<(), ParseError> {
        let token_len = self.value.len();
        loop {
            match self.peek_anchored()? {
                None => {
                    self.value.truncate(token_len);
                    return Ok(());
                }
                Some(byte @ (b' ' | b'\t' | b'\n' | b'\r')) => {
                    self.consume_peeked(byte);
                }
                Some(byte) => return Err(self.reject_byte(byte)),
            }
        }
    }

    /// Consume a byte that cannot extend the current token and build the
    /// anchored error for it. The byte lands in the value buffer so that
    /// diagnostics show the full consumed prefix.
    fn reject_byte(&mut self, byte: u8) -> ParseError {
        let pos = self.scanner.position();
        self.consume_peeked(byte);
        ParseError::InvalidJsonAt { pos, cause: None }
    }

    /// Anchored end-of-stream error for literal matching: positioned at the
    /// offset that would have held the next expected byte, i.e. the stream
    /// length.
    ///
    /// This convention intentionally differs from
    /// [`eof_at_last_byte`](Self::eof_at_last_byte); both are part of the
    /// observable diagnostic contract and must not be unified.
    fn eof_at_next_byte(&self) -> ParseError {
        ParseError::InvalidJsonAt {
            pos: self.scanner.position(),
            cause: Some(ErrorCause::UnexpectedEof),
        }
    }

    /// Anchored end-of-stream error for number and string matching:
    /// positioned at the last byte actually consumed. Only called once at
    /// least one byte of the token has been consumed.
    fn eof_at_last_byte(&self) -> ParseError {
        ParseError::InvalidJsonAt {
            pos: self.scanner.position() - 1,
            cause: Some(ErrorCause::UnexpectedEof),
        }
    }

    /// Peek at the next byte, surfacing source failures as an error
    /// anchored at the cursor.
    fn peek_anchored(&mut self) -> Result<Option<u8>, ParseError> {
        let pos = self.scanner.position();
        self.scanner.peek().map_err(|err| ParseError::InvalidJsonAt {
            pos,
            cause: Some(ErrorCause::Io(err)),
        })
    }

    /// Consume one byte, surfacing source failures anchored at `pos`.
    fn advance_anchored(
        &mut self,
        pos: usize,
    ) -> Result<Option<u8>, ParseError> {
        self.scanner.advance().map_err(|err| ParseError::InvalidJsonAt {
            pos,
            cause: Some(ErrorCause::Io(err)),
        })
    }

    /// Consume the byte returned by the latest peek and append it to the
    /// value buffer. The byte is already buffered, so the advance cannot
    /// fail or come up empty.
    fn consume_peeked(&mut self, byte: u8) {
        let _ = self.scanner.advance();
        self.value.push(byte);
    }

    /// Consume the byte returned by the latest peek without buffering it.
    fn discard_peeked(&mut self) {
        let _ = self.scanner.advance();
    }
}
