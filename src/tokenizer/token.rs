//! # Token Kinds
//!
//! Defines the classification tags a scanned value can receive.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Classification of a single scanned value.
///
/// Assigned once per tokenizer call. The names are wire-visible: a consumer
/// may surface them in diagnostics or serialized token streams.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum TokenKind {
    /// No token was produced; always accompanied by an error
    #[default]
    Unknown,

    /// `null` literal
    Null,

    /// `false` literal
    False,

    /// `true` literal
    True,

    /// Integer numeric text, preserved verbatim at any length
    IntNumber,

    /// Numeric text carrying a fraction or exponent part
    FloatNumber,

    /// Quoted string with escape sequences left intact
    String,

    /// Quoted string matching the RFC 3339 timestamp shape
    Time,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Unknown => "Unknown",
            TokenKind::Null => "Null",
            TokenKind::False => "False",
            TokenKind::True => "True",
            TokenKind::IntNumber => "IntNumber",
            TokenKind::FloatNumber => "FloatNumber",
            TokenKind::String => "String",
            TokenKind::Time => "Time",
        };
        write!(f, "{name}")
    }
}
