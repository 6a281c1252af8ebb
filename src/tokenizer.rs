//! # Tokenizer
//!
//! Classifies a byte stream into typed extended-JSON tokens, one value per
//! call, reporting syntax errors with exact byte offsets.
pub mod error;
pub mod lexer;
pub mod token;

// Re-exports
pub use error::{ErrorCause, ParseError};
pub use lexer::Tokenizer;
pub use token::TokenKind;
