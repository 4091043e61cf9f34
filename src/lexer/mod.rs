//! Lexical analysis module.
//!
//! Converts source text into the token stream consumed by the parser:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of keywords, identifiers, number and string literals, operators
//! - Byte offset and line tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
