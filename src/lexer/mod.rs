//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Identifiers, integer literals and string literals
//! - Sign characters and newline normalization (LF / CRLF)
//! - Line comments (`;`, `//`) and block comments (`/* */`)
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
