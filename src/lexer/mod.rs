//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that turns a byte source
//! into a stream of tokens for parsing. It handles:
//!
//! - Pull-based tokenization with one character of lookahead
//! - Recognition of keywords, identifiers, numbers and single-character symbols
//! - Token position tracking for error reporting
//! - `#` line comments and whitespace

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
