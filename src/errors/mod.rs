//! Error types for the parser.
//!
//! Every failure the front end can report is a syntax error: the input did
//! not match the grammar at the current token. This module defines:
//!
//! - The positioned `Error` wrapper handed back by every parse routine
//! - The `ErrorImpl` variants naming each grammar rule that can fail

pub mod errors;

#[cfg(test)]
mod tests;
