//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module turns the token stream into AST nodes. It handles:
//!
//! - Primary expressions (numbers, variables, calls, parentheses)
//! - Binary expressions by precedence climbing over a per-operator table
//! - Prototypes, definitions, extern declarations and top-level expressions
//!
//! Every routine returns `Result`; failures propagate untouched to the
//! caller, which decides how to recover.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod toplevel;
