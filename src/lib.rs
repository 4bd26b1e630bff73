#![allow(clippy::module_inception)]

use std::rc::Rc;

pub mod ast;
pub mod cli;
pub mod driver;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// A byte offset into a named source.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}
