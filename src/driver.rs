//! The top-level read loop.
//!
//! The driver classifies each top-level form by its leading token, hands it
//! to the matching parse routine and reports the outcome on a diagnostic
//! sink. It is the only place a syntax error turns into forward progress:
//! the message is written out and exactly one token is discarded.

use std::io::{self, Read, Write};

use log::{debug, info};

use crate::{
    ast::functions::TopLevel,
    errors::errors::Error,
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::{
        parser::Parser,
        toplevel::{parse_definition, parse_extern, parse_top_level_expr},
    },
};

pub const DEFAULT_PROMPT: &str = "ready> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    ReadyForTopLevelForm,
    Done,
}

pub struct Driver<R: Read, W: Write> {
    parser: Parser<R>,
    diagnostics: W,
    prompt: String,
    print_ast: bool,
}

impl<R: Read, W: Write> Driver<R, W> {
    pub fn new(parser: Parser<R>, diagnostics: W) -> Self {
        Driver {
            parser,
            diagnostics,
            prompt: String::from(DEFAULT_PROMPT),
            print_ast: false,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_print_ast(mut self, print_ast: bool) -> Self {
        self.print_ast = print_ast;
        self
    }

    pub fn parser_mut(&mut self) -> &mut Parser<R> {
        &mut self.parser
    }

    pub fn into_diagnostics(self) -> W {
        self.diagnostics
    }

    /// Runs until the input is exhausted and returns every form that parsed.
    ///
    /// Only a failure to write diagnostics ends the loop early.
    pub fn main_loop(&mut self) -> io::Result<Vec<TopLevel>> {
        info!("starting top-level loop");
        let mut items = vec![];

        self.write_prompt()?;
        self.parser.advance();

        let mut state = DriverState::ReadyForTopLevelForm;
        while state == DriverState::ReadyForTopLevelForm {
            self.write_prompt()?;
            state = self.step(&mut items)?;
        }

        info!("input exhausted after {} top-level forms", items.len());
        Ok(items)
    }

    fn step(&mut self, items: &mut Vec<TopLevel>) -> io::Result<DriverState> {
        let item = match self.parser.current_token_kind().clone() {
            TokenKind::EOF => return Ok(DriverState::Done),
            TokenKind::Symbol(';') => {
                self.parser.advance();
                None
            }
            TokenKind::Def => {
                self.handle(parse_definition, TopLevel::Definition, "parsed a function definition")?
            }
            TokenKind::Extern => self.handle(parse_extern, TopLevel::Extern, "parsed an extern")?,
            _ => self.handle(
                parse_top_level_expr,
                TopLevel::Expression,
                "parsed a top-level expr",
            )?,
        };

        items.extend(item);
        Ok(DriverState::ReadyForTopLevelForm)
    }

    fn handle<T>(
        &mut self,
        parse: fn(&mut Parser<R>) -> Result<T, Error>,
        wrap: fn(T) -> TopLevel,
        message: &str,
    ) -> io::Result<Option<TopLevel>> {
        match parse(&mut self.parser) {
            Ok(node) => {
                let item = wrap(node);
                writeln!(self.diagnostics, "{}", message)?;
                if self.print_ast {
                    writeln!(self.diagnostics, "{}", item)?;
                }
                Ok(Some(item))
            }
            Err(error) => {
                debug!(
                    "{} at {}:{}",
                    error.get_error_name(),
                    error.get_position().1,
                    error.get_position().0
                );
                writeln!(self.diagnostics, "LogError: {}", error)?;
                // Skip the offending token so the next form can be attempted.
                self.parser.advance();
                Ok(None)
            }
        }
    }

    fn write_prompt(&mut self) -> io::Result<()> {
        write!(self.diagnostics, "{}", self.prompt)?;
        self.diagnostics.flush()
    }
}

/// Writes every token up to end of input as `Token: <token>`, one per line.
pub fn dump_tokens<R: Read, W: Write>(lexer: &mut Lexer<R>, out: &mut W) -> io::Result<()> {
    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::EOF {
            return Ok(());
        }
        writeln!(out, "Token: {}", token)?;
    }
}
