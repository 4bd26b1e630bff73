//! Parser state shared by every parse routine.
//!
//! The parser pulls tokens from a [`Lexer`] one at a time and keeps exactly
//! one token of lookahead, the current token. Expression parsing combines
//! recursive descent for primaries with precedence climbing over the
//! operator table held here.

use std::{io::Read, mem, rc::Rc};

use log::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position, Span, MK_TOKEN,
};

use super::lookups::{create_precedence_lookups, PrecedenceLookup, NOT_A_BINOP};

/// Deepest run of open parentheses and call argument lists accepted.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser<R: Read> {
    /// Source of tokens
    lexer: Lexer<R>,
    /// The single token of lookahead
    current: Token,
    /// Binary operator precedences
    precedence_lookup: PrecedenceLookup,
    /// Parentheses and argument lists currently open
    depth: usize,
}

impl<R: Read> Parser<R> {
    /// Creates a parser over `source` with the default operator table.
    ///
    /// Nothing is read yet: the current token is a placeholder `EOF` until
    /// the first call to [`Parser::advance`].
    pub fn new(source: R, file: Option<String>) -> Self {
        let lexer = Lexer::new(source, file);
        let start = lexer.offset();
        let file = lexer.file();

        let mut parser = Parser {
            current: MK_TOKEN!(TokenKind::EOF, start, start, file),
            lexer,
            precedence_lookup: PrecedenceLookup::new(),
            depth: 0,
        };
        create_precedence_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> &TokenKind {
        &self.current.kind
    }

    /// Pulls the next token from the lexer and returns the previous one.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        next.debug();
        mem::replace(&mut self.current, next)
    }

    /// Builds an error about the current token.
    pub fn error(&self, error: impl FnOnce(String) -> ErrorImpl) -> Error {
        Error::new(error(self.current_token().to_string()), self.get_position())
    }

    /// Runs `parse` one nesting level deeper, failing on the current token
    /// once `MAX_NESTING_DEPTH` levels are already open.
    pub fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(|token| ErrorImpl::NestingTooDeep { token }));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;

        result
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }

    /// Consumes the current token if it is `symbol`, otherwise fails with `error`.
    pub fn expect_symbol(
        &mut self,
        symbol: char,
        error: impl FnOnce(String) -> ErrorImpl,
    ) -> Result<Token, Error> {
        if self.current.kind.is_symbol(symbol) {
            Ok(self.advance())
        } else {
            Err(self.error(error))
        }
    }

    /// Registers (or overrides) a binary operator.
    ///
    /// A precedence of zero or below disables the operator.
    pub fn binop(&mut self, operator: char, precedence: i32) {
        debug!("binary operator {:?} has precedence {}", operator, precedence);
        self.precedence_lookup.insert(operator, precedence);
    }

    /// Returns a reference to the precedence lookup table.
    pub fn get_precedence_lookup(&self) -> &PrecedenceLookup {
        &self.precedence_lookup
    }

    /// The current token as a binary operator, with its precedence.
    pub fn current_binop(&self) -> Option<(char, i32)> {
        match self.current.kind {
            TokenKind::Symbol(operator) => match self.precedence_lookup.get(&operator) {
                Some(&precedence) if precedence > 0 => Some((operator, precedence)),
                _ => None,
            },
            _ => None,
        }
    }

    /// Precedence of the current token, or `NOT_A_BINOP`.
    pub fn get_token_precedence(&self) -> i32 {
        self.current_binop()
            .map_or(NOT_A_BINOP, |(_, precedence)| precedence)
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}
