use std::{
    io::{Bytes, Read},
    rc::Rc,
};

use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    /// Accepted spelling of a numeric literal once the digits and dots are collected.
    static ref NUMBER_LITERAL: Regex = Regex::new(r"^([0-9]+\.?[0-9]*|\.[0-9]+)$").unwrap();
}

/// Pull-based tokenizer over a byte source.
///
/// The lexer reads one byte at a time and keeps exactly one character of
/// lookahead between calls to [`Lexer::next_token`]. Bytes are treated as
/// characters, so anything outside ASCII comes back as a `Symbol`.
pub struct Lexer<R: Read> {
    source: Bytes<R>,
    /// The lookahead character, `None` once the source is exhausted
    last_char: Option<char>,
    /// Number of bytes consumed from the source so far
    pos: u32,
    at_eof: bool,
    file: Rc<String>,
}

impl<R: Read> Lexer<R> {
    pub fn new(source: R, file: Option<String>) -> Lexer<R> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source: source.bytes(),
            // Seeded with whitespace so nothing is read before the first token is requested.
            last_char: Some(' '),
            pos: 0,
            at_eof: false,
            file: file_name,
        }
    }

    #[cfg(test)]
    pub(super) fn starting_at(mut self, pos: u32) -> Self {
        self.pos = pos;
        self
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    /// Byte offset of the lookahead character.
    pub fn offset(&self) -> u32 {
        if self.last_char.is_some() {
            self.pos.saturating_sub(1)
        } else {
            self.pos
        }
    }

    fn read_char(&mut self) -> Option<char> {
        if self.at_eof {
            return None;
        }

        match self.source.next() {
            Some(Ok(byte)) => {
                self.pos = self.pos.saturating_add(1);
                Some(byte as char)
            }
            Some(Err(error)) => {
                warn!("failed to read from {}: {}", self.file, error);
                self.at_eof = true;
                None
            }
            None => {
                self.at_eof = true;
                None
            }
        }
    }

    fn advance(&mut self) {
        self.last_char = self.read_char();
    }

    /// Produces the next token, blocking on the source as needed.
    ///
    /// Once the source is exhausted every further call returns `EOF`.
    pub fn next_token(&mut self) -> Token {
        loop {
            while matches!(self.last_char, Some(c) if c.is_ascii_whitespace()) {
                self.advance();
            }

            let start = self.offset();
            let c = match self.last_char {
                Some(c) => c,
                None => return MK_TOKEN!(TokenKind::EOF, start, start, self.file),
            };

            if c.is_ascii_alphabetic() {
                let mut identifier = String::from(c);
                self.advance();
                while let Some(c) = self.last_char.filter(|c| c.is_ascii_alphanumeric()) {
                    identifier.push(c);
                    self.advance();
                }

                let kind = match RESERVED_LOOKUP.get(identifier.as_str()) {
                    Some(kind) => kind.clone(),
                    None => TokenKind::Identifier(identifier),
                };
                return MK_TOKEN!(kind, start, self.offset(), self.file);
            }

            if c.is_ascii_digit() || c == '.' {
                let mut literal = String::new();
                while let Some(c) = self.last_char.filter(|c| c.is_ascii_digit() || *c == '.') {
                    literal.push(c);
                    self.advance();
                }

                return MK_TOKEN!(number_kind(literal), start, self.offset(), self.file);
            }

            if c == '#' {
                while !matches!(self.last_char, None | Some('\n') | Some('\r')) {
                    self.advance();
                }
                continue;
            }

            self.advance();
            return MK_TOKEN!(TokenKind::Symbol(c), start, self.offset(), self.file);
        }
    }
}

fn number_kind(literal: String) -> TokenKind {
    if !NUMBER_LITERAL.is_match(&literal) {
        return TokenKind::InvalidNumber(literal);
    }

    match literal.parse::<f64>() {
        Ok(value) => TokenKind::Number(value),
        Err(_) => TokenKind::InvalidNumber(literal),
    }
}

/// Drains a whole string into tokens, ending with a single `EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source.as_bytes(), file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
