use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A syntax error raised by the parser, tagged with where it happened.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::ExpectedCloseParen { .. } => "ExpectedCloseParen",
            ErrorImpl::ExpectedArgumentSeparator { .. } => "ExpectedArgumentSeparator",
            ErrorImpl::ExpectedFunctionName { .. } => "ExpectedFunctionName",
            ErrorImpl::ExpectedOpenParenInPrototype { .. } => "ExpectedOpenParenInPrototype",
            ErrorImpl::ExpectedCloseParenInPrototype { .. } => "ExpectedCloseParenInPrototype",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

/// Every way a top-level form can fail to match the grammar.
///
/// `token` always holds the offending token as it appeared in the source.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unknown token when expecting an expression: {token:?}")]
    ExpectedExpression { token: String },
    #[error("expected ')', found {token:?}")]
    ExpectedCloseParen { token: String },
    #[error("Expected ')' or ',' in argument list, found {token:?}")]
    ExpectedArgumentSeparator { token: String },
    #[error("Expected function name in prototype, found {token:?}")]
    ExpectedFunctionName { token: String },
    #[error("Expected '(' in prototype, found {token:?}")]
    ExpectedOpenParenInPrototype { token: String },
    #[error("Expected ')' in prototype, found {token:?}")]
    ExpectedCloseParenInPrototype { token: String },
    #[error("invalid number literal: {token:?}")]
    NumberParseError { token: String },
    #[error("nesting too deep at {token:?}")]
    NestingTooDeep { token: String },
}
