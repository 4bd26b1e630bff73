use std::io::Read;

use log::debug;

use crate::{
    ast::functions::{Function, Prototype},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// prototype ::= identifier '(' identifier* ')'
pub fn parse_prototype<R: Read>(parser: &mut Parser<R>) -> Result<Prototype, Error> {
    let name = match parser.current_token_kind() {
        TokenKind::Identifier(name) => name.clone(),
        _ => return Err(parser.error(|token| ErrorImpl::ExpectedFunctionName { token })),
    };
    parser.advance();

    parser.expect_symbol('(', |token| ErrorImpl::ExpectedOpenParenInPrototype { token })?;

    let mut parameters = vec![];
    while let TokenKind::Identifier(parameter) = parser.current_token_kind() {
        parameters.push(parameter.clone());
        parser.advance();
    }

    parser.expect_symbol(')', |token| ErrorImpl::ExpectedCloseParenInPrototype { token })?;

    Ok(Prototype::new(name, parameters))
}

/// definition ::= 'def' prototype expression
pub fn parse_definition<R: Read>(parser: &mut Parser<R>) -> Result<Function, Error> {
    parser.advance();
    let prototype = parse_prototype(parser)?;
    debug!("parsing body of {}", prototype.name);
    let body = parse_expr(parser)?;

    Ok(Function { prototype, body })
}

/// external ::= 'extern' prototype
pub fn parse_extern<R: Read>(parser: &mut Parser<R>) -> Result<Prototype, Error> {
    parser.advance();
    parse_prototype(parser)
}

/// toplevelexpr ::= expression
pub fn parse_top_level_expr<R: Read>(parser: &mut Parser<R>) -> Result<Function, Error> {
    let body = parse_expr(parser)?;

    Ok(Function {
        prototype: Prototype::anonymous(),
        body,
    })
}
