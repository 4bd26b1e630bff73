use std::io::Read;

use log::debug;

use crate::{ast::ast::Expr, errors::errors::{Error, ErrorImpl}, lexer::tokens::TokenKind};

use super::parser::Parser;

/// expression ::= primary binoprhs
pub fn parse_expr<R: Read>(parser: &mut Parser<R>) -> Result<Expr, Error> {
    let lhs = parse_primary_expr(parser)?;

    parse_bin_op_rhs(parser, 0, lhs)
}

pub fn parse_primary_expr<R: Read>(parser: &mut Parser<R>) -> Result<Expr, Error> {
    match parser.current_token_kind().clone() {
        TokenKind::Identifier(name) => parse_identifier_expr(parser, name),
        TokenKind::Number(value) => {
            parser.advance();
            Ok(Expr::number(value))
        }
        TokenKind::Symbol('(') => parse_paren_expr(parser),
        TokenKind::InvalidNumber(_) => {
            Err(parser.error(|token| ErrorImpl::NumberParseError { token }))
        }
        _ => Err(parser.error(|token| ErrorImpl::ExpectedExpression { token })),
    }
}

/// identifierexpr ::= identifier | identifier '(' (expression (',' expression)*)? ')'
pub fn parse_identifier_expr<R: Read>(parser: &mut Parser<R>, name: String) -> Result<Expr, Error> {
    parser.advance();

    if !parser.current_token_kind().is_symbol('(') {
        return Ok(Expr::variable(name));
    }

    let arguments = parser.nested(parse_call_arguments)?;

    Ok(Expr::call(name, arguments))
}

fn parse_call_arguments<R: Read>(parser: &mut Parser<R>) -> Result<Vec<Expr>, Error> {
    parser.advance();
    let mut arguments = vec![];

    if !parser.current_token_kind().is_symbol(')') {
        loop {
            arguments.push(parse_expr(parser)?);

            if parser.current_token_kind().is_symbol(')') {
                break;
            }

            if !parser.current_token_kind().is_symbol(',') {
                return Err(parser.error(|token| ErrorImpl::ExpectedArgumentSeparator { token }));
            }
            parser.advance();
        }
    }

    parser.advance();

    Ok(arguments)
}

/// parenexpr ::= '(' expression ')'
pub fn parse_paren_expr<R: Read>(parser: &mut Parser<R>) -> Result<Expr, Error> {
    parser.nested(|parser| {
        parser.advance();
        let expr = parse_expr(parser)?;
        parser.expect_symbol(')', |token| ErrorImpl::ExpectedCloseParen { token })?;

        Ok(expr)
    })
}

/// binoprhs ::= (binop primary)*
///
/// Folds operators of at least `min_precedence` onto `lhs`. Equal
/// precedences group to the left; a tighter operator after the right
/// operand takes that operand first.
pub fn parse_bin_op_rhs<R: Read>(
    parser: &mut Parser<R>,
    min_precedence: i32,
    mut lhs: Expr,
) -> Result<Expr, Error> {
    loop {
        let (operator, precedence) = match parser.current_binop() {
            Some((operator, precedence)) if precedence >= min_precedence => (operator, precedence),
            _ => return Ok(lhs),
        };

        parser.advance();
        let mut rhs = parse_primary_expr(parser)?;

        if precedence < parser.get_token_precedence() {
            rhs = parse_bin_op_rhs(parser, precedence + 1, rhs)?;
        }

        debug!("binary expression {:?} at precedence {}", operator, precedence);
        lhs = Expr::binary(operator, lhs, rhs);
    }
}
