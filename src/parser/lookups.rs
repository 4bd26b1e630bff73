use std::{collections::HashMap, io::Read};

use super::parser::Parser;

/// Returned for any token that does not continue a binary expression.
pub const NOT_A_BINOP: i32 = -1;

pub type PrecedenceLookup = HashMap<char, i32>;

/// Installs the standard binary operators. Higher binds tighter.
pub fn create_precedence_lookups<R: Read>(parser: &mut Parser<R>) {
    // Relational
    parser.binop('<', 10);

    // Additive and multiplicative
    parser.binop('+', 20);
    parser.binop('-', 20);
    parser.binop('*', 40);
}
