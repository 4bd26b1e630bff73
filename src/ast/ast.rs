use std::fmt::Display;

use super::expressions::{BinaryExpr, CallExpr, NumberExpr, VariableExpr};

/// Expression
///
/// The closed set of expression shapes. Children are owned through `Box`,
/// so every tree is finite and built bottom-up by the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    Variable(VariableExpr),
    Binary(BinaryExpr),
    Call(CallExpr),
}

impl Expr {
    pub fn number(value: f64) -> Self {
        Expr::Number(NumberExpr { value })
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(VariableExpr { name: name.into() })
    }

    pub fn binary(operator: char, left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn call(callee: impl Into<String>, arguments: Vec<Expr>) -> Self {
        Expr::Call(CallExpr {
            callee: callee.into(),
            arguments,
        })
    }
}

/// Renders the expression as an s-expression, e.g. `(+ x (* 2 y))`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(number) => write!(f, "{}", number.value),
            Expr::Variable(variable) => write!(f, "{}", variable.name),
            Expr::Binary(binary) => {
                write!(f, "({} {} {})", binary.operator, binary.left, binary.right)
            }
            Expr::Call(call) => {
                write!(f, "({}", call.callee)?;
                for argument in &call.arguments {
                    write!(f, " {}", argument)?;
                }
                write!(f, ")")
            }
        }
    }
}
