use super::ast::Expr;

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
}

/// Variable Expression
/// A reference to a name. Nothing is resolved at this stage.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: String,
}

/// Binary Expression
/// `operator` is always a character with a positive precedence in the
/// table the parser was built with.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: char,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Call Expression
/// Arguments are kept in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub arguments: Vec<Expr>,
}
