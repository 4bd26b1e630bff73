use std::fmt::Display;

use super::ast::Expr;

/// Prototype
///
/// A function signature: its name and parameter names. An empty name marks
/// the anonymous wrapper around a top-level expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub parameters: Vec<String>,
}

impl Prototype {
    pub fn new(name: impl Into<String>, parameters: Vec<String>) -> Self {
        Prototype {
            name: name.into(),
            parameters,
        }
    }

    pub fn anonymous() -> Self {
        Prototype::new("", vec![])
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}

impl Display for Prototype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.parameters.join(" "))
    }
}

/// Function
/// A prototype with its body.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub prototype: Prototype,
    pub body: Expr,
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(def {} {})", self.prototype, self.body)
    }
}

/// One successfully parsed top-level form.
#[derive(Debug, Clone, PartialEq)]
pub enum TopLevel {
    Definition(Function),
    Extern(Prototype),
    /// A bare expression, wrapped in an anonymous function.
    Expression(Function),
}

impl Display for TopLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopLevel::Definition(function) => write!(f, "{}", function),
            TopLevel::Extern(prototype) => write!(f, "(extern {})", prototype),
            TopLevel::Expression(function) => write!(f, "{}", function.body),
        }
    }
}
