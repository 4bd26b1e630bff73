/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Expr` sum type and its s-expression rendering
/// - expressions: The node structs wrapped by `Expr`
/// - functions: Prototypes, function definitions and top-level items
pub mod ast;
pub mod expressions;
pub mod functions;
