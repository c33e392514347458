/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Top-level declarations and the AST itself
/// - expressions: Expression nodes
/// - statements: Statement nodes found at top level or inside function bodies
pub mod ast;
pub mod expressions;
pub mod statements;
