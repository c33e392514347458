use super::statements::{FunctionDefinition, ImportStatement, LetStatement};

/// A top-level declaration.
///
/// The set of node kinds is closed, so every consumer has to handle each
/// variant explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Import(ImportStatement),
    Function(FunctionDefinition),
    Let(LetStatement),
}

impl Declaration {
    pub fn name(&self) -> String {
        match self {
            Declaration::Import(import) => import.path.join("."),
            Declaration::Function(function) => function.name.clone(),
            Declaration::Let(let_stmt) => let_stmt.name.clone(),
        }
    }
}

/// The declarations of a file, in source order.
pub type Ast = Vec<Declaration>;
