use super::expressions::Expression;

/// `import a.b.c`
#[derive(Debug, Clone, PartialEq)]
pub struct ImportStatement {
    pub path: Vec<String>,
}

/// `fn name(): type { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition {
    pub name: String,
    /// Always empty until argument lists are parsed.
    pub arguments: Vec<String>,
    pub return_types: Vec<String>,
    pub body: Vec<Statement>,
}

/// `let name: type = initializer`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    pub name: String,
    pub type_: String,
    pub initializer: Expression,
}

/// `ret expression`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub expression: Expression,
}

/// A statement inside a function body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Return(ReturnStatement),
    Let(LetStatement),
    Expression(Expression),
}
