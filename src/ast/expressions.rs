use std::fmt::Display;

/// An expression.
///
/// Binary operators have no node of their own: `a + b` is a two-argument
/// `FunctionCall` named `+`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    IntegerLiteral(u64),
    StringLiteral(String),
    /// A possibly dotted name, one entry per part.
    Variable(Vec<String>),
    FunctionCall {
        name: Vec<String>,
        arguments: Vec<Expression>,
    },
}

impl Expression {
    /// Builds the call an infix operator stands for.
    pub fn binary(operator: String, left: Expression, right: Expression) -> Self {
        Expression::FunctionCall {
            name: vec![operator],
            arguments: vec![left, right],
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::IntegerLiteral(value) => write!(f, "{}", value),
            Expression::StringLiteral(value) => write!(f, "{:?}", value),
            Expression::Variable(name) => write!(f, "{}", name.join(".")),
            Expression::FunctionCall { name, arguments } => {
                write!(f, "{}(", name.join("."))?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", argument)?;
                }
                write!(f, ")")
            }
        }
    }
}
