use std::fmt::Display;

use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}: {} Error: {}", .position.0, .internal_error.stage(), .internal_error)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_stage(&self) -> Stage {
        self.internal_error.stage()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnmatchedQuote => "UnmatchedQuote",
            ErrorImpl::InvalidInteger { .. } => "InvalidInteger",
            ErrorImpl::IntegerOverflow { .. } => "IntegerOverflow",
            ErrorImpl::UnexpectedEndOfFile { .. } => "UnexpectedEndOfFile",
            ErrorImpl::UnexpectedEndOfLine { .. } => "UnexpectedEndOfLine",
            ErrorImpl::UnexpectedTokenKind { .. } => "UnexpectedTokenKind",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedKeyword { .. } => "ExpectedKeyword",
            ErrorImpl::UnknownKeyword { .. } => "UnknownKeyword",
            ErrorImpl::JunkAfterStatement { .. } => "JunkAfterStatement",
            ErrorImpl::UnsupportedExpression { .. } => "UnsupportedExpression",
            ErrorImpl::UnsupportedCall { .. } => "UnsupportedCall",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnmatchedQuote => ErrorTip::Suggestion(String::from(
                "Strings end on the same line; write a quote twice to include it in the string",
            )),
            ErrorImpl::InvalidInteger { literal } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, a `0x` prefix must be followed by hex digits",
                literal
            )),
            ErrorImpl::IntegerOverflow { literal } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the integer limit?",
                literal
            )),
            ErrorImpl::UnknownKeyword { keyword } => ErrorTip::Suggestion(format!(
                "`{}` cannot start a declaration, expected `import`, `fn` or `let`",
                keyword
            )),
            ErrorImpl::JunkAfterStatement { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, each statement must end its line",
                token
            )),
            ErrorImpl::UnsupportedCall { name } => ErrorTip::Suggestion(format!(
                "Only `+` can be lowered for now, found a call to `{}`",
                name
            )),
            _ => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// The pass that raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Tokenization,
    Parsing,
    IrGeneration,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Tokenization => write!(f, "Tokenization"),
            Stage::Parsing => write!(f, "Parsing"),
            Stage::IrGeneration => write!(f, "IR Generation"),
        }
    }
}

/// What the parser was looking for when the input ran out.
#[derive(Debug, Clone, PartialEq)]
pub enum Expectation {
    Kind(TokenKind),
    Token(TokenKind, String),
}

impl Display for Expectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expectation::Kind(kind) => write!(f, "a token of type {}", kind),
            Expectation::Token(kind, text) => write!(f, "a token \"{}\" of type {}", text, kind),
        }
    }
}

fn expected_suffix(expected: &Option<Expectation>) -> String {
    match expected {
        Some(expectation) => format!(", expected {}", expectation),
        None => String::new(),
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Tokenization
    #[error("Unmatched quote")]
    UnmatchedQuote,
    #[error("Invalid integer literal: {literal}")]
    InvalidInteger { literal: String },
    #[error("Integer literal does not fit in 64 bits: {literal}")]
    IntegerOverflow { literal: String },

    // Parsing
    #[error("Unexpected end of file{}", expected_suffix(.expected))]
    UnexpectedEndOfFile { expected: Option<Expectation> },
    #[error("Unexpected end of line{}", expected_suffix(.expected))]
    UnexpectedEndOfLine { expected: Option<Expectation> },
    #[error("Expected a token of type {expected}, got {found} instead")]
    UnexpectedTokenKind { expected: TokenKind, found: TokenKind },
    #[error("Expected a token \"{expected_text}\" of type {expected}, got \"{}\" of type {} instead", .found.contents, .found.kind)]
    UnexpectedToken {
        expected: TokenKind,
        expected_text: String,
        found: Token,
    },
    #[error("Expected a keyword, got {found} instead")]
    ExpectedKeyword { found: TokenKind },
    #[error("Unknown keyword: {keyword}")]
    UnknownKeyword { keyword: String },
    #[error("Unexpected token after end of statement: {token}")]
    JunkAfterStatement { token: String },

    // IR generation
    #[error("Expression cannot be lowered yet: {expression}")]
    UnsupportedExpression { expression: String },
    #[error("Function call not implemented: {name}")]
    UnsupportedCall { name: String },
}

impl ErrorImpl {
    pub fn stage(&self) -> Stage {
        match self {
            ErrorImpl::UnmatchedQuote
            | ErrorImpl::InvalidInteger { .. }
            | ErrorImpl::IntegerOverflow { .. } => Stage::Tokenization,
            ErrorImpl::UnsupportedExpression { .. }
            | ErrorImpl::UnsupportedCall { .. } => Stage::IrGeneration,
            _ => Stage::Parsing,
        }
    }
}
