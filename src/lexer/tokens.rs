use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    /// Every symbol the lexer knows. Symbols are matched by prefix, so
    /// multi-character entries can be added here without touching the lexer.
    pub static ref SYMBOLS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert(":");
        set.insert(".");
        set.insert("{");
        set.insert("}");
        set.insert("[");
        set.insert("]");
        set.insert("(");
        set.insert(")");
        set
    };
}

/// Returns whether `candidate` is a prefix of at least one known symbol.
pub fn is_symbol_prefix(candidate: &str) -> bool {
    SYMBOLS.iter().any(|symbol| symbol.starts_with(candidate))
}

pub fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Integer,
    String,
    Symbol,
    Identifier,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Integer => write!(f, "integer"),
            TokenKind::String => write!(f, "string"),
            TokenKind::Symbol => write!(f, "symbol"),
            TokenKind::Identifier => write!(f, "identifier"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TokenContents {
    /// Decoded value of an integer literal.
    Integer(u64),
    /// Unescaped string body, or the raw text of a symbol or identifier.
    Text(String),
}

impl Display for TokenContents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenContents::Integer(value) => write!(f, "{}", value),
            TokenContents::Text(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub contents: TokenContents,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.contents)
    }
}

impl Token {
    pub fn text(&self) -> Option<&str> {
        match &self.contents {
            TokenContents::Text(text) => Some(text),
            TokenContents::Integer(_) => None,
        }
    }

    pub fn integer(&self) -> Option<u64> {
        match self.contents {
            TokenContents::Integer(value) => Some(value),
            TokenContents::Text(_) => None,
        }
    }

    /// Whether this token has the given kind and exact text.
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text() == Some(text)
    }

    pub fn into_text(self) -> String {
        match self.contents {
            TokenContents::Text(text) => text,
            TokenContents::Integer(value) => value.to_string(),
        }
    }
}

/// The tokens produced from exactly one source line. Lines holding only
/// whitespace or a comment are empty but keep their place in the stream.
pub type TokenizedLine = Vec<Token>;
