//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct, its two-dimensional token
//! cursor and the primitives every grammar rule is built from. The rules
//! themselves live in `stmt.rs` and `expr.rs`; keyword dispatch goes through
//! the tables registered in `lookups.rs`.

use std::{collections::HashMap, rc::Rc};

use tracing::{debug, instrument};

use crate::{
    ast::ast::Ast,
    errors::errors::{Error, ErrorImpl, Expectation},
    lexer::tokens::{Token, TokenKind, TokenizedLine},
    Position,
};

use super::{
    lookups::{create_keyword_lookups, DeclHandler, DeclLookup, Keyword, StmtHandler, StmtLookup},
    stmt::parse_declaration,
};

/// Position of the parser inside the token stream: a 0-indexed line and the
/// index of the next token on that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub line: usize,
    pub index: usize,
}

/// The main parser structure that maintains parsing state.
///
/// This struct owns the tokenized lines and the cursor into them, plus the
/// keyword lookup tables used to dispatch declarations and statements.
pub struct Parser {
    /// The tokenized source, one entry per source line
    lines: Vec<TokenizedLine>,
    /// Where the next token will be read from
    cursor: Cursor,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Handlers for keywords that start a top-level declaration
    decl_lookup: DeclLookup,
    /// Handlers for keywords that start a statement inside a block
    stmt_lookup: StmtLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `lines` - The tokenized lines to parse
    /// * `file` - Reference-counted string containing the source file name
    ///
    /// # Returns
    ///
    /// A new Parser with its cursor on the first token. The lookup tables are
    /// empty until `create_keyword_lookups` fills them.
    pub fn new(lines: Vec<TokenizedLine>, file: Rc<String>) -> Self {
        Parser {
            lines,
            cursor: Cursor::default(),
            file,
            decl_lookup: HashMap::new(),
            stmt_lookup: HashMap::new(),
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// True once every line has been consumed.
    pub fn is_eof(&self) -> bool {
        self.cursor.line >= self.lines.len()
    }

    /// True once every token of the current line has been consumed.
    /// Past the end of the file there is no line left, so this holds too.
    pub fn is_eol(&self) -> bool {
        match self.lines.get(self.cursor.line) {
            Some(line) => self.cursor.index >= line.len(),
            None => true,
        }
    }

    /// Builds an error positioned on the line the cursor is on.
    ///
    /// Past the end of the file the last line is reported, since that is
    /// where the input ran out.
    pub fn error(&self, error: ErrorImpl) -> Error {
        Error::new(error, self.get_position())
    }

    fn check_available(&self, expected: Option<Expectation>) -> Result<(), Error> {
        if self.is_eof() {
            return Err(self.error(ErrorImpl::UnexpectedEndOfFile { expected }));
        }
        if self.is_eol() {
            return Err(self.error(ErrorImpl::UnexpectedEndOfLine { expected }));
        }
        Ok(())
    }

    /// Returns the current token without consuming it.
    pub fn peek(&self) -> Result<&Token, Error> {
        self.check_available(None)?;
        Ok(&self.lines[self.cursor.line][self.cursor.index])
    }

    /// Returns the current token if there is one on this line.
    pub fn peek_on_line(&self) -> Option<&Token> {
        self.lines
            .get(self.cursor.line)
            .and_then(|line| line.get(self.cursor.index))
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let token = self.peek()?.clone();
        self.cursor.index += 1;
        Ok(token)
    }

    /// Reads a token of the given kind.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.check_available(Some(Expectation::Kind(expected_kind)))?;

        let token = self.advance()?;
        if token.kind != expected_kind {
            return Err(self.error(ErrorImpl::UnexpectedTokenKind {
                expected: expected_kind,
                found: token.kind,
            }));
        }

        Ok(token)
    }

    /// Reads a token of the given kind and returns its text.
    pub fn expect_text(&mut self, expected_kind: TokenKind) -> Result<String, Error> {
        Ok(self.expect(expected_kind)?.into_text())
    }

    /// Reads a token and fails unless both its kind and text match.
    pub fn match_token(&mut self, expected_kind: TokenKind, text: &str) -> Result<Token, Error> {
        self.check_available(Some(Expectation::Token(expected_kind, text.to_string())))?;

        let token = self.advance()?;
        if !token.is(expected_kind, text) {
            return Err(self.error(ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                expected_text: text.to_string(),
                found: token,
            }));
        }

        Ok(token)
    }

    /// Whether the next token on this line is the given symbol.
    pub fn at_symbol(&self, symbol: &str) -> bool {
        self.peek_on_line()
            .is_some_and(|token| token.is(TokenKind::Symbol, symbol))
    }

    fn next_line(&mut self) {
        self.cursor.line += 1;
        self.cursor.index = 0;
    }

    /// Moves past any fully consumed lines. Does nothing in the middle of a line.
    pub fn skip_blank_lines(&mut self) {
        while !self.is_eof() && self.is_eol() {
            self.next_line();
        }
    }

    /// Ends a statement: the current line must be fully consumed.
    pub fn require_end_of_line(&mut self) -> Result<(), Error> {
        if let Some(token) = self.peek_on_line() {
            return Err(self.error(ErrorImpl::JunkAfterStatement {
                token: token.contents.to_string(),
            }));
        }

        self.skip_blank_lines();
        Ok(())
    }

    /// Returns a reference to the declaration lookup table.
    pub fn get_decl_lookup(&self) -> &DeclLookup {
        &self.decl_lookup
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a handler for a keyword that starts a top-level declaration.
    pub fn decl(&mut self, keyword: Keyword, decl_fn: DeclHandler) {
        self.decl_lookup.insert(keyword, decl_fn);
    }

    /// Registers a handler for a keyword that starts a statement in a block.
    pub fn stmt(&mut self, keyword: Keyword, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(keyword, stmt_fn);
    }

    /// Returns the line the cursor is on, clamped to the last line.
    pub fn get_position(&self) -> Position {
        let line = self.cursor.line.min(self.lines.len().saturating_sub(1));
        Position::from_index(line, &self.file)
    }
}

/// Parses tokenized lines into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// registers the keyword handlers and parses declarations until the end of
/// the file. The first error aborts the parse; nothing after it is inspected.
///
/// # Arguments
///
/// * `lines` - The tokenized source, index-aligned with the source lines
/// * `file` - Reference-counted string containing the source file name
///
/// # Returns
///
/// The declarations in source order, or the first error encountered.
#[instrument(skip_all, fields(file = %file, lines = lines.len()))]
pub fn parse(lines: Vec<TokenizedLine>, file: Rc<String>) -> Result<Ast, Error> {
    let mut parser = Parser::new(lines, file);
    create_keyword_lookups(&mut parser);

    let mut ast = vec![];

    parser.skip_blank_lines();
    while !parser.is_eof() {
        let declaration = parse_declaration(&mut parser)?;
        debug!(name = %declaration.name(), line = parser.get_position().0, "declaration parsed");
        ast.push(declaration);

        parser.require_end_of_line()?;
    }

    Ok(ast)
}
