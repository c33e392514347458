use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{ast::Declaration, statements::Statement},
    errors::errors::Error,
};

use super::{parser::Parser, stmt::*};

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        map.insert("import", Keyword::Import);
        map.insert("fn", Keyword::Fn);
        map.insert("let", Keyword::Let);
        map.insert("ret", Keyword::Ret);
        map
    };
}

/// Identifiers with a grammatical meaning. The lexer does not know about
/// them; they only matter where a declaration or statement begins.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Keyword {
    Import,
    Fn,
    Let,
    Ret,
}

pub type DeclHandler = fn(&mut Parser) -> Result<Declaration, Error>;
pub type StmtHandler = fn(&mut Parser) -> Result<Statement, Error>;

pub fn create_keyword_lookups(parser: &mut Parser) {
    // Top level
    parser.decl(Keyword::Import, parse_import_decl);
    parser.decl(Keyword::Fn, parse_fn_decl);
    parser.decl(Keyword::Let, parse_let_decl);

    // Function bodies
    parser.stmt(Keyword::Let, parse_let_body_stmt);
    parser.stmt(Keyword::Ret, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type DeclLookup = HashMap<Keyword, DeclHandler>;
pub type StmtLookup = HashMap<Keyword, StmtHandler>;
