use crate::{
    ast::{
        ast::Declaration,
        statements::{FunctionDefinition, ImportStatement, LetStatement, ReturnStatement, Statement},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::expr::{parse_dotted_identifier, parse_expr},
};

use super::{lookups::KEYWORD_LOOKUP, parser::Parser};

/// Returns the keyword text of the next token, if it is an identifier.
fn peek_keyword(parser: &Parser) -> Result<Option<String>, Error> {
    let token = parser.peek()?;
    if token.kind != TokenKind::Identifier {
        return Ok(None);
    }
    Ok(token.text().map(str::to_string))
}

pub fn parse_declaration(parser: &mut Parser) -> Result<Declaration, Error> {
    let Some(keyword) = peek_keyword(parser)? else {
        let found = parser.peek()?.kind;
        return Err(parser.error(ErrorImpl::ExpectedKeyword { found }));
    };

    let handler = KEYWORD_LOOKUP
        .get(keyword.as_str())
        .and_then(|keyword| parser.get_decl_lookup().get(keyword))
        .copied();

    match handler {
        Some(handler) => handler(parser),
        None => Err(parser.error(ErrorImpl::UnknownKeyword { keyword })),
    }
}

pub fn parse_import_decl(parser: &mut Parser) -> Result<Declaration, Error> {
    parser.advance()?;

    let path = parse_dotted_identifier(parser)?;

    Ok(Declaration::Import(ImportStatement { path }))
}

pub fn parse_fn_decl(parser: &mut Parser) -> Result<Declaration, Error> {
    parser.advance()?;

    let name = parser.expect_text(TokenKind::Identifier)?;

    // The argument list may span lines but is always empty for now
    parser.match_token(TokenKind::Symbol, "(")?;
    parser.skip_blank_lines();
    parser.match_token(TokenKind::Symbol, ")")?;
    let arguments = vec![];

    parser.skip_blank_lines();
    parser.match_token(TokenKind::Symbol, ":")?;
    let return_type = parser.expect_text(TokenKind::Identifier)?;

    let body = parse_block(parser)?;

    Ok(Declaration::Function(FunctionDefinition {
        name,
        arguments,
        return_types: vec![return_type],
        body,
    }))
}

/// Parses `{ statement* }`, consuming the closing brace.
pub fn parse_block(parser: &mut Parser) -> Result<Vec<Statement>, Error> {
    parser.skip_blank_lines();
    parser.match_token(TokenKind::Symbol, "{")?;

    let mut statements = Vec::new();
    loop {
        parser.skip_blank_lines();
        if parser.peek()?.is(TokenKind::Symbol, "}") {
            parser.advance()?;
            break;
        }

        statements.push(parse_body_stmt(parser)?);
        parser.require_end_of_line()?;
    }

    Ok(statements)
}

/// Parses one statement inside a block: a keyword statement, or else a bare expression.
pub fn parse_body_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let handler = peek_keyword(parser)?
        .and_then(|keyword| KEYWORD_LOOKUP.get(keyword.as_str()).copied())
        .and_then(|keyword| parser.get_stmt_lookup().get(&keyword))
        .copied();

    if let Some(handler) = handler {
        return handler(parser);
    }

    Ok(Statement::Expression(parse_expr(parser)?))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<LetStatement, Error> {
    parser.advance()?;

    let name = parser.expect_text(TokenKind::Identifier)?;
    parser.match_token(TokenKind::Symbol, ":")?;
    let type_ = parser.expect_text(TokenKind::Identifier)?;
    parser.match_token(TokenKind::Identifier, "=")?;
    let initializer = parse_expr(parser)?;

    Ok(LetStatement {
        name,
        type_,
        initializer,
    })
}

pub fn parse_let_decl(parser: &mut Parser) -> Result<Declaration, Error> {
    Ok(Declaration::Let(parse_let_stmt(parser)?))
}

pub fn parse_let_body_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    Ok(Statement::Let(parse_let_stmt(parser)?))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    parser.advance()?;

    let expression = parse_expr(parser)?;

    Ok(Statement::Return(ReturnStatement { expression }))
}
