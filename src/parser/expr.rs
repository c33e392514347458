use crate::{
    ast::expressions::Expression,
    errors::errors::Error,
    lexer::tokens::{TokenContents, TokenKind},
};

use super::parser::Parser;

/// Parses a flat operator chain.
///
/// There is no precedence: every `operator operand` pair wraps everything
/// parsed so far, so `a + b * c` becomes `*(+(a, b), c)`. The chain ends at
/// the end of the line or before a `)`.
pub fn parse_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let mut left = parse_operatorless_expr(parser)?;

    while !parser.is_eol() && !parser.at_symbol(")") {
        let operator = parser.expect_text(TokenKind::Identifier)?;
        let right = parse_operatorless_expr(parser)?;

        left = Expression::binary(operator, left, right);
    }

    Ok(left)
}

/// Parses a literal, a variable, or a single-argument call.
pub fn parse_operatorless_expr(parser: &mut Parser) -> Result<Expression, Error> {
    match parser.peek()?.kind {
        TokenKind::Integer | TokenKind::String => {
            let token = parser.advance()?;
            Ok(match token.contents {
                TokenContents::Integer(value) => Expression::IntegerLiteral(value),
                TokenContents::Text(value) => Expression::StringLiteral(value),
            })
        }
        _ => parse_name_expr(parser),
    }
}

pub fn parse_name_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let name = parse_dotted_identifier(parser)?;

    if !parser.at_symbol("(") {
        return Ok(Expression::Variable(name));
    }

    parser.advance()?;
    let argument = parse_expr(parser)?;
    parser.match_token(TokenKind::Symbol, ")")?;

    Ok(Expression::FunctionCall {
        name,
        arguments: vec![argument],
    })
}

/// Parses `identifier (. identifier)*`, stopping at the first token that is not a `.`.
pub fn parse_dotted_identifier(parser: &mut Parser) -> Result<Vec<String>, Error> {
    let mut parts = vec![parser.expect_text(TokenKind::Identifier)?];

    while parser.at_symbol(".") {
        parser.advance()?;
        parts.push(parser.expect_text(TokenKind::Identifier)?);
    }

    Ok(parts)
}
