//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs including:
//! - Imports with dotted paths
//! - Function definitions and their bodies
//! - `let` and `ret` statements
//! - Flat operator chains and calls
//! - Error positions and fail-fast behaviour

use std::rc::Rc;

use super::{
    expr::{parse_dotted_identifier, parse_expr},
    parser::{parse, Cursor, Parser},
};
use crate::{
    ast::{
        ast::{Ast, Declaration},
        expressions::Expression,
        statements::{FunctionDefinition, ImportStatement, LetStatement, ReturnStatement, Statement},
    },
    errors::errors::{Error, ErrorImpl, Expectation, Stage},
    lexer::{
        lexer::{tokenize, tokenize_line},
        tokens::{Token, TokenKind},
    },
};

fn parse_source(source: &str) -> Result<Ast, Error> {
    let tokens = tokenize(source, Some("test.lagab".to_string())).unwrap();
    parse(tokens, Rc::new("test.lagab".to_string()))
}

/// A parser over the given lines, for driving a single grammar rule.
fn parser_for(lines: &[&str]) -> Parser {
    let tokens = lines.iter().map(|line| tokenize_line(line).unwrap()).collect();
    Parser::new(tokens, Rc::new("test.lagab".to_string()))
}

fn var(parts: &[&str]) -> Expression {
    Expression::Variable(parts.iter().map(|part| part.to_string()).collect())
}

fn call(name: &str, arguments: Vec<Expression>) -> Expression {
    Expression::FunctionCall {
        name: vec![name.to_string()],
        arguments,
    }
}

#[test]
fn test_parse_import() {
    let ast = parse_source("import a.b.c\n").unwrap();

    assert_eq!(
        ast,
        vec![Declaration::Import(ImportStatement {
            path: vec!["a".to_string(), "b".to_string(), "c".to_string()]
        })]
    );
}

#[test]
fn test_parse_deep_dotted_import() {
    let parts: Vec<String> = (0..12).map(|i| format!("p{}", i)).collect();
    let ast = parse_source(&format!("import {}", parts.join("."))).unwrap();

    assert_eq!(ast, vec![Declaration::Import(ImportStatement { path: parts })]);
}

#[test]
fn test_parse_function_definition() {
    let ast = parse_source("fn main(): int {\n\tlet x: int = 1\n\tret x\n}\n").unwrap();

    assert_eq!(
        ast,
        vec![Declaration::Function(FunctionDefinition {
            name: "main".to_string(),
            arguments: vec![],
            return_types: vec!["int".to_string()],
            body: vec![
                Statement::Let(LetStatement {
                    name: "x".to_string(),
                    type_: "int".to_string(),
                    initializer: Expression::IntegerLiteral(1),
                }),
                Statement::Return(ReturnStatement {
                    expression: var(&["x"]),
                }),
            ],
        })]
    );
}

#[test]
fn test_parse_top_level_let() {
    let ast = parse_source("let greeting: str = 'hello'").unwrap();

    assert_eq!(
        ast,
        vec![Declaration::Let(LetStatement {
            name: "greeting".to_string(),
            type_: "str".to_string(),
            initializer: Expression::StringLiteral("hello".to_string()),
        })]
    );
}

#[test]
fn test_parse_multiple_declarations_in_order() {
    let source = "# header\n\nimport std.io\n\nlet a: int = 0x10\nfn f(): int {\n}\nlet b: int = a\n";
    let ast = parse_source(source).unwrap();

    let names: Vec<String> = ast.iter().map(|declaration| declaration.name()).collect();
    assert_eq!(names, vec!["std.io", "a", "f", "b"]);
}

#[test]
fn test_parse_empty_program() {
    assert_eq!(parse_source("").unwrap(), vec![]);
    assert_eq!(parse_source("\n\n# only a comment\n   \n").unwrap(), vec![]);
}

#[test]
fn test_parse_empty_body_on_one_line() {
    let ast = parse_source("fn f(): int {}").unwrap();

    match &ast[0] {
        Declaration::Function(function) => assert!(function.body.is_empty()),
        other => panic!("Expected a function, got {:?}", other),
    }
}

#[test]
fn test_parse_function_header_across_blank_lines() {
    let source = "fn f(\n\n): int\n\n# brace follows\n{\n\n\tret 1\n\n}\n";
    let ast = parse_source(source).unwrap();

    match &ast[0] {
        Declaration::Function(function) => {
            assert_eq!(function.name, "f");
            assert_eq!(
                function.body,
                vec![Statement::Return(ReturnStatement {
                    expression: Expression::IntegerLiteral(1)
                })]
            );
        }
        other => panic!("Expected a function, got {:?}", other),
    }
}

#[test]
fn test_expression_is_left_associative() {
    let mut parser = parser_for(&["a + b * c"]);
    let expression = parse_expr(&mut parser).unwrap();

    assert_eq!(
        expression,
        call("*", vec![call("+", vec![var(&["a"]), var(&["b"])]), var(&["c"])])
    );
}

#[test]
fn test_expression_operators_are_identifiers() {
    let mut parser = parser_for(&["1 plus 'two' == x.y"]);
    let expression = parse_expr(&mut parser).unwrap();

    assert_eq!(
        expression,
        call(
            "==",
            vec![
                call(
                    "plus",
                    vec![
                        Expression::IntegerLiteral(1),
                        Expression::StringLiteral("two".to_string())
                    ]
                ),
                var(&["x", "y"])
            ]
        )
    );
}

#[test]
fn test_single_argument_call() {
    let mut parser = parser_for(&["io.print(x + 1) + 2"]);
    let expression = parse_expr(&mut parser).unwrap();

    assert_eq!(
        expression,
        call(
            "+",
            vec![
                Expression::FunctionCall {
                    name: vec!["io".to_string(), "print".to_string()],
                    arguments: vec![call("+", vec![var(&["x"]), Expression::IntegerLiteral(1)])],
                },
                Expression::IntegerLiteral(2)
            ]
        )
    );
    assert!(parser.is_eol());
}

#[test]
fn test_nested_calls() {
    let mut parser = parser_for(&["f(g(h(1)))"]);
    let expression = parse_expr(&mut parser).unwrap();

    assert_eq!(
        expression,
        call("f", vec![call("g", vec![call("h", vec![Expression::IntegerLiteral(1)])])])
    );
}

#[test]
fn test_expression_stops_before_close_paren() {
    let mut parser = parser_for(&["a + b) c"]);
    let expression = parse_expr(&mut parser).unwrap();

    assert_eq!(expression, call("+", vec![var(&["a"]), var(&["b"])]));
    assert!(parser.peek().unwrap().is(TokenKind::Symbol, ")"));
}

#[test]
fn test_expression_does_not_continue_on_next_line() {
    let mut parser = parser_for(&["a + b", "+ c"]);
    let expression = parse_expr(&mut parser).unwrap();

    assert_eq!(expression, call("+", vec![var(&["a"]), var(&["b"])]));
    assert_eq!(parser.cursor(), Cursor { line: 0, index: 3 });
}

#[test]
fn test_dotted_identifier_stops_at_non_dot() {
    let mut parser = parser_for(&["a.b c.d"]);

    assert_eq!(parse_dotted_identifier(&mut parser).unwrap(), vec!["a", "b"]);
    assert_eq!(parse_dotted_identifier(&mut parser).unwrap(), vec!["c", "d"]);
}

#[test]
fn test_dotted_identifier_requires_identifier_after_dot() {
    let mut parser = parser_for(&["a.'b'"]);
    let error = parse_dotted_identifier(&mut parser).unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedTokenKind {
            expected: TokenKind::Identifier,
            found: TokenKind::String
        }
    );
}

#[test]
fn test_cursor_primitives() {
    let mut parser = parser_for(&["a b", "", "c"]);

    assert!(!parser.is_eof());
    assert_eq!(parser.advance().unwrap().text(), Some("a"));
    assert_eq!(parser.advance().unwrap().text(), Some("b"));
    assert!(parser.is_eol());
    assert!(matches!(
        parser.peek().unwrap_err().get_impl(),
        ErrorImpl::UnexpectedEndOfLine { expected: None }
    ));

    parser.skip_blank_lines();
    assert_eq!(parser.cursor(), Cursor { line: 2, index: 0 });

    // Mid-line, skipping is a no-op
    parser.skip_blank_lines();
    assert_eq!(parser.cursor(), Cursor { line: 2, index: 0 });

    assert!(parser.require_end_of_line().is_err());
    parser.advance().unwrap();
    parser.require_end_of_line().unwrap();
    assert!(parser.is_eof());
    assert!(matches!(
        parser.expect(TokenKind::Identifier).unwrap_err().get_impl(),
        ErrorImpl::UnexpectedEndOfFile {
            expected: Some(Expectation::Kind(TokenKind::Identifier))
        }
    ));
}

#[test]
fn test_match_token_checks_text() {
    let mut parser = parser_for(&["= :"]);

    parser.match_token(TokenKind::Identifier, "=").unwrap();
    let error = parser.match_token(TokenKind::Symbol, "(").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Symbol,
            expected_text: "(".to_string(),
            found: tokenize_line(":").unwrap().remove(0),
        }
    );
}

#[test]
fn test_missing_initializer_fails() {
    let error = parse_source("fn f(): int { let x: int = }").unwrap_err();

    assert_eq!(error.get_stage(), Stage::Parsing);
    assert_eq!(error.get_position().0, 1);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedTokenKind {
            expected: TokenKind::Identifier,
            found: TokenKind::Symbol
        }
    );
}

#[test]
fn test_error_reports_failing_line() {
    let error = parse_source("import a\n\nfn f(): int {\n\tlet x int = 1\n}\n").unwrap_err();

    assert_eq!(error.get_position().0, 4);
    assert_eq!(
        error.to_string(),
        "4: Parsing Error: Expected a token \":\" of type symbol, got \"int\" of type identifier instead"
    );
}

#[test]
fn test_junk_after_statement() {
    let error = parse_source("import a.b c\n").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::JunkAfterStatement {
            token: "c".to_string()
        }
    );
    assert_eq!(error.get_position().0, 1);

    let error = parse_source("fn f(): int {\n\tret 1\n} x\n").unwrap_err();
    assert_eq!(error.get_position().0, 3);
}

#[test]
fn test_statement_cannot_share_line_with_closing_brace() {
    let error = parse_source("fn f(): int {\n\tret 1 }\n").unwrap_err();

    assert_eq!(error.get_position().0, 2);
    assert!(matches!(
        error.get_impl(),
        ErrorImpl::UnexpectedTokenKind {
            expected: TokenKind::Identifier,
            found: TokenKind::Symbol
        }
    ));
}

#[test]
fn test_unknown_keyword() {
    let error = parse_source("\nstruct Point\n").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnknownKeyword {
            keyword: "struct".to_string()
        }
    );
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_ret_is_not_a_declaration() {
    let error = parse_source("ret 1").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnknownKeyword {
            keyword: "ret".to_string()
        }
    );
}

#[test]
fn test_expected_keyword() {
    let error = parse_source("42").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::ExpectedKeyword {
            found: TokenKind::Integer
        }
    );
}

#[test]
fn test_unclosed_block_reports_end_of_file() {
    let error = parse_source("fn f(): int {\n\tret 1\n").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedEndOfFile { expected: None }
    );
    // Reported on the last line of the file rather than past it
    assert_eq!(error.get_position().0, 3);
}

#[test]
fn test_unexpected_end_of_line() {
    let error = parse_source("let x: int =\n1").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedEndOfLine { expected: None }
    );
    assert_eq!(error.get_position().0, 1);

    let error = parse_source("import").unwrap_err();
    assert_eq!(
        error.to_string(),
        "1: Parsing Error: Unexpected end of line, expected a token of type identifier"
    );
}

#[test]
fn test_first_error_wins() {
    // Both lines are broken; only the first is reported
    let error = parse_source("let x int = 1\nstruct Point\n").unwrap_err();

    assert_eq!(error.get_position().0, 1);
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_parse_expression_statements_in_body() {
    let ast = parse_source("fn main(): int {\n\tio.print('hi')\n\tx + 1\n\tret 0\n}").unwrap();

    match &ast[0] {
        Declaration::Function(function) => assert_eq!(
            function.body,
            vec![
                Statement::Expression(Expression::FunctionCall {
                    name: vec!["io".to_string(), "print".to_string()],
                    arguments: vec![Expression::StringLiteral("hi".to_string())],
                }),
                Statement::Expression(call("+", vec![var(&["x"]), Expression::IntegerLiteral(1)])),
                Statement::Return(ReturnStatement {
                    expression: Expression::IntegerLiteral(0)
                }),
            ]
        ),
        other => panic!("Expected a function, got {:?}", other),
    }
}

#[test]
fn test_parse_is_deterministic() {
    let source = "import a.b\nfn main(): int {\n\tlet x: int = 0x2a + y\n\tret f(x) - 1\n}\n";

    assert_eq!(parse_source(source).unwrap(), parse_source(source).unwrap());
}

#[test]
fn test_parse_synthetic_tokens() {
    let lines: Vec<Vec<Token>> = vec![
        tokenize_line("let").unwrap(),
        vec![],
    ];
    let error = parse(lines, Rc::new("synthetic".to_string())).unwrap_err();

    assert_eq!(error.get_position().1.as_str(), "synthetic");
    assert!(matches!(
        error.get_impl(),
        ErrorImpl::UnexpectedEndOfLine {
            expected: Some(Expectation::Kind(TokenKind::Identifier))
        }
    ));
}
