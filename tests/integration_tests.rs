//! Integration tests for the whole front end.
//!
//! These tests run source text through tokenization, parsing and IR
//! generation using only the public API.

use std::rc::Rc;

use lagab::{
    ast::{
        ast::{Ast, Declaration},
        expressions::Expression,
        statements::{FunctionDefinition, ImportStatement, LetStatement, ReturnStatement, Statement},
    },
    errors::errors::{Error, Stage},
    ir::{generator::gen_ir, ir::prettyprint_ir},
    lexer::lexer::tokenize,
    parser::parser::parse,
    render_error,
};

fn front_end(source: &str) -> Result<Ast, Error> {
    let tokens = tokenize(source, Some("main.lagab".to_string()))?;
    parse(tokens, Rc::new("main.lagab".to_string()))
}

const PROGRAM: &str = "\
# A small program
import std.io

let answer: int = 0x2a

fn main(): int {
\tlet x: int = answer + 1

\tio.print('x is ''big''')
\tret x
}
";

#[test]
fn test_full_program_ast() {
    let ast = front_end(PROGRAM).unwrap();

    assert_eq!(
        ast,
        vec![
            Declaration::Import(ImportStatement {
                path: vec!["std".to_string(), "io".to_string()]
            }),
            Declaration::Let(LetStatement {
                name: "answer".to_string(),
                type_: "int".to_string(),
                initializer: Expression::IntegerLiteral(42),
            }),
            Declaration::Function(FunctionDefinition {
                name: "main".to_string(),
                arguments: vec![],
                return_types: vec!["int".to_string()],
                body: vec![
                    Statement::Let(LetStatement {
                        name: "x".to_string(),
                        type_: "int".to_string(),
                        initializer: Expression::FunctionCall {
                            name: vec!["+".to_string()],
                            arguments: vec![
                                Expression::Variable(vec!["answer".to_string()]),
                                Expression::IntegerLiteral(1),
                            ],
                        },
                    }),
                    Statement::Expression(Expression::FunctionCall {
                        name: vec!["io".to_string(), "print".to_string()],
                        arguments: vec![Expression::StringLiteral("x is 'big'".to_string())],
                    }),
                    Statement::Return(ReturnStatement {
                        expression: Expression::Variable(vec!["x".to_string()]),
                    }),
                ],
            }),
        ]
    );
}

#[test]
fn test_round_trip_scenario() {
    let ast = front_end("fn main(): int {\n\tlet x: int = 1\n\tret x\n}\n").unwrap();

    assert_eq!(ast.len(), 1);
    match &ast[0] {
        Declaration::Function(function) => {
            assert_eq!(function.name, "main");
            assert_eq!(function.return_types, vec!["int".to_string()]);
            assert_eq!(function.body.len(), 2);
        }
        other => panic!("Expected a function, got {:?}", other),
    }
}

#[test]
fn test_ir_for_arithmetic_program() {
    let ast = front_end("let a: int = 1\nfn main(): int {\n\tret a + 2\n}\n").unwrap();
    let program = gen_ir(&ast).unwrap();

    assert_eq!(program.namespace.functions.len(), 1);
    assert_eq!(program.namespace.variables.len(), 1);
    assert!(prettyprint_ir(&program).contains("\tadd %1, %2 -> %0\n"));
}

#[test]
fn test_ir_rejects_string_program() {
    let ast = front_end(PROGRAM).unwrap();
    let error = gen_ir(&ast).unwrap_err();

    assert_eq!(error.get_stage(), Stage::IrGeneration);
}

#[test]
fn test_tokenization_error_stops_pipeline() {
    let error = front_end("let a: str = 'fine'\nlet b: str = \"open\n").unwrap_err();

    assert_eq!(error.get_stage(), Stage::Tokenization);
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_parse_error_rendering() {
    let source = "import a\n\nfn f(): int {\n\tret 1 2\n}\n";
    let error = front_end(source).unwrap_err();
    let rendered = render_error(&error, source);

    assert_eq!(error.get_stage(), Stage::Parsing);
    assert!(rendered.contains("-> main.lagab"));
    assert!(rendered.contains("4 | \tret 1 2"));
}

#[test]
fn test_same_input_same_output() {
    assert_eq!(front_end(PROGRAM).unwrap(), front_end(PROGRAM).unwrap());
}
