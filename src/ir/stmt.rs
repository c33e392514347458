use crate::{
    ast::{
        ast::Declaration,
        statements::{FunctionDefinition, LetStatement, Statement},
    },
    errors::errors::Error,
};

use super::{
    expr::gen_expression,
    generator::IrGenerator,
    ir::{Function, Instruction, Namespace, Program, Target, Variable},
};

pub fn gen_declaration(
    generator: &mut IrGenerator,
    declaration: &Declaration,
    program: &mut Program,
) -> Result<(), Error> {
    match declaration {
        Declaration::Import(import) => {
            program.imports.push(import.path.clone());
        }
        Declaration::Function(function) => {
            let function = gen_function(generator, function)?;

            // TODO: give functions a real type once the type system exists
            program.instructions.push(Instruction::CreateVariable {
                target: Target::Named(function.name.clone()),
                type_name: None,
            });
            program.namespace.functions.push(function);
        }
        Declaration::Let(let_stmt) => {
            gen_let(generator, let_stmt, &mut program.instructions, &mut program.namespace)?;
        }
    }

    Ok(())
}

pub fn gen_function(
    generator: &mut IrGenerator,
    function: &FunctionDefinition,
) -> Result<Function, Error> {
    let mut body = vec![];
    let mut namespace = Namespace::default();
    let return_type = function.return_types.first();

    for statement in &function.body {
        gen_statement(generator, statement, return_type, &mut body, &mut namespace)?;
    }

    Ok(Function {
        name: function.name.clone(),
        arguments: function.arguments.clone(),
        return_types: function.return_types.clone(),
        namespace,
        body,
    })
}

/// Lowers a statement of a function body.
pub fn gen_statement(
    generator: &mut IrGenerator,
    statement: &Statement,
    return_type: Option<&String>,
    instructions: &mut Vec<Instruction>,
    namespace: &mut Namespace,
) -> Result<(), Error> {
    match statement {
        Statement::Let(let_stmt) => gen_let(generator, let_stmt, instructions, namespace),
        Statement::Return(return_stmt) => {
            let result = generator.temporary();

            instructions.push(Instruction::CreateVariable {
                target: result.clone(),
                type_name: return_type.cloned(),
            });
            gen_expression(generator, &return_stmt.expression, &result, return_type, instructions)?;
            instructions.push(Instruction::Return { source: result });

            Ok(())
        }
        Statement::Expression(expression) => {
            let result = generator.temporary();

            instructions.push(Instruction::CreateVariable {
                target: result.clone(),
                type_name: None,
            });
            gen_expression(generator, expression, &result, None, instructions)
        }
    }
}

fn gen_let(
    generator: &mut IrGenerator,
    let_stmt: &LetStatement,
    instructions: &mut Vec<Instruction>,
    namespace: &mut Namespace,
) -> Result<(), Error> {
    let target = Target::Named(let_stmt.name.clone());

    instructions.push(Instruction::CreateVariable {
        target: target.clone(),
        type_name: Some(let_stmt.type_.clone()),
    });
    gen_expression(
        generator,
        &let_stmt.initializer,
        &target,
        Some(&let_stmt.type_),
        instructions,
    )?;

    namespace.variables.push(Variable {
        name: let_stmt.name.clone(),
        type_name: let_stmt.type_.clone(),
    });

    Ok(())
}
