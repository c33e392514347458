use crate::{
    ast::expressions::Expression,
    errors::errors::{Error, ErrorImpl},
};

use super::{
    generator::IrGenerator,
    ir::{Instruction, Target},
};

/// Generates the instructions that store `expression` into `target`.
pub fn gen_expression(
    generator: &mut IrGenerator,
    expression: &Expression,
    target: &Target,
    type_name: Option<&String>,
    instructions: &mut Vec<Instruction>,
) -> Result<(), Error> {
    match expression {
        Expression::IntegerLiteral(value) => {
            instructions.push(Instruction::SetVariable {
                target: target.clone(),
                type_name: type_name.cloned(),
                value: *value,
            });
            Ok(())
        }
        Expression::Variable(name) if name.len() == 1 => {
            instructions.push(Instruction::Copy {
                source: Target::Named(name[0].clone()),
                target: target.clone(),
            });
            Ok(())
        }
        Expression::FunctionCall { name, arguments }
            if name.len() == 1 && name[0] == "+" && arguments.len() == 2 =>
        {
            let first = generator.temporary();
            let second = generator.temporary();

            for operand in [&first, &second] {
                instructions.push(Instruction::CreateVariable {
                    target: operand.clone(),
                    type_name: type_name.cloned(),
                });
            }

            gen_expression(generator, &arguments[0], &first, type_name, instructions)?;
            gen_expression(generator, &arguments[1], &second, type_name, instructions)?;

            instructions.push(Instruction::Add {
                first,
                second,
                target: target.clone(),
            });
            Ok(())
        }
        Expression::FunctionCall { name, .. } => Err(generator.error(ErrorImpl::UnsupportedCall {
            name: name.join("."),
        })),
        Expression::StringLiteral(_) | Expression::Variable(_) => {
            Err(generator.error(ErrorImpl::UnsupportedExpression {
                expression: expression.to_string(),
            }))
        }
    }
}
