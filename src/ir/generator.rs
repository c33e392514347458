//! Entry point of IR generation.
//!
//! The generator walks the AST once, top to bottom, and lowers it into the
//! flat instruction list of [`Program`]. It only knows a handful of
//! constructs so far; anything else is reported as an error instead of being
//! skipped.

use tracing::{debug, instrument};

use crate::{
    ast::ast::Ast,
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{ir::{Program, Target}, stmt::gen_declaration};

/// State shared by the whole lowering of one file.
#[derive(Debug, Default)]
pub struct IrGenerator {
    /// Index handed to the next temporary
    temporary_index: usize,
}

impl IrGenerator {
    pub fn new() -> Self {
        IrGenerator::default()
    }

    /// Allocates a fresh temporary. Temporaries are numbered in allocation order.
    pub fn temporary(&mut self) -> Target {
        let index = self.temporary_index;
        self.temporary_index += 1;
        Target::Temporary(index)
    }

    /// IR errors have no source position: the AST does not carry one.
    pub fn error(&self, error: ErrorImpl) -> Error {
        Error::new(error, Position::null())
    }
}

/// Lowers a parsed file.
///
/// # Returns
///
/// The top-level instructions together with the functions, variables and
/// imports the file defines, or the first construct that cannot be lowered.
#[instrument(skip_all, fields(declarations = ast.len()))]
pub fn gen_ir(ast: &Ast) -> Result<Program, Error> {
    let mut generator = IrGenerator::new();
    let mut program = Program::default();

    for declaration in ast {
        gen_declaration(&mut generator, declaration, &mut program)?;
    }

    debug!(
        instructions = program.instructions.len(),
        functions = program.namespace.functions.len(),
        temporaries = generator.temporary_index,
        "ir generated"
    );

    Ok(program)
}
