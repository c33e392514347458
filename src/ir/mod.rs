//! Intermediate representation generation.
//!
//! This module lowers the AST into a linear list of low-level instructions
//! plus the namespace of everything each level defines. It includes:
//!
//! - The instruction set and program structure (`ir.rs`)
//! - The generator state and entry point (`generator.rs`)
//! - Declaration and statement lowering (`stmt.rs`)
//! - Expression lowering (`expr.rs`)

pub mod expr;
pub mod generator;
pub mod ir;
pub mod stmt;
