//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that turns tokenized
//! lines into declarations. It handles:
//!
//! - Top-level declarations (imports, functions, `let` bindings)
//! - Function bodies (`ret`, `let` and expression statements)
//! - Flat, left-associative operator chains and single-argument calls
//!
//! Statements end at the end of their line. Parsing stops at the first error.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
