//! Lexical analysis module.
//!
//! This module contains the line-oriented lexer that converts source text
//! into typed tokens. It handles:
//!
//! - Integer literals (decimal, and hexadecimal with a `0x` prefix)
//! - String literals in either quote style, with doubled-quote escapes
//! - Symbols, matched greedily by prefix against the known symbol set
//! - Identifiers (anything else, keywords included)
//! - `#` comments running to the end of the line
//!
//! Lines are tokenized independently; blank lines keep their slot.

pub mod lexer;
pub mod tokens;
