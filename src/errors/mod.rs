//! Error types and error handling for the front end.
//!
//! Every pass reports failures through the same [`errors::Error`] value:
//!
//! - Tokenization errors (unterminated strings, malformed integers)
//! - Parsing errors (any grammar violation, with the failing line)
//! - IR generation errors (constructs the lowering does not handle yet)
//!
//! Errors are never recovered from; the first one aborts the whole pass.

pub mod errors;
