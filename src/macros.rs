//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$contents` - The token's decoded contents (`TokenContents`)
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, TokenContents::Integer(42));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $contents:expr) => {
        Token {
            kind: $kind,
            contents: $contents,
        }
    };
}
