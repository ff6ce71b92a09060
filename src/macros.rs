//! Utility macros for the parser crate.
//!
//! This module defines the `MK_TOKEN!` helper used by the lexer and
//! tests to build `Token` instances without spelling out the struct
//! literal every time.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The token's source text
/// * `$position` - The source position where the token starts
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $position:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            text: $text,
            position: $position,
        }
    };
}
