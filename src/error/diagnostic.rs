use thiserror::Error;

use crate::interpreter::lexer::TokenKind;

/// A recorded, non-fatal problem with the input.
///
/// The `Display` text of each variant is the user-facing message. Every
/// message starts with `ERROR: ` so consumers can recognise them by prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// A character that starts no token.
    #[error("ERROR: bad character input '{character}'")]
    BadCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// A run of digits that does not fit in an `i32`.
    #[error("ERROR: expression {digits} cannot be represented in int32")]
    LiteralOverflow {
        /// The digits as written.
        digits:   String,
        /// Byte offset of the first digit.
        position: usize,
    },
    /// The parser required one kind of token and found another.
    #[error("ERROR: unexpected token '<{found}>' expected '<{expected}>'")]
    UnexpectedToken {
        /// The kind that was present.
        found:    TokenKind,
        /// The kind that was required.
        expected: TokenKind,
        /// Byte offset of the token that was present.
        position: usize,
    },
    /// Parentheses or signs were nested deeper than the parser allows.
    #[error("ERROR: expression nesting exceeds the maximum depth of {limit}")]
    NestingTooDeep {
        /// The configured limit.
        limit:    usize,
        /// Byte offset where the limit was crossed.
        position: usize,
    },
}

impl Diagnostic {
    /// Byte offset in the source the diagnostic refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::BadCharacter { position, .. }
            | Self::LiteralOverflow { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }

    /// Whether the problem was found while tokenizing rather than parsing.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self, Self::BadCharacter { .. } | Self::LiteralOverflow { .. })
    }
}
