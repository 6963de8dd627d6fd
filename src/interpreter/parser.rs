/// Parser state, entry points and the parse result.
///
/// Holds the filtered token sequence, the cursor, the diagnostics list and
/// the single error-recovery primitive, `match_token`.
pub mod core;

/// Precedence climbing over binary operators.
///
/// Builds `Binary` nodes, recursing on the right-hand side only while the
/// next operator binds strictly tighter than the current floor. Each fold
/// counts against the nesting limit.
pub mod binary;

/// Primary expressions.
///
/// Parses literals, parenthesized expressions and unary signs.
pub mod unary;

pub use self::core::{DEFAULT_MAX_DEPTH, ParseOptions, ParseResult, Parser};
