/// Core evaluation logic.
///
/// Contains the evaluator entry point and the exhaustive dispatch over the
/// expression variants.
pub mod core;

/// Unary operator evaluation.
///
/// Applies `+` and `-` signs to an already evaluated operand.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements checked `i32` arithmetic for `+`, `-`, `*` and `/`, including
/// the division-by-zero fault.
pub mod binary;
