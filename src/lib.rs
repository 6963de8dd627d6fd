//! # minicalc
//!
//! minicalc is a small integer arithmetic front end written in Rust.
//! It tokenizes a line of text, parses it into an expression tree under the
//! usual operator precedence, and evaluates the tree to an `i32`, collecting
//! readable diagnostics for malformed input along the way.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::core::Evaluator,
        parser::{ParseOptions, ParseResult, Parser},
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum that represents an expression as a
/// tree. The tree is built by the parser and traversed by the evaluator and
/// the printer.
///
/// # Responsibilities
/// - Defines the four expression variants and their operators.
/// - Keeps the tokens each node was built from, for positions and rendering.
/// - Exposes ordered children for generic traversal.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// This module defines the diagnostics recorded for malformed input and the
/// runtime errors raised by evaluation, and keeps the two apart.
///
/// # Responsibilities
/// - Defines diagnostics with their exact user-facing messages.
/// - Defines runtime faults such as division by zero.
/// - Combines both into the error of a full parse-and-evaluate cycle.
pub mod error;
/// Orchestrates the processing of an input line.
///
/// This module ties together lexing, parsing, evaluation and rendering.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and printer.
/// - Manages the flow of data and diagnostics between phases.
pub mod interpreter;
/// Line-by-line interactive sessions.
///
/// Reads lines from any buffered reader, evaluates each one, and writes
/// results, diagnostics, and optionally tokens and trees to any writer.
pub mod repl;

/// Parses one line of text with the default options.
///
/// # Example
/// ```
/// use minicalc::parse;
///
/// let tree = parse("2+");
/// assert_eq!(tree.diagnostics()[0].to_string(),
///            "ERROR: unexpected token '<EndOfInput>' expected '<Number>'");
/// ```
#[must_use]
pub fn parse(text: &str) -> ParseResult {
    parse_with_options(text, ParseOptions::default())
}

/// Parses one line of text.
#[must_use]
pub fn parse_with_options(text: &str, options: ParseOptions) -> ParseResult {
    Parser::with_options(text, options).parse()
}

/// Evaluates an expression tree.
///
/// Call this only for a tree whose parse recorded no diagnostics.
///
/// # Errors
/// Returns a [`RuntimeError`] for division by zero or overflow.
pub fn evaluate(root: &Expr) -> Result<i32, RuntimeError> {
    Evaluator::evaluate(root)
}

/// Returns the value of an expression.
///
/// Parses `source` and, only if no diagnostics were recorded, evaluates it.
///
/// # Errors
/// Returns [`Error::Diagnostics`] for malformed input and [`Error::Runtime`]
/// when evaluation faults.
///
/// # Examples
/// ```
/// use minicalc::{error::Error, get_result};
///
/// assert_eq!(get_result("2 + 3 * 4"), Ok(14));
///
/// // Malformed input is never evaluated.
/// let res = get_result("1 + @");
/// assert!(matches!(res, Err(Error::Diagnostics(_))));
/// ```
pub fn get_result(source: &str) -> Result<i32, Error> {
    parse(source).evaluate()
}
