use thiserror::Error;

/// Diagnostics recorded while tokenizing and parsing.
///
/// A diagnostic describes malformed input. Diagnostics are collected rather
/// than raised, so a parse always completes with a full tree.
pub mod diagnostic;
/// Runtime errors.
///
/// Faults that can only occur while evaluating a well-formed tree, such as
/// division by zero or arithmetic overflow.
pub mod runtime_error;

pub use diagnostic::Diagnostic;
pub use runtime_error::RuntimeError;

/// The failure of a complete parse-and-evaluate cycle.
///
/// Malformed input and evaluation faults are kept apart: input that produced
/// diagnostics is never evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input was malformed; evaluation was not attempted.
    #[error("{}", join_lines(.0))]
    Diagnostics(Vec<Diagnostic>),
    /// The input was well formed but evaluating it failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

fn join_lines(diagnostics: &[Diagnostic]) -> String {
    diagnostics.iter()
               .map(ToString::to_string)
               .collect::<Vec<_>>()
               .join("\n")
}
