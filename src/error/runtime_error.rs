use thiserror::Error;

/// Represents all errors that can occur while evaluating a tree.
///
/// These are faults, not diagnostics: they are returned from evaluation and
/// never appear in a parse's diagnostics list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The right operand of `/` evaluated to zero.
    #[error("RUNTIME ERROR: division by zero at position {position}")]
    DivisionByZero {
        /// Byte offset of the `/` operator.
        position: usize,
    },
    /// The result of an operation does not fit in an `i32`.
    #[error("RUNTIME ERROR: arithmetic overflow at position {position}")]
    Overflow {
        /// Byte offset of the operator.
        position: usize,
    },
    /// A literal carried no value. Only trees with diagnostics contain these.
    #[error("RUNTIME ERROR: literal at position {position} has no value")]
    MissingValue {
        /// Byte offset of the literal.
        position: usize,
    },
}

impl RuntimeError {
    /// Byte offset in the source the fault refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position }
            | Self::Overflow { position }
            | Self::MissingValue { position } => *position,
        }
    }
}
