use tracing::trace;

use crate::{ast::Expr, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the fault.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Folds expression trees into integers.
///
/// The evaluator holds no state; every method is an associated function so a
/// tree can be evaluated from anywhere without setting anything up.
pub struct Evaluator;

impl Evaluator {
    /// Evaluates an expression tree.
    ///
    /// Only trees from a parse without diagnostics should be evaluated. Such a
    /// tree can still fault: division by zero and overflow are only detected
    /// here.
    ///
    /// # Errors
    /// - [`RuntimeError::DivisionByZero`] when a divisor evaluates to zero.
    /// - [`RuntimeError::Overflow`] when a result does not fit in an `i32`.
    /// - [`RuntimeError::MissingValue`] for a literal without a value, which
    ///   only trees with diagnostics contain.
    ///
    /// # Example
    /// ```
    /// use minicalc::{interpreter::evaluator::core::Evaluator, parse};
    ///
    /// let tree = parse("(2 + 3) * 4");
    /// assert_eq!(Evaluator::evaluate(tree.root()), Ok(20));
    /// ```
    pub fn evaluate(expr: &Expr) -> EvalResult<i32> {
        let value = match expr {
            Expr::Literal { token } => {
                token.value
                     .ok_or(RuntimeError::MissingValue { position: token.position })?
            },
            Expr::Unary { op, operator, operand } => {
                let operand = Self::evaluate(operand)?;
                Self::eval_unary(*op, operand, operator.position)?
            },
            Expr::Binary { left,
                           op,
                           operator,
                           right, } => {
                let left = Self::evaluate(left)?;
                let right = Self::evaluate(right)?;
                Self::eval_binary(*op, left, right, operator.position)?
            },
            Expr::Parenthesized { inner, .. } => Self::evaluate(inner)?,
        };

        trace!(kind = expr.kind_name(), value, "evaluated");
        Ok(value)
    }
}
