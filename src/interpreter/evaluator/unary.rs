use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator {
    /// Applies a sign to a value.
    ///
    /// Negating `i32::MIN` has no `i32` result and is reported as an overflow.
    ///
    /// # Example
    /// ```
    /// use minicalc::{ast::UnaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Negate, 5, 0), Ok(-5));
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Identity, -5, 0), Ok(-5));
    /// assert!(Evaluator::eval_unary(UnaryOperator::Negate, i32::MIN, 0).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: i32, position: usize) -> EvalResult<i32> {
        match op {
            UnaryOperator::Identity => Ok(value),
            UnaryOperator::Negate => value.checked_neg()
                                          .ok_or(RuntimeError::Overflow { position }),
        }
    }
}
