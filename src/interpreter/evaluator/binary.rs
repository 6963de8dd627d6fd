use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator {
    /// Applies a binary operator to two values.
    ///
    /// Division truncates toward zero. A zero divisor is checked before any
    /// other fault, so `i32::MIN / 0` reports division by zero rather than
    /// overflow.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Byte offset of the operator, for error reporting.
    ///
    /// # Example
    /// ```
    /// use minicalc::{ast::BinaryOperator, error::RuntimeError,
    ///                interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, -7, 2, 2), Ok(-3));
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, 1, 0, 1),
    ///            Err(RuntimeError::DivisionByZero { position: 1 }));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: i32,
                       right: i32,
                       position: usize)
                       -> EvalResult<i32> {
        let result = match op {
            BinaryOperator::Add => left.checked_add(right),
            BinaryOperator::Sub => left.checked_sub(right),
            BinaryOperator::Mul => left.checked_mul(right),
            BinaryOperator::Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                left.checked_div(right)
            },
        };

        result.ok_or(RuntimeError::Overflow { position })
    }
}
