use crate::{
    ast::BinaryOperator,
    error::ArithError,
    interpreter::evaluator::core::EvalResult,
    util::num::is_safe_integer,
};

/// Evaluates a binary arithmetic operation.
///
/// Division by zero is checked before dividing. Division truncates toward
/// zero, so `-7 / 3` is `-2`. Every result, including products too large for
/// `i64`, is checked against the safe integer range.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `column`: Column of the operator for error reporting.
///
/// # Returns
/// An `EvalResult<i64>` containing the computed value.
///
/// # Example
/// ```
/// use safecalc::{
///     ast::BinaryOperator,
///     error::ArithError,
///     interpreter::evaluator::binary::eval_binary,
///     util::num::MAX_SAFE_INTEGER,
/// };
///
/// assert_eq!(eval_binary(BinaryOperator::Div, -7, 3, 1), Ok(-2));
/// assert_eq!(eval_binary(BinaryOperator::Div, 1, 0, 3),
///            Err(ArithError::DivisionByZero { column: 3 }));
/// assert!(eval_binary(BinaryOperator::Add, MAX_SAFE_INTEGER, 1, 1).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, left: i64, right: i64, column: usize) -> EvalResult<i64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let result = match op {
        Add => left.checked_add(right),
        Sub => left.checked_sub(right),
        Mul => left.checked_mul(right),
        Div => {
            if right == 0 {
                return Err(ArithError::DivisionByZero { column });
            }
            left.checked_div(right)
        },
    };

    result.filter(|value| is_safe_integer(*value))
          .ok_or(ArithError::Overflow { left,
                                        op,
                                        right,
                                        column })
}
