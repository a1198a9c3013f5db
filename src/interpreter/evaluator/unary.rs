use crate::ast::UnaryOperator;

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Plus`: returns the value unchanged.
/// - `Negate`: arithmetic negation.
///
/// The safe integer range is symmetric, so negating a safe integer always
/// gives a safe integer and this function cannot fail.
///
/// # Example
/// ```
/// use safecalc::{ast::UnaryOperator, interpreter::evaluator::unary::eval_unary};
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, 5), -5);
/// assert_eq!(eval_unary(UnaryOperator::Plus, -5), -5);
/// ```
#[must_use]
pub const fn eval_unary(op: UnaryOperator, value: i64) -> i64 {
    match op {
        UnaryOperator::Plus => value,
        UnaryOperator::Negate => -value,
    }
}
