use crate::{
    ast::Expr,
    error::ArithError,
    interpreter::evaluator::{binary::eval_binary, unary::eval_unary},
    util::num::safe_integer_or_else,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `ArithError` describing the failure.
pub type EvalResult<T> = Result<T, ArithError>;

/// Evaluates an expression and returns the resulting value.
///
/// This is the direct evaluator: a post-order recursive walk. For binary
/// operations the left operand is evaluated before the right one, and both
/// are evaluated before the operator is applied, so errors surface in the
/// same order as with [`Steps`](crate::interpreter::evaluator::Steps).
///
/// # Parameters
/// - `expr`: Expression to evaluate.
///
/// # Returns
/// The value of the expression.
///
/// # Errors
/// - `ArithError::DivisionByZero` if a divisor evaluates to zero.
/// - `ArithError::Overflow` if a result leaves the safe integer range.
/// - `ArithError::LiteralOutOfRange` for a hand-built literal outside that
///   range.
///
/// # Example
/// ```
/// use safecalc::{interpreter::evaluator::eval, parse_source};
///
/// let expr = parse_source("6 + 5 - 4 * 3 / -2").unwrap();
/// assert_eq!(eval(&expr), Ok(17));
/// ```
pub fn eval(expr: &Expr) -> EvalResult<i64> {
    match expr {
        Expr::Literal { value, column } => eval_literal(*value, *column),
        Expr::UnaryOp { op, expr, .. } => Ok(eval_unary(*op, eval(expr)?)),
        Expr::BinaryOp { left,
                         op,
                         right,
                         column, } => {
            let lval = eval(left)?;
            let rval = eval(right)?;
            eval_binary(*op, lval, rval, *column)
        },
    }
}

/// Evaluates a literal expression.
///
/// The parser only produces safe literals, but trees can also be built by
/// hand, so the bound is checked here as well.
///
/// # Parameters
/// - `value`: The literal value.
/// - `column`: Column of the literal for error reporting.
pub(crate) fn eval_literal(value: i64, column: usize) -> EvalResult<i64> {
    safe_integer_or_else(value, || ArithError::LiteralOutOfRange { literal: value.to_string(),
                                                                   column })
}
