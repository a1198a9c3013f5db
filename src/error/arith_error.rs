use crate::ast::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while computing a value.
pub enum ArithError {
    /// A literal does not fit the safe integer range.
    #[error("Arithmetic error at column {column}: Literal {literal} is outside the safe integer range.")]
    LiteralOutOfRange {
        /// The literal as written.
        literal: String,
        /// The source column where the error occurred.
        column:  usize,
    },
    /// The result of a binary operation does not fit the safe integer range.
    #[error("Arithmetic error at column {column}: {left} {op} {right} is outside the safe integer range.")]
    Overflow {
        /// Left operand.
        left:   i64,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  i64,
        /// The source column of the operator.
        column: usize,
    },
    /// Attempted division by zero.
    #[error("Arithmetic error at column {column}: Division by zero.")]
    DivisionByZero {
        /// The source column of the `/` operator.
        column: usize,
    },
    /// The evaluator ran out of operands; the tree is not one the parser
    /// produces.
    #[error("Arithmetic error: Unknown node in expression tree.")]
    MalformedTree,
}
