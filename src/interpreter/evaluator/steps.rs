use std::iter::FusedIterator;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ArithError,
    interpreter::evaluator::{
        binary::eval_binary,
        core::{EvalResult, eval_literal},
        unary::eval_unary,
    },
};

/// Pending work of a stepwise evaluation.
enum Frame {
    /// A subtree not yet visited.
    Visit(Expr),
    /// Apply a unary operator to the top value.
    Unary(UnaryOperator),
    /// Apply a binary operator to the two top values.
    Binary(BinaryOperator, usize),
}

/// Evaluates a tree one node at a time.
///
/// `Steps` owns the tree it evaluates and yields the value of every node in
/// post-order: each literal, and each operator result as soon as its
/// operands are known. Every call to `next` computes exactly one value;
/// nothing is computed ahead of demand, and dropping the iterator early is
/// safe.
///
/// An error is yielded once, at the point evaluation fails, and the
/// iterator is exhausted afterwards. The last value yielded by a successful
/// run is the value [`eval`](crate::interpreter::evaluator::eval) returns for
/// the same tree.
///
/// # Example
/// ```
/// use safecalc::{interpreter::evaluator::Steps, parse_source};
///
/// let expr = parse_source("-(1 + 2) * 4").unwrap();
/// let steps: Vec<i64> = Steps::new(expr).map(Result::unwrap).collect();
/// assert_eq!(steps, vec![1, 2, 3, -3, 4, -12]);
/// ```
pub struct Steps {
    frames: Vec<Frame>,
    values: Vec<i64>,
    done:   bool,
}

impl Steps {
    /// Creates a stepwise evaluation of `expr`. No work happens until the
    /// first value is requested.
    #[must_use]
    pub fn new(expr: Expr) -> Self {
        Self { frames: vec![Frame::Visit(expr)],
               values: Vec::new(),
               done:   false, }
    }

    /// Drains the evaluation and returns its final value.
    ///
    /// # Errors
    /// Returns the first error met while draining, or
    /// `ArithError::MalformedTree` if no value was produced at all.
    ///
    /// # Example
    /// ```
    /// use safecalc::{error::ArithError, interpreter::evaluator::Steps, parse_source};
    ///
    /// assert_eq!(Steps::new(parse_source("7 / 3 * 3").unwrap()).finish(), Ok(6));
    /// assert_eq!(Steps::new(parse_source("1 / (2 - 2)").unwrap()).finish(),
    ///            Err(ArithError::DivisionByZero { column: 3 }));
    /// ```
    pub fn finish(self) -> EvalResult<i64> {
        let mut last = None;
        for step in self {
            last = Some(step?);
        }
        last.ok_or(ArithError::MalformedTree)
    }

    /// Runs frames until one value is produced.
    fn step(&mut self) -> Option<EvalResult<i64>> {
        while let Some(frame) = self.frames.pop() {
            let result = match frame {
                Frame::Visit(Expr::Literal { value, column }) => eval_literal(value, column),
                Frame::Visit(Expr::UnaryOp { op, expr, .. }) => {
                    self.frames.push(Frame::Unary(op));
                    self.frames.push(Frame::Visit(*expr));
                    continue;
                },
                Frame::Visit(Expr::BinaryOp { left,
                                              op,
                                              right,
                                              column, }) => {
                    self.frames.push(Frame::Binary(op, column));
                    self.frames.push(Frame::Visit(*right));
                    self.frames.push(Frame::Visit(*left));
                    continue;
                },
                Frame::Unary(op) => match self.values.pop() {
                    Some(value) => Ok(eval_unary(op, value)),
                    None => Err(ArithError::MalformedTree),
                },
                Frame::Binary(op, column) => match (self.values.pop(), self.values.pop()) {
                    (Some(right), Some(left)) => eval_binary(op, left, right, column),
                    _ => Err(ArithError::MalformedTree),
                },
            };

            return Some(result.inspect(|value| self.values.push(*value)));
        }
        None
    }
}

impl From<Expr> for Steps {
    fn from(expr: Expr) -> Self {
        Self::new(expr)
    }
}

impl Iterator for Steps {
    type Item = EvalResult<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let step = self.step();
        match &step {
            Some(Ok(value)) => log::trace!("step value {value}"),
            Some(Err(_)) | None => self.done = true,
        }
        step
    }
}

impl FusedIterator for Steps {}
