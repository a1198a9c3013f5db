use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::core::{Node, ParseResult, check_nesting, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `+`  (identity)
///
/// Unary operators are right-associative and may be stacked, so an input
/// like `-+-1` is parsed as `-( +( -1 ) )`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: How many groups and operators enclose this expression.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression, with its height.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let op = match tokens.peek() {
        Some((Token::Minus, _)) => UnaryOperator::Negate,
        Some((Token::Plus, _)) => UnaryOperator::Plus,
        _ => return parse_primary(tokens, depth),
    };

    let Some((_, column)) = tokens.next() else {
        return Err(SyntaxError::UnexpectedEndOfInput);
    };
    check_nesting(depth + 1, *column)?;

    let (expr, height) = parse_unary(tokens, depth + 1)?;
    check_nesting(height + 1, *column)?;
    Ok((Expr::UnaryOp { op,
                        expr: Box::new(expr),
                        column: *column },
        height + 1))
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions are integer literals and parenthesized expressions.
/// Anything else in this position, including a binary-only operator such as
/// `*`, is an unexpected token; that is how `* 2` and `1 * / 2` are
/// rejected.
///
/// Grammar:
/// ```text
///     primary := integer
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: How many groups and operators enclose this expression.
///
/// # Returns
/// The parsed primary [`Expr`] and its height, or a `SyntaxError` on
/// failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Integer(value), column)) => Ok((Expr::Literal { value:  *value,
                                                                      column: *column, },
                                                     1)),
        Some((Token::LParen, column)) => {
            check_nesting(depth + 1, *column)?;
            parse_grouping(tokens, *column, depth + 1)
        },
        Some((tok, column)) => Err(SyntaxError::UnexpectedToken { token:  tok.to_string(),
                                                                   column: *column, }),
        None => Err(SyntaxError::UnexpectedEndOfInput),
    }
}

/// Parses the inside of a parenthesized group after its `(`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned just after `(`.
/// - `column`: Column of the `(`, used when the group is not closed.
/// - `depth`: Nesting depth inside this group.
///
/// # Errors
/// Returns `ExpectedClosingParen` if the inner expression is not followed by
/// `)`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, column: usize, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let node = parse_expression(tokens, depth)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(node),
        _ => Err(SyntaxError::ExpectedClosingParen { column }),
    }
}
