use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{Node, ParseResult, check_nesting},
            unary::parse_unary,
        },
    },
};

/// Parses a chain of binary operations by precedence climbing.
///
/// A factor is parsed first. Then, as long as the next token is a binary
/// operator binding at least as tightly as `min_precedence`, the operator is
/// consumed and its right operand is parsed one level higher. Looping at the
/// current level while recursing one level up makes equal-precedence
/// operators group to the left: `6 - 2 - 1` parses as `(6 - 2) - 1`.
///
/// The rule is: `binary(min) := unary (op binary(prec(op) + 1))*` where only
/// operators with `prec(op) >= min` are taken.
///
/// # Parameters
/// - `tokens`: Token stream with column information.
/// - `min_precedence`: The weakest operator this call may consume.
/// - `depth`: How many groups and operators enclose this chain.
///
/// # Returns
/// An `Expr::BinaryOp` tree, or the factor itself when no operator follows,
/// with its height. A long chain like `1 + 1 + ... + 1` grows the height by
/// one per operator and is bounded by `MAX_NESTING` as well.
pub(crate) fn parse_binary<'a, I>(tokens: &mut Peekable<I>,
                                  min_precedence: u8,
                                  depth: usize)
                                  -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (mut left, mut height) = parse_unary(tokens, depth)?;

    while let Some((token, column)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && op.precedence() >= min_precedence
    {
        let column = *column;
        tokens.next();

        let (right, right_height) = parse_binary(tokens, op.precedence() + 1, depth + 1)?;
        height = height.max(right_height) + 1;
        check_nesting(height, column)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                column };
    }

    Ok((left, height))
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` for `+`, `-`, `*` and `/` and `None` for
/// all other tokens.
///
/// # Example
/// ```
/// use safecalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Slash), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Integer(_) | Token::LParen | Token::RParen => None,
    }
}
