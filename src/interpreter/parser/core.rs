use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{lexer::Token, parser::binary::parse_binary},
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Deepest nesting of parentheses and operators the parser accepts.
///
/// Both the height of the tree and the depth of parenthesized groups are
/// bounded, so parsing, evaluating and dropping a tree never run out of
/// stack.
pub const MAX_NESTING: usize = 512;

/// A parsed subtree together with its height.
pub(crate) type Node = (Expr, usize);

/// Fails once `level` passes [`MAX_NESTING`].
pub(crate) const fn check_nesting(level: usize, column: usize) -> ParseResult<()> {
    if level > MAX_NESTING {
        Err(SyntaxError::NestingTooDeep { limit: MAX_NESTING,
                                          column })
    } else {
        Ok(())
    }
}

/// Parses a complete token sequence into a single expression tree.
///
/// A fresh cursor over `tokens` is created for every call. After the
/// expression has been parsed, any remaining token is an error; nothing is
/// silently dropped.
///
/// # Parameters
/// - `tokens`: `(Token, column)` pairs as produced by the lexer.
///
/// # Returns
/// The root of the parsed tree.
///
/// # Errors
/// - `UnexpectedToken` / `UnexpectedEndOfInput` when a number, unary
///   operator or `(` is required but missing.
/// - `ExpectedClosingParen` when a group is not closed where it should be.
/// - `UnexpectedTrailingTokens` when tokens follow a complete expression.
/// - `NestingTooDeep` when the expression nests deeper than [`MAX_NESTING`].
///
/// # Example
/// ```
/// use safecalc::{
///     error::SyntaxError,
///     interpreter::{lexer::tokenize, parser::parse},
/// };
///
/// let tree = parse(&tokenize("6 - 2 - 1").unwrap()).unwrap();
/// assert_eq!(tree.to_string(), "((6 - 2) - 1)");
///
/// let err = parse(&tokenize("(2) 3").unwrap()).unwrap_err();
/// assert!(matches!(err, SyntaxError::UnexpectedTrailingTokens { column: 5, .. }));
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut cursor = tokens.iter().peekable();
    let (expr, _) = parse_expression(&mut cursor, 0)?;

    if let Some((token, column)) = cursor.next() {
        return Err(SyntaxError::UnexpectedTrailingTokens { token:  token.to_string(),
                                                           column: *column, });
    }

    log::debug!("parsed {expr}");
    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It starts precedence
/// climbing at the lowest level, so every binary operator is accepted.
///
/// Grammar: `expression := binary(0)`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
/// - `depth`: How many groups and operators enclose this expression.
///
/// # Returns
/// The parsed expression node and its height.
pub(crate) fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_binary(tokens, 0, depth)
}
