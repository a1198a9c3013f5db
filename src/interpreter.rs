/// The evaluator module computes the value of an expression tree.
///
/// Two strategies share one set of arithmetic rules: a direct recursive walk
/// that returns only the final value, and a stepwise iterator that yields
/// every intermediate result in post-order. Both always agree on the final
/// value and on the first error.
///
/// # Responsibilities
/// - Applies unary and binary operators with checked, truncating arithmetic.
/// - Keeps every value inside the safe integer range.
/// - Reports division by zero and out-of-range results.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer first screens the whole input for unsupported constructs, then
/// scans it left to right into integer, operator and parenthesis tokens,
/// each tagged with the column where it starts. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Rejects unsupported operators, decimals, exponents, names and stray
///   characters before any token is produced.
/// - Checks integer literals against the safe integer range.
/// - Tracks parenthesis depth and reports unbalanced parentheses.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer with
/// precedence climbing and constructs an [`Expr`](crate::ast::Expr) tree.
///
/// # Responsibilities
/// - Applies operator precedence and left associativity.
/// - Handles stacked unary operators and parenthesized groups.
/// - Rejects malformed token sequences with the first error found.
pub mod parser;
