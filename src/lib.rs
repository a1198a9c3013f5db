//! # safecalc
//!
//! safecalc is an integer arithmetic expression interpreter written in Rust.
//! It screens, tokenizes, parses and evaluates expressions made of integers,
//! `+`, `-`, `*`, `/` and parentheses. Every value is kept inside the range of
//! integers an IEEE-754 double represents exactly, and division truncates
//! toward zero.
//!
//! Evaluation is available in two forms that always agree: a direct
//! evaluation returning the final value, and a stepwise evaluation yielding
//! every intermediate result.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::Error,
    interpreter::{
        evaluator::{Steps, eval},
        lexer::tokenize,
        parser::parse,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that
/// represent an expression as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines literal, unary and binary expression nodes.
/// - Attaches source columns to nodes for error reporting.
/// - Knows operator precedence and how to render a tree back to text.
pub mod ast;
/// Provides unified error types for screening, parsing and evaluation.
///
/// This module defines every error that can be raised while turning text
/// into a value, and the three error kinds they fall into. Each kind carries
/// the exit code the command-line tool uses.
///
/// # Responsibilities
/// - Defines syntax and arithmetic error enums with readable messages.
/// - Groups them into the `PARAM`, `SYNTAX` and `ARITH` kinds.
/// - Maps each kind to its exit code.
pub mod error;
/// Orchestrates the process of evaluating an expression.
///
/// This module ties together lexing, parsing and evaluation.
pub mod interpreter;
/// Safe integer bounds and checks.
pub mod util;

/// Joins command-line words into one expression.
///
/// Words are joined with single spaces and the result is trimmed.
///
/// # Errors
/// Returns `Error::MissingExpression` if no words were given or they contain
/// only whitespace.
///
/// # Examples
/// ```
/// use safecalc::{error::Error, read_expression};
///
/// assert_eq!(read_expression(&["-6", "-", "-2"]), Ok("-6 - -2".to_string()));
/// assert_eq!(read_expression::<&str>(&[]), Err(Error::MissingExpression));
/// assert_eq!(read_expression(&["  "]), Err(Error::MissingExpression));
/// ```
pub fn read_expression<S: AsRef<str>>(words: &[S]) -> Result<String, Error> {
    let joined = words.iter().map(AsRef::<str>::as_ref).collect::<Vec<_>>().join(" ");
    let expression = joined.trim();
    if expression.is_empty() {
        return Err(Error::MissingExpression);
    }
    Ok(expression.to_string())
}

/// Screens, tokenizes and parses an expression.
///
/// Surrounding whitespace is trimmed first.
///
/// # Errors
/// Returns `Error::MissingExpression` for blank input, and the first syntax
/// or literal error otherwise.
///
/// # Examples
/// ```
/// use safecalc::parse_source;
///
/// let expr = parse_source("2 + 3 * 4").unwrap();
/// assert_eq!(expr.to_string(), "(2 + (3 * 4))");
/// ```
pub fn parse_source(source: &str) -> Result<Expr, Error> {
    let source = source.trim();
    if source.is_empty() {
        return Err(Error::MissingExpression);
    }

    let tokens = tokenize(source)?;
    Ok(parse(&tokens)?)
}

/// Evaluates an expression directly and returns its value.
///
/// # Errors
/// Returns an error if the input is blank, malformed, or cannot be computed
/// within the safe integer range.
///
/// # Examples
/// ```
/// use safecalc::{error::ErrorKind, evaluate};
///
/// assert_eq!(evaluate("6 - 2 - 1"), Ok(3));
/// assert_eq!(evaluate("-7 / 3"), Ok(-2));
///
/// let err = evaluate("1 / 0").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Arith);
/// assert_eq!(err.exit_code(), 3);
/// ```
pub fn evaluate(source: &str) -> Result<i64, Error> {
    let expr = parse_source(source)?;
    let value = eval(&expr)?;
    log::debug!("evaluated {expr} = {value}");
    Ok(value)
}

/// Prepares a stepwise evaluation of an expression.
///
/// Screening and parsing happen eagerly; evaluation happens as the returned
/// iterator is advanced.
///
/// # Errors
/// Returns an error if the input is blank or malformed. Arithmetic errors
/// are yielded by the iterator.
///
/// # Examples
/// ```
/// use safecalc::trace;
///
/// let steps: Vec<i64> = trace("1 + 2 * 3").unwrap().map(Result::unwrap).collect();
/// assert_eq!(steps, vec![1, 2, 3, 6, 7]);
/// ```
pub fn trace(source: &str) -> Result<Steps, Error> {
    Ok(Steps::new(parse_source(source)?))
}
