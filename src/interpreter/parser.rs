/// Parser entry points.
///
/// Contains the top-level `parse` function, the result alias shared by all
/// parsing routines and the expression entry point.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles the factor level of the grammar: prefix `+`/`-`, parenthesized
/// groups and integer literals.
pub mod unary;

/// Binary operator parsing.
///
/// Implements precedence climbing over `+`, `-`, `*` and `/`, keeping every
/// operator left-associative.
pub mod binary;

pub use self::core::{MAX_NESTING, ParseResult, parse};
