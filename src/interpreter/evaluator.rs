/// Binary operator evaluation logic.
///
/// Handles the four arithmetic operators with checked arithmetic, the
/// division-by-zero check and truncating division.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements identity and arithmetic negation.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the direct, recursive evaluator and the literal check shared with
/// the stepwise evaluator.
pub mod core;

/// Stepwise evaluation.
///
/// Provides an iterator that evaluates a tree one node at a time and yields
/// every intermediate result in post-order.
pub mod steps;

pub use self::{
    core::{EvalResult, eval},
    steps::Steps,
};
