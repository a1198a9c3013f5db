/// Syntax errors.
///
/// Defines every error that can occur while screening, tokenizing or parsing
/// an expression: unsupported constructs, stray characters, unbalanced
/// parentheses and malformed token sequences.
pub mod syntax_error;
/// Arithmetic errors.
///
/// Contains the errors raised when a value leaves the safe integer range,
/// when a division by zero is attempted, or when the evaluator finds a tree
/// it cannot make sense of.
pub mod arith_error;

pub use arith_error::ArithError;
pub use syntax_error::{Construct, SyntaxError};

/// The three kinds of failure an evaluation can end with.
///
/// Each kind maps to a stable process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No expression text was supplied.
    Param,
    /// The expression is not well formed.
    Syntax,
    /// The expression is well formed but cannot be computed.
    Arith,
}

impl ErrorKind {
    /// Returns the exit code associated with this kind.
    ///
    /// # Example
    /// ```
    /// use safecalc::error::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::Param.exit_code(), 1);
    /// assert_eq!(ErrorKind::Syntax.exit_code(), 2);
    /// assert_eq!(ErrorKind::Arith.exit_code(), 3);
    /// ```
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Param => 1,
            Self::Syntax => 2,
            Self::Arith => 3,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Param => "PARAM",
            Self::Syntax => "SYNTAX",
            Self::Arith => "ARITH",
        };
        write!(f, "{kind}")
    }
}

/// Any error produced while turning input text into a result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input was empty or contained only whitespace.
    #[error("Parameter error: no expression was given.")]
    MissingExpression,
    /// Screening, tokenizing or parsing failed.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// A literal or a computed value could not be represented, or a division
    /// by zero was attempted.
    #[error(transparent)]
    Arith(#[from] ArithError),
}

impl Error {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingExpression => ErrorKind::Param,
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::Arith(_) => ErrorKind::Arith,
        }
    }

    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.kind().exit_code()
    }
}
