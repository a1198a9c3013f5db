/// A category of input rejected by the screening pass before tokenizing.
///
/// The variants are listed in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    /// `%` or `^`.
    UnsupportedOperator,
    /// `.` as used in decimal literals.
    DecimalPoint,
    /// `e`/`E` followed by an optional sign and digits, such as `1e10`.
    ExponentNotation,
    /// Letters or underscores, as used in variable and function names.
    Identifier,
    /// Anything else outside digits, `+ - * / ( )`, space and tab.
    Character,
}

impl std::fmt::Display for Construct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let construct = match self {
            Self::UnsupportedOperator => "unsupported operator",
            Self::DecimalPoint => "decimal point",
            Self::ExponentNotation => "exponent notation",
            Self::Identifier => "identifier",
            Self::Character => "character",
        };
        write!(f, "{construct}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during screening, tokenizing or
/// parsing.
pub enum SyntaxError {
    /// The screening pass found a construct the language does not support.
    #[error("Syntax error: Unsupported {construct} in expression.")]
    Unsupported {
        /// What was found.
        construct: Construct,
    },
    /// A whitespace character other than a plain space was found.
    #[error("Syntax error at column {column}: Only spaces may separate tokens.")]
    UnsupportedWhitespace {
        /// The source column where the error occurred.
        column: usize,
    },
    /// A character that cannot start any token was found.
    #[error("Syntax error at column {column}: Invalid character '{ch}'.")]
    InvalidCharacter {
        /// The offending character.
        ch:     char,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A `)` appeared before its matching `(`.
    #[error("Syntax error at column {column}: Closing parenthesis ')' before opening.")]
    UnmatchedClosingParen {
        /// The source column where the error occurred.
        column: usize,
    },
    /// The input ended with at least one `(` left open.
    #[error("Syntax error: {open} unclosed parenthesis '('.")]
    UnclosedParen {
        /// How many parentheses are still open.
        open: usize,
    },
    /// Found a token where a number, a unary operator or `(` was required.
    #[error("Syntax error at column {column}: Unexpected token '{token}'.")]
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Reached the end of input where a number, a unary operator or `(` was
    /// required.
    #[error("Syntax error: Unexpected end of input, expected a number.")]
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    #[error("Syntax error at column {column}: Expected closing parenthesis ')' for this '('.")]
    ExpectedClosingParen {
        /// The column of the `(` that was left open.
        column: usize,
    },
    /// Parentheses or operators are nested deeper than the parser accepts.
    #[error("Syntax error at column {column}: Expression nested deeper than {limit} levels.")]
    NestingTooDeep {
        /// The deepest nesting accepted.
        limit:  usize,
        /// The source column where the limit was passed.
        column: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Syntax error at column {column}: Extra tokens after expression, starting at '{token}'.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// The source column where the error occurred.
        column: usize,
    },
}
