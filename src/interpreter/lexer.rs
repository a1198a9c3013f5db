use logos::Logos;

use crate::{
    error::{ArithError, Construct, Error, SyntaxError},
    util::num::safe_integer_or_else,
};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(error = LexError)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Errors raised by the generated lexer itself.
///
/// These are turned into crate errors by [`tokenize`], which knows the
/// source columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    /// No token starts with the current character.
    #[default]
    Unrecognized,
    /// An integer literal does not fit the safe integer range.
    OutOfRange,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(i64)`: The parsed value if it is a safe integer.
/// - `Err(LexError::OutOfRange)`: If the literal is out of range, including
///   digit runs too long for `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    let value = lex.slice().parse::<i64>().map_err(|_| LexError::OutOfRange)?;
    safe_integer_or_else(value, || LexError::OutOfRange)
}

/// Characters the screening pass lets through.
const fn is_allowed(c: char) -> bool {
    matches!(c, '0'..='9' | '+' | '-' | '*' | '/' | '(' | ')' | ' ' | '\t')
}

/// Detects `e`/`E` followed by an optional sign and at least one digit.
fn has_exponent(source: &str) -> bool {
    let bytes = source.as_bytes();
    bytes.iter().enumerate().any(|(i, b)| {
                                if !matches!(b, b'e' | b'E') {
                                    return false;
                                }
                                let rest = &bytes[i + 1..];
                                let digits = match rest.first() {
                                    Some(b'+' | b'-') => &rest[1..],
                                    _ => rest,
                                };
                                digits.first().is_some_and(u8::is_ascii_digit)
                            })
}

/// Screening checks, in the order they are applied.
const SCREENS: [(Construct, fn(&str) -> bool); 5] =
    [(Construct::UnsupportedOperator, |s| s.contains(['%', '^'])),
     (Construct::DecimalPoint, |s| s.contains('.')),
     (Construct::ExponentNotation, has_exponent),
     (Construct::Identifier, |s| s.contains(|c: char| c.is_ascii_alphabetic() || c == '_')),
     (Construct::Character, |s| !s.chars().all(is_allowed))];

/// Rejects unsupported constructs anywhere in the input.
///
/// The whole string is checked before any token is produced. Checks run in a
/// fixed order and the first one that matches decides the reported
/// [`Construct`], so the same input always fails the same way.
///
/// # Errors
/// Returns `SyntaxError::Unsupported` naming the first matching construct.
///
/// # Example
/// ```
/// use safecalc::{
///     error::{Construct, SyntaxError},
///     interpreter::lexer::screen,
/// };
///
/// assert!(screen("1 + (2 * 3)").is_ok());
///
/// // `1.5e3` contains both a decimal point and an exponent; the decimal point
/// // is checked first.
/// assert_eq!(screen("1.5e3"),
///            Err(SyntaxError::Unsupported { construct: Construct::DecimalPoint }));
/// assert_eq!(screen("2e10"),
///            Err(SyntaxError::Unsupported { construct: Construct::ExponentNotation }));
/// ```
pub fn screen(source: &str) -> Result<(), SyntaxError> {
    match SCREENS.iter().find(|(_, check)| check(source)) {
        Some((construct, _)) => Err(SyntaxError::Unsupported { construct: *construct }),
        None => Ok(()),
    }
}

/// Converts the character the lexer stopped at into a syntax error.
fn unrecognized(slice: &str, column: usize) -> SyntaxError {
    match slice.chars().next() {
        Some(ch) if ch.is_whitespace() => SyntaxError::UnsupportedWhitespace { column },
        Some(ch) => SyntaxError::InvalidCharacter { ch, column },
        None => SyntaxError::UnexpectedEndOfInput,
    }
}

/// Drops plain spaces, keeping the source column of every remaining
/// character.
///
/// Spaces never end a digit run, so `1 2` scans as the literal `12`.
fn strip_spaces(source: &str) -> (String, Vec<usize>) {
    source.char_indices()
          .filter(|(_, c)| *c != ' ')
          .map(|(i, c)| (c, i + 1))
          .unzip()
}

/// Splits an expression into tokens, each paired with its 1-based column.
///
/// The input is screened with [`screen`] first. Plain spaces are then
/// removed, so they may appear anywhere, even between the digits of one
/// literal. The scan groups digit runs into literals, checks every literal
/// against the safe integer range and keeps a running parenthesis depth.
///
/// # Errors
/// - `SyntaxError` for screened constructs, whitespace other than spaces,
///   stray characters, a `)` without an open `(` and unclosed `(` at the end.
/// - `ArithError::LiteralOutOfRange` for literals outside the safe range.
///
/// # Example
/// ```
/// use safecalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("12 *(3)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(12), 1),
///                 (Token::Star, 4),
///                 (Token::LParen, 5),
///                 (Token::Integer(3), 6),
///                 (Token::RParen, 7)]);
///
/// assert_eq!(tokenize("1 2 + 3").unwrap(),
///            vec![(Token::Integer(12), 1), (Token::Plus, 5), (Token::Integer(3), 7)]);
///
/// assert!(tokenize("1\t+ 2").is_err());
/// assert!(tokenize("(1 + 2").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, Error> {
    screen(source)?;

    let (compact, columns) = strip_spaces(source);
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut lexer = Token::lexer(&compact);

    while let Some(token) = lexer.next() {
        let offset = lexer.span().start;
        let column = columns.get(offset).copied().unwrap_or(offset + 1);
        let token = match token {
            Ok(tok) => tok,
            Err(LexError::OutOfRange) => {
                return Err(ArithError::LiteralOutOfRange { literal: lexer.slice().to_string(),
                                                           column }.into());
            },
            Err(LexError::Unrecognized) => return Err(unrecognized(lexer.slice(), column).into()),
        };

        match token {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth = depth.checked_sub(1)
                             .ok_or(SyntaxError::UnmatchedClosingParen { column })?;
            },
            _ => {},
        }
        tokens.push((token, column));
    }

    if depth != 0 {
        return Err(SyntaxError::UnclosedParen { open: depth }.into());
    }

    log::debug!("tokenized {} token(s)", tokens.len());
    Ok(tokens)
}
