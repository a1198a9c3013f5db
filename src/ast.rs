/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` is a closed set of three constructs: integer literals, unary
/// operations and binary operations. Every child is exclusively owned by its
/// parent, so a parsed tree is always finite and acyclic. Each node records
/// the source column it starts at for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The constant value; always inside the safe integer range.
        value:  i64,
        /// Column in the source text.
        column: usize,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:     UnaryOperator,
        /// The operand expression.
        expr:   Box<Self>,
        /// Column of the operator in the source text.
        column: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Column of the operator in the source text.
        column: usize,
    },
}

impl Expr {
    /// Returns the number of values a stepwise evaluation of this tree
    /// yields, which is the number of nodes.
    ///
    /// # Example
    /// ```
    /// use safecalc::parse_source;
    ///
    /// let expr = parse_source("-(1 + 2) * 3").unwrap();
    /// assert_eq!(expr.node_count(), 6);
    /// ```
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            match node {
                Self::Literal { .. } => {},
                Self::UnaryOp { expr, .. } => pending.push(expr),
                Self::BinaryOp { left, right, .. } => {
                    pending.push(left);
                    pending.push(right);
                },
            }
        }
        count
    }
}

/// Renders the tree with every binary operation in parentheses.
///
/// The output re-parses to a tree of the same value. Parsed trees come back
/// with the same structure; a hand-built negative literal is written as
/// `(-8)` and comes back as a negation of `8`.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } if *value < 0 => write!(f, "({value})"),
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "{op}{expr}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Truncating division (`/`)
    Div,
}

impl BinaryOperator {
    /// Returns the binding strength of the operator.
    ///
    /// Higher binds tighter: `*` and `/` are `2`, `+` and `-` are `1`.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}
