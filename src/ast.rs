use std::fmt;

/// A numeric literal, kept as the text that was written.
///
/// The tree only records which lexical form the literal has. Turning it into
/// an `f64` happens when the tree is flattened, after the whole input has
/// parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    /// Digits only, such as `42`.
    Integer(String),
    /// Anything with a decimal point or an exponent, such as `2.5e-3`.
    Real(String),
    /// Number-like text in a form the calculator does not read, such as
    /// `0x1F` or `1_000`.
    Other(String),
}

impl LiteralValue {
    /// The literal as written.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Integer(text) | Self::Real(text) | Self::Other(text) => text,
        }
    }
}

/// A parsed expression.
///
/// Operator precedence and associativity are fixed by the shape of the tree:
/// `1 - 2 - 3` is `Sub(Sub(1, 2), 3)`. Groups are kept as explicit nodes so
/// the flattened token sequence can reproduce the parentheses.
///
/// The grammar is wider than what the calculator evaluates. Signs, names,
/// calls and every operator beyond `+ - * /` produce nodes here and are
/// rejected afterwards, so such input is reported as unsupported rather than
/// as a syntax error.
///
/// Dropping a tree is iterative: a chain like `1 + 1 + ... + 1` is as deep
/// as it is long, and the derived drop glue would recurse once per node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number.
    Literal {
        /// The number as parsed.
        value:    LiteralValue,
        /// Byte offset in the source text.
        position: usize,
    },
    /// `left op right`.
    BinaryOp {
        /// Left-hand side.
        left:     Box<Self>,
        /// Operator between the two sides.
        op:       BinaryOperator,
        /// Right-hand side.
        right:    Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// `( expr )`.
    Grouping {
        /// The enclosed expression.
        expr:     Box<Self>,
        /// Byte offset of `(`.
        position: usize,
    },
    /// A prefix operator, `-expr`, `+expr` or `!expr`.
    UnaryOp {
        /// Which operator.
        op:       UnaryOperator,
        /// What it applies to.
        expr:     Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// A bare name such as `pi`.
    Identifier {
        /// The name as written.
        name:     String,
        /// Byte offset of the name.
        position: usize,
    },
    /// `name(arg, ...)`. The arguments are checked for syntax only.
    FunctionCall {
        /// The called name.
        name:     String,
        /// Byte offset of the name.
        position: usize,
    },
}

impl Expr {
    /// Byte offset of the node in the source text.
    ///
    /// ```
    /// use calculus::ast::Expr;
    ///
    /// let call = Expr::FunctionCall { name:     "sqrt".to_string(),
    ///                                 position: 3, };
    /// assert_eq!(call.position(), 3);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::Grouping { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::Identifier { position, .. }
            | Self::FunctionCall { position, .. } => *position,
        }
    }

    /// Moves the direct children of `self` into `out`, leaving leaves behind.
    fn detach_children(&mut self, out: &mut Vec<Self>) {
        let mut take = |slot: &mut Self| {
            let leaf = Self::Literal { value:    LiteralValue::Integer(String::new()),
                                       position: 0, };
            out.push(std::mem::replace(slot, leaf));
        };
        match self {
            Self::BinaryOp { left, right, .. } => {
                take(left);
                take(right);
            },
            Self::Grouping { expr, .. } | Self::UnaryOp { expr, .. } => take(expr),
            Self::Literal { .. } | Self::Identifier { .. } | Self::FunctionCall { .. } => {},
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        self.detach_children(&mut detached);
        while let Some(mut node) = detached.pop() {
            node.detach_children(&mut detached);
        }
    }
}

/// Infix operators known to the grammar.
///
/// The first four compile to tokens. The rest exist only to be rejected by
/// name.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `&^`
    BitClear,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
}

/// Prefix operators known to the grammar. None of them compiles.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-`
    Negate,
    /// `+`
    Plus,
    /// `!`
    Not,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Add => "+",
                        Self::Sub => "-",
                        Self::Mul => "*",
                        Self::Div => "/",
                        Self::Mod => "%",
                        Self::Pow => "^",
                        Self::BitAnd => "&",
                        Self::BitOr => "|",
                        Self::BitClear => "&^",
                        Self::ShiftLeft => "<<",
                        Self::ShiftRight => ">>",
                        Self::And => "&&",
                        Self::Or => "||",
                        Self::Equal => "==",
                        Self::NotEqual => "!=",
                        Self::Less => "<",
                        Self::LessEqual => "<=",
                        Self::Greater => ">",
                        Self::GreaterEqual => ">=",
                    })
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Negate => "-",
                        Self::Plus => "+",
                        Self::Not => "!",
                    })
    }
}
