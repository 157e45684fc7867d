use std::str::FromStr;

use crate::error::CompileError;

/// A primitive unit of an infix or postfix sequence.
///
/// The same type is used on both sides of the converter: in infix order the
/// parentheses mark grouping, in postfix order they never appear. Operators
/// carry no operands; those live on the evaluator's stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric operand.
    Value(f64),
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl Token {
    /// Returns `true` for the four binary operators.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div)
    }

    /// Returns `true` for `*` and `/`.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
        }
    }
}

/// Parses the text form produced by `Display`.
///
/// # Example
/// ```
/// use calculus::Token;
///
/// assert_eq!("*".parse::<Token>(), Ok(Token::Mul));
/// assert_eq!("2.5".parse::<Token>(), Ok(Token::Value(2.5)));
/// assert!("%".parse::<Token>().is_err());
/// ```
impl FromStr for Token {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Sub),
            "*" => Ok(Self::Mul),
            "/" => Ok(Self::Div),
            "(" => Ok(Self::LeftParen),
            ")" => Ok(Self::RightParen),
            text => match text.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(Self::Value(value)),
                _ => Err(CompileError::UnknownToken { token: text.to_string() }),
            },
        }
    }
}
