use std::str::FromStr;

use crate::{
    error::{CompileError, EvalError},
    interpreter::{
        converter::infix_to_postfix, evaluator::evaluate_postfix, parser::core::parse_infix,
        token::Token,
    },
};

/// An expression compiled to postfix order.
///
/// This is the only input the evaluator needs. Evaluation never mutates it,
/// so a compiled expression can be cached, cloned, shared between threads and
/// evaluated any number of times with identical results.
///
/// # Example
/// ```
/// use calculus::CompiledExpression;
///
/// let expr = CompiledExpression::compile("(1 + 2) * 1 + (1 - 2)").unwrap();
/// assert_eq!(expr.to_string(), "1 2 + 1 * 1 2 - +");
/// assert_eq!(expr.evaluate(), Ok(2.0));
/// assert_eq!(expr.evaluate(), Ok(2.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledExpression {
    tokens: Vec<Token>,
}

impl CompiledExpression {
    /// Parses `source` and converts it to postfix order.
    ///
    /// # Errors
    /// Returns a [`CompileError`] if the text is not a valid expression or
    /// uses unsupported constructs.
    pub fn compile(source: &str) -> Result<Self, CompileError> {
        let infix = parse_infix(source)?;
        Ok(Self { tokens: infix_to_postfix(infix) })
    }

    /// Wraps an already postfix-ordered sequence without checking it.
    ///
    /// Malformed sequences are reported by [`evaluate`](Self::evaluate).
    #[must_use]
    pub const fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// The postfix token sequence.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Evaluates the expression.
    ///
    /// # Errors
    /// Returns an [`EvalError`] if the sequence is not valid RPN or divides
    /// by zero.
    pub fn evaluate(&self) -> Result<f64, EvalError> {
        evaluate_postfix(&self.tokens)
    }
}

impl From<Vec<Token>> for CompiledExpression {
    fn from(tokens: Vec<Token>) -> Self {
        Self::from_tokens(tokens)
    }
}

impl std::fmt::Display for CompiledExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Reads whitespace-separated postfix text, such as `1 2 + 3 *`.
///
/// The text is taken as already being in postfix order; nothing is
/// converted.
///
/// # Example
/// ```
/// use calculus::{CompiledExpression, error::ErrorKind};
///
/// let expr: CompiledExpression = "3 4 * 2 -".parse().unwrap();
/// assert_eq!(expr.evaluate(), Ok(10.0));
///
/// let err = "3 x +".parse::<CompiledExpression>().unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnknownToken);
/// ```
impl FromStr for CompiledExpression {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s.split_whitespace()
                      .map(str::parse)
                      .collect::<Result<Vec<Token>, _>>()?;
        Ok(Self { tokens })
    }
}
