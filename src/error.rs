/// Compilation errors.
///
/// Defines all error types that can occur while turning expression text into
/// a postfix sequence: invalid syntax, unsupported constructs, literals that
/// cannot be represented and unrecognized tokens.
pub mod compile_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a postfix
/// sequence. Each of them means the sequence is not valid RPN: an operator
/// without operands, a division by zero or leftover values.
pub mod eval_error;

pub use compile_error::CompileError;
pub use eval_error::EvalError;

/// Coarse classification shared by every error of the calculator.
///
/// This is what crosses process boundaries: the RPC layer transmits the kind
/// as a one-byte code next to the full message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input is not a syntactically valid arithmetic expression.
    InvalidExpression,
    /// The input uses an unsupported construct or an unrepresentable literal.
    UnknownLiteral,
    /// A token of unrecognized kind was supplied.
    UnknownToken,
    /// The postfix sequence is structurally malformed.
    InvalidRpn,
}

impl ErrorKind {
    /// Returns the stable wire code of this kind.
    ///
    /// # Example
    /// ```
    /// use calculus::error::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::try_from(ErrorKind::InvalidRpn.code()),
    ///            Ok(ErrorKind::InvalidRpn));
    /// ```
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::InvalidExpression => 1,
            Self::UnknownLiteral => 2,
            Self::UnknownToken => 3,
            Self::InvalidRpn => 4,
        }
    }
}

impl TryFrom<u8> for ErrorKind {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::InvalidExpression),
            2 => Ok(Self::UnknownLiteral),
            3 => Ok(Self::UnknownToken),
            4 => Ok(Self::InvalidRpn),
            other => Err(other),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidExpression => write!(f, "Invalid expression"),
            Self::UnknownLiteral => write!(f, "Unknown literal"),
            Self::UnknownToken => write!(f, "Unknown token"),
            Self::InvalidRpn => write!(f, "Invalid RPN"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Any error produced by [`calculate`](crate::calculate).
pub enum Error {
    /// The expression could not be compiled.
    Compile(CompileError),
    /// The compiled expression could not be evaluated.
    Eval(EvalError),
}

impl Error {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Compile(e) => e.kind(),
            Self::Eval(e) => e.kind(),
        }
    }
}

impl From<CompileError> for Error {
    fn from(value: CompileError) -> Self {
        Self::Compile(value)
    }
}

impl From<EvalError> for Error {
    fn from(value: EvalError) -> Self {
        Self::Eval(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compile(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Compile(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
