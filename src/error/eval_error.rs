use crate::{error::ErrorKind, interpreter::token::Token};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
///
/// Every variant is a structural problem of the sequence and is classified as
/// [`ErrorKind::InvalidRpn`]. `index` is the position of the offending token
/// in the sequence.
pub enum EvalError {
    /// An operator found fewer than two operands on the stack.
    MissingOperands {
        /// The operator token.
        operator: Token,
        /// Index of the operator in the sequence.
        index:    usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// Index of the division token in the sequence.
        index: usize,
    },
    /// A token that has no meaning in postfix order, such as a parenthesis.
    UnexpectedToken {
        /// The token encountered.
        token: Token,
        /// Index of the token in the sequence.
        index: usize,
    },
    /// The sequence did not reduce to exactly one value.
    ResidualOperands {
        /// Number of values left on the stack.
        count: usize,
    },
}

impl EvalError {
    /// Classifies the error. Always [`ErrorKind::InvalidRpn`].
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidRpn
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = self.kind();
        match self {
            Self::MissingOperands { operator, index } => write!(f,
                                                                "{kind}: Operator '{operator}' at index {index} needs two operands."),
            Self::DivisionByZero { index } => {
                write!(f, "{kind}: Division by zero at index {index}.")
            },
            Self::UnexpectedToken { token, index } => {
                write!(f, "{kind}: Unexpected token '{token}' at index {index}.")
            },
            Self::ResidualOperands { count } => write!(f,
                                                       "{kind}: Expected exactly one value after evaluation, found {count}."),
        }
    }
}

impl std::error::Error for EvalError {}
