use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while compiling an expression.
///
/// Compilation covers lexing, parsing, flattening the tree into infix tokens
/// and converting them to postfix order.
pub enum CompileError {
    /// The lexer found text that is not part of any token.
    UnexpectedCharacter {
        /// The offending text.
        text:     String,
        /// Byte offset in the source text.
        position: usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset in the source text.
        position: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset of the unmatched opening parenthesis.
        position: usize,
    },
    /// Found extra tokens after the expression should have ended.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset in the source text.
        position: usize,
    },
    /// Parentheses or prefix operators are nested deeper than the parser
    /// descends.
    NestingTooDeep {
        /// Byte offset of the `(` or operator one level past the limit.
        position: usize,
    },
    /// The expression contains a construct the calculator does not support,
    /// such as unary minus, an identifier or the `%` operator.
    UnknownLiteral {
        /// Description of the construct.
        literal:  String,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A decimal literal whose value does not fit: an integer beyond `i64` or
    /// a real that overflows to infinity.
    LiteralOutOfRange {
        /// The literal as written.
        literal:  String,
        /// Byte offset in the source text.
        position: usize,
    },
    /// Number-like text that is not a decimal literal, such as `0x10`.
    MalformedLiteral {
        /// The literal as written.
        literal:  String,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A token of unrecognized kind was supplied.
    UnknownToken {
        /// The token text.
        token: String,
    },
}

impl CompileError {
    /// Classifies the error.
    ///
    /// # Example
    /// ```
    /// use calculus::error::{CompileError, ErrorKind};
    ///
    /// let err = CompileError::UnexpectedEndOfInput;
    /// assert_eq!(err.kind(), ErrorKind::InvalidExpression);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnexpectedCharacter { .. }
            | Self::UnexpectedToken { .. }
            | Self::UnexpectedEndOfInput
            | Self::ExpectedClosingParen { .. }
            | Self::UnexpectedTrailingTokens { .. }
            | Self::NestingTooDeep { .. } => ErrorKind::InvalidExpression,
            Self::UnknownLiteral { .. }
            | Self::LiteralOutOfRange { .. }
            | Self::MalformedLiteral { .. } => ErrorKind::UnknownLiteral,
            Self::UnknownToken { .. } => ErrorKind::UnknownToken,
        }
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = self.kind();
        match self {
            Self::UnexpectedCharacter { text, position } => {
                write!(f, "{kind} at position {position}: Unexpected character '{text}'.")
            },
            Self::UnexpectedToken { token, position } => {
                write!(f, "{kind} at position {position}: Unexpected token: {token}.")
            },
            Self::UnexpectedEndOfInput => write!(f, "{kind}: Unexpected end of input."),
            Self::ExpectedClosingParen { position } => write!(f,
                                                              "{kind}: Expected closing parenthesis ')' for '(' at position {position} but none found."),
            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "{kind} at position {position}: Extra tokens after expression, starting with {token}."),
            Self::NestingTooDeep { position } => {
                write!(f, "{kind} at position {position}: Expression is nested too deeply.")
            },
            Self::UnknownLiteral { literal, position } => {
                write!(f, "{kind} at position {position}: {literal} is not supported.")
            },
            Self::LiteralOutOfRange { literal, position } => write!(f,
                                                                    "{kind} at position {position}: '{literal}' cannot be represented as a number."),
            Self::MalformedLiteral { literal, position } => write!(f,
                                                                   "{kind} at position {position}: '{literal}' is not a decimal number."),
            Self::UnknownToken { token } => write!(f, "{kind}: '{token}'."),
        }
    }
}

impl std::error::Error for CompileError {}
