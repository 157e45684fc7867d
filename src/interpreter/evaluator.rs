use crate::{error::EvalError, interpreter::token::Token, util::stack::Stack};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a postfix token sequence.
///
/// Values are pushed on an operand stack. A binary operator pops the right
/// operand, then the left one, and pushes the result. After the last token
/// exactly one value has to remain.
///
/// # Errors
/// - `MissingOperands` if an operator finds fewer than two values.
/// - `DivisionByZero` if the right operand of `/` is zero.
/// - `UnexpectedToken` for parentheses.
/// - `ResidualOperands` if the stack does not end with exactly one value.
///
/// # Example
/// ```
/// use calculus::{Token, interpreter::evaluator::evaluate_postfix};
///
/// let rpn = [Token::Value(1.0), Token::Value(2.0), Token::Div];
/// assert_eq!(evaluate_postfix(&rpn), Ok(0.5));
///
/// let unfinished = [Token::Value(1.0), Token::Value(2.0)];
/// assert!(evaluate_postfix(&unfinished).is_err());
/// ```
pub fn evaluate_postfix(tokens: &[Token]) -> EvalResult<f64> {
    let mut stack: Stack<f64> = Stack::new();

    for (index, &token) in tokens.iter().enumerate() {
        match token {
            Token::Value(value) => stack.push(value),
            Token::Add | Token::Sub | Token::Mul | Token::Div => {
                if stack.len() < 2 {
                    return Err(EvalError::MissingOperands { operator: token,
                                                            index });
                }
                let right = stack.pop();
                let left = stack.pop();
                stack.push(apply_operator(token, left, right, index)?);
            },
            Token::LeftParen | Token::RightParen => {
                return Err(EvalError::UnexpectedToken { token, index });
            },
        }
    }

    if stack.len() != 1 {
        return Err(EvalError::ResidualOperands { count: stack.len() });
    }

    Ok(stack.pop())
}

/// Applies a binary operator to `left` and `right`.
///
/// `right` is the operand that was closer to the top of the stack, i.e. the
/// right-hand side in infix order.
fn apply_operator(operator: Token, left: f64, right: f64, index: usize) -> EvalResult<f64> {
    match operator {
        Token::Add => Ok(left + right),
        Token::Sub => Ok(left - right),
        Token::Mul => Ok(left * right),
        Token::Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero { index });
            }
            Ok(left / right)
        },
        Token::Value(_) | Token::LeftParen | Token::RightParen => {
            Err(EvalError::UnexpectedToken { token: operator,
                                             index })
        },
    }
}
