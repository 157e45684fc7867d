use crate::{interpreter::token::Token, util::stack::Stack};

/// Converts an infix token sequence into postfix (RPN) order.
///
/// Uses the shunting-yard algorithm with an explicit operator stack:
/// - values go straight to the output;
/// - `+` and `-` first pop every stacked operator, `*` and `/` pop only
///   stacked `*` and `/`, so operators of equal precedence leave the stack
///   before the new one is pushed and chains stay left-associative;
/// - `(` is pushed and acts as a barrier;
/// - `)` pops up to the nearest `(` and discards it. Without a matching `(`
///   the stack is simply drained.
///
/// Whatever remains on the stack is appended in pop order.
///
/// # Example
/// ```
/// use calculus::{Token, interpreter::converter::infix_to_postfix};
///
/// // 1 - 2 - 3  ->  1 2 - 3 -
/// let infix = [Token::Value(1.0), Token::Sub, Token::Value(2.0), Token::Sub, Token::Value(3.0)];
/// assert_eq!(infix_to_postfix(infix),
///            vec![Token::Value(1.0), Token::Value(2.0), Token::Sub, Token::Value(3.0), Token::Sub]);
/// ```
pub fn infix_to_postfix<I>(tokens: I) -> Vec<Token>
    where I: IntoIterator<Item = Token>
{
    let mut output = Vec::new();
    let mut stack: Stack<Token> = Stack::new();

    for token in tokens {
        match token {
            Token::Value(_) => output.push(token),
            Token::Add | Token::Sub => {
                while !stack.is_empty() && stack.peek().is_operator() {
                    output.push(stack.pop());
                }
                stack.push(token);
            },
            Token::Mul | Token::Div => {
                while !stack.is_empty() && stack.peek().is_multiplicative() {
                    output.push(stack.pop());
                }
                stack.push(token);
            },
            Token::LeftParen => stack.push(token),
            Token::RightParen => {
                while !stack.is_empty() && *stack.peek() != Token::LeftParen {
                    output.push(stack.pop());
                }
                if !stack.is_empty() {
                    stack.pop();
                }
            },
        }
    }

    while !stack.is_empty() {
        output.push(stack.pop());
    }

    output
}
