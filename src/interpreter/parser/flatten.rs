use crate::{
    ast::{BinaryOperator, Expr, LiteralValue},
    error::CompileError,
    interpreter::{parser::core::ParseResult, token::Token},
    util::stack::Stack,
};

/// Work left to do while flattening: a subtree still to visit, or a token
/// to emit once everything pushed after it is done.
enum Pending<'e> {
    Visit(&'e Expr),
    Emit(Token),
}

/// Flattens `expr` into tokens in infix reading order.
///
/// A binary node emits its left side, its operator and its right side; a
/// group emits `(`, its contents and `)`; a literal emits one value token.
/// The walk keeps its own stack, so tree depth does not matter. Errors are
/// reported for the leftmost offending node.
///
/// # Errors
/// `UnknownLiteral` for unary operators, identifiers, calls and operators
/// other than `+ - * /`; `LiteralOutOfRange` for integers beyond `i64` and
/// reals beyond `f64`; `MalformedLiteral` for number-like text that is not a
/// decimal literal.
///
/// # Example
/// ```
/// use calculus::{Token, interpreter::parser::{core::parse_source, flatten::flatten}};
///
/// let tree = parse_source("(1) * 2").unwrap();
/// assert_eq!(flatten(&tree).unwrap(),
///            vec![Token::LeftParen,
///                 Token::Value(1.0),
///                 Token::RightParen,
///                 Token::Mul,
///                 Token::Value(2.0)]);
/// ```
pub fn flatten(expr: &Expr) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut pending: Stack<Pending<'_>> = Stack::new();
    pending.push(Pending::Visit(expr));

    while !pending.is_empty() {
        let expr = match pending.pop() {
            Pending::Emit(token) => {
                tokens.push(token);
                continue;
            },
            Pending::Visit(expr) => expr,
        };

        match expr {
            Expr::Literal { value, position } => {
                tokens.push(Token::Value(literal_to_f64(value, *position)?));
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let operator = binary_operator_token(*op).ok_or_else(|| {
                                                              CompileError::UnknownLiteral { literal:  format!("operator '{op}'"),
                                                                                             position: *position, }
                                                          })?;
                pending.push(Pending::Visit(right));
                pending.push(Pending::Emit(operator));
                pending.push(Pending::Visit(left));
            },
            Expr::Grouping { expr, .. } => {
                tokens.push(Token::LeftParen);
                pending.push(Pending::Emit(Token::RightParen));
                pending.push(Pending::Visit(expr));
            },
            Expr::UnaryOp { op, position, .. } => {
                return Err(CompileError::UnknownLiteral { literal:  format!("unary operator '{op}'"),
                                                          position: *position, });
            },
            Expr::Identifier { name, position } => {
                return Err(CompileError::UnknownLiteral { literal:  format!("identifier '{name}'"),
                                                          position: *position, });
            },
            Expr::FunctionCall { name, position } => {
                return Err(CompileError::UnknownLiteral { literal:  format!("call to '{name}'"),
                                                          position: *position, });
            },
        }
    }

    Ok(tokens)
}

/// Integer literals are normalized to the nearest `f64`, like any other
/// integer-to-float conversion.
#[allow(clippy::cast_precision_loss)]
fn literal_to_f64(value: &LiteralValue, position: usize) -> ParseResult<f64> {
    let out_of_range = || CompileError::LiteralOutOfRange { literal: value.text().to_string(),
                                                            position };
    match value {
        LiteralValue::Integer(text) => text.parse::<i64>()
                                           .map(|n| n as f64)
                                           .map_err(|_| out_of_range()),
        LiteralValue::Real(text) => match text.parse::<f64>() {
            Ok(x) if x.is_finite() => Ok(x),
            _ => Err(out_of_range()),
        },
        LiteralValue::Other(text) => Err(CompileError::MalformedLiteral { literal: text.clone(),
                                                                          position }),
    }
}

const fn binary_operator_token(op: BinaryOperator) -> Option<Token> {
    match op {
        BinaryOperator::Add => Some(Token::Add),
        BinaryOperator::Sub => Some(Token::Sub),
        BinaryOperator::Mul => Some(Token::Mul),
        BinaryOperator::Div => Some(Token::Div),
        _ => None,
    }
}
