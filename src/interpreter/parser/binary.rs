use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Lexeme,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// `or := and ("||" and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Lexeme, usize)> + Clone
{
    parse_left_associative(tokens, depth, |op| op == BinaryOperator::Or, parse_logical_and)
}

/// `and := comparison ("&&" comparison)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Lexeme, usize)> + Clone
{
    parse_left_associative(tokens, depth, |op| op == BinaryOperator::And, parse_comparison)
}

/// `comparison := additive (("==" | "!=" | "<" | "<=" | ">" | ">=") additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Lexeme, usize)> + Clone
{
    parse_left_associative(tokens,
                           depth,
                           |op| {
                               matches!(op,
                                        BinaryOperator::Equal
                                        | BinaryOperator::NotEqual
                                        | BinaryOperator::Less
                                        | BinaryOperator::LessEqual
                                        | BinaryOperator::Greater
                                        | BinaryOperator::GreaterEqual)
                           },
                           parse_additive)
}

/// `additive := multiplicative (("+" | "-" | "|") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Lexeme, usize)> + Clone
{
    parse_left_associative(tokens,
                           depth,
                           |op| {
                               matches!(op,
                                        BinaryOperator::Add
                                        | BinaryOperator::Sub
                                        | BinaryOperator::BitOr)
                           },
                           parse_multiplicative)
}

/// `multiplicative := exponent (("*" | "/" | "%" | "<<" | ">>" | "&" | "&^") exponent)*`
///
/// The bitwise operators share this level so that `2 * 7 % 3` or `1 << 2 * 3`
/// parse the usual way before they are rejected.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Lexeme, usize)> + Clone
{
    parse_left_associative(tokens,
                           depth,
                           |op| {
                               matches!(op,
                                        BinaryOperator::Mul
                                        | BinaryOperator::Div
                                        | BinaryOperator::Mod
                                        | BinaryOperator::ShiftLeft
                                        | BinaryOperator::ShiftRight
                                        | BinaryOperator::BitAnd
                                        | BinaryOperator::BitClear)
                           },
                           parse_exponent)
}

/// `exponent := unary ("^" unary)*`
///
/// Only parsed so it can be reported; `^` never reaches the evaluator.
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Lexeme, usize)> + Clone
{
    parse_left_associative(tokens, depth, |op| op == BinaryOperator::Pow, parse_unary)
}

/// Folds `operand (op operand)*` into a left-leaning tree.
///
/// `accepts` selects the operators of this precedence level; `operand` parses
/// the next tighter level. The loop stops at the first lexeme that is not an
/// accepted operator and leaves it in the stream. Chains do not add nesting:
/// the loop is iterative however long the chain is.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 depth: usize,
                                 accepts: impl Fn(BinaryOperator) -> bool,
                                 operand: impl Fn(&mut Peekable<I>, usize) -> ParseResult<Expr>)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Lexeme, usize)> + Clone
{
    let mut tree = operand(tokens, depth)?;

    while let Some((lexeme, position)) = tokens.peek()
          && let Some(op) = lexeme_to_binary_operator(lexeme)
          && accepts(op)
    {
        let position = *position;
        tokens.next();
        let rhs = operand(tokens, depth)?;
        tree = Expr::BinaryOp { left: Box::new(tree),
                                op,
                                right: Box::new(rhs),
                                position };
    }

    Ok(tree)
}

/// Maps an operator lexeme to the tree operator, `None` for anything else.
///
/// # Example
/// ```
/// use calculus::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Lexeme, parser::binary::lexeme_to_binary_operator},
/// };
///
/// assert_eq!(lexeme_to_binary_operator(&Lexeme::Slash),
///            Some(BinaryOperator::Div));
/// assert_eq!(lexeme_to_binary_operator(&Lexeme::ShiftLeft),
///            Some(BinaryOperator::ShiftLeft));
/// assert_eq!(lexeme_to_binary_operator(&Lexeme::Comma), None);
/// ```
#[must_use]
pub const fn lexeme_to_binary_operator(lexeme: &Lexeme) -> Option<BinaryOperator> {
    Some(match lexeme {
        Lexeme::Plus => BinaryOperator::Add,
        Lexeme::Minus => BinaryOperator::Sub,
        Lexeme::Star => BinaryOperator::Mul,
        Lexeme::Slash => BinaryOperator::Div,
        Lexeme::Percent => BinaryOperator::Mod,
        Lexeme::Caret => BinaryOperator::Pow,
        Lexeme::Ampersand => BinaryOperator::BitAnd,
        Lexeme::Pipe => BinaryOperator::BitOr,
        Lexeme::AmpersandCaret => BinaryOperator::BitClear,
        Lexeme::ShiftLeft => BinaryOperator::ShiftLeft,
        Lexeme::ShiftRight => BinaryOperator::ShiftRight,
        Lexeme::AndAnd => BinaryOperator::And,
        Lexeme::OrOr => BinaryOperator::Or,
        Lexeme::EqualEqual => BinaryOperator::Equal,
        Lexeme::BangEqual => BinaryOperator::NotEqual,
        Lexeme::Less => BinaryOperator::Less,
        Lexeme::LessEqual => BinaryOperator::LessEqual,
        Lexeme::Greater => BinaryOperator::Greater,
        Lexeme::GreaterEqual => BinaryOperator::GreaterEqual,
        _ => return None,
    })
}
