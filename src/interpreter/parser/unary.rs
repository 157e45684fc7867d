use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::CompileError,
    interpreter::{
        lexer::Lexeme,
        parser::{
            core::{ParseResult, descend, parse_expression},
            utils::skip_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `-`, `+` and `!`. They are
/// right-associative, so `--x` is parsed as `-(-x)`, and each one counts as a
/// nesting level. Without an operator the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "+" | "!") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Lexeme, usize)> + Clone
{
    let op = match tokens.peek() {
        Some((Lexeme::Minus, _)) => UnaryOperator::Negate,
        Some((Lexeme::Plus, _)) => UnaryOperator::Plus,
        Some((Lexeme::Bang, _)) => UnaryOperator::Not,
        _ => return parse_primary(tokens, depth),
    };
    let position = tokens.next().map_or(0, |(_, position)| *position);
    let expr = parse_unary(tokens, descend(depth, position)?)?;

    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       position })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals
/// - parenthesized expressions
/// - identifiers and function calls
///
/// Grammar:
/// ```text
///     primary := literal
///              | "(" expression ")"
///              | identifier ( "(" arguments ")" )?
/// ```
/// # Errors
/// `UnexpectedToken` for any other lexeme, `UnexpectedEndOfInput` when the
/// input is exhausted.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Lexeme, usize)> + Clone
{
    let (lexeme, position) = tokens.next().ok_or(CompileError::UnexpectedEndOfInput)?;
    let position = *position;

    let value = match lexeme {
        Lexeme::Integer(text) => LiteralValue::Integer(text.clone()),
        Lexeme::Real(text) => LiteralValue::Real(text.clone()),
        Lexeme::OtherNumber(text) => LiteralValue::Other(text.clone()),
        Lexeme::LParen => return parse_grouping(tokens, depth, position),
        Lexeme::Identifier(name) => return parse_identifier_or_call(tokens, depth, name, position),
        other => {
            return Err(CompileError::UnexpectedToken { token: other.to_string(),
                                                       position });
        },
    };

    Ok(Expr::Literal { value, position })
}

/// Parses the rest of `"(" expression ")"` after the opening parenthesis at
/// `position`.
///
/// # Errors
/// `ExpectedClosingParen` if the input ends before `)`, `UnexpectedToken` if
/// something else follows the inner expression.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         depth: usize,
                         position: usize)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Lexeme, usize)> + Clone
{
    let expr = parse_expression(tokens, descend(depth, position)?)?;
    match tokens.next() {
        Some((Lexeme::RParen, _)) => Ok(Expr::Grouping { expr: Box::new(expr),
                                                         position }),
        Some((lexeme, found)) => Err(CompileError::UnexpectedToken { token:    lexeme.to_string(),
                                                                     position: *found, }),
        None => Err(CompileError::ExpectedClosingParen { position }),
    }
}

/// Parses the rest of an identifier, which becomes a call if `(` follows.
///
/// Call arguments are parsed so that malformed calls are syntax errors, then
/// discarded: no call is ever evaluated.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>,
                                   depth: usize,
                                   name: &str,
                                   position: usize)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Lexeme, usize)> + Clone
{
    if let Some((Lexeme::LParen, open)) = tokens.peek() {
        let depth = descend(depth, *open)?;
        tokens.next();
        skip_comma_separated(tokens, depth, &Lexeme::RParen)?;
        return Ok(Expr::FunctionCall { name: name.to_string(),
                                       position });
    }

    Ok(Expr::Identifier { name: name.to_string(),
                          position })
}
