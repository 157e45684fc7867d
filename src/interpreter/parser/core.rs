use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::CompileError,
    interpreter::{
        lexer::{Lexeme, tokenize},
        parser::{binary::parse_logical_or, flatten::flatten},
        token::Token,
    },
};

pub type ParseResult<T> = Result<T, CompileError>;

/// How many parentheses, prefix operators and call argument lists may be
/// nested inside each other.
///
/// Every level costs a fixed number of stack frames in the parser, so this
/// bounds its stack use independently of the input length.
pub const MAX_NESTING: usize = 128;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, `||`, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := or`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Lexeme, position)` pairs.
/// - `depth`: Current nesting level, `0` at the top.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Lexeme, usize)> + Clone
{
    parse_logical_or(tokens, depth)
}

/// Returns the level below `depth`, or `NestingTooDeep` at the limit.
pub(in crate::interpreter::parser) fn descend(depth: usize, position: usize) -> ParseResult<usize> {
    if depth >= MAX_NESTING {
        return Err(CompileError::NestingTooDeep { position });
    }
    Ok(depth + 1)
}

/// Parses `source` as exactly one expression.
///
/// # Errors
/// Returns an `InvalidExpression` class error if the text cannot be lexed,
/// does not match the grammar, nests deeper than [`MAX_NESTING`] or has
/// tokens left over after the expression.
///
/// # Example
/// ```
/// use calculus::{ast::Expr, interpreter::parser::core::parse_source};
///
/// let tree = parse_source("(1 + 2) * 3").unwrap();
/// assert!(matches!(tree, Expr::BinaryOp { .. }));
///
/// assert!(parse_source("1 +").is_err());
/// ```
pub fn parse_source(source: &str) -> ParseResult<Expr> {
    let lexemes = tokenize(source)?;
    let mut iter = lexemes.iter().peekable();

    let expr = parse_expression(&mut iter, 0)?;

    if let Some((lexeme, position)) = iter.next() {
        return Err(CompileError::UnexpectedTrailingTokens { token:    lexeme.to_string(),
                                                            position: *position, });
    }

    Ok(expr)
}

/// Parses `source` and returns its tokens in infix order.
///
/// Parenthesized groups are kept as `LeftParen`/`RightParen` tokens; the
/// precedence encoded by the tree is not carried over and has to be derived
/// again by the converter.
///
/// # Errors
/// Any error of [`parse_source`], then `UnknownLiteral` class errors for
/// constructs the calculator does not support and for literals that do not
/// convert.
///
/// # Example
/// ```
/// use calculus::{Token, interpreter::parser::core::parse_infix};
///
/// assert_eq!(parse_infix("2 * (3)").unwrap(),
///            vec![Token::Value(2.0),
///                 Token::Mul,
///                 Token::LeftParen,
///                 Token::Value(3.0),
///                 Token::RightParen]);
/// ```
pub fn parse_infix(source: &str) -> ParseResult<Vec<Token>> {
    let tree = parse_source(source)?;
    flatten(&tree)
}
