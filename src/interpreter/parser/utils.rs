use std::iter::Peekable;

use crate::{
    error::CompileError,
    interpreter::{
        lexer::Lexeme,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a comma-separated list of expressions up to `closing` and discards
/// them.
///
/// Used for call arguments, which only have to be well-formed. An
/// immediately encountered closing lexeme is an empty list.
///
/// Grammar (simplified): `list := expression ("," expression)*`
///
/// # Errors
/// Returns a `CompileError` if an item fails to parse, an unexpected lexeme
/// is encountered or the stream ends before the closing lexeme.
pub(in crate::interpreter::parser) fn skip_comma_separated<'a, I>(tokens: &mut Peekable<I>,
                                                                  depth: usize,
                                                                  closing: &Lexeme)
                                                                  -> ParseResult<()>
    where I: Iterator<Item = &'a (Lexeme, usize)> + Clone
{
    if let Some((lexeme, _)) = tokens.peek()
       && lexeme == closing
    {
        tokens.next();
        return Ok(());
    }
    loop {
        parse_expression(tokens, depth)?;
        match tokens.next() {
            Some((Lexeme::Comma, _)) => {},
            Some((lexeme, _)) if lexeme == closing => return Ok(()),
            Some((lexeme, position)) => {
                return Err(CompileError::UnexpectedToken { token:    format!("expected ',' or {closing}, found {lexeme}"),
                                                           position: *position, });
            },
            None => return Err(CompileError::UnexpectedEndOfInput),
        }
    }
}
