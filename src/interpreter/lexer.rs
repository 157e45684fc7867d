use logos::Logos;

use crate::error::CompileError;

/// One lexical unit of expression text.
///
/// The lexer recognizes a good deal more than the calculator can evaluate:
/// identifiers, the bitwise, logical and comparison operators, `%`, `^`, `!`
/// and `,` are tokenized so the parser can build a tree and report them as
/// unsupported constructs rather than as garbage text. Literals keep their
/// source text; conversion to a number happens only once the whole input has
/// parsed, so a syntax error always wins over a bad literal.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Lexeme {
    /// Real literal tokens, such as `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string(), priority = 3)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string(), priority = 3)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", |lex| lex.slice().to_string(), priority = 3)]
    Real(String),
    /// Digits only, such as `42`.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string(), priority = 3)]
    Integer(String),
    /// Number-like text that is neither of the above: `0x10`, `1_000`,
    /// `0b101`, `2i`. Kept whole so it is reported as one literal.
    #[regex(r"[0-9][0-9a-zA-Z_]*(\.[0-9a-zA-Z_]*)?", |lex| lex.slice().to_string())]
    OtherNumber(String),
    /// Identifier tokens such as `x` or `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    // operators and punctuation
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("&")]
    Ampersand,
    #[token("|")]
    Pipe,
    #[token("&^")]
    AmpersandCaret,
    #[token("<<")]
    ShiftLeft,
    #[token(">>")]
    ShiftRight,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("==")]
    EqualEqual,
    #[token("!=")]
    BangEqual,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,
    #[token("!")]
    Bang,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    /// Whitespace, including the newline a line reader leaves behind.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Lexeme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Real(text) | Self::Integer(text) | Self::OtherNumber(text) | Self::Identifier(text) => {
                return write!(f, "'{text}'");
            },
            Self::Ignored => return write!(f, "whitespace"),
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Caret => "^",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::AmpersandCaret => "&^",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::AndAnd => "&&",
            Self::OrOr => "||",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Bang => "!",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Comma => ",",
        };
        write!(f, "'{symbol}'")
    }
}

/// Splits `source` into lexemes paired with their byte offsets.
///
/// # Errors
/// Returns [`CompileError::UnexpectedCharacter`] for text that does not start
/// any lexeme.
///
/// # Example
/// ```
/// use calculus::interpreter::lexer::{Lexeme, tokenize};
///
/// let lexemes = tokenize("1 + 2").unwrap();
/// assert_eq!(lexemes,
///            vec![(Lexeme::Integer("1".to_string()), 0),
///                 (Lexeme::Plus, 2),
///                 (Lexeme::Integer("2".to_string()), 4)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Lexeme, usize)>, CompileError> {
    let mut lexer = Lexeme::lexer(source);
    let mut lexemes = Vec::new();

    while let Some(lexeme) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(lexeme) = lexeme {
            lexemes.push((lexeme, position));
        } else {
            return Err(CompileError::UnexpectedCharacter { text: lexer.slice().to_string(),
                                                           position });
        }
    }

    Ok(lexemes)
}
