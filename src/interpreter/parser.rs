/// Binary operator parsing.
///
/// Implements the logical, comparison, additive, multiplicative and exponent
/// levels of the grammar. Each level is left-associative and delegates to
/// the next tighter level for its operands.
pub mod binary;
/// Parser entry points.
///
/// Lexes the source, parses one complete expression and rejects trailing
/// input. Also hosts [`core::parse_infix`], which returns the flattened infix
/// token sequence.
pub mod core;
/// Tree flattening.
///
/// Walks a parsed [`Expr`](crate::ast::Expr) depth-first and emits its tokens
/// back in infix reading order, rejecting every construct the calculator does
/// not support.
pub mod flatten;
/// Unary and primary expression parsing.
///
/// Literals, parenthesized groups, identifiers and calls, plus the prefix
/// operators `-`, `+` and `!`.
pub mod unary;
/// Call argument lists.
pub mod utils;
