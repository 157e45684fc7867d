//! # calculus
//!
//! calculus evaluates arithmetic expressions written as text. An expression
//! is compiled once into Reverse Polish Notation and can then be evaluated
//! any number of times. The crate also ships a small binary RPC protocol with
//! an async server and client so that evaluation can be offered over TCP.
//!
//! Supported input: integer and real literals, `+ - * /` and parentheses.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::error::{CompileError, Error, EvalError};
pub use crate::interpreter::{compiled::CompiledExpression, token::Token};

/// Defines the tree produced by the parser.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an expression. Precedence and associativity are
/// encoded by the shape of the tree; every node carries its source position
/// for error reporting.
pub mod ast;
/// Provides unified error types for compilation and evaluation.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (lexer, parser, evaluator).
/// - Attaches source positions or sequence indices for context.
/// - Classifies every error into one of four [`error::ErrorKind`]s.
pub mod error;
/// Orchestrates compilation and evaluation.
///
/// This module ties together lexing, parsing, flattening, infix-to-postfix
/// conversion and RPN evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, converter, evaluator.
/// - Defines the `Token` exchanged between the stages.
/// - Provides the compiled expression type.
pub mod interpreter;
/// Network access to the calculator.
///
/// A length-prefixed binary protocol over TCP, with an async server that
/// evaluates incoming expressions and a matching client.
pub mod rpc;
/// General utilities: the generic stack.
pub mod util;

/// Compiles `expression` into postfix order.
///
/// # Example
/// ```
/// use calculus::{Token, compile};
///
/// let expr = compile("1+2").unwrap();
/// assert_eq!(expr.tokens(),
///            &[Token::Value(1.0), Token::Value(2.0), Token::Add]);
/// ```
pub fn compile(expression: &str) -> Result<CompiledExpression, CompileError> {
    CompiledExpression::compile(expression)
}

/// Evaluates a compiled expression.
///
/// # Example
/// ```
/// use calculus::{compile, error::ErrorKind, evaluate};
///
/// let half = compile("1 / 2").unwrap();
/// assert_eq!(evaluate(&half), Ok(0.5));
///
/// let broken = compile("1 / 0").unwrap();
/// assert_eq!(evaluate(&broken).unwrap_err().kind(), ErrorKind::InvalidRpn);
/// ```
pub fn evaluate(expression: &CompiledExpression) -> Result<f64, EvalError> {
    expression.evaluate()
}

/// Compiles and evaluates `expression` in one step.
///
/// # Example
/// ```
/// use calculus::{calculate, error::ErrorKind};
///
/// assert_eq!(calculate("(1 + 2) * 1 + (1 - 2)"), Ok(2.0));
/// assert_eq!(calculate("-1").unwrap_err().kind(), ErrorKind::UnknownLiteral);
/// ```
pub fn calculate(expression: &str) -> Result<f64, Error> {
    let compiled = compile(expression)?;
    Ok(evaluate(&compiled)?)
}
