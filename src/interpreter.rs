/// The compiled expression type.
///
/// Holds a postfix token sequence produced by the parser and converter and
/// exposes evaluation on it. It can be built from expression text, from a
/// token vector or from postfix text.
pub mod compiled;
/// Infix-to-postfix conversion.
///
/// Re-derives operator precedence and parenthesis scoping from a flat infix
/// token sequence with the shunting-yard algorithm.
pub mod converter;
/// The RPN evaluator.
///
/// Folds a postfix token sequence into one `f64` with an explicit operand
/// stack, reporting malformed sequences and division by zero.
pub mod evaluator;
/// The lexer module tokenizes expression text for the parser.
///
/// # Responsibilities
/// - Converts the input character stream into lexemes with byte offsets.
/// - Keeps literal text intact so the parser can classify bad literals.
/// - Reports text that does not form any lexeme.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from lexemes.
///
/// The parser processes the lexeme stream and constructs a tree that
/// represents the structure of the expression, then flattens it back into
/// infix tokens.
///
/// # Responsibilities
/// - Converts lexemes into structured AST nodes.
/// - Validates the grammar, reporting errors with their position.
/// - Rejects constructs the calculator does not evaluate.
pub mod parser;
/// The primitive token shared by the infix and postfix sequences.
pub mod token;
