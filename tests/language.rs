use std::fs;

use calculus::{
    CompiledExpression, Token, calculate, compile,
    error::{CompileError, ErrorKind, EvalError},
    evaluate,
    interpreter::{
        converter::infix_to_postfix, evaluator::evaluate_postfix, parser::core::MAX_NESTING,
    },
};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            count += 1;

            let (expression, expected) =
                line.split_once(" => ")
                    .unwrap_or_else(|| panic!("{path:?}:{}: missing ' => '", i + 1));

            if let Some(kind) = expected.strip_prefix("error ") {
                let kind = parse_kind(kind);
                match calculate(expression) {
                    Ok(v) => panic!("{path:?}:{}: {expression:?} gave {v}, expected {kind}",
                                    i + 1),
                    Err(e) => assert_eq!(e.kind(), kind, "{path:?}:{}: {expression:?}: {e}", i + 1),
                }
            } else {
                let expected: f64 = expected.parse()
                                            .unwrap_or_else(|_| panic!("{path:?}:{}: bad number", i + 1));
                match calculate(expression) {
                    Ok(v) => assert_eq!(v, expected, "{path:?}:{}: {expression:?}", i + 1),
                    Err(e) => panic!("{path:?}:{}: {expression:?} failed: {e}", i + 1),
                }
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn parse_kind(name: &str) -> ErrorKind {
    match name {
        "InvalidExpression" => ErrorKind::InvalidExpression,
        "UnknownLiteral" => ErrorKind::UnknownLiteral,
        "UnknownToken" => ErrorKind::UnknownToken,
        "InvalidRpn" => ErrorKind::InvalidRpn,
        other => panic!("unknown error kind {other}"),
    }
}

fn assert_value(src: &str, expected: f64) {
    match calculate(src) {
        Ok(v) => assert_eq!(v, expected, "{src}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match calculate(src) {
        Ok(v) => panic!("Expression {src:?} gave {v} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "{src}: {e}"),
    }
}

const fn v(value: f64) -> Token {
    Token::Value(value)
}

#[test]
fn compiles_to_postfix() {
    let cases = [("1+2", vec![v(1.0), v(2.0), Token::Add]),
                 ("1 +  2", vec![v(1.0), v(2.0), Token::Add]),
                 ("1 - 2", vec![v(1.0), v(2.0), Token::Sub]),
                 ("1 * 2", vec![v(1.0), v(2.0), Token::Mul]),
                 ("1 / 2", vec![v(1.0), v(2.0), Token::Div]),
                 ("(1 + 2)", vec![v(1.0), v(2.0), Token::Add]),
                 ("(1 + 2) * 1 + (1 - 2)",
                  vec![v(1.0),
                       v(2.0),
                       Token::Add,
                       v(1.0),
                       Token::Mul,
                       v(1.0),
                       v(2.0),
                       Token::Sub,
                       Token::Add]),
                 ("1 - 2 - 3", vec![v(1.0), v(2.0), Token::Sub, v(3.0), Token::Sub]),
                 ("1 + 2 * 3", vec![v(1.0), v(2.0), v(3.0), Token::Mul, Token::Add])];

    for (src, expected) in cases {
        let compiled = compile(src).unwrap_or_else(|e| panic!("{src:?}: {e}"));
        assert_eq!(compiled.tokens(), expected.as_slice(), "{src}");
    }
}

#[test]
fn evaluates_postfix_sequences() {
    let cases = [(vec![v(1.0), v(2.0), Token::Add], 3.0),
                 (vec![v(1.0), v(2.0), Token::Mul], 2.0),
                 (vec![v(1.0), v(2.0), Token::Div], 0.5),
                 (vec![v(1.0), v(2.0), Token::Sub], -1.0),
                 (vec![v(1.0),
                       v(2.0),
                       Token::Add,
                       v(1.0),
                       Token::Mul,
                       v(1.0),
                       v(2.0),
                       Token::Sub,
                       Token::Add],
                  2.0)];

    for (tokens, expected) in cases {
        let compiled = CompiledExpression::from_tokens(tokens);
        assert_eq!(evaluate(&compiled), Ok(expected), "{compiled}");
    }
}

#[test]
fn additive_chains_are_left_associative() {
    let values = [9.0, 4.0, 2.5, 1.0];
    for mask in 0..8u8 {
        let mut src = values[0].to_string();
        let mut expected = values[0];
        for (i, value) in values[1..].iter().enumerate() {
            if (mask >> i) & 1 == 0 {
                src.push_str(&format!(" + {value}"));
                expected += value;
            } else {
                src.push_str(&format!(" - {value}"));
                expected -= value;
            }
        }
        assert_value(&src, expected);
    }
}

#[test]
fn multiplicative_chains_are_left_associative() {
    let values = [64.0, 4.0, 2.0, 8.0];
    for mask in 0..8u8 {
        let mut src = values[0].to_string();
        let mut expected = values[0];
        for (i, value) in values[1..].iter().enumerate() {
            if (mask >> i) & 1 == 0 {
                src.push_str(&format!(" * {value}"));
                expected *= value;
            } else {
                src.push_str(&format!(" / {value}"));
                expected /= value;
            }
        }
        assert_value(&src, expected);
    }
}

#[test]
fn outer_parentheses_are_transparent() {
    for (a, b) in [(7.0, 2.0), (1.5, 0.25), (3.0, 8.0)] {
        for op in ["+", "-", "*", "/"] {
            let bare = calculate(&format!("{a} {op} {b}")).unwrap();
            let grouped = calculate(&format!("({a} {op} {b})")).unwrap();
            assert_eq!(bare, grouped, "{a} {op} {b}");
        }
    }
}

#[test]
fn division_by_zero_is_invalid_rpn() {
    let compiled = compile("1 / 0").unwrap();
    assert_eq!(evaluate(&compiled), Err(EvalError::DivisionByZero { index: 2 }));

    assert_failure("5 / (3 - 3)", ErrorKind::InvalidRpn);
    assert_failure("1 + 2 / 0", ErrorKind::InvalidRpn);
    assert_failure("1 / 0.0", ErrorKind::InvalidRpn);
}

#[test]
fn residual_operands_are_invalid_rpn() {
    let leftover: CompiledExpression = "1 2 3 +".parse().unwrap();
    assert_eq!(leftover.evaluate(),
               Err(EvalError::ResidualOperands { count: 2 }));

    let empty = CompiledExpression::default();
    assert_eq!(empty.evaluate(),
               Err(EvalError::ResidualOperands { count: 0 }));
}

#[test]
fn missing_operands_are_invalid_rpn() {
    let rpn: CompiledExpression = "1 +".parse().unwrap();
    assert_eq!(rpn.evaluate(),
               Err(EvalError::MissingOperands { operator: Token::Add,
                                                index:    1, }));
    assert_eq!(rpn.evaluate().unwrap_err().kind(), ErrorKind::InvalidRpn);
}

#[test]
fn parentheses_in_postfix_are_invalid_rpn() {
    let tokens = [v(1.0), Token::LeftParen];
    assert_eq!(evaluate_postfix(&tokens),
               Err(EvalError::UnexpectedToken { token: Token::LeftParen,
                                                index: 1, }));
}

#[test]
fn evaluation_is_idempotent() {
    let compiled = compile("(1.1 + 2.2) * 3.3 / 0.7 - 4").unwrap();
    let first = compiled.evaluate().unwrap();
    for _ in 0..10 {
        assert_eq!(compiled.evaluate().unwrap().to_bits(), first.to_bits());
    }
    assert_eq!(compiled, compile("(1.1 + 2.2) * 3.3 / 0.7 - 4").unwrap());
}

#[test]
fn compiled_expressions_can_be_shared_between_threads() {
    let compiled = compile("(2 + 3) * 4").unwrap();
    let shared = &compiled;
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(move || shared.evaluate())).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(20.0));
        }
    });
}

#[test]
fn unsupported_constructs_are_unknown_literals() {
    assert_eq!(compile("-1"),
               Err(CompileError::UnknownLiteral { literal:  "unary operator '-'".to_string(),
                                                  position: 0, }));
    assert_eq!(compile("2 + foo"),
               Err(CompileError::UnknownLiteral { literal:  "identifier 'foo'".to_string(),
                                                  position: 4, }));
    assert_eq!(compile("2 % 3"),
               Err(CompileError::UnknownLiteral { literal:  "operator '%'".to_string(),
                                                  position: 2, }));
    assert_failure("max(1, 2)", ErrorKind::UnknownLiteral);
    assert_failure("(1 + 2) * -(3)", ErrorKind::UnknownLiteral);
}

#[test]
fn literals_that_do_not_convert_are_unknown_literals() {
    assert_eq!(compile("1 + 99999999999999999999"),
               Err(CompileError::LiteralOutOfRange { literal:  "99999999999999999999".to_string(),
                                                     position: 4, }));
    assert_eq!(compile("2 * 0x10"),
               Err(CompileError::MalformedLiteral { literal:  "0x10".to_string(),
                                                    position: 4, }));
    assert_eq!(compile("1_000").unwrap_err().kind(), ErrorKind::UnknownLiteral);
    assert_failure("1e999", ErrorKind::UnknownLiteral);
}

#[test]
fn integer_literals_round_like_reals() {
    assert_value("9007199254740991", 9_007_199_254_740_991.0);
    assert_eq!(calculate("9007199254740993"), calculate("9007199254740993.0"));
    assert_value("9223372036854775807", 9_223_372_036_854_775_807_i64 as f64);
}

#[test]
fn other_operators_are_unknown_literals() {
    assert_eq!(compile("1 << 2"),
               Err(CompileError::UnknownLiteral { literal:  "operator '<<'".to_string(),
                                                  position: 2, }));
    assert_eq!(compile("(1 + 2) != 3"),
               Err(CompileError::UnknownLiteral { literal:  "operator '!='".to_string(),
                                                  position: 8, }));
    assert_eq!(compile("!1"),
               Err(CompileError::UnknownLiteral { literal:  "unary operator '!'".to_string(),
                                                  position: 0, }));
    for src in ["1 & 2", "1 | 2", "1 &^ 2", "1 >> 2", "1 && 2", "1 || 2", "1 < 2", "1 >= 2"] {
        assert_failure(src, ErrorKind::UnknownLiteral);
    }
}

#[test]
fn syntax_errors_win_over_bad_literals() {
    assert_failure("0x10 +", ErrorKind::InvalidExpression);
    assert_failure("-1 +", ErrorKind::InvalidExpression);
    assert_failure("99999999999999999999 (", ErrorKind::InvalidExpression);
    assert_failure("max(1,", ErrorKind::InvalidExpression);
}

#[test]
fn deep_nesting_is_an_invalid_expression() {
    let depth = 20_000;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let err = compile(&src).unwrap_err();
    assert_eq!(err,
               CompileError::NestingTooDeep { position: MAX_NESTING });
    assert_eq!(err.kind(), ErrorKind::InvalidExpression);

    assert_failure(&format!("{}1", "-".repeat(depth)), ErrorKind::InvalidExpression);
    assert_failure(&format!("f{}", "(".repeat(depth)), ErrorKind::InvalidExpression);
}

#[test]
fn nesting_up_to_the_limit_compiles() {
    let src = format!("{}1 + 2{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
    assert_value(&src, 3.0);
}

#[test]
fn long_chains_do_not_nest() {
    let terms = 20_000;
    let sum = vec!["1"; terms].join(" + ");
    assert_value(&sum, 20_000.0);

    let quotient = vec!["1"; terms].join(" / ");
    assert_value(&quotient, 1.0);

    // The tree is dropped on the error path as well.
    let unsupported = format!("{sum} + x");
    assert_failure(&unsupported, ErrorKind::UnknownLiteral);
    let unfinished = format!("{sum} +");
    assert_failure(&unfinished, ErrorKind::InvalidExpression);
}

#[test]
fn malformed_text_is_an_invalid_expression() {
    assert_eq!(compile(""), Err(CompileError::UnexpectedEndOfInput));
    assert_eq!(compile("   \n"), Err(CompileError::UnexpectedEndOfInput));
    assert_eq!(compile("(1 + 2"),
               Err(CompileError::ExpectedClosingParen { position: 0 }));
    assert_eq!(compile("1 + 2)"),
               Err(CompileError::UnexpectedTrailingTokens { token:    "')'".to_string(),
                                                            position: 5, }));
    assert_eq!(compile("1 # 2"),
               Err(CompileError::UnexpectedCharacter { text:     "#".to_string(),
                                                       position: 2, }));
    assert_failure("1 +", ErrorKind::InvalidExpression);
    assert_failure("1 2 3 +", ErrorKind::InvalidExpression);
    assert_failure("()", ErrorKind::InvalidExpression);
}

#[test]
fn line_terminators_are_ignored() {
    assert_value("1 + 2\n", 3.0);
    assert_value("\t(1 + 2)\r\n", 3.0);
}

#[test]
fn unknown_postfix_words_are_unknown_tokens() {
    let err = "1 2 plus".parse::<CompiledExpression>().unwrap_err();
    assert_eq!(err,
               CompileError::UnknownToken { token: "plus".to_string() });
    assert_eq!(err.kind(), ErrorKind::UnknownToken);

    assert!("1 inf +".parse::<CompiledExpression>().is_err());
}

#[test]
fn postfix_text_matches_display() {
    let compiled = compile("(1.5 + 2) * 4 / (3 - 1)").unwrap();
    let text = compiled.to_string();
    assert_eq!(text, "1.5 2 + 4 * 3 1 - /");
    assert_eq!(text.parse::<CompiledExpression>(), Ok(compiled));
}

#[test]
fn converter_tolerates_unmatched_right_parenthesis() {
    let infix = [v(1.0), Token::RightParen, Token::Add, v(2.0)];
    assert_eq!(infix_to_postfix(infix), vec![v(1.0), v(2.0), Token::Add]);
}

#[test]
fn converter_drains_unmatched_left_parenthesis() {
    let postfix = infix_to_postfix([Token::LeftParen, v(1.0)]);
    assert_eq!(postfix, vec![v(1.0), Token::LeftParen]);
    assert_eq!(evaluate_postfix(&postfix).unwrap_err().kind(),
               ErrorKind::InvalidRpn);
}

#[test]
fn error_messages_name_the_kind() {
    let err = calculate("1 / 0").unwrap_err();
    assert!(err.to_string().starts_with("Invalid RPN"), "{err}");

    let err = calculate("1 +").unwrap_err();
    assert!(err.to_string().starts_with("Invalid expression"), "{err}");

    let err = calculate("-1").unwrap_err();
    assert!(err.to_string().starts_with("Unknown literal"), "{err}");
}
