use tally_frontend::{parse, LexerErrorKind, ParseError};
use tally_session::diagnostics::prelude::*;

use crate::{
    parse_and_evaluate, parse_and_evaluate_with, CalcError, EvalError, Evaluator, OverflowMode,
};

fn eval(source: &str) -> i64 {
    parse_and_evaluate(source).unwrap_or_else(|err| panic!("{source:?} failed: {err}"))
}

#[test]
fn single_integer() {
    assert_eq!(eval("0"), 0);
    assert_eq!(eval("42"), 42);
}

#[test]
fn addition_and_subtraction() {
    assert_eq!(eval("12 + 7"), 19);
    assert_eq!(eval("3 - 10"), -7);
}

#[test]
fn left_associative() {
    assert_eq!(eval("9 - 3 - 2"), 4);
    assert_eq!(eval("5 - 2 - 1"), 2);
}

#[test]
fn whitespace_insensitive() {
    assert_eq!(eval("  12   +   7 "), 19);
    assert_eq!(eval("12+7"), 19);
}

#[test]
fn multi_term_chain() {
    assert_eq!(eval("10 - 2 + 3 - 1"), 10);
}

#[test]
fn empty_input_is_a_parse_error() {
    assert!(matches!(
        parse_and_evaluate(""),
        Err(CalcError::Parse(ParseError::Expected { .. }))
    ));
}

#[test]
fn leading_operator_is_a_parse_error() {
    assert!(matches!(
        parse_and_evaluate("+5"),
        Err(CalcError::Parse(ParseError::Expected { .. }))
    ));
}

#[test]
fn invalid_character_is_a_lexer_error() {
    let Err(CalcError::Parse(ParseError::Lexer(err))) = parse_and_evaluate("3 * 2") else {
        panic!("expected a lexer error");
    };

    assert_eq!(err.kind, LexerErrorKind::UnexpectedChar('*'));
    assert_eq!(err.span, Span::new(2, 3));
}

#[test]
fn trailing_input_is_rejected() {
    assert!(parse_and_evaluate("5 + 3 4").is_err());
}

#[test]
fn checked_overflow() {
    let err = parse_and_evaluate("9223372036854775807 + 1").unwrap_err();

    assert_eq!(
        err,
        CalcError::Eval(EvalError::Overflow {
            op: tally_frontend::ast::BinOp::Add,
            lhs: i64::MAX,
            rhs: 1,
            span: Span::new(20, 21),
        })
    );
    assert_eq!(err.to_string(), "integer overflow in `9223372036854775807 + 1`");
}

#[test]
fn checked_underflow_needs_a_large_subtrahend() {
    assert_eq!(eval("0 - 9223372036854775807"), -i64::MAX);
    assert!(parse_and_evaluate("0 - 9223372036854775807 - 2").is_err());
}

#[test]
fn wrapping_overflow() {
    let evaluator = Evaluator::new(OverflowMode::Wrapping);

    assert_eq!(
        parse_and_evaluate_with("9223372036854775807 + 1", &evaluator),
        Ok(i64::MIN)
    );
    assert_eq!(
        parse_and_evaluate_with("0 - 9223372036854775807 - 2", &evaluator),
        Ok(i64::MAX)
    );
}

#[test]
fn saturating_overflow() {
    let evaluator = Evaluator::new(OverflowMode::Saturating);

    assert_eq!(
        parse_and_evaluate_with("9223372036854775807 + 1", &evaluator),
        Ok(i64::MAX)
    );
    assert_eq!(
        parse_and_evaluate_with("0 - 9223372036854775807 - 2 + 1", &evaluator),
        Ok(i64::MIN + 1)
    );
}

#[test]
fn literal_too_large_is_a_lexer_error() {
    let Err(CalcError::Parse(ParseError::Lexer(err))) = parse_and_evaluate("9223372036854775808")
    else {
        panic!("expected a lexer error");
    };

    assert_eq!(err.kind, LexerErrorKind::IntegerOverflow);
}

#[test]
fn evaluator_is_reusable() {
    let evaluator = Evaluator::default();
    let expr = parse("1 + 2").unwrap();

    assert_eq!(evaluator.evaluate(&expr), Ok(3));
    assert_eq!(evaluator.evaluate(&expr), Ok(3));
}

#[test]
fn overflow_diagnostic() {
    let err = parse_and_evaluate("1 + 9223372036854775807").unwrap_err();
    let diagnostic = err.into_diagnostic(&SourceId(0));

    assert_eq!(diagnostic.message.as_deref(), Some("integer overflow"));
    assert_eq!(
        diagnostic.snippets[0].label,
        "`1 + 9223372036854775807` doesn't fit in a 64-bit integer"
    );
    assert_eq!(diagnostic.snippets[0].span, Span::new(2, 3));
}

#[test]
fn long_chain() {
    let source = format!("1{}", " + 1".repeat(1_000_000));
    assert_eq!(eval(&source), 1_000_001);

    let source = format!("0{}", " - 2 + 1".repeat(500_000));
    assert_eq!(eval(&source), -500_000);
}

#[test]
fn overflow_deep_in_a_long_chain() {
    let source = format!("9223372036854775000{}", " + 1".repeat(1_000));
    let err = parse_and_evaluate(&source).unwrap_err();

    let CalcError::Eval(EvalError::Overflow { lhs, rhs, .. }) = err else {
        panic!("expected an overflow, got {err:?}");
    };
    assert_eq!((lhs, rhs), (i64::MAX, 1));
}
