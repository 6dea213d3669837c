use tally_session::diagnostics::prelude::Span;

use super::{Lexer, LexerError, LexerErrorKind};
use crate::scan_all;
use crate::token::TokenKind;

fn lex(source: &str) -> String {
    match scan_all(source) {
        Ok(tokens) => tokens
            .iter()
            .map(|token| format!("{:?}", token.kind))
            .collect::<Vec<_>>()
            .join(" "),
        Err(err) => format!("error: {err} at {:?}", err.span),
    }
}

#[test]
fn integer() {
    insta::assert_snapshot!(lex("100"), @"Integer(100) Eof");
}

#[test]
fn leading_zeros() {
    insta::assert_snapshot!(lex("007"), @"Integer(7) Eof");
}

#[test]
fn no_spaces() {
    insta::assert_snapshot!(lex("12+7-3"), @"Integer(12) Add Integer(7) Sub Integer(3) Eof");
}

#[test]
fn spaces() {
    insta::assert_snapshot!(lex("  12   +   7 "), @"Integer(12) Add Integer(7) Eof");
}

#[test]
fn other_whitespace() {
    insta::assert_snapshot!(lex("\t1\n-\r\n2\u{a0}"), @"Integer(1) Sub Integer(2) Eof");
}

#[test]
fn empty() {
    insta::assert_snapshot!(lex(""), @"Eof");
    insta::assert_snapshot!(lex("   "), @"Eof");
}

#[test]
fn operators_only() {
    insta::assert_snapshot!(lex("+-+"), @"Add Sub Add Eof");
}

#[test]
fn unexpected_char() {
    insta::assert_snapshot!(lex("3 * 2"), @"error: unexpected character '*' at Span { start: 2, end: 3 }");
}

#[test]
fn unexpected_multibyte_char() {
    let err = scan_all("1 + é").unwrap_err();
    assert_eq!(
        err,
        LexerError {
            kind: LexerErrorKind::UnexpectedChar('é'),
            span: Span::new(4, 6),
        }
    );
}

#[test]
fn integer_max() {
    insta::assert_snapshot!(lex("9223372036854775807"), @"Integer(9223372036854775807) Eof");
}

#[test]
fn integer_overflow() {
    insta::assert_snapshot!(
        lex("1 + 100000000000000000000"),
        @"error: integer literal too large at Span { start: 4, end: 25 }"
    );
}

#[test]
fn token_spans() {
    let spans: Vec<_> = scan_all(" 12 +7")
        .unwrap()
        .into_iter()
        .map(|token| token.span)
        .collect();

    assert_eq!(
        spans,
        [
            Span::new(1, 3),
            Span::new(4, 5),
            Span::new(5, 6),
            Span::new(6, 6)
        ]
    );
}

#[test]
fn eof_is_idempotent() {
    let mut lexer = Lexer::new("1 ");

    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Integer(1));
    assert_eq!(lexer.current_char(), Some(' '));

    for _ in 0..5 {
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.span, lexer.eof_span());
    }

    assert_eq!(lexer.current_char(), None);
    assert_eq!(lexer.byte_pos(), 2);
}

#[test]
fn iterator_stops_after_eof() {
    let mut lexer = Lexer::new("1");

    assert!(lexer.next().is_some());
    assert!(matches!(lexer.next(), Some(Ok(t)) if t.kind == TokenKind::Eof));
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}

#[test]
fn lexing_continues_after_error() {
    let mut lexer = Lexer::new("1 ? 2");

    assert!(lexer.next_token().is_ok());
    assert!(lexer.next_token().is_err());
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Integer(2));
}
