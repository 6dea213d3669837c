//! Lexing and parsing of `+`/`-` integer expressions.

#[macro_use]
extern crate macro_rules_attribute;

pub mod lexer;
pub mod parser;

pub mod ast;
pub mod token;

pub use lexer::{Lexer, LexerError, LexerErrorKind, LexerResult};
pub use parser::{ParseError, ParseResult, Parser};

use ast::Expr;
use token::Token;

derive_alias! {
    #[derive(Node!)] = #[derive(Debug, Clone, PartialEq, Eq)];
    #[derive(NodeCopy!)] = #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)];
}

/// Scans the whole source, returning every token up to and including
/// [`TokenKind::Eof`](token::TokenKind::Eof).
pub fn scan_all(source: &str) -> LexerResult<Vec<Token>> {
    Lexer::new(source).collect()
}

/// Parses the whole source as a single expression.
pub fn parse(source: &str) -> ParseResult<Expr> {
    Parser::new(Lexer::new(source))?.parse()
}
