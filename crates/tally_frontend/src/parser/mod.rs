
mod expr;

use tally_session::diagnostics::prelude::*;

use crate::lexer::{Lexer, LexerError};
use crate::token::{Token, TokenKind};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected}, found {}", .found.token_name())]
    Expected {
        expected: String,
        found: TokenKind,
        span: Span,
    },

    #[error(transparent)]
    Lexer(#[from] LexerError),
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::Expected { span, .. } => *span,
            ParseError::Lexer(error) => error.span,
        }
    }
}

impl IntoDiagnostic<SourceId> for ParseError {
    fn into_diagnostic(self, source_id: &SourceId) -> Diagnostic {
        match self {
            ParseError::Expected {
                expected,
                found,
                span,
            } => Diagnostic::error()
                .with_message(format!("expected {expected}, found {}", found.token_name()))
                .with_snippet(Snippet::primary(
                    format!("expected {expected} here"),
                    *source_id,
                    span,
                )),

            ParseError::Lexer(error) => error.into_diagnostic(source_id),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive descent parser with one token of lookahead.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    current: Token,
}

impl<'src> Parser<'src> {
    /// Creates a parser, reading the first token into the lookahead.
    pub fn new(mut lexer: Lexer<'src>) -> ParseResult<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parses one expression that must make up the whole input.
    pub fn parse(mut self) -> ParseResult<crate::ast::Expr> {
        let expr = self.parse_expr()?;
        self.expect(TokenKind::Eof)?;

        log::debug!("parsed expression of depth {}", expr.depth());

        Ok(expr)
    }

    /// The buffered token that hasn't been consumed yet.
    pub fn current(&self) -> Token {
        self.current
    }

    fn advance(&mut self) -> ParseResult<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if self.current.kind == kind {
            self.advance()
        } else {
            Err(self.error_expected(kind.token_name()))
        }
    }

    fn error_expected(&self, expected: impl Into<String>) -> ParseError {
        ParseError::Expected {
            expected: expected.into(),
            found: self.current.kind,
            span: self.current.span,
        }
    }
}
