#[cfg(test)]
mod tests;

use std::str::Chars;

use tally_session::diagnostics::prelude::*;
use tally_utils::peek::Peek;

use crate::token::*;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind}")]
pub struct LexerError {
    pub kind: LexerErrorKind,
    pub span: Span,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexerErrorKind {
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),

    #[error("integer literal too large")]
    IntegerOverflow,
}

impl IntoDiagnostic<SourceId> for LexerError {
    fn into_diagnostic(self, source_id: &SourceId) -> Diagnostic {
        let label = match self.kind {
            LexerErrorKind::UnexpectedChar(_) => "not part of any token",
            LexerErrorKind::IntegerOverflow => "doesn't fit in a 64-bit integer",
        };

        Diagnostic::error()
            .with_message(format!("syntax error: {}", self.kind))
            .with_snippet(Snippet::primary(label, *source_id, self.span))
    }
}

pub type LexerResult<T> = Result<T, LexerError>;

/// Produces tokens on demand from a source string.
///
/// Once the input is exhausted, [`Lexer::next_token`] keeps returning
/// [`TokenKind::Eof`].
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    all: &'src str,
    chars: Chars<'src>,

    token_start: usize,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            all: source,
            chars: source.chars(),

            token_start: 0,
            finished: false,
        }
    }

    pub fn next_token(&mut self) -> LexerResult<Token> {
        self.chars.eat_while(|ch| ch.is_whitespace());

        self.token_start = self.byte_pos();

        let kind = match self.chars.next() {
            None => TokenKind::Eof,

            Some('+') => TokenKind::Add,
            Some('-') => TokenKind::Sub,

            Some(ch @ '0'..='9') => self.lex_integer(ch)?,

            Some(ch) => return Err(self.error(LexerErrorKind::UnexpectedChar(ch))),
        };

        let token = Token {
            kind,
            span: self.token_span(),
        };

        log::trace!("lexed {:?} at {:?}", token.kind, token.span);

        Ok(token)
    }

    /// The character under the cursor, or `None` at end of input.
    pub fn current_char(&self) -> Option<char> {
        self.chars.peek()
    }

    pub fn byte_pos(&self) -> usize {
        self.all.len() - self.chars.as_str().len()
    }

    pub fn eof_span(&self) -> Span {
        Span::empty(self.all.len())
    }

    fn lex_integer(&mut self, first: char) -> LexerResult<TokenKind> {
        let mut n = Some(digit_value(first));

        while let Some(ch @ '0'..='9') = self.chars.peek() {
            self.chars.next();

            n = n.and_then(|n| n.checked_mul(10));
            n = n.and_then(|n| n.checked_add(digit_value(ch)));
        }

        n.map(TokenKind::Integer)
            .ok_or_else(|| self.error(LexerErrorKind::IntegerOverflow))
    }

    fn token_span(&self) -> Span {
        Span::new(self.token_start, self.byte_pos())
    }

    fn error(&self, kind: LexerErrorKind) -> LexerError {
        LexerError {
            kind,
            span: self.token_span(),
        }
    }
}

/// Yields every token up to and including the first [`TokenKind::Eof`].
impl Iterator for Lexer<'_> {
    type Item = LexerResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        self.finished = matches!(&result, Ok(token) if token.kind.is_eof());

        Some(result)
    }
}

fn digit_value(ch: char) -> i64 {
    i64::from(ch as u8 - b'0')
}
