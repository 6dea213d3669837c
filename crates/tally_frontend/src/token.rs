use tally_session::diagnostics::prelude::Span;

use crate::NodeCopy;

#[derive(NodeCopy!)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

#[derive(NodeCopy!)]
pub enum TokenKind {
    Integer(i64),

    Add,
    Sub,

    Eof,
}

impl TokenKind {
    pub fn token_name(&self) -> &'static str {
        match self {
            TokenKind::Integer(_) => "integer",
            TokenKind::Add => "`+`",
            TokenKind::Sub => "`-`",
            TokenKind::Eof => "end of input",
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }
}
