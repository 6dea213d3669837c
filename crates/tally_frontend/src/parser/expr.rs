use super::{ParseResult, Parser};
use crate::ast::*;
use crate::token::TokenKind;

impl Parser<'_> {
    /// Parses `term (('+' | '-') term)*`, folding to the left.
    ///
    /// Whatever follows the expression is left in the lookahead; use
    /// [`Parser::parse`] to require the whole input to be consumed.
    pub fn parse_expr(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_term()?;

        while let Some(op) = self.peek_bin_op() {
            let op_token = self.advance()?;
            let rhs = self.parse_term()?;

            let span = expr.span.union(rhs.span);
            expr = Expr::new(
                ExprKind::BinOp {
                    op: Spanned::new(op, op_token.span),
                    lhs: Box::new(expr),
                    rhs: Box::new(rhs),
                },
                span,
            );
        }

        Ok(expr)
    }

    fn parse_term(&mut self) -> ParseResult<Expr> {
        match self.current.kind {
            TokenKind::Integer(n) => {
                let token = self.advance()?;
                Ok(Expr::new(ExprKind::Integer(n), token.span))
            }

            _ => Err(self.error_expected("an integer")),
        }
    }

    fn peek_bin_op(&self) -> Option<BinOp> {
        match self.current.kind {
            TokenKind::Add => Some(BinOp::Add),
            TokenKind::Sub => Some(BinOp::Sub),
            _ => None,
        }
    }
}
