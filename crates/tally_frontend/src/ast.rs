use tally_session::diagnostics::prelude::Span;

use crate::{Node, NodeCopy};

#[derive(Node!)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Number of nodes on the longest path from this node to a leaf.
    ///
    /// Walks the left spine in a loop, so only right operands are recursed into.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut level = 1;
        let mut expr = self;

        loop {
            match &expr.kind {
                ExprKind::Integer(_) => return depth.max(level),

                ExprKind::BinOp { lhs, rhs, .. } => {
                    depth = depth.max(level + rhs.depth());
                    level += 1;
                    expr = lhs;
                }
            }
        }
    }

    fn take_kind(&mut self) -> ExprKind {
        std::mem::replace(&mut self.kind, ExprKind::Integer(0))
    }
}

// Parsed trees lean left, so the left spine is unlinked in a loop rather than
// by the recursive drop glue of `Box<Expr>`.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut kind = self.take_kind();

        while let ExprKind::BinOp { mut lhs, rhs, .. } = kind {
            drop(rhs);
            kind = lhs.take_kind();
        }
    }
}

#[derive(Node!)]
pub enum ExprKind {
    Integer(i64),

    BinOp {
        op: Spanned<BinOp>,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

#[derive(NodeCopy!)]
pub enum BinOp {
    Add,
    Sub,
}

impl BinOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
        }
    }
}

#[derive(NodeCopy!)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}
