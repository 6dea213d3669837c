use tally_frontend::ast::{BinOp, Expr, ExprKind, Spanned};
use tally_session::diagnostics::prelude::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("integer overflow in `{lhs} {} {rhs}`", .op.as_str())]
    Overflow {
        op: BinOp,
        lhs: i64,
        rhs: i64,
        span: Span,
    },
}

impl IntoDiagnostic<SourceId> for EvalError {
    fn into_diagnostic(self, source_id: &SourceId) -> Diagnostic {
        match self {
            EvalError::Overflow { op, lhs, rhs, span } => Diagnostic::error()
                .with_message("integer overflow")
                .with_snippet(Snippet::primary(
                    format!("`{lhs} {} {rhs}` doesn't fit in a 64-bit integer", op.as_str()),
                    *source_id,
                    span,
                )),
        }
    }
}

pub type EvalResult<T> = Result<T, EvalError>;

/// What happens when a result doesn't fit in an `i64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverflowMode {
    /// Fail with [`EvalError::Overflow`].
    #[default]
    Checked,

    /// Wrap around (two's complement).
    Wrapping,

    /// Clamp to `i64::MIN` or `i64::MAX`.
    Saturating,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    pub overflow: OverflowMode,
}

impl Evaluator {
    pub fn new(overflow: OverflowMode) -> Self {
        Self { overflow }
    }

    /// Reduces an expression to its value. The left operand of an operation
    /// is always evaluated before the right one.
    ///
    /// The left spine is walked in a loop and folded back up, so a long chain
    /// of operations doesn't grow the stack.
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<i64> {
        let mut pending = vec![];
        let mut expr = expr;

        let mut value = loop {
            match &expr.kind {
                ExprKind::Integer(n) => break *n,

                ExprKind::BinOp { op, lhs, rhs } => {
                    pending.push((*op, rhs.as_ref(), expr.span));
                    expr = lhs;
                }
            }
        };

        log::trace!("{:?} => {value}", expr.span);

        for (op, rhs, span) in pending.into_iter().rev() {
            let rhs = self.evaluate(rhs)?;
            value = self.apply(op, value, rhs)?;

            log::trace!("{span:?} => {value}");
        }

        Ok(value)
    }

    fn apply(&self, op: Spanned<BinOp>, lhs: i64, rhs: i64) -> EvalResult<i64> {
        let value = match (self.overflow, op.node) {
            (OverflowMode::Checked, BinOp::Add) => lhs.checked_add(rhs),
            (OverflowMode::Checked, BinOp::Sub) => lhs.checked_sub(rhs),

            (OverflowMode::Wrapping, BinOp::Add) => Some(lhs.wrapping_add(rhs)),
            (OverflowMode::Wrapping, BinOp::Sub) => Some(lhs.wrapping_sub(rhs)),

            (OverflowMode::Saturating, BinOp::Add) => Some(lhs.saturating_add(rhs)),
            (OverflowMode::Saturating, BinOp::Sub) => Some(lhs.saturating_sub(rhs)),
        };

        value.ok_or(EvalError::Overflow {
            op: op.node,
            lhs,
            rhs,
            span: op.span,
        })
    }
}
