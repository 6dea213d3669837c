use std::fmt;

use tally_frontend::ast::{Expr, ExprKind};
use tally_frontend::token::{Token, TokenKind};

/// Displays an expression as an indented tree, one node per line.
pub struct Tree<'a>(pub &'a Expr);

impl fmt::Display for Tree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(self.0, 0)];

        while let Some((expr, level)) = stack.pop() {
            let indent = "  ".repeat(level);

            match &expr.kind {
                ExprKind::Integer(n) => writeln!(f, "{indent}Integer({n})")?,

                ExprKind::BinOp { op, lhs, rhs } => {
                    writeln!(f, "{indent}BinOp({})", op.node.as_str())?;
                    stack.push((&**rhs, level + 1));
                    stack.push((&**lhs, level + 1));
                }
            }
        }

        Ok(())
    }
}

/// Displays a token as `<start>..<end> <name> [value]`.
pub struct TokenLine(pub Token);

impl fmt::Display for TokenLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Token { kind, span } = self.0;

        write!(f, "{}..{} {}", span.start, span.end, kind.token_name())?;

        if let TokenKind::Integer(n) = kind {
            write!(f, " {n}")?;
        }

        Ok(())
    }
}
