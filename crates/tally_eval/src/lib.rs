//! Evaluation of parsed expressions, and the one-call pipeline from source
//! text to result.

#[cfg(test)]
mod tests;

mod evaluator;

pub use evaluator::{EvalError, EvalResult, Evaluator, OverflowMode};

use tally_frontend::ParseError;
use tally_session::diagnostics::prelude::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl IntoDiagnostic<SourceId> for CalcError {
    fn into_diagnostic(self, source_id: &SourceId) -> Diagnostic {
        match self {
            CalcError::Parse(error) => error.into_diagnostic(source_id),
            CalcError::Eval(error) => error.into_diagnostic(source_id),
        }
    }
}

/// Lexes, parses and evaluates `source` with overflow checking.
pub fn parse_and_evaluate(source: &str) -> Result<i64, CalcError> {
    parse_and_evaluate_with(source, &Evaluator::default())
}

pub fn parse_and_evaluate_with(source: &str, evaluator: &Evaluator) -> Result<i64, CalcError> {
    let expr = tally_frontend::parse(source)?;
    let value = evaluator.evaluate(&expr)?;

    log::debug!("{source:?} evaluated to {value}");

    Ok(value)
}
