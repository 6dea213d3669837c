use std::io::Write;

use tally_eval::{parse_and_evaluate_with, Evaluator};
use tally_frontend::{parse, scan_all};
use tally_session::diagnostics::{Diagnostic, DiagnosticEmitter, IntoDiagnostic};
use tally_session::sourcemap::{Source, SourceId, SourceMap};
use tally_session::Session;

use crate::printer::{TokenLine, Tree};
use crate::{CliError, CliResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Eval,
    Tokens,
    Ast,
}

/// Runs sources through the pipeline, writing results to `out` and
/// reporting failures to the session's diagnostics.
pub struct Driver<D: DiagnosticEmitter, W: Write> {
    pub session: Session<D>,
    pub evaluator: Evaluator,
    pub out: W,
}

impl<D: DiagnosticEmitter, W: Write> Driver<D, W> {
    pub fn new(diagnostics: D, evaluator: Evaluator, out: W) -> Self {
        Self {
            session: Session::new(diagnostics),
            evaluator,
            out,
        }
    }

    pub fn run(&mut self, mode: Mode, source: Source) -> CliResult<()> {
        log::debug!("running {mode:?} on {}", source.name);

        match mode {
            Mode::Eval => {
                let result = parse_and_evaluate_with(&source.source, &self.evaluator);
                let value = self.check(result, source)?;
                writeln!(self.out, "{value}")?;
            }

            Mode::Tokens => {
                let tokens = self.check(scan_all(&source.source), source)?;
                for token in tokens {
                    writeln!(self.out, "{}", TokenLine(token))?;
                }
            }

            Mode::Ast => {
                let expr = self.check(parse(&source.source), source)?;
                write!(self.out, "{}", Tree(&expr))?;
            }
        }

        Ok(())
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        let warning = Diagnostic::warning().with_message(message);
        self.session
            .diagnostics
            .emit_diagnostic(warning, &self.session.sources);
    }

    /// Reports a failed run. The source is only held by the session while
    /// its diagnostic is emitted.
    fn check<T, E>(&mut self, result: Result<T, E>, source: Source) -> CliResult<T>
    where
        E: IntoDiagnostic<SourceId>,
    {
        let error = match result {
            Ok(value) => return Ok(value),
            Err(error) => error,
        };

        let source_id = self.session.sources.insert(source);
        let reported = self.session.report(error, &source_id);
        self.session.sources = SourceMap::default();

        reported?;
        Err(CliError::HadErrors)
    }
}

#[cfg(test)]
mod tests {
    use tally_eval::{Evaluator, OverflowMode};
    use tally_session::diagnostics::{Diagnostic, Severity};
    use tally_session::sourcemap::Source;

    use super::{Driver, Mode};
    use crate::CliError;

    fn driver(overflow: OverflowMode) -> Driver<Vec<Diagnostic>, Vec<u8>> {
        Driver::new(vec![], Evaluator::new(overflow), vec![])
    }

    fn output(driver: &Driver<Vec<Diagnostic>, Vec<u8>>) -> &str {
        std::str::from_utf8(&driver.out).unwrap()
    }

    #[test]
    fn eval_prints_result() {
        let mut driver = driver(OverflowMode::Checked);

        driver
            .run(Mode::Eval, Source::new("<input>", "10 - 2 + 3 - 1"))
            .unwrap();

        assert_eq!(output(&driver), "10\n");
        assert!(driver.session.diagnostics.is_empty());
    }

    #[test]
    fn errors_become_diagnostics() {
        let mut driver = driver(OverflowMode::Checked);

        let result = driver.run(Mode::Eval, Source::new("<input>", "3 * 2"));

        assert!(matches!(result, Err(CliError::HadErrors)));
        assert_eq!(output(&driver), "");

        let [diagnostic] = driver.session.diagnostics.as_slice() else {
            panic!("expected exactly one diagnostic");
        };
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(
            diagnostic.message.as_deref(),
            Some("syntax error: unexpected character '*'")
        );
    }

    #[test]
    fn overflow_mode_is_used() {
        let mut driver = driver(OverflowMode::Saturating);

        driver
            .run(Mode::Eval, Source::new("<input>", "9223372036854775807 + 5"))
            .unwrap();

        assert_eq!(output(&driver), "9223372036854775807\n");
    }

    #[test]
    fn tokens_mode() {
        let mut driver = driver(OverflowMode::Checked);

        driver.run(Mode::Tokens, Source::new("<input>", "1-2")).unwrap();

        assert_eq!(
            output(&driver),
            "0..1 integer 1\n1..2 `-`\n2..3 integer 2\n3..3 end of input\n"
        );
    }

    #[test]
    fn ast_mode() {
        let mut driver = driver(OverflowMode::Checked);

        driver.run(Mode::Ast, Source::new("<input>", "1 + 2")).unwrap();

        assert_eq!(output(&driver), "BinOp(+)\n  Integer(1)\n  Integer(2)\n");
    }

    #[test]
    fn sources_are_not_retained() {
        let mut driver = driver(OverflowMode::Checked);

        for line in 0..1_000 {
            let text = if line % 3 == 0 { "1 + +" } else { "1 + 2" };
            let _ = driver.run(Mode::Eval, Source::new(format!("<line {line}>"), text));
        }

        assert!(driver.session.sources.is_empty());
        assert_eq!(driver.session.diagnostics.len(), 334);
    }

    #[test]
    fn warnings_are_not_errors() {
        let mut driver = driver(OverflowMode::Checked);

        driver.warn("careful");

        assert_eq!(driver.session.diagnostics[0].severity, Severity::Warning);
    }
}
