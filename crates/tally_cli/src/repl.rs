use std::io::{BufRead, Write};

use tally_session::diagnostics::DiagnosticEmitter;
use tally_session::sourcemap::Source;

use crate::driver::{Driver, Mode};
use crate::{CliError, CliResult};

const HELP: &str = "\
enter an expression such as `10 - 2 + 3` to evaluate it
  :tokens <expr>  list the tokens of an expression
  :ast <expr>     print the syntax tree of an expression
  :help           show this message
  exit            quit
";

/// Line-oriented loop over an input stream. Each line is its own source.
#[derive(Debug, Clone, Copy)]
pub struct Repl {
    pub prompt: bool,
}

impl Repl {
    pub fn run<D, W, R>(&self, driver: &mut Driver<D, W>, input: R) -> CliResult<()>
    where
        D: DiagnosticEmitter,
        W: Write,
        R: BufRead,
    {
        let mut lines = input.lines();
        let mut line_number = 0;

        loop {
            if self.prompt {
                write!(driver.out, "> ")?;
                driver.out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            line_number += 1;

            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.eq_ignore_ascii_case("exit") {
                break;
            }

            let (mode, text) = match line.strip_prefix(':') {
                Some(command) => {
                    let (name, rest) = command
                        .split_once(char::is_whitespace)
                        .unwrap_or((command, ""));
                    match name {
                        "tokens" => (Mode::Tokens, rest),
                        "ast" => (Mode::Ast, rest),
                        "help" => {
                            write!(driver.out, "{HELP}")?;
                            continue;
                        }
                        _ => {
                            driver.warn(format!("unknown command `:{name}`, try `:help`"));
                            continue;
                        }
                    }
                }
                None => (Mode::Eval, line),
            };

            let source = Source::new(format!("<line {line_number}>"), text);
            match driver.run(mode, source) {
                Ok(()) | Err(CliError::HadErrors) => {}
                Err(err) => return Err(err),
            }
        }

        log::debug!("leaving repl after {line_number} lines");

        Ok(())
    }
}
