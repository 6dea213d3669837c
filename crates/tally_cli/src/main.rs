mod cli;
mod driver;
mod printer;
mod repl;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser as _;
use cli::{Cli, Command};
use driver::{Driver, Mode};
use repl::Repl;
use tally_eval::Evaluator;
use tally_session::diagnostics::PrettyDiagnosticEmitter;
use tally_session::ErrorsEmitted;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("errors were emitted")]
    HadErrors,
}

impl From<ErrorsEmitted> for CliError {
    fn from(_: ErrorsEmitted) -> Self {
        Self::HadErrors
    }
}

pub type CliResult<T> = Result<T, CliError>;

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        // already reported
        Err(CliError::HadErrors) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let emitter = PrettyDiagnosticEmitter::new(cli.color.into());
    let evaluator = Evaluator::new(cli.overflow.into());
    let mut driver = Driver::new(emitter, evaluator, io::stdout().lock());

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => {
            let stdin = io::stdin();
            let repl = Repl {
                prompt: stdin.is_terminal(),
            };
            repl.run(&mut driver, stdin.lock())
        }
        Command::Eval(input) => driver.run(Mode::Eval, input.load()?),
        Command::Tokens(input) => driver.run(Mode::Tokens, input.load()?),
        Command::Ast(input) => driver.run(Mode::Ast, input.load()?),
    }
}
