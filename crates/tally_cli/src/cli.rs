use std::io;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tally_eval::OverflowMode;
use tally_session::diagnostics::termcolor::ColorChoice;
use tally_session::sourcemap::Source;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// When to colour diagnostics.
    #[arg(long, global = true, value_enum, default_value_t = ColorArg::Auto)]
    pub color: ColorArg,

    /// What to do when a result doesn't fit in a 64-bit integer.
    #[arg(long, global = true, value_enum, default_value_t = OverflowArg::Checked)]
    pub overflow: OverflowArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Read expressions from stdin, one per line (the default).
    Repl,

    /// Evaluate an expression.
    Eval(InputArgs),

    /// List the tokens of an expression.
    Tokens(InputArgs),

    /// Print the syntax tree of an expression.
    Ast(InputArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// The expression, or the path of a file containing it if `--file` is given.
    pub input: String,

    /// Whether the input is a file path rather than the expression itself.
    #[arg(long, short, action)]
    pub file: bool,
}

impl InputArgs {
    pub fn load(self) -> io::Result<Source> {
        if self.file {
            let text = std::fs::read_to_string(&self.input)?;
            Ok(Source::new(self.input.as_str(), text).with_path(self.input))
        } else {
            Ok(Source::new("<input>", self.input))
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowArg {
    Checked,
    Wrapping,
    Saturating,
}

impl From<OverflowArg> for OverflowMode {
    fn from(overflow: OverflowArg) -> Self {
        match overflow {
            OverflowArg::Checked => OverflowMode::Checked,
            OverflowArg::Wrapping => OverflowMode::Wrapping,
            OverflowArg::Saturating => OverflowMode::Saturating,
        }
    }
}
