//! Command dispatch: bridges CLI args to the core pipelines and output.

pub mod check;
pub mod generate;
pub mod util;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

pub fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Generate(args) => generate::handle(&args, global),
        Command::Check(args) => check::handle(&args, global),
        // Completions are handled before dispatch
        Command::Completions(_) => unreachable!(),
    }
}
