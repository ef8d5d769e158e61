use anyhow::Result;

use super::{
    ExitStatus,
    args::{Arguments, Command},
    commands::{annotate::annotate, init::init, keys::keys, resolve::resolve},
};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Annotate(cmd)) => annotate(cmd),
        Some(Command::Resolve(cmd)) => resolve(cmd),
        Some(Command::Keys(cmd)) => keys(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
