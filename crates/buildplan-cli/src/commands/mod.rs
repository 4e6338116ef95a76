//! Command dispatch and handler modules.

mod check;
mod clean;
mod env;
mod init;
mod resolve;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Init { name } => init::exec(&name),
        Command::Resolve { stdout } => resolve::exec(stdout),
        Command::Check => check::exec(),
        Command::Clean => clean::exec(),
        Command::Env { reveal } => env::exec(reveal),
    }
}

/// The build root containing the current directory.
fn current_build_root() -> Result<std::path::PathBuf> {
    let cwd = std::env::current_dir().map_err(buildplan_util::errors::BuildError::Io)?;
    buildplan_ops::locate_build_root(&cwd)
}
