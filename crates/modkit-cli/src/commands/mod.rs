//! Command dispatch and handler modules.

mod check;
mod list;
mod tree;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let mods_dir = cli.mods_dir.as_deref();
    match cli.command {
        Command::Check => check::exec(mods_dir, cli.verbose),
        Command::List { json } => list::exec(mods_dir, json),
        Command::Tree {
            depth,
            why,
            dependents,
        } => tree::exec(mods_dir, depth, why, dependents),
    }
}
