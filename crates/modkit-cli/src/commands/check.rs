//! Check command implementation.

use std::path::Path;

use miette::Result;

pub fn exec(mods_dir: Option<&Path>, verbose: bool) -> Result<()> {
    let cwd = std::env::current_dir().map_err(modkit_util::errors::ModkitError::Io)?;
    modkit_ops::ops_check::check(&cwd, mods_dir, verbose)
}
