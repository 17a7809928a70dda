//! List command implementation.

use std::path::Path;

use miette::Result;

pub fn exec(mods_dir: Option<&Path>, json: bool) -> Result<()> {
    let cwd = std::env::current_dir().map_err(modkit_util::errors::ModkitError::Io)?;
    modkit_ops::ops_list::list(&cwd, mods_dir, json)
}
