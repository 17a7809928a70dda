//! Handler for `modkit tree`.

use std::path::Path;

use miette::Result;

use modkit_ops::ops_tree::{self, TreeOptions};

pub fn exec(
    mods_dir: Option<&Path>,
    depth: Option<u32>,
    why: Option<String>,
    dependents: Option<String>,
) -> Result<()> {
    let cwd = std::env::current_dir().map_err(modkit_util::errors::ModkitError::Io)?;

    let opts = TreeOptions {
        depth: depth.map(|d| d as usize),
        why,
        dependents,
    };

    ops_tree::tree(&cwd, mods_dir, &opts)
}
