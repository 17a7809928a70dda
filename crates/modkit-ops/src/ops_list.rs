//! Operation: list the discovered mods.

use std::path::Path;

use modkit_loader::discover;
use modkit_util::errors::ModkitError;

use crate::ops_setup;

/// List every discovered mod, one line per mod or as a JSON array.
pub fn list(working_dir: &Path, mods_dir: Option<&Path>, json: bool) -> miette::Result<()> {
    let mods_dir = ops_setup::resolve_mods_dir(working_dir, mods_dir)?;
    let defs = discover(&mods_dir)?;

    if json {
        let output = serde_json::to_string_pretty(&defs).map_err(|e| ModkitError::Generic {
            message: format!("Failed to serialize mod list: {e}"),
        })?;
        println!("{output}");
        return Ok(());
    }

    if defs.is_empty() {
        println!("No mods found in {}.", mods_dir.display());
        return Ok(());
    }

    for def in &defs {
        let mut notes = Vec::new();
        if !def.requires.is_empty() {
            notes.push(format!("requires {}", def.requires.len()));
        }
        if !def.conflicts_with.is_empty() {
            notes.push(format!("conflicts {}", def.conflicts_with.len()));
        }
        if notes.is_empty() {
            println!("{def}");
        } else {
            println!("{def} ({})", notes.join(", "));
        }
    }
    Ok(())
}
