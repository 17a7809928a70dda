//! Operation: display the requirement graph of the installed mod set.

use std::path::Path;

use modkit_loader::discover;
use modkit_resolver::graph::ModGraph;

use crate::ops_setup;

/// Options for `modkit tree`.
#[derive(Default)]
pub struct TreeOptions {
    /// Maximum tree depth to display.
    pub depth: Option<usize>,
    /// Show the requirement chain leading to a specific mod.
    pub why: Option<String>,
    /// Show what requires a specific mod instead of what it requires.
    pub dependents: Option<String>,
}

/// Display the requirement tree for the installed mod set.
///
/// The tree renders straight from the discovered set, so it also works on
/// collections `check` would reject; missing requirements simply have no
/// branch.
pub fn tree(working_dir: &Path, mods_dir: Option<&Path>, opts: &TreeOptions) -> miette::Result<()> {
    let mods_dir = ops_setup::resolve_mods_dir(working_dir, mods_dir)?;
    let defs = discover(&mods_dir)?;
    if defs.is_empty() {
        println!("No mods found in {}.", mods_dir.display());
        return Ok(());
    }
    let graph = ModGraph::build(&defs);

    if let Some(ref target) = opts.why {
        if graph.find(target).is_none() {
            println!("Mod '{target}' is not installed.");
        } else if let Some(path) = graph.find_path(target) {
            println!("Requirement chain to {target}:");
            for (i, node) in path.iter().enumerate() {
                let indent = "  ".repeat(i);
                println!("{indent}{node}");
            }
        } else {
            println!("No requirement chain leads to '{target}' from a top-level mod.");
        }
        return Ok(());
    }

    if let Some(ref target) = opts.dependents {
        let output = graph.print_dependents(target);
        if output.is_empty() {
            println!("Mod '{target}' is not installed.");
        } else {
            print!("{output}");
        }
        return Ok(());
    }

    let output = graph.print_tree(opts.depth);
    print!("{output}");
    Ok(())
}
