//! Operation: validate the installed mod set and print its load order.
//!
//! Runs discovery and resolution without touching the host pipeline, so a
//! user can vet a mod collection before launching anything.

use std::path::Path;

use modkit_loader::discover;
use modkit_resolver::report::FailureReport;
use modkit_resolver::resolver;
use modkit_util::errors::ModkitError;
use modkit_util::progress;

use crate::ops_setup;

/// Validate the mod set and print the resolved load order.
pub fn check(working_dir: &Path, mods_dir: Option<&Path>, verbose: bool) -> miette::Result<()> {
    let mods_dir = ops_setup::resolve_mods_dir(working_dir, mods_dir)?;
    progress::status("Checking", &format!("mods in {}", mods_dir.display()));

    let defs = discover(&mods_dir)?;
    if defs.is_empty() {
        println!("No mods found in {}.", mods_dir.display());
        return Ok(());
    }

    if verbose {
        for def in &defs {
            progress::status_info("Found", &def.to_string());
        }
    }

    let result = resolver::preprocess(&defs);
    if result.success {
        progress::status(
            "Finished",
            &format!("{} mod(s) resolved", result.ordered.len()),
        );
        println!("Load order:");
        for (i, def) in result.ordered.iter().enumerate() {
            println!("  {:>2}. {def}", i + 1);
        }
        Ok(())
    } else {
        let report = FailureReport::new(result.errors);
        eprint!("{report}");
        Err(ModkitError::Resolution {
            message: format!("{} error(s) in the mod set", report.len()),
        }
        .into())
    }
}
