//! Filesystem scan over a mods directory.

use std::collections::HashSet;
use std::path::Path;

use modkit_core::definition::ModDefinition;
use modkit_core::descriptor::{ModDescriptor, DESCRIPTOR_FILE};
use modkit_util::errors::{ModkitError, ModkitResult};
use modkit_util::fs;

/// Scan `mods_dir` and parse one descriptor per mod folder.
///
/// Folders are visited in alphabetical order so repeated scans produce the
/// same definition list. A folder without a `Mod.toml` is ignored; one with
/// a malformed descriptor is skipped with a warning so a single broken mod
/// cannot block the rest of the scan. When two folders declare the same
/// identifier (case-insensitive), the first one discovered wins.
pub fn discover(mods_dir: &Path) -> ModkitResult<Vec<ModDefinition>> {
    if !mods_dir.is_dir() {
        return Err(ModkitError::Config {
            message: format!("mods directory '{}' does not exist", mods_dir.display()),
        }
        .into());
    }

    let mut definitions: Vec<ModDefinition> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for dir in fs::sorted_subdirs(mods_dir).map_err(ModkitError::Io)? {
        let descriptor_path = dir.join(DESCRIPTOR_FILE);
        if !descriptor_path.is_file() {
            continue;
        }

        let definition = match load_one(&descriptor_path, &dir) {
            Ok(def) => def,
            Err(report) => {
                tracing::warn!("Skipping mod folder {}: {report}", dir.display());
                continue;
            }
        };

        if !seen.insert(definition.key()) {
            tracing::warn!(
                "Duplicate mod id '{}' in {}; keeping the first occurrence",
                definition.id,
                dir.display()
            );
            continue;
        }
        definitions.push(definition);
    }

    Ok(definitions)
}

fn load_one(descriptor_path: &Path, install_dir: &Path) -> ModkitResult<ModDefinition> {
    let descriptor = ModDescriptor::from_path(descriptor_path)?;
    descriptor.into_definition(install_dir.to_path_buf())
}
