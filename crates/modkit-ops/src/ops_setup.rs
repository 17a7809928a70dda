//! Shared setup for operations: locate the effective mods directory.

use std::path::{Path, PathBuf};

use modkit_core::config::{HostConfig, CONFIG_FILE};

/// Resolve the directory that will be scanned for mods.
///
/// An explicit `--mods-dir` flag wins. Otherwise the nearest `Modkit.toml`
/// up the ancestor chain decides; a relative `mods-dir` in that file is
/// taken relative to the file's own directory. Without a config file the
/// default is `mods` under the working directory.
pub fn resolve_mods_dir(working_dir: &Path, explicit: Option<&Path>) -> miette::Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    match modkit_util::fs::find_ancestor_with(working_dir, CONFIG_FILE) {
        Some(config_dir) => {
            let config = HostConfig::from_path(&config_dir.join(CONFIG_FILE))?;
            let mods_dir = config.host.mods_dir;
            let resolved = if mods_dir.is_absolute() {
                mods_dir
            } else {
                config_dir.join(mods_dir)
            };
            tracing::debug!(
                "Using mods directory {} from {}",
                resolved.display(),
                config_dir.join(CONFIG_FILE).display()
            );
            Ok(resolved)
        }
        None => Ok(working_dir.join("mods")),
    }
}
