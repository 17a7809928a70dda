use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use modkit_util::errors::ModkitError;

/// Name of the optional host configuration file.
pub const CONFIG_FILE: &str = "Modkit.toml";

/// Host configuration loaded from an optional `Modkit.toml`.
///
/// Resolution precedence is CLI flag, then config file, then built-in
/// default; the file may live in the working directory or any ancestor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostConfig {
    #[serde(default)]
    pub host: HostSection,
}

/// Settings from the `[host]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostSection {
    /// Directory scanned for mod folders.
    #[serde(default = "default_mods_dir", rename = "mods-dir")]
    pub mods_dir: PathBuf,

    /// Default tracing filter when `RUST_LOG` is unset.
    #[serde(default, rename = "log-filter")]
    pub log_filter: Option<String>,
}

impl Default for HostSection {
    fn default() -> Self {
        Self {
            mods_dir: default_mods_dir(),
            log_filter: None,
        }
    }
}

fn default_mods_dir() -> PathBuf {
    PathBuf::from("mods")
}

impl HostConfig {
    /// Load and parse a `Modkit.toml` file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ModkitError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        toml::from_str(&content).map_err(|e| {
            ModkitError::Config {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Find `Modkit.toml` in `start` or any ancestor directory and load
    /// it. Falls back to defaults when no file exists.
    pub fn discover(start: &Path) -> miette::Result<Self> {
        match modkit_util::fs::find_ancestor_with(start, CONFIG_FILE) {
            Some(dir) => Self::from_path(&dir.join(CONFIG_FILE)),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = HostConfig::default();
        assert_eq!(config.host.mods_dir, PathBuf::from("mods"));
        assert!(config.host.log_filter.is_none());
    }

    #[test]
    fn parse_full_section() {
        let config: HostConfig = toml::from_str(
            r#"
[host]
mods-dir = "packages"
log-filter = "modkit=debug"
"#,
        )
        .unwrap();
        assert_eq!(config.host.mods_dir, PathBuf::from("packages"));
        assert_eq!(config.host.log_filter.as_deref(), Some("modkit=debug"));
    }

    #[test]
    fn parse_empty_file_uses_defaults() {
        let config: HostConfig = toml::from_str("").unwrap();
        assert_eq!(config.host.mods_dir, PathBuf::from("mods"));
    }
}
