use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::constraint::VersionConstraint;
use crate::version::ModVersion;

/// A fully parsed mod definition, ready for resolution.
///
/// Definitions are produced by the loader, consumed read-only by the
/// resolver, and re-emitted (on success) in dependency-first order. The
/// resolver never deletes or merges definitions.
#[derive(Debug, Clone, Serialize)]
pub struct ModDefinition {
    /// Identifier, unique within one mod set; compared case-insensitively.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    pub version: ModVersion,
    /// Required mods, in declaration order.
    pub requires: Vec<ModRef>,
    /// Conflicting mods, in declaration order.
    #[serde(rename = "conflicts-with")]
    pub conflicts_with: Vec<ModRef>,
    /// Folder the mod was discovered in. Opaque to the resolver.
    pub install_dir: PathBuf,
    /// Per-mod log verbosity requested by the descriptor. Opaque to the
    /// resolver.
    pub verbosity: Option<String>,
}

/// A reference to another mod by identifier, optionally constrained to a
/// version range.
#[derive(Debug, Clone, Serialize)]
pub struct ModRef {
    pub id: String,
    pub constraint: Option<VersionConstraint>,
}

impl ModDefinition {
    /// Lower-cased identifier used for case-insensitive lookups.
    pub fn key(&self) -> String {
        self.id.to_lowercase()
    }
}

impl fmt::Display for ModDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{}", self.id, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_lower_cased() {
        let def = ModDefinition {
            id: "UI-Kit".into(),
            name: "UI Kit".into(),
            version: "2.1.0".parse().unwrap(),
            requires: vec![],
            conflicts_with: vec![],
            install_dir: PathBuf::from("mods/ui-kit"),
            verbosity: None,
        };
        assert_eq!(def.key(), "ui-kit");
        assert_eq!(def.to_string(), "UI-Kit v2.1.0");
    }
}
