//! Mod descriptor (`Mod.toml`) parsing.
//!
//! A descriptor declares one mod's identity, version, and its
//! requirement/conflict relations. Relations are ordered TOML arrays, so
//! declaration order survives parsing by construction; resolution output
//! and diagnostic message content depend on that order.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use modkit_util::errors::ModkitError;

use crate::constraint::VersionConstraint;
use crate::definition::{ModDefinition, ModRef};

/// File name of the per-mod descriptor.
pub const DESCRIPTOR_FILE: &str = "Mod.toml";

/// The parsed representation of a `Mod.toml` file.
///
/// All keys live in the file's `[mod]` table; [`ModDescriptor::from_str`]
/// unwraps that table before deserializing into this struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModDescriptor {
    #[serde(flatten)]
    pub meta: ModMeta,

    #[serde(default)]
    pub requires: Vec<RelationEntry>,

    #[serde(default, rename = "conflicts-with")]
    pub conflicts_with: Vec<RelationEntry>,
}

/// Mod identity and metadata from the `[mod]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModMeta {
    pub id: String,
    /// Display name; falls back to the identifier when omitted.
    #[serde(default)]
    pub name: Option<String>,
    pub version: String,
    /// Per-mod log verbosity, passed through to the host untouched.
    #[serde(default)]
    pub verbosity: Option<String>,
}

/// A requirement or conflict declaration.
///
/// Supports both shorthand (`"mod-id >=1.0"`) and detailed forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationEntry {
    Short(String),
    Detailed(DetailedRelation),
}

/// A relation with explicit identifier and optional constraint expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedRelation {
    pub id: String,
    #[serde(default)]
    pub version: Option<String>,
}

impl ModDescriptor {
    /// Load and parse a `Mod.toml` file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ModkitError::Descriptor {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_str(&content)
    }

    /// Parse a `Mod.toml` from a string.
    pub fn from_str(content: &str) -> miette::Result<Self> {
        #[derive(Deserialize)]
        struct Document {
            #[serde(rename = "mod")]
            descriptor: ModDescriptor,
        }

        toml::from_str::<Document>(content)
            .map(|doc| doc.descriptor)
            .map_err(|e| {
                ModkitError::Descriptor {
                    message: format!("Failed to parse {DESCRIPTOR_FILE}: {e}"),
                }
                .into()
            })
    }

    /// Convert the raw descriptor into a typed [`ModDefinition`] rooted at
    /// `install_dir`.
    pub fn into_definition(self, install_dir: PathBuf) -> miette::Result<ModDefinition> {
        let id = self.meta.id;
        let version = self.meta.version.parse().map_err(|e| {
            ModkitError::Descriptor {
                message: format!("mod '{id}': {e}"),
            }
        })?;

        let mut requires = Vec::with_capacity(self.requires.len());
        for entry in self.requires {
            requires.push(entry.to_ref(&id, "requirement")?);
        }
        let mut conflicts_with = Vec::with_capacity(self.conflicts_with.len());
        for entry in self.conflicts_with {
            conflicts_with.push(entry.to_ref(&id, "conflict")?);
        }

        Ok(ModDefinition {
            name: self.meta.name.unwrap_or_else(|| id.clone()),
            id,
            version,
            requires,
            conflicts_with,
            install_dir,
            verbosity: self.meta.verbosity,
        })
    }
}

impl RelationEntry {
    /// Resolve this entry to a typed [`ModRef`], parsing any constraint.
    ///
    /// `owner` and `kind` only feed error messages.
    fn to_ref(self, owner: &str, kind: &str) -> miette::Result<ModRef> {
        match self {
            RelationEntry::Short(raw) => parse_shorthand(&raw).map_err(|e| {
                ModkitError::Descriptor {
                    message: format!("mod '{owner}': invalid {kind} '{raw}': {e}"),
                }
                .into()
            }),
            RelationEntry::Detailed(detail) => {
                let constraint = match detail.version {
                    Some(expr) => {
                        Some(VersionConstraint::parse(&expr).map_err(|e| {
                            ModkitError::Descriptor {
                                message: format!(
                                    "mod '{owner}': invalid {kind} '{}': {e}",
                                    detail.id
                                ),
                            }
                        })?)
                    }
                    None => None,
                };
                Ok(ModRef {
                    id: detail.id,
                    constraint,
                })
            }
        }
    }
}

/// Parse `"mod-id"` or `"mod-id <op>version"` into a [`ModRef`].
///
/// The identifier ends at the first whitespace or operator character;
/// everything after it is the constraint expression.
fn parse_shorthand(raw: &str) -> Result<ModRef, crate::constraint::ParseConstraintError> {
    let trimmed = raw.trim();
    let split_at = trimmed
        .find(|c: char| c.is_whitespace() || matches!(c, '<' | '>' | '='))
        .unwrap_or(trimmed.len());
    let (id, rest) = trimmed.split_at(split_at);
    let rest = rest.trim();

    let constraint = if rest.is_empty() {
        None
    } else {
        Some(VersionConstraint::parse(rest)?)
    };

    Ok(ModRef {
        id: id.to_string(),
        constraint,
    })
}
