//! Mod version parsing and comparison.
//!
//! Mod versions are dotted values with up to four numeric components
//! (major, minor, build, revision). Comparison is component-by-component,
//! most significant first; an absent component sorts below any present
//! value, so `1.0 < 1.0.0`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A parsed mod version with up to four numeric components.
///
/// The derived ordering compares fields most significant first, with
/// `None` sorting below any `Some`, which is exactly the version total
/// order: absent components rank below present ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModVersion {
    major: u64,
    minor: Option<u64>,
    build: Option<u64>,
    revision: Option<u64>,
}

/// Error produced when a version string cannot be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid version '{input}': {reason}")]
pub struct ParseVersionError {
    pub input: String,
    pub reason: String,
}

impl ModVersion {
    /// Parse a dotted version string with one to four numeric components.
    pub fn parse(version: &str) -> Result<Self, ParseVersionError> {
        let err = |reason: &str| ParseVersionError {
            input: version.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = version.trim();
        if trimmed.is_empty() {
            return Err(err("empty version string"));
        }

        let mut parts = [None; 4];
        for (i, token) in trimmed.split('.').enumerate() {
            if i >= 4 {
                return Err(err("more than four components"));
            }
            if token.is_empty() {
                return Err(err("empty component"));
            }
            let n: u64 = token
                .parse()
                .map_err(|_| err(&format!("component '{token}' is not a number")))?;
            parts[i] = Some(n);
        }

        Ok(Self {
            major: parts[0].unwrap_or(0),
            minor: parts[1],
            build: parts[2],
            revision: parts[3],
        })
    }
}

impl FromStr for ModVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ModVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;
        for part in [self.minor, self.build, self.revision].into_iter().flatten() {
            write!(f, ".{part}")?;
        }
        Ok(())
    }
}

impl Serialize for ModVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ModVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
