//! Version constraints: an operator plus a version bound.
//!
//! A constraint restricts which versions of a named mod are acceptable,
//! e.g. `>=2.0` or `<1.5.0`. The operator set is closed: the five
//! variants of [`ConstraintOp`] are the only recognized comparisons, and
//! unknown operator tokens are rejected at parse time with an error
//! naming the offending token.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::version::{ModVersion, ParseVersionError};

/// Comparison operator of a version constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintOp {
    Equal,
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
}

/// An operator + version pair restricting acceptable versions of a mod.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionConstraint {
    pub op: ConstraintOp,
    pub version: ModVersion,
}

/// Error produced when a constraint expression cannot be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseConstraintError {
    /// The expression starts with a token that is not one of the five
    /// recognized operators.
    #[error("unknown version constraint operator '{op}' in '{input}'")]
    UnknownOperator { op: String, input: String },

    /// The version part of the expression is malformed.
    #[error(transparent)]
    Version(#[from] ParseVersionError),
}

impl VersionConstraint {
    /// Parse a constraint expression: an optional operator followed by a
    /// version. A bare version means [`ConstraintOp::Equal`].
    ///
    /// Examples: `">=2.0"`, `"<1.5.0"`, `"=1.0"`, `"1.0"`.
    pub fn parse(expr: &str) -> Result<Self, ParseConstraintError> {
        let trimmed = expr.trim();
        let (op, rest) = if let Some(rest) = trimmed.strip_prefix(">=") {
            (ConstraintOp::GreaterOrEqual, rest)
        } else if let Some(rest) = trimmed.strip_prefix("<=") {
            (ConstraintOp::LessOrEqual, rest)
        } else if let Some(rest) = trimmed.strip_prefix('>') {
            (ConstraintOp::GreaterThan, rest)
        } else if let Some(rest) = trimmed.strip_prefix('<') {
            (ConstraintOp::LessThan, rest)
        } else if let Some(rest) = trimmed.strip_prefix('=') {
            (ConstraintOp::Equal, rest)
        } else if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
            (ConstraintOp::Equal, trimmed)
        } else {
            let op: String = trimmed
                .chars()
                .take_while(|c| !c.is_ascii_digit() && !c.is_whitespace())
                .collect();
            return Err(ParseConstraintError::UnknownOperator {
                op,
                input: trimmed.to_string(),
            });
        };

        let version = rest.trim().parse()?;
        Ok(Self { op, version })
    }

    /// Check whether `actual` satisfies this constraint, evaluating
    /// `actual OP self.version` under the version total order.
    pub fn accepts(&self, actual: &ModVersion) -> bool {
        let ord = actual.cmp(&self.version);
        match self.op {
            ConstraintOp::Equal => ord == Ordering::Equal,
            ConstraintOp::GreaterThan => ord == Ordering::Greater,
            ConstraintOp::GreaterOrEqual => ord != Ordering::Less,
            ConstraintOp::LessThan => ord == Ordering::Less,
            ConstraintOp::LessOrEqual => ord != Ordering::Greater,
        }
    }
}

impl FromStr for VersionConstraint {
    type Err = ParseConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            ConstraintOp::Equal => write!(f, "{}", self.version),
            ConstraintOp::GreaterThan => write!(f, ">{}", self.version),
            ConstraintOp::GreaterOrEqual => write!(f, ">={}", self.version),
            ConstraintOp::LessThan => write!(f, "<{}", self.version),
            ConstraintOp::LessOrEqual => write!(f, "<={}", self.version),
        }
    }
}

impl Serialize for VersionConstraint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VersionConstraint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
