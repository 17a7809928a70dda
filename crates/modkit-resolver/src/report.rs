//! Aggregated failure reporting for a resolution run.

use std::fmt;

/// The full ordered error list of a failed resolution run.
///
/// Errors out of a run are reported as one aggregate rather than a record
/// per problem, so a user sees everything wrong with the mod set at once.
#[derive(Debug, Default)]
pub struct FailureReport {
    pub errors: Vec<String>,
}

impl FailureReport {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "No resolution errors.");
        }
        writeln!(f, "Mod preprocessing failed with {} error(s):", self.errors.len())?;
        for error in &self.errors {
            writeln!(f, "  {error}")?;
        }
        Ok(())
    }
}
