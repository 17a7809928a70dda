//! Resolution orchestration: validate the set, then order it, all or
//! nothing.

use modkit_core::definition::ModDefinition;
use serde::Serialize;

use crate::validate;
use crate::walk;

/// The outcome of one resolution run.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionResult {
    /// True when every mod validated and ordered cleanly.
    pub success: bool,
    /// Dependency-first load order; empty whenever `errors` is not.
    pub ordered: Vec<ModDefinition>,
    /// Accumulated error strings; empty on success.
    pub errors: Vec<String>,
}

impl ResolutionResult {
    fn failure(errors: Vec<String>) -> Self {
        Self {
            success: false,
            ordered: Vec::new(),
            errors,
        }
    }

    fn success(ordered: Vec<ModDefinition>) -> Self {
        Self {
            success: true,
            ordered,
            errors: Vec::new(),
        }
    }
}

/// Validate `defs` and compute their dependency-first load order.
///
/// The run is all-or-nothing: a single validation or cycle error empties
/// the ordering entirely, including mods that individually checked out.
/// The ordering walk only runs when validation found nothing wrong, so it
/// can rely on every requirement target being present.
pub fn preprocess(defs: &[ModDefinition]) -> ResolutionResult {
    let errors = validate::validate(defs);
    if !errors.is_empty() {
        return fail(errors);
    }

    let (ordered, cycle_errors) = walk::resolve_order(defs);
    if !cycle_errors.is_empty() {
        return fail(cycle_errors);
    }

    ResolutionResult::success(ordered)
}

fn fail(errors: Vec<String>) -> ResolutionResult {
    // One aggregated record for the whole failed run.
    tracing::error!("Mod preprocessing failed with error(s): {errors:?}");
    ResolutionResult::failure(errors)
}
