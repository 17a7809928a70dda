//! Dependency-first ordering over the requirement graph.
//!
//! The walk is a recursive depth-first traversal with four per-mod states.
//! A mod seen again while still `InProgress` closes a cycle; the cycle
//! message lists the walk path from that mod's first occurrence, oldest
//! first. Invalidity propagates upward: a mod whose requirement failed to
//! resolve is itself excluded from the ordering.

use std::collections::HashMap;

use modkit_core::definition::ModDefinition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    InProgress,
    ResolvedValid,
    ResolvedInvalid,
}

/// Compute the dependency-first ordering of `defs`.
///
/// Runs only on a set with zero validation errors, so every requirement
/// target exists. Returns the mods that resolved cleanly in load order plus
/// any cycle errors; the caller discards the ordering when errors came back.
pub(crate) fn resolve_order(defs: &[ModDefinition]) -> (Vec<ModDefinition>, Vec<String>) {
    let mut walk = Walk::new(defs);
    for ix in 0..defs.len() {
        if walk.states[ix] == VisitState::Unvisited {
            walk.visit(ix);
        }
    }

    let ordered = walk.ordered.iter().map(|&ix| defs[ix].clone()).collect();
    (ordered, walk.errors)
}

struct Walk<'a> {
    defs: &'a [ModDefinition],
    index: HashMap<String, usize>,
    states: Vec<VisitState>,
    path: Vec<usize>,
    ordered: Vec<usize>,
    errors: Vec<String>,
}

impl<'a> Walk<'a> {
    fn new(defs: &'a [ModDefinition]) -> Self {
        let index = defs
            .iter()
            .enumerate()
            .map(|(ix, def)| (def.key(), ix))
            .collect();
        Self {
            defs,
            index,
            states: vec![VisitState::Unvisited; defs.len()],
            path: Vec::new(),
            ordered: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Visit one mod; returns true when it resolved cleanly.
    fn visit(&mut self, ix: usize) -> bool {
        match self.states[ix] {
            VisitState::InProgress => {
                // Seeing an in-progress mod again closes a cycle.
                let message = self.cycle_message(ix);
                self.errors.push(message);
                self.states[ix] = VisitState::ResolvedInvalid;
                return false;
            }
            VisitState::ResolvedValid => return true,
            VisitState::ResolvedInvalid => return false,
            VisitState::Unvisited => {}
        }

        self.states[ix] = VisitState::InProgress;
        self.path.push(ix);
        let mut valid = true;

        let defs = self.defs;
        for req in &defs[ix].requires {
            // Validation already rejected absent requirements.
            let Some(&dep_ix) = self.index.get(&req.id.to_lowercase()) else {
                continue;
            };
            if self.states[dep_ix] == VisitState::ResolvedInvalid {
                // A known-bad dependency is not re-entered; the cycle that
                // poisoned it was already reported once.
                self.errors.push(format!(
                    "Mod '{}' cannot resolve mod '{}' because mod '{}' is part of a cyclic dependency.",
                    defs[ix].id, req.id, req.id
                ));
                valid = false;
            } else if !self.visit(dep_ix) {
                valid = false;
            }
        }

        self.path.pop();
        if valid {
            // Post-order append puts every dependency before its dependent.
            self.ordered.push(ix);
            self.states[ix] = VisitState::ResolvedValid;
        } else {
            self.states[ix] = VisitState::ResolvedInvalid;
        }
        valid
    }

    fn cycle_message(&self, ix: usize) -> String {
        let first = self
            .path
            .iter()
            .position(|&p| p == ix)
            .expect("an in-progress mod is always on the walk path");
        let mut segments: Vec<&str> = self.path[first..]
            .iter()
            .map(|&p| self.defs[p].id.as_str())
            .collect();
        segments.push(self.defs[ix].id.as_str());
        format!("Cyclic dependency detected: {}", segments.join(" -> "))
    }
}
