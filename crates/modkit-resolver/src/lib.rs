//! The modkit dependency resolution engine.
//!
//! Resolution is a two phase pipeline over an in-memory set of mod
//! definitions. The validation phase checks every declared requirement and
//! conflict and accumulates error strings without stopping at the first
//! problem. The ordering phase runs a depth-first walk over the requirement
//! graph, detects cycles, and produces the dependency-first load order.
//! Both phases are pure functions of their input set.
//!
//! [`resolver::preprocess`] is the entry point; [`graph::ModGraph`] provides
//! the read-only views (tree, why, dependents) the CLI renders.

pub mod graph;
pub mod report;
pub mod resolver;
pub mod validate;

mod walk;
