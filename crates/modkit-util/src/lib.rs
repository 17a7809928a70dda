//! Shared utilities for the modkit host.
//!
//! This crate provides cross-cutting concerns used by all other modkit
//! crates: error types, filesystem helpers, and terminal status output.

pub mod errors;
pub mod fs;
pub mod progress;
