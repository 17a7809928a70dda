//! Core data types for the modkit host.
//!
//! This crate defines the fundamental types that represent a mod set:
//! descriptor parsing, mod definitions, versions, version constraints,
//! and host configuration.
//!
//! This crate is intentionally free of resolution logic (that lives in
//! `modkit-resolver`) and of any I/O beyond reading descriptor and
//! configuration files.

pub mod config;
pub mod constraint;
pub mod definition;
pub mod descriptor;
pub mod version;
