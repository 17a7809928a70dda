//! Mod discovery: find installed mods on disk and turn their descriptors
//! into in-memory definitions for the resolver.

pub mod discover;

pub use discover::discover;
