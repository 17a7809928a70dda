//! Host-side consumption of a resolved mod set.
//!
//! Defines the three stage traits an embedding host implements ([`stage::ArtifactCompiler`],
//! [`stage::BinaryPatcher`], [`stage::ModActivator`]) and the [`pipeline::Pipeline`]
//! that drives resolution followed by those stages over the ordered set.

pub mod pipeline;
pub mod stage;
