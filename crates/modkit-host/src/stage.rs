//! Stage traits implemented by the embedding host.
//!
//! Defines the three stages a host plugs into the load pipeline. Adding a
//! new host backend means implementing these traits; the pipeline and the
//! resolver stay untouched.

use modkit_core::definition::ModDefinition;

/// Context handed to activation: the final dependency-first load order.
pub struct HostContext<'a> {
    ordered: &'a [ModDefinition],
}

impl<'a> HostContext<'a> {
    pub fn new(ordered: &'a [ModDefinition]) -> Self {
        Self { ordered }
    }

    /// The full load order, dependencies first.
    pub fn ordered(&self) -> &[ModDefinition] {
        self.ordered
    }

    /// Look up a loaded mod by identifier, ignoring case.
    pub fn get(&self, id: &str) -> Option<&ModDefinition> {
        let key = id.to_lowercase();
        self.ordered.iter().find(|def| def.key() == key)
    }
}

/// Builds a mod's loadable artifact from its sources.
pub trait ArtifactCompiler {
    /// Compile `def`'s sources into its artifact.
    ///
    /// Implementations should skip the build when the existing artifact is
    /// at least as new as the newest source file under the install dir.
    fn compile(&mut self, def: &ModDefinition) -> miette::Result<()>;
}

/// Rewrites a compiled artifact so marker-tagged types receive the
/// framework scaffolding they need before activation.
pub trait BinaryPatcher {
    fn patch(&mut self, def: &ModDefinition) -> miette::Result<()>;
}

/// Instantiates a mod's plugin objects inside the host.
pub trait ModActivator {
    fn activate(&mut self, def: &ModDefinition, ctx: &HostContext<'_>) -> miette::Result<()>;
}
