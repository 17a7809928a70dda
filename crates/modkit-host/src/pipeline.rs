//! The load pipeline: resolve, then compile, patch, and activate.

use modkit_core::definition::ModDefinition;
use modkit_resolver::report::FailureReport;
use modkit_resolver::resolver::preprocess;
use modkit_util::errors::ModkitError;

use crate::stage::{ArtifactCompiler, BinaryPatcher, HostContext, ModActivator};

/// Drives one full load over a discovered mod set.
///
/// Stages run in pipeline order: every mod is compiled, then every mod is
/// patched, then every mod is activated, each pass walking the resolved
/// load order.
pub struct Pipeline<C, P, A> {
    compiler: C,
    patcher: P,
    activator: A,
}

impl<C, P, A> Pipeline<C, P, A>
where
    C: ArtifactCompiler,
    P: BinaryPatcher,
    A: ModActivator,
{
    pub fn new(compiler: C, patcher: P, activator: A) -> Self {
        Self {
            compiler,
            patcher,
            activator,
        }
    }

    /// Resolve `defs` and run every stage over the resulting order.
    ///
    /// All-or-nothing: when resolution fails, no stage sees any mod and the
    /// aggregated failure report comes back as the error. A stage error
    /// aborts the run at the mod that raised it.
    pub fn run(&mut self, defs: &[ModDefinition]) -> miette::Result<Vec<ModDefinition>> {
        let result = preprocess(defs);
        if !result.success {
            return Err(ModkitError::Resolution {
                message: FailureReport::new(result.errors).to_string(),
            }
            .into());
        }

        let ordered = result.ordered;
        tracing::debug!("Loading {} mod(s) in resolved order", ordered.len());

        for def in &ordered {
            self.compiler.compile(def)?;
        }
        for def in &ordered {
            self.patcher.patch(def)?;
        }
        let ctx = HostContext::new(&ordered);
        for def in &ordered {
            self.activator.activate(def, &ctx)?;
        }

        Ok(ordered)
    }
}
