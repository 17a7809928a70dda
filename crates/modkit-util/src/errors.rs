use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all modkit operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ModkitError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed mod descriptor (e.g. Mod.toml).
    #[error("Descriptor error: {message}")]
    #[diagnostic(help("Check the mod's Mod.toml for syntax errors"))]
    Descriptor { message: String },

    /// Mod preprocessing failed (missing requirements, conflicts, cycles).
    #[error("Mod resolution failed: {message}")]
    Resolution { message: String },

    /// A pipeline stage (compile, patch, activate) reported a failure.
    #[error("Pipeline error: {message}")]
    Pipeline { message: String },

    /// Host configuration could not be read or parsed.
    #[error("Config error: {message}")]
    Config { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type ModkitResult<T> = miette::Result<T>;
