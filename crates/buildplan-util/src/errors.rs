use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all buildplan operations.
#[derive(Debug, Error, Diagnostic)]
pub enum BuildError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or inconsistent settings file (e.g. Buildplan.toml).
    #[error("Settings error: {message}")]
    #[diagnostic(help("Check your Buildplan.toml for syntax errors"))]
    Settings { message: String },

    /// The framework plugin is not the last plugin a project applies.
    #[error(
        "Plugin order error in project '{project}': '{plugin}' is applied at position {position} of {len}, but must be applied last"
    )]
    #[diagnostic(help("Move the framework plugin to the end of the project's `plugins` list"))]
    PluginOrder {
        project: String,
        plugin: String,
        position: usize,
        len: usize,
    },

    /// Evaluation sequencing cannot be satisfied (missing project or cycle).
    #[error("Dependency order error: {message}")]
    #[diagnostic(help(
        "Every project named in `root.primary` or `evaluation-depends-on` must be declared, and the graph must be acyclic"
    ))]
    DependencyOrder { message: String },

    /// Source/target language levels are inconsistent.
    #[error("Compatibility error in project '{project}': {message}")]
    Compatibility { project: String, message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type BuildResult<T> = miette::Result<T>;
