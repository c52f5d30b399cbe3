//! Error types for orchestrator invocation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Orchestrator command line is empty")]
    EmptyCommand,

    #[error("Failed to launch orchestrator `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Orchestrator `{program}` was terminated without an exit code")]
    Terminated { program: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for orchestrator operations
pub type Result<T> = std::result::Result<T, RunnerError>;
