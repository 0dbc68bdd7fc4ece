//! Error types for the scaffolding pipeline

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors raised while resolving names or running the scaffold pipeline
#[derive(Debug, Error)]
pub enum CrudError {
    /// The resource identifier has no usable segments
    #[error("Invalid resource identifier: {0:?}")]
    InvalidIdentifier(String),

    /// A generator process could not be started
    #[error("Failed to run `{command}`: {source}")]
    GeneratorSpawn {
        /// Command line that was attempted
        command: String,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// A generator process exited unsuccessfully
    #[error("`{command}` exited with {status}")]
    GeneratorFailed {
        /// Command line that was run
        command: String,
        /// Exit status reported by the process
        status: ExitStatus,
    },

    /// The route table could not be appended to
    #[error("Failed to append route to {}: {source}", path.display())]
    RouteAppend {
        /// Route table file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl From<figment::Error> for CrudError {
    fn from(error: figment::Error) -> Self {
        Self::Config(Box::new(error))
    }
}

/// Result alias for scaffold operations
pub type CrudResult<T> = Result<T, CrudError>;
