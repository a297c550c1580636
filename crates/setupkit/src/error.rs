//! Error types for bootstrap runs.
//!
//! Every error is fatal to the run. Categories exist so the caller can give
//! the user a short explanation and a hint about what to fix.

use std::path::PathBuf;
use thiserror::Error;

/// Broad classes of run failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The configuration document is unreadable, malformed, or names an
    /// unknown driver
    Configuration,
    /// A command could not be started or exited unsuccessfully
    Execution,
    /// A directory or file could not be written
    Filesystem,
}

impl ErrorCategory {
    /// Get a user-friendly description of this error category.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Configuration => "Configuration error",
            Self::Execution => "Command failed",
            Self::Filesystem => "Filesystem error",
        }
    }

    /// Get actionable advice for resolving this error category.
    pub fn advice(&self) -> &'static str {
        match self {
            Self::Configuration => {
                "Check the configuration document; run with --list to see valid drivers"
            }
            Self::Execution => "Re-run with --verbose to see the command output",
            Self::Filesystem => "Check that the destination is writable",
        }
    }
}

/// Errors that can occur while loading or running a bootstrap document.
#[derive(Debug, Error)]
pub enum Error {
    /// Driver name not present in the driver table
    #[error("unknown driver '{name}'")]
    UnknownDriver {
        /// Name given in the document
        name: String,
    },

    /// Configuration file could not be read
    #[error("cannot read configuration {}: {source}", path.display())]
    ReadConfig {
        /// Path of the configuration document
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Document is not valid YAML or does not have the expected shape
    #[error("invalid configuration: {0}")]
    InvalidDocument(#[from] serde_yaml::Error),

    /// Shell could not be started for a command
    #[error("failed to execute '{command}': {source}")]
    Spawn {
        /// Fully substituted command line
        command: String,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Command exited with a non-zero status
    #[error("command '{command}' failed{}", code.map(|c| format!(" with exit code {c}")).unwrap_or_default())]
    CommandFailed {
        /// Fully substituted command line
        command: String,
        /// Exit code, if the process was not terminated by a signal
        code: Option<i32>,
    },

    /// Directory creation or file write failed
    #[error("cannot write {}: {source}", path.display())]
    Filesystem {
        /// Path being created or written
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },
}

impl Error {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::UnknownDriver { .. } | Error::ReadConfig { .. } | Error::InvalidDocument(_) => {
                ErrorCategory::Configuration
            }
            Error::Spawn { .. } | Error::CommandFailed { .. } => ErrorCategory::Execution,
            Error::Filesystem { .. } => ErrorCategory::Filesystem,
        }
    }
}

/// Result type for bootstrap operations.
pub type Result<T> = std::result::Result<T, Error>;
