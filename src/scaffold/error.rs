//! Error types for the day scaffolder.

use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

/// Result type for scaffolding operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("template not found at {0}")]
    MissingTemplate(PathBuf),

    #[error("template already exists at {0} (use --force to overwrite)")]
    TemplateExists(PathBuf),

    #[error("day number overflow after day{0}")]
    DayOverflow(u64),
}

impl ScaffoldError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
