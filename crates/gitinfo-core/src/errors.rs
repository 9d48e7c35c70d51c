use std::path::PathBuf;

/// Unified error type for gitinfo generation.
#[derive(Debug, thiserror::Error)]
pub enum GitInfoError {
    #[error("invalid class name {0:?}: expected a package and a type name separated by '.'")]
    InvalidClassName(String),

    #[error("invalid identifier {segment:?} in class name {name:?}")]
    InvalidIdentifier { name: String, segment: String },

    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} terminated without an exit code")]
    Terminated { program: String },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GitInfoError>;
