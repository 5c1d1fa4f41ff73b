//! Error taxonomy shared by every writer in the crate.
//!
//! All failures surface synchronously to the caller; nothing is retried and
//! partially written files are left on disk. Every variant names the path the
//! operation was working on.

use std::path::{Path, PathBuf};

/// Errors returned by the guarded writers.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The destination already exists and overwriting was not allowed.
    #[error("refusing to overwrite {}: file already exists and overwrite is disabled", .path.display())]
    AlreadyExists { path: PathBuf },

    /// An argument such as the base directory is unusable.
    #[error("invalid argument {}: {reason}", .path.display())]
    InvalidArgument { path: PathBuf, reason: String },

    /// Underlying filesystem failure.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV encoder failed while writing a record.
    #[cfg(feature = "io-csv")]
    #[error("csv error on {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A record could not be serialized to JSON.
    #[cfg(feature = "io-json")]
    #[error("json error on {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl WriteError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    #[cfg(feature = "io-csv")]
    pub(crate) fn csv(path: &Path, source: csv::Error) -> Self {
        Self::Csv {
            path: path.to_path_buf(),
            source,
        }
    }

    #[cfg(feature = "io-json")]
    pub(crate) fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }

    /// `true` if the write was rejected by the overwrite guard.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    /// The path the failed operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            Self::AlreadyExists { path }
            | Self::InvalidArgument { path, .. }
            | Self::Io { path, .. } => path,
            #[cfg(feature = "io-csv")]
            Self::Csv { path, .. } => path,
            #[cfg(feature = "io-json")]
            Self::Json { path, .. } => path,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, WriteError>;
