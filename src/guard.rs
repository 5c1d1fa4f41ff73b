//! Overwrite guard.
//!
//! Every writer opens its destination through [`open_destination`]. When
//! overwriting is denied the file is opened with exclusive-create semantics,
//! so the existence check and the open happen as one operation at the OS
//! level and an existing file is never truncated.

use crate::error::{Result, WriteError};
use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;

/// Whether a write may replace an existing file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Fail with [`WriteError::AlreadyExists`] if the destination exists.
    #[default]
    Deny,
    /// Truncate and replace an existing destination.
    Allow,
}

impl Overwrite {
    pub fn is_allowed(self) -> bool {
        self == Overwrite::Allow
    }
}

impl From<bool> for Overwrite {
    fn from(allow: bool) -> Self {
        if allow { Overwrite::Allow } else { Overwrite::Deny }
    }
}

/// Open `path` for writing under the given overwrite policy.
///
/// The parent directory must already exist; it is not created.
///
/// # Errors
/// - [`WriteError::AlreadyExists`] if `overwrite` is [`Overwrite::Deny`] and
///   anything already exists at `path`, including a directory or a symlink.
///   The existing entry is left untouched.
/// - [`WriteError::Io`] for any other failure to open the file.
pub fn open_destination(path: impl AsRef<Path>, overwrite: Overwrite) -> Result<File> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), ?overwrite, "opening destination");

    let mut opts = OpenOptions::new();
    opts.write(true);
    match overwrite {
        Overwrite::Deny => {
            opts.create_new(true);
        }
        Overwrite::Allow => {
            opts.create(true).truncate(true);
        }
    }

    opts.open(path).map_err(|e| {
        if e.kind() == ErrorKind::AlreadyExists {
            tracing::warn!(path = %path.display(), "destination exists, overwrite disabled");
            WriteError::AlreadyExists {
                path: path.to_path_buf(),
            }
        } else {
            WriteError::io(path, e)
        }
    })
}
