//! Timestamp-named JSON collection writer.
//!
//! A collection of records is drained into memory and written as a single
//! pretty-printed document of the shape `{"data": [record, ...]}` into a file
//! named after the current time, e.g. `2024-01-02_at_03-04-05.json`.
//!
//! # Notes
//! - The file name only has one-second resolution. Two writes into the same
//!   directory within one second target the same name; with overwrite denied
//!   the second one fails with [`WriteError::AlreadyExists`].
//! - The base directory must already exist.
//! - The document is rendered in memory before the destination is opened, so
//!   a record that fails to serialize leaves no file behind.

use crate::clock::{Clock, SystemClock, timestamp_file_name};
use crate::config::JsonCollectionConfig;
use crate::error::{Result, WriteError};
use crate::guard::{Overwrite, open_destination};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct Envelope<'a, T> {
    data: &'a [T],
}

/// Write `records` as `{"data": [...]}` into a timestamp-named `.json` file
/// under `base_dir`, using the local wall clock.
///
/// # Returns
/// The path of the file that was written.
///
/// # Errors
/// - [`WriteError::InvalidArgument`] if `base_dir` does not exist or is not a directory.
/// - [`WriteError::AlreadyExists`] if the target exists and `overwrite` denies replacing it.
/// - [`WriteError::Json`] if a record fails to serialize.
/// - [`WriteError::Io`] on any filesystem failure.
pub fn write_json_collection<T, I>(
    records: I,
    base_dir: impl AsRef<Path>,
    overwrite: impl Into<Overwrite>,
) -> Result<PathBuf>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let config = JsonCollectionConfig::default().with_overwrite(overwrite);
    write_json_collection_with(records, base_dir, &config, &SystemClock)
}

/// [`write_json_collection`] with explicit configuration and time source.
///
/// # Errors
/// See [`write_json_collection`].
pub fn write_json_collection_with<T, I>(
    records: I,
    base_dir: impl AsRef<Path>,
    config: &JsonCollectionConfig,
    clock: &dyn Clock,
) -> Result<PathBuf>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let base_dir = base_dir.as_ref();
    ensure_directory(base_dir)?;

    let name = timestamp_file_name(clock, &config.file_name_format, &config.extension);
    let path = base_dir.join(name);

    let data: Vec<T> = records.into_iter().collect();
    let indent = vec![b' '; config.indent];
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
    Envelope { data: &data }
        .serialize(&mut ser)
        .map_err(|e| WriteError::json(&path, e))?;

    let mut file = open_destination(&path, config.overwrite)?;
    file.write_all(&buf)
        .map_err(|e| WriteError::io(&path, e))?;
    file.sync_all().map_err(|e| WriteError::io(&path, e))?;

    tracing::info!(path = %path.display(), records = data.len(), "wrote json collection");
    Ok(path)
}

fn ensure_directory(dir: &Path) -> Result<()> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(WriteError::InvalidArgument {
            path: dir.to_path_buf(),
            reason: "base path is not a directory".to_string(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(WriteError::InvalidArgument {
            path: dir.to_path_buf(),
            reason: "base directory does not exist".to_string(),
        }),
        Err(e) => Err(WriteError::io(dir, e)),
    }
}
