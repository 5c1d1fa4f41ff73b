//! Guarded CSV writers.
//!
//! This module provides:
//! - **Header + rows** output: [`write_delimited`] and [`write_delimited_with`]
//! - **Typed rows** via Serde: [`write_delimited_records`]
//!
//! # Design notes
//! - Records end in `\r\n` unless [`DelimitedConfig::terminator`] says otherwise.
//! - Every field is quoted (`QuoteStyle::Always`), numeric fields included, so
//!   embedded delimiters, quotes and newlines survive a round trip.
//! - Destinations are opened through [`open_destination`]; with overwrite
//!   denied an existing file is never touched.
//! - Parent directories are **not** created.
//! - A failure part-way leaves the partial file on disk. The writer is dropped
//!   (flushing what it buffered) before the error is returned.

use crate::config::{DelimitedConfig, RecordTerminator};
use crate::error::{Result, WriteError};
use crate::guard::{Overwrite, open_destination};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::path::Path;

fn builder(config: &DelimitedConfig) -> WriterBuilder {
    let terminator = match config.terminator {
        RecordTerminator::Crlf => Terminator::CRLF,
        RecordTerminator::Any(b) => Terminator::Any(b),
    };
    let mut b = WriterBuilder::new();
    b.quote_style(QuoteStyle::Always)
        .delimiter(config.delimiter)
        .terminator(terminator)
        .flexible(true);
    b
}

/// Write `header` followed by every row of `rows` to a CSV file at `path`.
///
/// `rows` is consumed lazily, exactly once, in order. Rows need not have the
/// same number of fields as the header.
///
/// # Returns
/// The number of data rows written (header excluded).
///
/// # Errors
/// - [`WriteError::AlreadyExists`] if `overwrite` denies replacing an existing file.
/// - [`WriteError::Io`] if the file cannot be opened or flushed.
/// - [`WriteError::Csv`] if a record fails to write.
pub fn write_delimited<H, HF, I, R, F>(
    header: H,
    rows: I,
    path: impl AsRef<Path>,
    overwrite: impl Into<Overwrite>,
) -> Result<usize>
where
    H: IntoIterator<Item = HF>,
    HF: AsRef<[u8]>,
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    let config = DelimitedConfig::default().with_overwrite(overwrite);
    write_delimited_with(header, rows, path, &config)
}

/// [`write_delimited`] with an explicit [`DelimitedConfig`].
///
/// # Errors
/// See [`write_delimited`].
pub fn write_delimited_with<H, HF, I, R, F>(
    header: H,
    rows: I,
    path: impl AsRef<Path>,
    config: &DelimitedConfig,
) -> Result<usize>
where
    H: IntoIterator<Item = HF>,
    HF: AsRef<[u8]>,
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    let path = path.as_ref();
    let file = open_destination(path, config.overwrite)?;
    let mut wtr = builder(config).has_headers(false).from_writer(file);

    wtr.write_record(header)
        .map_err(|e| WriteError::csv(path, e))?;
    let mut n = 0usize;
    for row in rows {
        wtr.write_record(row).map_err(|e| WriteError::csv(path, e))?;
        n += 1;
    }
    finish(wtr, path)?;

    tracing::info!(path = %path.display(), rows = n, "wrote delimited file");
    Ok(n)
}

/// Write typed records to a CSV file at `path`.
///
/// The header row is derived from the field names of `T` by the `csv` crate's
/// Serde support and written before the first record. An empty `records`
/// produces an empty file, since there is no record to take a header from.
///
/// # Returns
/// The number of records written.
///
/// # Errors
/// See [`write_delimited`].
pub fn write_delimited_records<T, I>(
    records: I,
    path: impl AsRef<Path>,
    overwrite: impl Into<Overwrite>,
) -> Result<usize>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let path = path.as_ref();
    let config = DelimitedConfig::default().with_overwrite(overwrite);
    let file = open_destination(path, config.overwrite)?;
    let mut wtr = builder(&config).has_headers(true).from_writer(file);

    let mut n = 0usize;
    for rec in records {
        wtr.serialize(rec).map_err(|e| WriteError::csv(path, e))?;
        n += 1;
    }
    finish(wtr, path)?;

    tracing::info!(path = %path.display(), rows = n, "wrote delimited records");
    Ok(n)
}

fn finish(mut wtr: csv::Writer<File>, path: &Path) -> Result<()> {
    wtr.flush().map_err(|e| WriteError::io(path, e))?;
    let file = wtr
        .into_inner()
        .map_err(|e| WriteError::io(path, e.into_error()))?;
    file.sync_all().map_err(|e| WriteError::io(path, e))
}
