//! Writer configuration.
//!
//! The plain entry points (`write_delimited`, `write_json_collection`) use
//! the defaults below; the `*_with` variants take these structs directly.

use crate::clock::DEFAULT_FILE_NAME_FORMAT;
use crate::guard::Overwrite;

/// Line ending written after each CSV record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordTerminator {
    /// `\r\n`, the conventional CSV line ending.
    #[default]
    Crlf,
    /// Any single byte, e.g. `b'\n'`.
    Any(u8),
}

/// Options for delimited (CSV) output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DelimitedConfig {
    /// Policy when the destination already exists.
    pub overwrite: Overwrite,
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Record terminator.
    pub terminator: RecordTerminator,
}

impl Default for DelimitedConfig {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Deny,
            delimiter: b',',
            terminator: RecordTerminator::Crlf,
        }
    }
}

impl DelimitedConfig {
    pub fn with_overwrite(mut self, overwrite: impl Into<Overwrite>) -> Self {
        self.overwrite = overwrite.into();
        self
    }
}

/// Options for timestamp-named JSON collection output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonCollectionConfig {
    /// Policy when the destination already exists.
    pub overwrite: Overwrite,
    /// Spaces per indentation level.
    pub indent: usize,
    /// `strftime` pattern for the file stem.
    pub file_name_format: String,
    /// File extension, without the leading dot.
    pub extension: String,
}

impl Default for JsonCollectionConfig {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Deny,
            indent: 4,
            file_name_format: DEFAULT_FILE_NAME_FORMAT.to_string(),
            extension: "json".to_string(),
        }
    }
}

impl JsonCollectionConfig {
    pub fn with_overwrite(mut self, overwrite: impl Into<Overwrite>) -> Self {
        self.overwrite = overwrite.into();
        self
    }
}
