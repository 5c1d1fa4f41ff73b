//! # Datasink
//!
//! Small, **guarded** file writers for tabular data and a compact text encoding
//! for sparse numeric vectors.
//!
//! ## Key Features
//!
//! - **Overwrite guard** - writes fail instead of clobbering an existing file
//!   unless the caller opts in with [`Overwrite::Allow`]
//! - **Quote-all CSV** - header plus rows, every field quoted
//! - **JSON collections** - records wrapped as `{"data": [...]}` in a
//!   timestamp-named, pretty-printed file
//! - **Sparse vectors** - `<len>,<idx>:<value>,...` with zeros omitted
//! - **Injectable clock** - pin the timestamp used for file names via [`Clock`]
//!
//! ## Quick Start
//!
//! ```no_run
//! use datasink::*;
//! # fn main() -> datasink::Result<()> {
//! write_delimited(["id", "name"], [["1", "Alice"], ["2", "Bob"]], "people.csv", false)?;
//!
//! let records = vec![serde_json::json!({"x": 1})];
//! let path = write_json_collection(records, "./out", Overwrite::Deny)?;
//! println!("wrote {}", path.display());
//!
//! assert_eq!(serialize_sparse_vector(&[0.0, 2.5]), "2,1:2.50000000");
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `io-csv` - Enable the CSV writers (pulls in `csv`)
//! - `io-json` - Enable the JSON collection writer
//!
//! ## Module Overview
//!
//! - [`guard`] - Overwrite policy and exclusive-create file opening
//! - [`io`] - CSV and JSON writers
//! - [`sparse`] - Sparse vector encoding
//! - [`clock`] - Time sources for timestamped file names
//! - [`config`] - Writer options
//! - [`error`] - Error type shared by all writers

pub mod clock;
pub mod config;
pub mod error;
pub mod guard;
pub mod io;
pub mod sparse;

// General re-exports
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{DelimitedConfig, JsonCollectionConfig, RecordTerminator};
pub use error::{Result, WriteError};
pub use guard::{Overwrite, open_destination};
pub use sparse::{SPARSE_VALUE_PRECISION, serialize_sparse_vector, sparse_entries};

// Gated re-exports
#[cfg(feature = "io-csv")]
pub use io::csv::{write_delimited, write_delimited_records, write_delimited_with};

#[cfg(feature = "io-json")]
pub use io::json::{write_json_collection, write_json_collection_with};
