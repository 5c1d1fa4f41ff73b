//! Time sources used to name output files.
//!
//! Writers that derive a file name from the current time take a [`Clock`]
//! so callers (and tests) can pin the timestamp instead of reading the wall
//! clock.

use chrono::{Local, NaiveDateTime};

/// Default `strftime` pattern for timestamped file names, e.g. `2024-01-02_at_03-04-05`.
pub const DEFAULT_FILE_NAME_FORMAT: &str = "%Y-%m-%d_at_%H-%M-%S";

/// A source of "now".
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a single instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Format the clock's current time with `format` and append `.extension`.
///
/// An empty `extension` yields the bare timestamp.
pub fn timestamp_file_name(clock: &dyn Clock, format: &str, extension: &str) -> String {
    let stem = clock.now().format(format).to_string();
    if extension.is_empty() {
        stem
    } else {
        format!("{stem}.{}", extension.trim_start_matches('.'))
    }
}
