//! Streaming CSV reader for entry rows
//!
//! Yields one `EntryRecord` per CSV row. Delegates format concerns to the
//! csv_format module.
//!
//! # Error Handling
//!
//! - A missing or unreadable file is returned from `new()`
//! - Row parsing errors are yielded as `Err` items carrying the line number, so a
//!   caller can log them and keep going
//!
//! ```no_run
//! use cashflow_ledger::io::EntryReader;
//! use std::path::Path;
//!
//! let reader = EntryReader::new(Path::new("entries.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("{} entry on line {}", record.kind, record.line),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```

use crate::io::csv_format::{convert_entry_row, EntryRecord, EntryRow};
use crate::types::LedgerError;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Entry CSV reader with an iterator interface
#[derive(Debug)]
pub struct EntryReader {
    reader: csv::Reader<File>,
    rows_read: u64,
}

impl EntryReader {
    /// Open an entry CSV file
    ///
    /// The reader trims whitespace around every field and tolerates rows with
    /// fewer columns than the header.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a CSV file with a `kind,date,party,...` header
    ///
    /// # Returns
    ///
    /// A reader positioned before the first data row
    ///
    /// # Errors
    ///
    /// * `FileNotFound` if nothing exists at `path`
    /// * `IoError` for any other open failure
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LedgerError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => LedgerError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(file);

        Ok(Self {
            reader,
            rows_read: 0,
        })
    }
}

impl Iterator for EntryReader {
    type Item = Result<EntryRecord, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<EntryRow>();
        let result = deserializer.next()?;

        self.rows_read += 1;
        // Header occupies line 1.
        let line = self.rows_read + 1;

        Some(
            result
                .map_err(LedgerError::from)
                .and_then(|row| convert_entry_row(row, line))
                .map_err(|e| match e {
                    LedgerError::ParseError { .. } => e,
                    other => LedgerError::ParseError {
                        line: Some(line),
                        message: other.to_string(),
                    },
                }),
        )
    }
}
