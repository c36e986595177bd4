//! I/O module
//!
//! Handles everything that crosses the ledger's boundary as text.
//!
//! # Components
//!
//! - `field_input` - Coercion of free-form text into typed field values
//! - `csv_format` - CSV format handling (row conversion, report serialization)
//! - `reader` - Streaming entry CSV reader with iterator interface

pub mod csv_format;
pub mod field_input;
pub mod reader;

pub use csv_format::{
    convert_entry_row, write_entries_csv, write_summary_csv, EntryRecord, EntryRow,
};
pub use field_input::{parse_amount, parse_date, parse_signed_amount};
pub use reader::EntryReader;
