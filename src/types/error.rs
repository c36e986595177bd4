//! Error types for the cash-flow ledger
//!
//! This module defines the errors that can surface at the ledger's boundary.
//! The engine itself never fails on bad numbers or unknown identifiers: those are
//! coerced to zero or ignored. What remains are inputs that cannot be applied at all.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **CSV Parsing Errors**: Malformed rows in the entry file
//! - **Field Errors**: Unknown kinds, categories, statuses, dates, periods and field names
//! - **Kind Mismatches**: A status or field that belongs to the other entry kind

use super::entry::EntryKind;
use super::status::Status;
use thiserror::Error;

/// Main error type for the ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Recoverable: the malformed row is skipped.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Entry kind is neither payable nor receivable
    #[error("Invalid entry kind '{value}'")]
    InvalidKind {
        /// The rejected text
        value: String,
    },

    /// Category outside the fixed set
    #[error("Invalid category '{value}'")]
    InvalidCategory {
        /// The rejected text
        value: String,
    },

    /// Status text that names no known status
    #[error("Invalid status '{value}'")]
    InvalidStatus {
        /// The rejected text
        value: String,
    },

    /// A known status that the entry kind cannot hold (e.g. a payable marked Received)
    #[error("Status {status} is not allowed for {kind} entries")]
    StatusNotAllowed {
        /// The rejected status
        status: Status,
        /// Kind of the target entry
        kind: EntryKind,
    },

    /// A field that exists on the other entry kind only
    #[error("Field '{field}' does not apply to {kind} entries")]
    FieldNotApplicable {
        /// Field name
        field: String,
        /// Kind of the target entry
        kind: EntryKind,
    },

    /// A field name outside the entry's declared field set
    #[error("Unknown field '{field}' for {kind} entries")]
    UnknownField {
        /// Field name
        field: String,
        /// Kind of the target entry
        kind: EntryKind,
    },

    /// Date text that is neither empty nor an ISO calendar date
    #[error("Invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected text
        value: String,
    },

    /// Period text that is not a valid year-month
    #[error("Invalid period '{value}', expected YYYY-MM")]
    InvalidPeriod {
        /// The rejected text
        value: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidKind error
    pub fn invalid_kind(value: &str) -> Self {
        LedgerError::InvalidKind {
            value: value.to_string(),
        }
    }

    /// Create an InvalidCategory error
    pub fn invalid_category(value: &str) -> Self {
        LedgerError::InvalidCategory {
            value: value.to_string(),
        }
    }

    /// Create an InvalidStatus error
    pub fn invalid_status(value: &str) -> Self {
        LedgerError::InvalidStatus {
            value: value.to_string(),
        }
    }

    /// Create a StatusNotAllowed error
    pub fn status_not_allowed(status: Status, kind: EntryKind) -> Self {
        LedgerError::StatusNotAllowed { status, kind }
    }

    /// Create a FieldNotApplicable error
    pub fn field_not_applicable(field: &str, kind: EntryKind) -> Self {
        LedgerError::FieldNotApplicable {
            field: field.to_string(),
            kind,
        }
    }

    /// Create an UnknownField error
    pub fn unknown_field(field: &str, kind: EntryKind) -> Self {
        LedgerError::UnknownField {
            field: field.to_string(),
            kind,
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(value: &str) -> Self {
        LedgerError::InvalidDate {
            value: value.to_string(),
        }
    }

    /// Create an InvalidPeriod error
    pub fn invalid_period(value: &str) -> Self {
        LedgerError::InvalidPeriod {
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_not_found(
        LedgerError::FileNotFound { path: "entries.csv".to_string() },
        "File not found: entries.csv"
    )]
    #[case::parse_error_with_line(
        LedgerError::ParseError { line: Some(7), message: "unequal lengths".to_string() },
        "CSV parse error at line 7: unequal lengths"
    )]
    #[case::parse_error_without_line(
        LedgerError::ParseError { line: None, message: "unequal lengths".to_string() },
        "CSV parse error: unequal lengths"
    )]
    #[case::status_not_allowed(
        LedgerError::StatusNotAllowed { status: Status::Received, kind: EntryKind::Payable },
        "Status Received is not allowed for payable entries"
    )]
    #[case::field_not_applicable(
        LedgerError::FieldNotApplicable { field: "category".to_string(), kind: EntryKind::Receivable },
        "Field 'category' does not apply to receivable entries"
    )]
    #[case::invalid_date(
        LedgerError::InvalidDate { value: "31/12/2026".to_string() },
        "Invalid date '31/12/2026', expected YYYY-MM-DD"
    )]
    #[case::invalid_period(
        LedgerError::InvalidPeriod { value: "2026-13".to_string() },
        "Invalid period '2026-13', expected YYYY-MM"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::status_not_allowed(
        LedgerError::status_not_allowed(Status::Paid, EntryKind::Receivable),
        LedgerError::StatusNotAllowed { status: Status::Paid, kind: EntryKind::Receivable }
    )]
    #[case::unknown_field(
        LedgerError::unknown_field("colour", EntryKind::Payable),
        LedgerError::UnknownField { field: "colour".to_string(), kind: EntryKind::Payable }
    )]
    #[case::invalid_category(
        LedgerError::invalid_category("Travel"),
        LedgerError::InvalidCategory { value: "Travel".to_string() }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
