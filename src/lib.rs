//! Cash-Flow Ledger Library
//! # Overview
//!
//! This library tracks a small business's payables and receivables for one session
//! and derives a monthly cash-flow summary from them.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (entries, statuses, categories, period, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - The ledger engine owning both entry collections
//!   - [`core::entry_book`] - Insertion-ordered entry storage and field edits
//!   - [`core::aggregates`] - Totals, overdue counts and profit margin
//! - [`io`] - Text coercion, CSV input and report output
//! - [`pipeline`] - Entry file in, report out
//! - [`logging`] - Tracing initialization
//!
//! # Status Rules
//!
//! Each entry kind has one terminal status that only the user sets:
//!
//! - **Payables**: Paid (terminal), Open, Overdue
//! - **Receivables**: Received (terminal), Pending, Overdue
//!
//! Whenever the date or status of an entry is edited, its status is re-derived:
//! the terminal status always wins, otherwise a date strictly before today means
//! Overdue, otherwise the kind's default applies.
//!
//! # Cash Flow
//!
//! - `cash inflow`: Sum of received receivables
//! - `cash outflow`: Sum of paid payables
//! - `month result`: Inflow minus outflow
//! - `closing balance`: Opening balance plus month result
//! - `result kind`: Profit when the month result is zero or positive, loss otherwise

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod pipeline;
pub mod types;

pub use crate::core::{
    Aggregates, Clock, FixedClock, LedgerEngine, OverdueCounts, ResultKind, SystemClock,
};
pub use crate::io::{write_entries_csv, write_summary_csv};
pub use pipeline::LedgerPipeline;
pub use types::{
    Category, EntryId, EntryKind, FieldUpdate, LedgerError, PayableEntry, Period,
    ReceivableEntry, Status,
};
