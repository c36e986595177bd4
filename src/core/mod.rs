//! Core business logic module
//!
//! This module contains the ledger components:
//! - `traits` - Seams for entry kinds and the clock
//! - `engine` - The session-scoped ledger engine
//! - `entry_book` - Insertion-ordered entry storage and field edits
//! - `aggregates` - Totals, counts and ratios derived from the entries

pub mod aggregates;
pub mod engine;
pub mod entry_book;
pub mod traits;

pub use aggregates::{Aggregates, KindTotals, OverdueCounts, ResultKind};
pub use engine::LedgerEngine;
pub use entry_book::EntryBook;
pub use traits::{Clock, FixedClock, LedgerEntry, SystemClock};
