//! Payable and receivable entries
//!
//! This module defines the two entry kinds tracked by the ledger, the closed
//! category set for payables, and the typed field updates the engine applies.

use super::error::LedgerError;
use super::status::Status;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Entry identifier
///
/// Issued by the engine, unique and stable for the lifetime of the entry.
pub type EntryId = u64;

/// Discriminates the two entry collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// An obligation to pay a counterparty by a due date
    Payable,

    /// An expected incoming payment from a client
    Receivable,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Payable => "payable",
            EntryKind::Receivable => "receivable",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "payable" => Ok(EntryKind::Payable),
            "receivable" => Ok(EntryKind::Receivable),
            _ => Err(LedgerError::invalid_kind(s)),
        }
    }
}

/// Expense category of a payable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    Rent,
    Suppliers,
    Taxes,
    Payroll,
    Electricity,
    Water,
    Internet,
    #[default]
    Other,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 8] = [
        Category::Rent,
        Category::Suppliers,
        Category::Taxes,
        Category::Payroll,
        Category::Electricity,
        Category::Water,
        Category::Internet,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Rent => "Rent",
            Category::Suppliers => "Suppliers",
            Category::Taxes => "Taxes",
            Category::Payroll => "Payroll",
            Category::Electricity => "Electricity",
            Category::Water => "Water",
            Category::Internet => "Internet",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LedgerError::invalid_category(s))
    }
}

/// An obligation to pay a counterparty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayableEntry {
    pub id: EntryId,

    /// Due date; `None` until the user sets one
    pub due_date: Option<NaiveDate>,

    /// Counterparty (supplier) name
    pub supplier: String,

    pub category: Category,
    pub description: String,

    /// Non-negative amount owed
    pub amount: Decimal,

    /// Status snapshot taken at the last date or status edit
    pub status: Status,

    pub payment_method: String,
}

impl PayableEntry {
    /// Create a payable with default fields: no date, category Other, amount 0, status Open
    pub fn new(id: EntryId) -> Self {
        PayableEntry {
            id,
            due_date: None,
            supplier: String::new(),
            category: Category::default(),
            description: String::new(),
            amount: Decimal::ZERO,
            status: Status::default_for(EntryKind::Payable),
            payment_method: String::new(),
        }
    }
}

/// An expected incoming payment from a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceivableEntry {
    pub id: EntryId,

    /// Expected receipt date; `None` until the user sets one
    pub receipt_date: Option<NaiveDate>,

    pub client: String,
    pub description: String,

    /// Non-negative amount expected
    pub amount: Decimal,

    /// Status snapshot taken at the last date or status edit
    pub status: Status,

    pub receipt_method: String,
}

impl ReceivableEntry {
    /// Create a receivable with default fields: no date, amount 0, status Pending
    pub fn new(id: EntryId) -> Self {
        ReceivableEntry {
            id,
            receipt_date: None,
            client: String::new(),
            description: String::new(),
            amount: Decimal::ZERO,
            status: Status::default_for(EntryKind::Receivable),
            receipt_method: String::new(),
        }
    }
}

/// A single-field edit to an entry
///
/// Fields are named generically so one update type serves both kinds:
/// `Date` is the due date of a payable or the receipt date of a receivable,
/// `Party` the supplier or the client, `Method` the payment or receipt method.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Date(Option<NaiveDate>),
    Party(String),
    /// Payables only
    Category(Category),
    Description(String),
    Amount(Decimal),
    Status(Status),
    Method(String),
}

impl FieldUpdate {
    /// Canonical field name, used in errors and logs
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldUpdate::Date(_) => "date",
            FieldUpdate::Party(_) => "party",
            FieldUpdate::Category(_) => "category",
            FieldUpdate::Description(_) => "description",
            FieldUpdate::Amount(_) => "amount",
            FieldUpdate::Status(_) => "status",
            FieldUpdate::Method(_) => "method",
        }
    }

    /// Whether applying this update requires re-deriving the status
    pub fn affects_status(&self) -> bool {
        matches!(self, FieldUpdate::Date(_) | FieldUpdate::Status(_))
    }
}
