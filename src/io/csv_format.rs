//! CSV format handling for entry rows and reports
//!
//! This module centralizes all CSV format concerns, providing:
//! - EntryRow structure for deserialization
//! - Conversion from rows to an entry kind plus the fields to apply
//! - Summary and entry listing serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::core::Aggregates;
use crate::types::{EntryKind, LedgerError, PayableEntry, Period, ReceivableEntry};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use std::io::Write;

/// Order in which row fields are applied to a new entry
///
/// Status comes last so that the derivation rule sees the row's date.
pub const FIELD_ORDER: [&str; 7] = [
    "date",
    "party",
    "category",
    "description",
    "amount",
    "method",
    "status",
];

/// CSV row structure for deserialization
///
/// Columns: kind, date, party, category, description, amount, status, method.
/// Every column except `kind` may be empty or missing.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct EntryRow {
    pub kind: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub party: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub method: String,
}

/// A row resolved to its entry kind and the non-empty fields to apply
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRecord {
    /// Line number in the source file (header is line 1)
    pub line: u64,
    pub kind: EntryKind,
    /// `(field name, raw value)` pairs in `FIELD_ORDER`
    pub fields: Vec<(&'static str, String)>,
}

/// Convert an EntryRow into an EntryRecord
///
/// Only the kind is validated here; field values are coerced or rejected one by
/// one when applied, so a bad date does not discard the rest of the row.
pub fn convert_entry_row(row: EntryRow, line: u64) -> Result<EntryRecord, LedgerError> {
    let kind: EntryKind = row.kind.parse()?;

    let fields = FIELD_ORDER
        .into_iter()
        .zip([
            row.date,
            row.party,
            row.category,
            row.description,
            row.amount,
            row.method,
            row.status,
        ])
        .filter(|(_, value)| !value.trim().is_empty())
        .collect();

    Ok(EntryRecord { line, kind, fields })
}

/// Money rounded half away from zero to 2 places
pub fn format_money(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Percentage rounded half away from zero to 1 place
pub fn format_percent(value: Decimal) -> String {
    format!(
        "{:.1}",
        value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    )
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn write_failed(what: &str, error: csv::Error) -> LedgerError {
    LedgerError::IoError {
        message: format!("Failed to write {}: {}", what, error),
    }
}

/// Write the summary report
///
/// Two columns, `metric,value`, one row per figure in a fixed order.
pub fn write_summary_csv(
    period: Period,
    aggregates: &Aggregates,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    let rows: [(&str, String); 17] = [
        ("period", period.to_string()),
        ("period_label", period.label()),
        ("total_payable", format_money(aggregates.total_payable)),
        ("total_paid", format_money(aggregates.total_paid)),
        ("total_open_payable", format_money(aggregates.total_open_payable)),
        ("total_receivable", format_money(aggregates.total_receivable)),
        ("total_received", format_money(aggregates.total_received)),
        (
            "total_pending_receivable",
            format_money(aggregates.total_pending_receivable),
        ),
        ("cash_inflow", format_money(aggregates.cash_inflow)),
        ("cash_outflow", format_money(aggregates.cash_outflow)),
        ("month_result", format_money(aggregates.month_result)),
        ("result_kind", aggregates.result_kind().to_string()),
        ("opening_balance", format_money(aggregates.opening_balance)),
        ("closing_balance", format_money(aggregates.closing_balance)),
        ("overdue_payables", aggregates.overdue.payables.to_string()),
        (
            "overdue_receivables",
            aggregates.overdue.receivables.to_string(),
        ),
        ("profit_margin", format_percent(aggregates.profit_margin)),
    ];

    writer
        .write_record(["metric", "value"])
        .map_err(|e| write_failed("summary header", e))?;

    for (metric, value) in rows {
        writer
            .write_record([metric, value.as_str()])
            .map_err(|e| write_failed("summary row", e))?;
    }

    writer.flush()?;
    Ok(())
}

/// Write every entry, payables first, each kind in insertion order
pub fn write_entries_csv(
    payables: &[PayableEntry],
    receivables: &[ReceivableEntry],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer
        .write_record([
            "kind",
            "id",
            "date",
            "party",
            "category",
            "description",
            "amount",
            "status",
            "method",
        ])
        .map_err(|e| write_failed("entries header", e))?;

    for entry in payables {
        let id = entry.id.to_string();
        let date = format_date(entry.due_date);
        let amount = format_money(entry.amount);
        let record: [&str; 9] = [
            EntryKind::Payable.as_str(),
            &id,
            &date,
            &entry.supplier,
            entry.category.as_str(),
            &entry.description,
            &amount,
            entry.status.as_str(),
            &entry.payment_method,
        ];
        writer
            .write_record(record)
            .map_err(|e| write_failed("payable row", e))?;
    }

    for entry in receivables {
        let id = entry.id.to_string();
        let date = format_date(entry.receipt_date);
        let amount = format_money(entry.amount);
        let record: [&str; 9] = [
            EntryKind::Receivable.as_str(),
            &id,
            &date,
            &entry.client,
            "",
            &entry.description,
            &amount,
            entry.status.as_str(),
            &entry.receipt_method,
        ];
        writer
            .write_record(record)
            .map_err(|e| write_failed("receivable row", e))?;
    }

    writer.flush()?;
    Ok(())
}
