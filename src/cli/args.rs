use crate::io::parse_signed_amount;
use crate::types::Period;
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Track payables and receivables and summarize the month's cash flow
#[derive(Parser, Debug)]
#[command(name = "cashflow-ledger")]
#[command(about = "Track payables and receivables and summarize the month's cash flow", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing ledger entries
    #[arg(value_name = "INPUT", help = "Path to the entry CSV file")]
    pub input_file: PathBuf,

    /// Opening balance for the period; unparseable values count as 0
    #[arg(
        long = "opening-balance",
        value_name = "AMOUNT",
        allow_hyphen_values = true,
        help = "Opening balance of the period (default: 0)"
    )]
    pub opening_balance: Option<String>,

    /// Reporting period label
    #[arg(
        long = "period",
        value_name = "YYYY-MM",
        help = "Reporting period (default: current month)"
    )]
    pub period: Option<Period>,

    /// Date treated as "today" when deriving overdue statuses
    #[arg(
        long = "today",
        value_name = "YYYY-MM-DD",
        value_parser = parse_today,
        help = "Override today's date for overdue detection"
    )]
    pub today: Option<NaiveDate>,

    /// Which report to write to stdout
    #[arg(
        long = "report",
        value_name = "REPORT",
        default_value = "summary",
        help = "Report to write: 'summary' for totals or 'entries' for every entry"
    )]
    pub report: ReportType,
}

/// Available reports
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportType {
    Summary,
    Entries,
}

fn parse_today(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

impl CliArgs {
    /// Opening balance with the same coercion as any numeric field
    pub fn opening_balance(&self) -> Decimal {
        self.opening_balance
            .as_deref()
            .map(parse_signed_amount)
            .unwrap_or(Decimal::ZERO)
    }
}
