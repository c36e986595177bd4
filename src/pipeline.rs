//! Entry file processing pipeline
//!
//! Orchestrates a full run by coordinating between the EntryReader (CSV input),
//! the LedgerEngine (business logic) and the csv_format writers (report output).
//!
//! Each row is replayed the way a user would type it: a default entry is added,
//! then every non-empty field is applied as a separate edit. Row and field
//! problems are logged and skipped; only failing to open the input or write the
//! report aborts the run.

use crate::cli::ReportType;
use crate::core::{Clock, LedgerEngine};
use crate::io::csv_format::{write_entries_csv, write_summary_csv, EntryRecord};
use crate::io::reader::EntryReader;
use crate::types::{FieldUpdate, LedgerError, Period};
use rust_decimal::Decimal;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Counts describing how an input file was loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    /// Rows that produced an entry
    pub rows_loaded: usize,

    /// Rows rejected outright (bad kind, CSV syntax)
    pub rows_skipped: usize,

    /// Individual fields rejected on otherwise valid rows
    pub fields_skipped: usize,
}

/// Add one entry for `record` and apply its fields in order
///
/// Returns the number of fields that were rejected.
pub fn apply_record<C: Clock>(engine: &mut LedgerEngine<C>, record: &EntryRecord) -> usize {
    let id = engine.add_entry(record.kind);
    let mut rejected = 0;

    for (field, value) in &record.fields {
        let outcome = FieldUpdate::parse(record.kind, field, value)
            .and_then(|update| engine.update_entry(record.kind, id, update));

        if let Err(e) = outcome {
            warn!(line = record.line, field = *field, error = %e, "field skipped");
            rejected += 1;
        }
    }

    rejected
}

/// Replay every record from `records` into `engine`
pub fn load_entries<C, I>(engine: &mut LedgerEngine<C>, records: I) -> LoadSummary
where
    C: Clock,
    I: IntoIterator<Item = Result<EntryRecord, LedgerError>>,
{
    let mut summary = LoadSummary::default();

    for result in records {
        match result {
            Ok(record) => {
                summary.fields_skipped += apply_record(engine, &record);
                summary.rows_loaded += 1;
            }
            Err(e) => {
                warn!(error = %e, "row skipped");
                summary.rows_skipped += 1;
            }
        }
    }

    summary
}

/// A configured run: input file in, report out
#[derive(Debug, Clone)]
pub struct LedgerPipeline<C> {
    clock: C,
    opening_balance: Decimal,
    period: Option<Period>,
    report: ReportType,
}

impl<C: Clock + Clone> LedgerPipeline<C> {
    /// Create a pipeline writing the summary report with a zero opening balance
    ///
    /// # Arguments
    ///
    /// * `clock` - Supplies "today" for every status derived during the run
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cashflow_ledger::cli::ReportType;
    /// use cashflow_ledger::{FixedClock, LedgerPipeline, Period};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    /// use std::path::Path;
    ///
    /// let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    /// let pipeline = LedgerPipeline::new(FixedClock(today))
    ///     .with_opening_balance(Decimal::new(1000, 0))
    ///     .with_period(Period::new(2026, 10))
    ///     .with_report(ReportType::Summary);
    ///
    /// let summary = pipeline
    ///     .process(Path::new("entries.csv"), &mut std::io::stdout())
    ///     .unwrap();
    /// println!("{} rows loaded", summary.rows_loaded);
    /// ```
    pub fn new(clock: C) -> Self {
        LedgerPipeline {
            clock,
            opening_balance: Decimal::ZERO,
            period: None,
            report: ReportType::Summary,
        }
    }

    /// Start the ledger at `amount`; may be negative
    pub fn with_opening_balance(mut self, amount: Decimal) -> Self {
        self.opening_balance = amount;
        self
    }

    /// Label the report with `period` instead of the clock's month
    ///
    /// `None` keeps the clock's month.
    pub fn with_period(mut self, period: Option<Period>) -> Self {
        self.period = period;
        self
    }

    /// Choose between the summary and the per-entry listing
    pub fn with_report(mut self, report: ReportType) -> Self {
        self.report = report;
        self
    }

    /// Load `input_path` into a fresh engine and write the selected report
    ///
    /// # Arguments
    ///
    /// * `input_path` - Entry CSV file
    /// * `output` - Destination for the report CSV
    ///
    /// # Returns
    ///
    /// Row and field counts describing how the file was loaded
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be opened or the report cannot be
    /// written. Bad rows and fields are logged and skipped.
    pub fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<LoadSummary, LedgerError> {
        let mut engine = LedgerEngine::with_clock(self.clock.clone());
        engine.set_opening_balance(self.opening_balance);
        if let Some(period) = self.period {
            engine.set_period(period);
        }

        let reader = EntryReader::new(input_path)?;
        let summary = load_entries(&mut engine, reader);

        info!(
            loaded = summary.rows_loaded,
            skipped_rows = summary.rows_skipped,
            skipped_fields = summary.fields_skipped,
            "entries loaded"
        );

        if let Some(advisory) = engine.overdue_advisory() {
            warn!("{}", advisory);
        }

        match self.report {
            ReportType::Summary => {
                write_summary_csv(engine.period(), &engine.aggregates(), output)?
            }
            ReportType::Entries => {
                write_entries_csv(engine.payables(), engine.receivables(), output)?
            }
        }

        Ok(summary)
    }
}
