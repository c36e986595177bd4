//! Derived financial figures
//!
//! This module computes every total, count and ratio the ledger reports. Nothing
//! is cached: `Aggregates::compute` walks both collections on every call, so the
//! figures can never go stale after a mutation.
//!
//! # Definitions
//!
//! - Settled: entries holding the kind's terminal status (Paid / Received)
//! - Outstanding: every other entry, including Overdue ones
//! - Cash inflow = total received, cash outflow = total paid
//! - Month result = inflow - outflow; closing balance = opening balance + month result
//! - Profit margin = month result / inflow x 100, or 0 when inflow is 0
//! - The month is a profit when the result is zero or positive, a loss otherwise
//!
//! # Overflow
//!
//! Every sum is checked. A figure that would leave the `Decimal` range saturates
//! at `Decimal::MAX` / `Decimal::MIN` and a warning names the figure.

use crate::core::traits::LedgerEntry;
use crate::types::{PayableEntry, ReceivableEntry, Status};
use rust_decimal::Decimal;
use std::fmt;
use tracing::warn;

/// `a + b`, saturating at the `Decimal` bounds
fn checked_sum(a: Decimal, b: Decimal, figure: &'static str) -> Decimal {
    a.checked_add(b).unwrap_or_else(|| {
        warn!(figure, "sum overflowed; saturating");
        a.saturating_add(b)
    })
}

/// `a - b`, saturating at the `Decimal` bounds
fn checked_difference(a: Decimal, b: Decimal, figure: &'static str) -> Decimal {
    a.checked_sub(b).unwrap_or_else(|| {
        warn!(figure, "difference overflowed; saturating");
        a.saturating_sub(b)
    })
}

/// Sums and counts for one entry kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KindTotals {
    /// Sum of all amounts
    pub total: Decimal,

    /// Sum of amounts holding the terminal status
    pub settled: Decimal,

    /// Sum of amounts not holding the terminal status
    pub outstanding: Decimal,

    /// Number of Overdue entries
    pub overdue: usize,
}

impl KindTotals {
    /// Total one collection in a single pass
    pub fn of<E: LedgerEntry>(entries: &[E]) -> Self {
        let terminal = Status::terminal_for(E::KIND);

        entries.iter().fold(KindTotals::default(), |mut acc, entry| {
            acc.total = checked_sum(acc.total, entry.amount(), "total");
            if entry.status() == terminal {
                acc.settled = checked_sum(acc.settled, entry.amount(), "settled");
            } else {
                acc.outstanding = checked_sum(acc.outstanding, entry.amount(), "outstanding");
            }
            if entry.status() == Status::Overdue {
                acc.overdue += 1;
            }
            acc
        })
    }
}

/// Overdue entry counts, surfaced together as an advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverdueCounts {
    pub payables: usize,
    pub receivables: usize,
}

impl OverdueCounts {
    pub fn any(&self) -> bool {
        self.payables > 0 || self.receivables > 0
    }

    /// Advisory sentence, or `None` when nothing is overdue
    pub fn advisory(&self) -> Option<String> {
        self.any().then(|| {
            format!(
                "You have {} overdue payables and {} overdue receivables.",
                self.payables, self.receivables
            )
        })
    }
}

/// Whether the month closed with a profit or a loss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Profit,
    Loss,
}

impl ResultKind {
    /// Classify a month result; zero counts as a profit
    pub fn of(month_result: Decimal) -> Self {
        if month_result >= Decimal::ZERO {
            ResultKind::Profit
        } else {
            ResultKind::Loss
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResultKind::Profit => "profit",
            ResultKind::Loss => "loss",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every figure derived from the ledger state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Aggregates {
    pub total_payable: Decimal,
    pub total_paid: Decimal,
    pub total_open_payable: Decimal,

    pub total_receivable: Decimal,
    pub total_received: Decimal,
    pub total_pending_receivable: Decimal,

    pub cash_inflow: Decimal,
    pub cash_outflow: Decimal,
    pub month_result: Decimal,

    pub opening_balance: Decimal,
    pub closing_balance: Decimal,

    pub overdue: OverdueCounts,

    /// Percentage; 0 when there is no inflow
    pub profit_margin: Decimal,
}

impl Aggregates {
    /// Compute all figures from the current collections
    pub fn compute(
        payables: &[PayableEntry],
        receivables: &[ReceivableEntry],
        opening_balance: Decimal,
    ) -> Self {
        let payable = KindTotals::of(payables);
        let receivable = KindTotals::of(receivables);

        let cash_inflow = receivable.settled;
        let cash_outflow = payable.settled;
        let month_result = checked_difference(cash_inflow, cash_outflow, "month_result");

        Aggregates {
            total_payable: payable.total,
            total_paid: payable.settled,
            total_open_payable: payable.outstanding,
            total_receivable: receivable.total,
            total_received: receivable.settled,
            total_pending_receivable: receivable.outstanding,
            cash_inflow,
            cash_outflow,
            month_result,
            opening_balance,
            closing_balance: checked_sum(opening_balance, month_result, "closing_balance"),
            overdue: OverdueCounts {
                payables: payable.overdue,
                receivables: receivable.overdue,
            },
            profit_margin: profit_margin(month_result, cash_inflow),
        }
    }

    /// Profit or loss, from the sign of the month result
    pub fn result_kind(&self) -> ResultKind {
        ResultKind::of(self.month_result)
    }
}

/// `result / inflow * 100`, defined as 0 when inflow is 0
pub fn profit_margin(month_result: Decimal, cash_inflow: Decimal) -> Decimal {
    if cash_inflow.is_zero() {
        return Decimal::ZERO;
    }

    month_result
        .checked_div(cash_inflow)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}
