//! Pure transformations from the transaction collection into report-ready
//! aggregates. Every function is deterministic given its inputs and a
//! caller-supplied reference date, and none mutates its arguments;
//! consumers recompute on each change instead of caching.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::currency::format_day_label;
use crate::ledger::{Category, Transaction, TransactionKind};

/// Date bucket selecting which transactions participate in a report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum DateFilter {
    Total,
    Today,
    Week,
    Month,
}

impl DateFilter {
    /// Whether `date` falls inside the bucket anchored at `reference`.
    /// Weeks run Monday through Sunday; months cover the full calendar
    /// month. Comparisons are by calendar day only.
    pub fn matches(self, date: NaiveDate, reference: NaiveDate) -> bool {
        match self {
            DateFilter::Total => true,
            DateFilter::Today => date == reference,
            DateFilter::Week => {
                let start = week_start(reference);
                match start.checked_add_days(Days::new(6)) {
                    Some(end) => date >= start && date <= end,
                    None => date >= start,
                }
            }
            DateFilter::Month => {
                date.year() == reference.year() && date.month() == reference.month()
            }
        }
    }
}

fn week_start(reference: NaiveDate) -> NaiveDate {
    let offset = u64::from(reference.weekday().num_days_from_monday());
    reference
        .checked_sub_days(Days::new(offset))
        .unwrap_or(reference)
}

/// Returns the transactions whose date falls inside the window, preserving
/// input order.
pub fn filter_by_date(
    transactions: &[Transaction],
    filter: DateFilter,
    reference: NaiveDate,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| filter.matches(t.date, reference))
        .cloned()
        .collect()
}

/// Aggregate figures over a transaction subset.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
    pub profit: f64,
    pub count: usize,
}

pub fn compute_totals(transactions: &[Transaction]) -> Totals {
    let mut totals = Totals::default();
    for txn in transactions {
        match txn.kind {
            TransactionKind::Income => totals.income += txn.value,
            TransactionKind::Expense => totals.expense += txn.value,
        }
    }
    totals.profit = totals.income - totals.expense;
    totals.count = transactions.len();
    totals
}

/// One point of the 7-day income trend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyPoint {
    pub label: String,
    pub total: f64,
}

/// Income per day for the seven days ending at `reference`, oldest first.
/// The trend always covers the whole transaction set, regardless of any
/// date filter active elsewhere. Degrades to an empty series instead of
/// failing when the window cannot be computed.
pub fn daily_income_series(transactions: &[Transaction], reference: NaiveDate) -> Vec<DailyPoint> {
    let start = match reference.checked_sub_days(Days::new(6)) {
        Some(start) => start,
        None => return Vec::new(),
    };
    let mut series = Vec::with_capacity(7);
    for offset in 0..7 {
        let day = match start.checked_add_days(Days::new(offset)) {
            Some(day) => day,
            None => return Vec::new(),
        };
        let total = transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Income && t.date == day)
            .map(|t| t.value)
            .sum();
        series.push(DailyPoint {
            label: format_day_label(day),
            total,
        });
    }
    series
}

/// Income grouped by description label, one entry per distinct label.
/// Order is not part of the contract; consumers sort for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelTotal {
    pub name: String,
    pub value: f64,
}

pub fn group_income_by_label(transactions: &[Transaction]) -> Vec<LabelTotal> {
    let mut grouped: BTreeMap<&str, f64> = BTreeMap::new();
    for txn in transactions {
        if txn.kind == TransactionKind::Income {
            *grouped.entry(txn.description.as_str()).or_default() += txn.value;
        }
    }
    grouped
        .into_iter()
        .map(|(name, value)| LabelTotal {
            name: name.to_string(),
            value,
        })
        .collect()
}

/// Number of service rows in a subset (the dashboard attendance stat).
pub fn service_count(transactions: &[Transaction]) -> usize {
    transactions
        .iter()
        .filter(|t| t.category == Category::Service)
        .count()
}
