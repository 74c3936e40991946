//! Domain models: expense records, the ledger, and the derived report views.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::error::ExpenseError;

// ── ExpenseRecord / ExpenseLedger ─────────────────────────────────────────────

/// One dated, categorized expense parsed from a CSV row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRecord {
    pub date: NaiveDate,
    pub category: String,
    pub amount: Decimal,
}

/// All parsed expense records, in load order.
///
/// The ledger is immutable after construction: aggregation only reads it,
/// and a new load replaces it wholesale.
#[derive(Debug, Clone, Default)]
pub struct ExpenseLedger {
    records: Vec<ExpenseRecord>,
}

impl ExpenseLedger {
    pub fn from_records(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }

    /// All records in the order they were loaded.
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ── YearSelector ──────────────────────────────────────────────────────────────

/// Report scope: one calendar year, or every year in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearSelector {
    All,
    Year(i32),
}

impl YearSelector {
    /// Whether `date` falls inside the selected scope.
    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            YearSelector::All => true,
            YearSelector::Year(year) => date.year() == *year,
        }
    }
}

impl fmt::Display for YearSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearSelector::All => write!(f, "All"),
            YearSelector::Year(year) => write!(f, "{year:04}"),
        }
    }
}

impl FromStr for YearSelector {
    type Err = ExpenseError;

    /// Accepts `"All"` (any case) or a 4-digit year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(YearSelector::All);
        }
        if trimmed.len() == 4 {
            if let Ok(year) = trimmed.parse::<i32>() {
                return Ok(YearSelector::Year(year));
            }
        }
        Err(ExpenseError::UnknownSelection(s.to_string()))
    }
}

// ── MonthlyBreakdown ──────────────────────────────────────────────────────────

/// Month-name labels in calendar order, aligned with breakdown indices.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Per-month expense sums for one report scope, index 0 = January.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyBreakdown {
    sums: [Decimal; 12],
}

impl MonthlyBreakdown {
    pub fn from_sums(sums: [Decimal; 12]) -> Self {
        Self { sums }
    }

    pub fn as_slice(&self) -> &[Decimal] {
        &self.sums
    }

    /// Sum across all 12 months.
    pub fn total(&self) -> Decimal {
        self.sums.iter().copied().sum()
    }

    /// Largest single month, used to scale bar charts.
    pub fn max(&self) -> Decimal {
        self.sums.iter().copied().max().unwrap_or(Decimal::ZERO)
    }
}

// ── Category ranking ──────────────────────────────────────────────────────────

/// One ranked category with its row-occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Up to N categories, most frequent first.
pub type CategoryRanking = Vec<CategoryCount>;

// ── Tests ─────────────────────────────────────────────────────────────────────
