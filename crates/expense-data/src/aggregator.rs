//! Pure aggregation queries over an [`ExpenseLedger`].
//!
//! Every function here is a read-only view over the ledger: results are
//! recomputed on each call and the ledger is never mutated.

use std::collections::HashMap;

use chrono::Datelike;
use expense_core::currency::round_currency;
use expense_core::error::{ExpenseError, Result};
use expense_core::models::{
    CategoryCount, CategoryRanking, ExpenseLedger, ExpenseRecord, MonthlyBreakdown, YearSelector,
};
use rust_decimal::Decimal;

// ── Year queries ──────────────────────────────────────────────────────────────

/// Distinct calendar years present in the ledger, ascending.
pub fn years_present(ledger: &ExpenseLedger) -> Vec<i32> {
    let mut years: Vec<i32> = ledger.records().iter().map(|r| r.date.year()).collect();
    years.sort_unstable();
    years.dedup();
    years
}

/// Labels for a year-selection control: `"All"` followed by each 4-digit
/// year present, ascending.
pub fn year_labels(ledger: &ExpenseLedger) -> Vec<String> {
    let mut labels = vec![YearSelector::All.to_string()];
    labels.extend(years_present(ledger).into_iter().map(|y| format!("{y:04}")));
    labels
}

/// Resolve a raw selection label against the years actually present.
///
/// Rejects labels that are neither `"All"` nor a year with records in the
/// ledger, so a stale menu choice surfaces as an error instead of a silently
/// empty report. The aggregation functions themselves never error: a valid
/// selector over an empty subset yields zeros.
pub fn resolve_selector(ledger: &ExpenseLedger, label: &str) -> Result<YearSelector> {
    let selector: YearSelector = label.parse()?;
    if let YearSelector::Year(year) = selector {
        if !years_present(ledger).contains(&year) {
            return Err(ExpenseError::UnknownSelection(label.to_string()));
        }
    }
    Ok(selector)
}

// ── Aggregation ───────────────────────────────────────────────────────────────

/// Sum of `amount` per calendar month over the selected records, each month
/// rounded half-up to 2 decimal places.
///
/// Order is fixed January through December regardless of data order; months
/// without records stay 0.00.
pub fn monthly_breakdown(ledger: &ExpenseLedger, selector: YearSelector) -> MonthlyBreakdown {
    let mut sums = [Decimal::ZERO; 12];
    for record in selected(ledger, selector) {
        sums[record.date.month0() as usize] += record.amount;
    }
    for sum in &mut sums {
        *sum = round_currency(*sum);
    }
    MonthlyBreakdown::from_sums(sums)
}

/// Total `amount` over the selected records, rounded to 2 decimal places.
/// An empty selection totals 0.00.
pub fn total(ledger: &ExpenseLedger, selector: YearSelector) -> Decimal {
    round_currency(selected(ledger, selector).map(|r| r.amount).sum())
}

/// The `n` most frequent categories (by row count, not amount sum) among the
/// selected records, count descending.
///
/// Ties resolve by first-encountered order in the ledger: candidates are
/// collected in insertion order and the sort is stable, so equal counts keep
/// the order their categories first appeared in.
pub fn top_categories(
    ledger: &ExpenseLedger,
    selector: YearSelector,
    n: usize,
) -> CategoryRanking {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for record in selected(ledger, selector) {
        let slot = counts.entry(record.category.as_str()).or_insert(0);
        if *slot == 0 {
            order.push(record.category.as_str());
        }
        *slot += 1;
    }

    let mut ranking: Vec<CategoryCount> = order
        .into_iter()
        .map(|category| CategoryCount {
            category: category.to_string(),
            count: counts[category],
        })
        .collect();
    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking.truncate(n);
    ranking
}

// ── Private ───────────────────────────────────────────────────────────────────

fn selected(
    ledger: &ExpenseLedger,
    selector: YearSelector,
) -> impl Iterator<Item = &ExpenseRecord> {
    ledger
        .records()
        .iter()
        .filter(move |r| selector.matches(r.date))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
