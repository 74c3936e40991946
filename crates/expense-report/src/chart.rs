//! Plain-text bar chart for monthly expense sums.

use expense_core::currency::format_currency;
use expense_core::models::{MonthlyBreakdown, MONTH_LABELS};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const FILLED_CHAR: char = '\u{2588}'; // █  FULL BLOCK

/// Render one bar per month, scaled so the largest month fills `width`
/// columns.
///
/// Zero months render an empty bar rather than being skipped, so the chart
/// always lines up January through December.
pub fn render_monthly_chart(breakdown: &MonthlyBreakdown, width: u16) -> String {
    let max = breakdown.max();
    let mut out = String::new();
    for (label, &sum) in MONTH_LABELS.iter().zip(breakdown.as_slice()) {
        let bar = render_bar(sum, max, width);
        out.push_str(&format!(
            "{label} {bar:<bar_width$} {amount}\n",
            bar_width = width as usize,
            amount = format_currency(sum)
        ));
    }
    out
}

/// A bar proportional to `value / max`, at least one character wide for any
/// non-zero value.
fn render_bar(value: Decimal, max: Decimal, width: u16) -> String {
    if max.is_zero() || value.is_zero() {
        return String::new();
    }
    let fraction = (value / max).to_f64().unwrap_or(0.0);
    let filled = ((fraction * f64::from(width)).round() as usize).clamp(1, width as usize);
    std::iter::repeat_n(FILLED_CHAR, filled).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn breakdown_with(entries: &[(usize, Decimal)]) -> MonthlyBreakdown {
        let mut sums = [Decimal::ZERO; 12];
        for &(month, sum) in entries {
            sums[month] = sum;
        }
        MonthlyBreakdown::from_sums(sums)
    }

    #[test]
    fn test_chart_has_twelve_lines_in_calendar_order() {
        let chart = render_monthly_chart(&breakdown_with(&[]), 20);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 12);
        assert!(lines[0].starts_with("Jan"));
        assert!(lines[11].starts_with("Dec"));
    }

    #[test]
    fn test_largest_month_fills_width() {
        let chart = render_monthly_chart(
            &breakdown_with(&[(0, dec!(100.00)), (1, dec!(50.00))]),
            20,
        );
        let jan_bar: String = chart
            .lines()
            .next()
            .unwrap()
            .chars()
            .filter(|&c| c == FILLED_CHAR)
            .collect();
        assert_eq!(jan_bar.chars().count(), 20);
    }

    #[test]
    fn test_half_sized_month_fills_half_width() {
        let chart = render_monthly_chart(
            &breakdown_with(&[(0, dec!(100.00)), (1, dec!(50.00))]),
            20,
        );
        let feb_line = chart.lines().nth(1).unwrap();
        assert_eq!(feb_line.chars().filter(|&c| c == FILLED_CHAR).count(), 10);
    }

    #[test]
    fn test_zero_month_has_no_bar_but_shows_amount() {
        let chart = render_monthly_chart(&breakdown_with(&[(0, dec!(100.00))]), 20);
        let feb_line = chart.lines().nth(1).unwrap();
        assert_eq!(feb_line.chars().filter(|&c| c == FILLED_CHAR).count(), 0);
        assert!(feb_line.ends_with("$0.00"));
    }

    #[test]
    fn test_tiny_month_still_gets_one_character() {
        let chart = render_monthly_chart(
            &breakdown_with(&[(0, dec!(10000.00)), (1, dec!(0.01))]),
            20,
        );
        let feb_line = chart.lines().nth(1).unwrap();
        assert_eq!(feb_line.chars().filter(|&c| c == FILLED_CHAR).count(), 1);
    }

    #[test]
    fn test_amounts_formatted_as_currency() {
        let chart = render_monthly_chart(&breakdown_with(&[(0, dec!(1234.56))]), 20);
        assert!(chart.lines().next().unwrap().ends_with("$1,234.56"));
    }
}
