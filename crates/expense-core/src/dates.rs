//! Calendar-date parsing for the CSV `Date` column.

use chrono::NaiveDate;

/// Formats tried in order when parsing a `Date` field.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%Y/%m/%d", "%d-%b-%Y"];

/// Parse a date field into a [`NaiveDate`], returning `None` when no known
/// format matches.
///
/// Spreadsheet exports sometimes carry a time-of-day suffix
/// (`2019-01-15 00:00:00` or `2019-01-15T00:00:00`); the portion before the
/// separator is tried as a fallback.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for candidate in [trimmed, date_portion(trimmed)] {
        for fmt in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(candidate, fmt) {
                return Some(date);
            }
        }
    }
    None
}

/// The part of `s` before any `T` or space separator.
fn date_portion(s: &str) -> &str {
    s.split(['T', ' ']).next().unwrap_or(s)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
