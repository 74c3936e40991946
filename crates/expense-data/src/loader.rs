//! Expense CSV discovery and loading.
//!
//! Expense records are kept as one CSV file per year, bundled in a zip
//! archive. The loader also accepts a directory of CSV files or a single
//! CSV file, and concatenates every entry into one [`ExpenseLedger`].

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use expense_core::currency::parse_amount;
use expense_core::dates::parse_date;
use expense_core::error::{ExpenseError, Result};
use expense_core::models::{ExpenseLedger, ExpenseRecord};
use serde::Deserialize;
use tracing::{debug, warn};

// ── CSV row shape ─────────────────────────────────────────────────────────────

/// Raw CSV row as it appears on disk. `Date` and `Expense` are required
/// columns; `Category` defaults to empty when the column is absent. Any
/// additional columns are ignored.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Category", default)]
    category: String,
    #[serde(rename = "Expense")]
    expense: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every CSV entry reachable from `path` into one ledger.
///
/// `path` may be a `.zip` archive, a directory scanned recursively, or a
/// single `.csv` file. Entry order is preserved: zip entries in archive
/// order, directory files in sorted path order, rows in file order. No
/// deduplication is applied.
pub fn load_ledger(path: &Path) -> Result<ExpenseLedger> {
    let records = if path.is_dir() {
        load_from_directory(path)?
    } else if has_extension(path, "zip") {
        load_from_zip(path)?
    } else if has_extension(path, "csv") {
        let file = open_file(path)?;
        parse_entry(file, &path.display().to_string())?
    } else {
        return Err(ExpenseError::NoCsvEntries(path.to_path_buf()));
    };

    debug!(
        "Loaded {} expense records from {}",
        records.len(),
        path.display()
    );
    Ok(ExpenseLedger::from_records(records))
}

/// Find all `.csv` files recursively under `dir`, sorted by path.
pub fn find_csv_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && has_extension(entry.path(), "csv"))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn load_from_zip(path: &Path) -> Result<Vec<ExpenseRecord>> {
    let file = open_file(path)?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| ExpenseError::ArchiveRead {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut records = Vec::new();
    let mut csv_entries = 0usize;

    for index in 0..archive.len() {
        let entry = archive
            .by_index(index)
            .map_err(|e| ExpenseError::ArchiveRead {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        if !entry.is_file() || !has_extension(Path::new(entry.name()), "csv") {
            continue;
        }

        csv_entries += 1;
        let name = entry.name().to_string();
        records.extend(parse_entry(entry, &name)?);
    }

    if csv_entries == 0 {
        return Err(ExpenseError::NoCsvEntries(path.to_path_buf()));
    }
    Ok(records)
}

fn load_from_directory(dir: &Path) -> Result<Vec<ExpenseRecord>> {
    let files = find_csv_files(dir);
    if files.is_empty() {
        warn!("No CSV files found in {}", dir.display());
        return Err(ExpenseError::NoCsvEntries(dir.to_path_buf()));
    }

    let mut records = Vec::new();
    for file_path in &files {
        let file = open_file(file_path)?;
        records.extend(parse_entry(file, &file_path.display().to_string())?);
    }
    Ok(records)
}

/// Parse one CSV entry into expense records, preserving row order.
///
/// `entry` names the source (zip entry name or file path) so that parse
/// failures are attributable. Row numbers in errors are 1-based data rows,
/// header row excluded.
fn parse_entry(reader: impl Read, entry: &str) -> Result<Vec<ExpenseRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| ExpenseError::Csv {
            entry: entry.to_string(),
            source: e,
        })?
        .clone();
    for column in ["Date", "Expense"] {
        if !headers.iter().any(|h| h == column) {
            return Err(ExpenseError::MissingColumn {
                entry: entry.to_string(),
                column,
            });
        }
    }

    let mut records = Vec::new();
    for (index, result) in csv_reader.deserialize::<RawRow>().enumerate() {
        let row = result.map_err(|e| ExpenseError::Csv {
            entry: entry.to_string(),
            source: e,
        })?;
        let number = index + 1;

        let date = parse_date(&row.date).ok_or_else(|| ExpenseError::InvalidDate {
            entry: entry.to_string(),
            row: number,
            value: row.date.clone(),
        })?;
        let amount = parse_amount(&row.expense).map_err(|_| ExpenseError::InvalidAmount {
            entry: entry.to_string(),
            row: number,
            value: row.expense.clone(),
        })?;

        records.push(ExpenseRecord {
            date,
            category: row.category,
            amount,
        });
    }

    debug!("Parsed {} rows from {}", records.len(), entry);
    Ok(records)
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| ExpenseError::FileOpen {
        path: path.to_path_buf(),
        source: e,
    })
}

fn has_extension(path: &Path, wanted: &str) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case(wanted))
        .unwrap_or(false)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
