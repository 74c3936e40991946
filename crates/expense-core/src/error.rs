use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the expense report tool.
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// A file could not be opened for reading.
    #[error("Failed to open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A zip archive exists but could not be read as one.
    #[error("Failed to read archive {path}: {reason}")]
    ArchiveRead { path: PathBuf, reason: String },

    /// The archive or directory holds no CSV entries at all.
    #[error("No CSV entries found in {0}")]
    NoCsvEntries(PathBuf),

    /// A CSV entry is missing a required header column.
    #[error("{entry}: missing required column '{column}'")]
    MissingColumn { entry: String, column: &'static str },

    /// A `Date` field did not match any recognised format.
    #[error("{entry}, row {row}: invalid date '{value}'")]
    InvalidDate {
        entry: String,
        row: usize,
        value: String,
    },

    /// An `Expense` field was not parseable as a currency amount.
    #[error("{entry}, row {row}: invalid amount '{value}'")]
    InvalidAmount {
        entry: String,
        row: usize,
        value: String,
    },

    /// A CSV entry is structurally malformed.
    #[error("{entry}: malformed CSV: {source}")]
    Csv {
        entry: String,
        #[source]
        source: csv::Error,
    },

    /// A year selection label is neither "All" nor a year present in the
    /// ledger.
    #[error("Unknown year selection: {0}")]
    UnknownSelection(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the expense crates.
pub type Result<T> = std::result::Result<T, ExpenseError>;
