//! Data layer for the expense report tool.
//!
//! Responsible for discovering and parsing expense CSV files from a zip
//! archive, directory, or single file, and for the pure aggregation queries
//! (monthly breakdowns, totals, top categories) over the loaded ledger.

pub mod aggregator;
pub mod loader;

pub use expense_core as core;
