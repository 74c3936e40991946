//! Core domain layer for the expense report tool.
//!
//! Holds the expense record and ledger models, currency parsing and
//! formatting, calendar-date parsing, the error types, and the CLI settings.

pub mod currency;
pub mod dates;
pub mod error;
pub mod models;
pub mod settings;
