use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Monthly and yearly expense reporting over archived CSV records
#[derive(Parser, Debug, Clone)]
#[command(
    name = "expense-report",
    about = "Monthly and yearly expense reporting over archived CSV records",
    version
)]
pub struct Settings {
    /// Zip archive, directory, or single CSV file holding expense records
    pub archive: PathBuf,

    /// Year to report on, or "All" for every year
    #[arg(long, default_value = "All")]
    pub year: String,

    /// Number of top spending categories to show
    #[arg(long, default_value = "3")]
    pub top: usize,

    /// Width in characters of the monthly bar chart
    #[arg(long, default_value = "40", value_parser = clap::value_parser!(u16).range(10..=120))]
    pub chart_width: u16,

    /// Logging level
    #[arg(long, default_value = "warn", value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: String,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
