mod bootstrap;
mod chart;

use anyhow::Result;
use clap::Parser;
use expense_core::currency::format_currency;
use expense_core::models::YearSelector;
use expense_core::settings::Settings;
use expense_data::aggregator;
use expense_data::loader;

fn main() -> Result<()> {
    let settings = Settings::parse();
    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("expense-report v{} starting", env!("CARGO_PKG_VERSION"));

    let ledger = loader::load_ledger(&settings.archive)?;
    tracing::info!(
        "Loaded {} records from {}",
        ledger.len(),
        settings.archive.display()
    );

    let selector = aggregator::resolve_selector(&ledger, &settings.year)?;

    println!("Years: {}", aggregator::year_labels(&ledger).join(", "));
    println!();

    let breakdown = aggregator::monthly_breakdown(&ledger, selector);
    print!(
        "{}",
        chart::render_monthly_chart(&breakdown, settings.chart_width)
    );
    println!();

    println!(
        "Total ({selector}): {}",
        format_currency(aggregator::total(&ledger, selector))
    );
    if selector == YearSelector::All {
        for year in aggregator::years_present(&ledger) {
            let per_year = aggregator::total(&ledger, YearSelector::Year(year));
            println!("  {year}: {}", format_currency(per_year));
        }
    }
    println!();

    let ranking = aggregator::top_categories(&ledger, selector, settings.top);
    if ranking.is_empty() {
        println!("No categories in selection");
    } else {
        println!("Top categories:");
        for entry in &ranking {
            println!("  {:<16} {}", entry.category, entry.count);
        }
    }

    Ok(())
}
