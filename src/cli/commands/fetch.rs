//! Fetch command implementation
//!
//! Refreshes the dataset and prints a summary: record count, last-updated
//! timestamp and the filter vocabulary the dataset offers.

use colored::Colorize;
use tracing::info;

use super::shared::{fetch_session, setup_logging};
use crate::Result;
use crate::cli::args::FetchArgs;

/// Fetch command runner
pub async fn run_fetch(args: FetchArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;

    info!("Starting inventory fetch");

    let session = fetch_session(args.config()).await?;
    let options = session.filter_options();

    println!("{}", "Inventory dataset".bold());
    println!("  Records:      {}", session.dataset().len());
    println!(
        "  Last updated: {}",
        session.last_updated().unwrap_or("unknown")
    );
    println!();
    println!("{}", "Available filters".bold());
    println!("  Statuses: {}", join_or_none(&options.statuses));
    println!("  Types:    {}", join_or_none(&options.types));
    println!("  Aisles:   {}", join_or_none(&options.aisles));

    Ok(())
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "(none)".to_string()
    } else {
        values.join(", ")
    }
}
