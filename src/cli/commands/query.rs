//! Query command implementation
//!
//! Refreshes the dataset, applies the search criteria from the CLI flags and
//! prints one page of results, either as a human-readable table or as JSON.

use colored::Colorize;
use serde::Serialize;
use tracing::info;

use super::shared::{fetch_session, setup_logging};
use crate::Result;
use crate::app::models::InventoryRecord;
use crate::app::services::dataset::Session;
use crate::app::services::status_badge::status_badge;
use crate::cli::args::{OutputFormat, QueryArgs};

/// Query command runner
pub async fn run_query(args: QueryArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    info!("Starting inventory query");

    let mut session = fetch_session(args.config()).await?;
    session.set_criteria(args.criteria());
    session.go_to_page(args.page);

    match args.output_format {
        OutputFormat::Human => print_human(&session),
        OutputFormat::Json => print_json(&session)?,
    }

    Ok(())
}

/// One page of results in machine-readable form
#[derive(Debug, Serialize)]
struct QueryReport {
    records: Vec<InventoryRecord>,
    page: usize,
    page_count: usize,
    matching_records: usize,
    last_updated: Option<String>,
}

fn print_json(session: &Session) -> Result<()> {
    let report = QueryReport {
        records: session.current_page(),
        page: session.page(),
        page_count: session.page_count(),
        matching_records: session.filtered().len(),
        last_updated: session.last_updated().map(String::from),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_human(session: &Session) {
    let page = session.current_page();
    let matching = session.filtered().len();

    if page.is_empty() {
        println!("No records on page {} ({} matching)", session.page(), matching);
        return;
    }

    println!(
        "{:<10} {:<8} {:<40} {:>7} {:>9}  {:<14} {}",
        "LOCATION".bold(),
        "ARTICLE".bold(),
        "DESCRIPTION".bold(),
        "UN/CAJA".bold(),
        "UN/PALLET".bold(),
        "AECOC".bold(),
        "STATUS".bold()
    );

    for record in &page {
        let badge = status_badge(&record.product_status);
        println!(
            "{:<10} {:<8} {:<40} {:>7} {:>9}  {:<14} {}",
            record.location,
            record.article_id,
            truncate(&record.description, 40),
            record.units_per_case_display(),
            record.units_per_pallet_display(),
            record.aecoc_code,
            badge.severity.colorize(&badge.label)
        );
    }

    println!();
    println!(
        "Page {} / {} ({} matching records{})",
        session.page(),
        session.page_count(),
        matching,
        session
            .last_updated()
            .map(|d| format!(", updated {}", d))
            .unwrap_or_default()
    );
}

/// Clip a display string to `width` characters
fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let clipped: String = value.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", clipped)
    }
}
