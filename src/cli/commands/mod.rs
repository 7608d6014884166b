//! Command implementations for the inventory lookup CLI
//!
//! Each command is implemented in its own module. Both commands fetch the
//! sheet first; `fetch` stops at a dataset summary while `query` runs search
//! criteria over the result and prints one page.

pub mod fetch;
pub mod query;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the inventory lookup CLI
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `fetch`: dataset refresh with a summary report
/// - `query`: search, filter and paginate the fetched dataset
pub async fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Fetch(fetch_args) => fetch::run_fetch(fetch_args).await,
        Commands::Query(query_args) => query::run_query(query_args).await,
    }
}
