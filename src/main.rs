use clap::Parser;
use inventory_lookup::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Inventory Lookup - Warehouse Picking Inventory Search");
    println!("=====================================================");
    println!();
    println!("Fetches a warehouse picking inventory published through the Google");
    println!("Sheets gviz endpoint and answers searches, filters and paginated lookups.");
    println!();
    println!("USAGE:");
    println!("    inventory-lookup <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    fetch    Fetch the inventory and report dataset statistics");
    println!("    query    Fetch the inventory and run a search over it (main command)");
    println!("    help     Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Summarize the published dataset:");
    println!("    inventory-lookup fetch");
    println!();
    println!("    # Search for an article across id and description:");
    println!("    inventory-lookup query \"cafe molido\"");
    println!();
    println!("    # Combine filters and show the second page as JSON:");
    println!("    inventory-lookup query --type SECO --aisle P01 --side D \\");
    println!("                           --page 2 --output-format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    inventory-lookup <COMMAND> --help");
}
