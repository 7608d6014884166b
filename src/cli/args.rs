//! Command-line argument definitions for the inventory lookup tool
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::app::models::Side;
use crate::app::services::query_engine::Criteria;
use crate::config::Config;
use crate::constants::{AISLE_PREFIX_LEN, DEFAULT_ROWS_PER_PAGE};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};

/// CLI arguments for the inventory lookup tool
///
/// Queries a warehouse picking inventory published through the Google Sheets
/// gviz endpoint, with accent-insensitive search, categorical filters and
/// paginated output.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "inventory-lookup",
    version,
    about = "Query a warehouse picking inventory published via Google Sheets",
    long_about = "Fetches a warehouse picking inventory from the Google Sheets gviz endpoint, \
                  cleans and orders it by picking location, and answers lookups with \
                  accent-insensitive search, status/type/aisle/side filters and paginated output."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the inventory lookup tool
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Fetch the inventory and report dataset statistics
    Fetch(FetchArgs),
    /// Fetch the inventory and run a search over it (default workflow)
    Query(QueryArgs),
}

/// Arguments for the fetch command (dataset summary)
#[derive(Debug, Clone, Parser)]
pub struct FetchArgs {
    /// Spreadsheet document identifier
    ///
    /// Overrides the built-in spreadsheet id. The document must be published
    /// for anonymous gviz access.
    #[arg(
        short = 's',
        long = "spreadsheet-id",
        value_name = "ID",
        help = "Spreadsheet document identifier"
    )]
    pub spreadsheet_id: Option<String>,

    /// Sheet (tab) name inside the spreadsheet
    #[arg(
        long = "sheet-name",
        value_name = "NAME",
        help = "Sheet name inside the spreadsheet"
    )]
    pub sheet_name: Option<String>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the query command (search, filter and paginate)
#[derive(Debug, Clone, Parser)]
pub struct QueryArgs {
    /// Free-text search over article id and description
    ///
    /// Tokens are matched accent- and case-insensitively. Every token must
    /// match, but each may match either field.
    #[arg(value_name = "SEARCH", help = "Search terms over article id and description")]
    pub search: Option<String>,

    /// Keep only records with this exact product status
    #[arg(long = "status", value_name = "STATUS", help = "Exact product status filter")]
    pub status: Option<String>,

    /// Keep only records with this exact product type
    #[arg(long = "type", value_name = "TYPE", help = "Exact product type filter")]
    pub product_type: Option<String>,

    /// Keep only records in this aisle (first three characters of the location)
    #[arg(long = "aisle", value_name = "CODE", help = "Aisle code filter (3 characters)")]
    pub aisle: Option<String>,

    /// Keep only records on this aisle side (D or I)
    #[arg(long = "side", value_name = "SIDE", help = "Aisle side filter (D or I)")]
    pub side: Option<String>,

    /// Page of results to show (1-based)
    #[arg(
        short = 'p',
        long = "page",
        value_name = "N",
        default_value_t = 1,
        help = "Page of results to show (1-based)"
    )]
    pub page: usize,

    /// Records per page
    #[arg(
        long = "page-size",
        value_name = "N",
        default_value_t = DEFAULT_ROWS_PER_PAGE,
        help = "Records per page"
    )]
    pub page_size: usize,

    /// Spreadsheet document identifier
    #[arg(
        short = 's',
        long = "spreadsheet-id",
        value_name = "ID",
        help = "Spreadsheet document identifier"
    )]
    pub spreadsheet_id: Option<String>,

    /// Sheet (tab) name inside the spreadsheet
    #[arg(
        long = "sheet-name",
        value_name = "NAME",
        help = "Sheet name inside the spreadsheet"
    )]
    pub sheet_name: Option<String>,

    /// Output format for results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for query results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl FetchArgs {
    /// Build the session configuration with CLI overrides applied
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        if let Some(id) = &self.spreadsheet_id {
            config.spreadsheet_id = id.clone();
        }
        if let Some(name) = &self.sheet_name {
            config.sheet_name = name.clone();
        }
        config
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl QueryArgs {
    /// Validate the query command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.page == 0 {
            return Err(Error::configuration(
                "page numbers start at 1".to_string(),
            ));
        }

        if self.page_size == 0 {
            return Err(Error::configuration(
                "page size must be greater than 0".to_string(),
            ));
        }

        if let Some(aisle) = &self.aisle {
            if aisle.chars().count() != AISLE_PREFIX_LEN {
                return Err(Error::configuration(format!(
                    "aisle code must be exactly {} characters, got '{}'",
                    AISLE_PREFIX_LEN, aisle
                )));
            }
        }

        // Side is parsed here so a bad value fails before any network work
        if let Some(side) = &self.side {
            side.parse::<Side>()?;
        }

        Ok(())
    }

    /// Build the search criteria from the CLI flags
    ///
    /// Call after `validate()`; an unparseable side falls back to no filter.
    pub fn criteria(&self) -> Criteria {
        Criteria {
            search: self.search.clone().unwrap_or_default(),
            status: self.status.clone(),
            product_type: self.product_type.clone(),
            aisle: self.aisle.clone(),
            side: self
                .side
                .as_deref()
                .and_then(|s| s.parse::<Side>().ok()),
        }
    }

    /// Build the session configuration with CLI overrides applied
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        if let Some(id) = &self.spreadsheet_id {
            config.spreadsheet_id = id.clone();
        }
        if let Some(name) = &self.sheet_name {
            config.sheet_name = name.clone();
        }
        config.rows_per_page = self.page_size;
        config
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for QueryArgs {
    fn default() -> Self {
        Self {
            search: None,
            status: None,
            product_type: None,
            aisle: None,
            side: None,
            page: 1,
            page_size: DEFAULT_ROWS_PER_PAGE,
            spreadsheet_id: None,
            sheet_name: None,
            output_format: OutputFormat::Human,
            verbose: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_args_validation() {
        let args = QueryArgs::default();
        assert!(args.validate().is_ok());

        let mut invalid = args.clone();
        invalid.page = 0;
        assert!(invalid.validate().is_err());

        let mut invalid = args.clone();
        invalid.page_size = 0;
        assert!(invalid.validate().is_err());

        let mut invalid = args.clone();
        invalid.aisle = Some("P1".to_string());
        assert!(invalid.validate().is_err());

        let mut invalid = args.clone();
        invalid.side = Some("X".to_string());
        assert!(invalid.validate().is_err());

        let mut valid = args.clone();
        valid.aisle = Some("P01".to_string());
        valid.side = Some("d".to_string());
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn test_criteria_from_flags() {
        let args = QueryArgs {
            search: Some("cafe".to_string()),
            status: Some("Obsoleto".to_string()),
            aisle: Some("P01".to_string()),
            side: Some("I".to_string()),
            ..Default::default()
        };

        let criteria = args.criteria();
        assert_eq!(criteria.search, "cafe");
        assert_eq!(criteria.status.as_deref(), Some("Obsoleto"));
        assert_eq!(criteria.product_type, None);
        assert_eq!(criteria.aisle.as_deref(), Some("P01"));
        assert_eq!(criteria.side, Some(Side::I));
    }

    #[test]
    fn test_config_overrides() {
        let args = QueryArgs {
            spreadsheet_id: Some("custom-id".to_string()),
            page_size: 25,
            ..Default::default()
        };

        let config = args.config();
        assert_eq!(config.spreadsheet_id, "custom-id");
        assert_eq!(config.rows_per_page, 25);
        assert_eq!(config.sheet_name, Config::default().sheet_name);
    }

    #[test]
    fn test_log_level() {
        let mut args = QueryArgs::default();
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");
    }
}
