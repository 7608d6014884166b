//! Inventory Lookup Library
//!
//! A Rust library for querying a warehouse picking inventory published through
//! the Google Sheets gviz endpoint.
//!
//! This library provides tools for:
//! - Fetching the inventory data range and last-updated metadata cell
//! - Unwrapping and parsing the gviz JSON payload into a generic row/column table
//! - Mapping labeled columns into typed inventory records with defensive coercion
//! - Cleaning and sorting the dataset by picking location (numeric-aware order)
//! - Searching, filtering and paginating the dataset with pure projections
//! - Abbreviating product status phrases for compact display

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod dataset;
        pub mod query_engine;
        pub mod record_mapper;
        pub mod sheet_client;
        pub mod status_badge;
        pub mod text;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{InventoryRecord, Side};
pub use config::Config;

/// Result type alias for inventory lookup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for inventory lookup operations
///
/// The fetch path deliberately collapses network failures and malformed
/// payloads into a single connectivity error: the distinction is logged but
/// never surfaced to the end user.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Data range could not be fetched or parsed
    #[error("connection error: {message}")]
    Connectivity {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// A refresh was requested while another fetch was still in flight
    #[error("a fetch is already in flight")]
    FetchInFlight,
}

impl Error {
    /// Create a connectivity error with context
    pub fn connectivity(message: impl Into<String>) -> Self {
        Self::Connectivity {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a fetch-in-flight error
    pub fn fetch_in_flight() -> Self {
        Self::FetchInFlight
    }
}

// Automatic conversions from common error types
impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Connectivity {
            message: "request failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Connectivity {
            message: format!("embedded payload is not valid JSON: {}", error),
            source: None,
        }
    }
}
