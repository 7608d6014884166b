//! Configuration for the inventory lookup session.
//!
//! Provides the connection and pagination settings used by the sheet client
//! and the session. Defaults point at the published inventory sheet; the CLI
//! can override the spreadsheet, sheet name and page size per invocation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    DEFAULT_DATA_RANGE, DEFAULT_META_RANGE, DEFAULT_ROWS_PER_PAGE, DEFAULT_SHEET_NAME,
    DEFAULT_SPREADSHEET_ID,
};
use crate::{Error, Result};

/// Connection and pagination configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Google Sheets document identifier
    pub spreadsheet_id: String,

    /// Named sheet (page) inside the document
    pub sheet_name: String,

    /// Bounded range holding the inventory table, header row included
    pub data_range: String,

    /// Single-cell range holding the last-updated timestamp
    pub meta_range: String,

    /// Records per page in paginated views
    pub rows_per_page: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spreadsheet_id: DEFAULT_SPREADSHEET_ID.to_string(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            data_range: DEFAULT_DATA_RANGE.to_string(),
            meta_range: DEFAULT_META_RANGE.to_string(),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl Config {
    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.spreadsheet_id.trim().is_empty() {
            return Err(Error::configuration("spreadsheet id cannot be empty"));
        }

        if self.sheet_name.trim().is_empty() {
            return Err(Error::configuration("sheet name cannot be empty"));
        }

        if self.data_range.trim().is_empty() || self.meta_range.trim().is_empty() {
            return Err(Error::configuration("sheet ranges cannot be empty"));
        }

        if self.rows_per_page == 0 {
            return Err(Error::configuration(
                "rows per page must be greater than 0",
            ));
        }

        debug!(
            "Configuration validated: spreadsheet={}, sheet={}, data_range={}",
            self.spreadsheet_id, self.sheet_name, self.data_range
        );
        Ok(())
    }
}
