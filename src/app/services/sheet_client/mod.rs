//! Sheet client for the Google Sheets gviz endpoint
//!
//! Retrieves two resources per refresh: a single-cell metadata range holding
//! the last-updated timestamp, then the bounded inventory data range. The
//! metadata call is soft: its failure is logged and absorbed, leaving the
//! last-updated display unset. Any failure on the data call surfaces as
//! a single generic connectivity error.
//!
//! No retries, no caching, no explicit timeout: the caller decides when to
//! fetch again.

pub mod payload;
pub mod wrapper;

#[cfg(test)]
pub mod tests;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::constants::{LAST_UPDATED_DISPLAY_FORMAT, SHEETS_BASE_URL};
use crate::{Error, Result};

pub use payload::{GvizCell, GvizColumn, GvizResponse, GvizRow, GvizTable};

/// Raw fetch result: the generic table plus the optional last-updated display
#[derive(Debug, Clone)]
pub struct FetchedTable {
    /// Column descriptors in sheet order
    pub cols: Vec<GvizColumn>,

    /// Data rows in sheet order
    pub rows: Vec<GvizRow>,

    /// Formatted last-updated timestamp, absent when the metadata cell could
    /// not be fetched or was empty
    pub last_updated: Option<String>,
}

/// HTTP client for the published inventory sheet
#[derive(Debug, Clone)]
pub struct SheetClient {
    http: reqwest::Client,
    config: Config,
}

impl SheetClient {
    /// Create a client for the configured spreadsheet
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch the metadata cell and the data range
    ///
    /// The metadata retrieval runs first but its outcome does not gate the
    /// data call; the two are logically independent.
    pub async fn fetch_table(&self) -> Result<FetchedTable> {
        info!(
            "Fetching inventory from spreadsheet {} sheet '{}'",
            self.config.spreadsheet_id, self.config.sheet_name
        );

        let last_updated = self.fetch_last_updated().await;
        let (cols, rows) = self.fetch_data_range().await?;

        info!("Fetched {} raw rows ({} columns)", rows.len(), cols.len());
        Ok(FetchedTable {
            cols,
            rows,
            last_updated,
        })
    }

    /// Fetch and unwrap one gviz range
    async fn fetch_range(&self, range: &str, header_rows: u8) -> Result<GvizResponse> {
        let url = format!(
            "{}/{}/gviz/tq",
            SHEETS_BASE_URL, self.config.spreadsheet_id
        );

        debug!("GET {} range={} headers={}", url, range, header_rows);
        let body = self
            .http
            .get(&url)
            .query(&[
                ("tqx", "out:json"),
                ("sheet", self.config.sheet_name.as_str()),
                ("range", range),
                ("headers", if header_rows == 0 { "0" } else { "1" }),
            ])
            .send()
            .await?
            .text()
            .await?;

        parse_gviz_body(&body)
    }

    /// Fetch the data range; missing rows collection is fatal
    async fn fetch_data_range(&self) -> Result<(Vec<GvizColumn>, Vec<GvizRow>)> {
        let response = self.fetch_range(&self.config.data_range, 1).await?;
        require_rows(response)
    }

    /// Fetch the last-updated cell; all failures are absorbed
    async fn fetch_last_updated(&self) -> Option<String> {
        let response = match self.fetch_range(&self.config.meta_range, 0).await {
            Ok(response) => response,
            Err(err) => {
                warn!("Last-updated cell fetch failed: {}", err);
                return None;
            }
        };

        let cell = response
            .table
            .and_then(|table| table.rows)
            .and_then(|rows| rows.into_iter().next())
            .and_then(|row| row.c.into_iter().next())
            .flatten()?;

        let raw = cell.display_value();
        if raw.is_empty() {
            return None;
        }
        Some(format_last_updated(&raw))
    }
}

/// Unwrap and parse a gviz response body into the payload model
pub fn parse_gviz_body(body: &str) -> Result<GvizResponse> {
    let embedded = wrapper::extract_embedded_json(body)?;
    let response = serde_json::from_str(embedded)?;
    Ok(response)
}

/// Enforce the one hard payload precondition: a table with a rows collection
pub fn require_rows(response: GvizResponse) -> Result<(Vec<GvizColumn>, Vec<GvizRow>)> {
    let table = response
        .table
        .ok_or_else(|| Error::connectivity("payload has no table"))?;
    let rows = table
        .rows
        .ok_or_else(|| Error::connectivity("table has no rows collection"))?;
    Ok((table.cols, rows))
}

/// Render a raw timestamp cell as day/month/two-digit-year
///
/// Unparseable values pass through verbatim; the display is best-effort only.
pub fn format_last_updated(raw: &str) -> String {
    let trimmed = raw.trim();

    for format in ["%d/%m/%Y %H:%M:%S", "%d/%m/%Y %H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return parsed.format(LAST_UPDATED_DISPLAY_FORMAT).to_string();
        }
    }
    for format in ["%d/%m/%Y", "%Y-%m-%d"] {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, format) {
            return parsed.format(LAST_UPDATED_DISPLAY_FORMAT).to_string();
        }
    }

    raw.to_string()
}
