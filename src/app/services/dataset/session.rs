//! Lookup session state
//!
//! A [`Session`] holds one fetched dataset together with the active search
//! criteria and the current page. Refreshing replaces the dataset wholesale;
//! a failed refresh records the error and keeps the previous dataset so a
//! transient network problem never blanks the view.

use tracing::{debug, info};

use crate::app::models::{InventoryRecord, Side};
use crate::app::services::query_engine::{
    Criteria, FilterOptions, apply_filters, derive_filter_options, page_count, paginate,
};
use crate::app::services::record_mapper;
use crate::app::services::sheet_client::{FetchedTable, SheetClient};
use crate::{Error, Result};

use super::clean_and_sort;

/// One inventory lookup session over a fetched dataset
#[derive(Debug, Clone)]
pub struct Session {
    dataset: Vec<InventoryRecord>,
    last_updated: Option<String>,
    criteria: Criteria,
    page: usize,
    page_size: usize,
    loading: bool,
    error: Option<String>,
    has_loaded: bool,
}

impl Session {
    pub fn new(page_size: usize) -> Self {
        Self {
            dataset: Vec::new(),
            last_updated: None,
            criteria: Criteria::default(),
            page: 1,
            page_size,
            loading: false,
            error: None,
            has_loaded: false,
        }
    }

    /// Replace the dataset with a cleaned and sorted copy of `records`
    pub fn load_dataset(&mut self, records: Vec<InventoryRecord>) {
        let raw_count = records.len();
        self.dataset = clean_and_sort(records);
        debug!(
            "Loaded {} valid records out of {} rows",
            self.dataset.len(),
            raw_count
        );
    }

    /// Fetch the sheet and replace the dataset
    ///
    /// Rejects overlapping calls while a fetch is in flight. The loading flag
    /// is held by a guard, so it clears even when the caller drops this
    /// future mid-fetch. On failure the previous dataset is kept and the
    /// error is recorded for display.
    pub async fn refresh(&mut self, client: &SheetClient) -> Result<()> {
        if self.loading {
            return Err(Error::fetch_in_flight());
        }

        let outcome = {
            let _loading = LoadingGuard::hold(&mut self.loading);
            client.fetch_table().await
        };
        self.apply_fetch_outcome(outcome)
    }

    /// Apply a fetch outcome to the session state
    ///
    /// On success the dataset is replaced wholesale; on failure it is left
    /// untouched and the error message lands in the error slot.
    pub fn apply_fetch_outcome(&mut self, outcome: Result<FetchedTable>) -> Result<()> {
        self.error = None;

        match outcome {
            Ok(table) => {
                let columns = record_mapper::column_labels(&table.cols);
                let records = record_mapper::map_records(&columns, &table.rows);
                self.load_dataset(records);
                self.last_updated = table.last_updated;
                self.has_loaded = true;
                info!("Dataset refreshed: {} records", self.dataset.len());
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
        self.page = 1;
    }

    pub fn set_status_filter(&mut self, status: Option<String>) {
        self.criteria.status = status;
        self.page = 1;
    }

    pub fn set_type_filter(&mut self, product_type: Option<String>) {
        self.criteria.product_type = product_type;
        self.page = 1;
    }

    pub fn set_aisle_filter(&mut self, aisle: Option<String>) {
        self.criteria.aisle = aisle;
        self.page = 1;
    }

    pub fn set_side_filter(&mut self, side: Option<Side>) {
        self.criteria.side = side;
        self.page = 1;
    }

    /// Replace every criterion at once
    pub fn set_criteria(&mut self, criteria: Criteria) {
        self.criteria = criteria;
        self.page = 1;
    }

    /// Reset all criteria and return to the first page
    pub fn clear_filters(&mut self) {
        self.criteria = Criteria::default();
        self.page = 1;
    }

    pub fn dataset(&self) -> &[InventoryRecord] {
        &self.dataset
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_loaded(&self) -> bool {
        self.has_loaded
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Selectable values derived from the full dataset, not the filtered view
    pub fn filter_options(&self) -> FilterOptions {
        derive_filter_options(&self.dataset)
    }

    /// All records matching the active criteria, in dataset order
    pub fn filtered(&self) -> Vec<&InventoryRecord> {
        apply_filters(&self.dataset, &self.criteria)
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered().len(), self.page_size)
    }

    /// The records on the current page of the filtered view
    pub fn current_page(&self) -> Vec<InventoryRecord> {
        let filtered = self.filtered();
        paginate(&filtered, self.page_size, self.page)
            .iter()
            .map(|r| (*r).clone())
            .collect()
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn next_page(&mut self) {
        if self.page < self.page_count() {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }
}

/// Holds the session loading flag for the duration of a fetch
///
/// Clearing happens in `Drop`, so the flag stays truthful on every exit path
/// of `refresh`, including a caller dropping the future mid-await.
struct LoadingGuard<'a> {
    loading: &'a mut bool,
}

impl<'a> LoadingGuard<'a> {
    fn hold(loading: &'a mut bool) -> Self {
        *loading = true;
        Self { loading }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.loading = false;
    }
}
