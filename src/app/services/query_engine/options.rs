//! Filter option derivation
//!
//! Option sets are derived fresh from the current dataset, never stored.
//! Distinctness is over raw values (case-sensitive), unlike search matching.
//! The aisle set is sorted lexicographically even when its codes look
//! numeric; the physical sheet relies on that order.

use std::collections::BTreeSet;

use crate::app::models::InventoryRecord;

/// Distinct values offered by each categorical filter, ascending order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Distinct non-empty product statuses
    pub statuses: Vec<String>,

    /// Distinct non-empty product types
    pub types: Vec<String>,

    /// Distinct aisle prefixes from locations long enough to carry one
    pub aisles: Vec<String>,
}

/// Scan the dataset once and collect the option sets
pub fn derive_filter_options(dataset: &[InventoryRecord]) -> FilterOptions {
    let mut statuses = BTreeSet::new();
    let mut types = BTreeSet::new();
    let mut aisles = BTreeSet::new();

    for record in dataset {
        if !record.product_status.is_empty() {
            statuses.insert(record.product_status.clone());
        }
        if !record.product_type.is_empty() {
            types.insert(record.product_type.clone());
        }
        if let Some(aisle) = record.aisle() {
            aisles.insert(aisle);
        }
    }

    FilterOptions {
        statuses: statuses.into_iter().collect(),
        types: types.into_iter().collect(),
        aisles: aisles.into_iter().collect(),
    }
}
