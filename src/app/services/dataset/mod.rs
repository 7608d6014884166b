//! Dataset cleaning, ordering and session state
//!
//! The raw mapped records go through one cleaning pass per fetch: invalid
//! records (no article id and no description) are dropped, then the survivors
//! are ordered by picking location with numeric-aware comparison so the
//! default browsing order follows the physical warehouse. The [`Session`]
//! owns the resulting dataset together with the active criteria and page.

pub mod session;

#[cfg(test)]
pub mod tests;

pub use session::Session;

use crate::app::models::InventoryRecord;
use crate::app::services::text::natural_cmp;

/// Drop invalid records and order the rest by location
///
/// The sort is stable; records with equal locations keep their incoming
/// order. Idempotent: re-applying leaves the dataset unchanged.
pub fn clean_and_sort(mut records: Vec<InventoryRecord>) -> Vec<InventoryRecord> {
    records.retain(InventoryRecord::is_valid);
    records.sort_by(|a, b| natural_cmp(&a.location, &b.location));
    records
}
