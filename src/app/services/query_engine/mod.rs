//! Query engine over the cleaned inventory dataset
//!
//! All operations here are pure projections recomputed on demand: filter
//! option sets derived from the current dataset, criteria-driven filtering
//! that preserves dataset order, and fixed-size pagination. Nothing is cached
//! or incrementally maintained.
//!
//! The module is organized into logical components:
//! - [`criteria`] - Active filter criteria and per-record matching
//! - [`options`] - Distinct option sets offered by the categorical filters
//! - [`pagination`] - Page slicing and page counting

pub mod criteria;
pub mod options;
pub mod pagination;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use criteria::{Criteria, apply_filters};
pub use options::{FilterOptions, derive_filter_options};
pub use pagination::{page_count, paginate};
