//! Filter criteria and dataset filtering
//!
//! A record matches when every active criterion holds: the free-text search
//! (normalized, AND across tokens, each token matching article OR
//! description), exact raw equality for status and type, the aisle prefix,
//! and the derived side code. Absent criteria impose no constraint.

use crate::app::models::{InventoryRecord, Side};
use crate::app::services::text::normalize;

/// The set of currently active filter criteria
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    /// Free-text search phrase, tokenized on whitespace
    pub search: String,

    /// Exact product status, raw value as published
    pub status: Option<String>,

    /// Exact product type, raw value as published
    pub product_type: Option<String>,

    /// Aisle code compared against the location prefix
    pub aisle: Option<String>,

    /// Aisle side compared against the derived side of the location
    pub side: Option<Side>,
}

impl Criteria {
    /// True when no criterion is active
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.status.is_none()
            && self.product_type.is_none()
            && self.aisle.is_none()
            && self.side.is_none()
    }
}

/// Select the records matching all active criteria, preserving dataset order
pub fn apply_filters<'a>(
    dataset: &'a [InventoryRecord],
    criteria: &Criteria,
) -> Vec<&'a InventoryRecord> {
    let tokens: Vec<String> = criteria
        .search
        .split_whitespace()
        .map(normalize)
        .collect();

    dataset
        .iter()
        .filter(|record| {
            if !tokens.is_empty() {
                let article = normalize(&record.article_id);
                let description = normalize(&record.description);
                let all_tokens_hit = tokens
                    .iter()
                    .all(|token| article.contains(token.as_str()) || description.contains(token.as_str()));
                if !all_tokens_hit {
                    return false;
                }
            }

            if let Some(status) = &criteria.status {
                if record.product_status != *status {
                    return false;
                }
            }

            if let Some(product_type) = &criteria.product_type {
                if record.product_type != *product_type {
                    return false;
                }
            }

            if let Some(aisle) = &criteria.aisle {
                if record.location_prefix() != *aisle {
                    return false;
                }
            }

            if let Some(side) = criteria.side {
                if record.side() != Some(side) {
                    return false;
                }
            }

            true
        })
        .collect()
}
