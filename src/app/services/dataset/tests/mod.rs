//! Shared fixtures for dataset tests

pub mod session_tests;

use crate::app::models::InventoryRecord;

pub fn record(location: &str, article_id: &str, description: &str) -> InventoryRecord {
    InventoryRecord {
        location: location.to_string(),
        article_id: article_id.to_string(),
        description: description.to_string(),
        ..Default::default()
    }
}
