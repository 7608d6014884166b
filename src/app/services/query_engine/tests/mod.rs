//! Shared fixtures for query engine tests


use crate::app::models::InventoryRecord;

/// Build a record with the fields the query engine inspects
pub fn record(
    location: &str,
    article_id: &str,
    description: &str,
    product_type: &str,
    product_status: &str,
) -> InventoryRecord {
    InventoryRecord {
        location: location.to_string(),
        article_id: article_id.to_string(),
        description: description.to_string(),
        product_type: product_type.to_string(),
        product_status: product_status.to_string(),
        ..Default::default()
    }
}

/// A small dataset spanning both aisle sides, several statuses and types
pub fn sample_dataset() -> Vec<InventoryRecord> {
    vec![
        record("P01-D02", "123", "Café frío", "SECO", "Artículo en alta comercial"),
        record("P01-I03", "456", "Te verde", "SECO", "Detenido comercialmente"),
        record("P02-D10", "789", "Azúcar moreno", "GRANEL", "Artículo en alta comercial"),
        record("P10-I01", "321", "Café molido", "SECO", "Obsoleto"),
        record("X9", "654", "Sal fina", "GRANEL", ""),
    ]
}
