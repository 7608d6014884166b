//! Mapping of the generic gviz table into typed inventory records
//!
//! Column headers are free text; each is resolved to a logical field by exact
//! label match, with positional placeholders substituted for missing or empty
//! headers. Mapping never fails: short rows, null cells and unknown labels all
//! coerce to defaults or pass through untouched. Validity filtering happens
//! later, in the dataset stage.

#[cfg(test)]
pub mod tests;

use tracing::debug;

use crate::app::models::InventoryRecord;
use crate::app::services::sheet_client::{GvizCell, GvizColumn, GvizRow};
use crate::constants::column_placeholder;

/// Resolve column descriptors to trimmed labels with positional fallbacks
pub fn column_labels(cols: &[GvizColumn]) -> Vec<String> {
    cols.iter()
        .enumerate()
        .map(|(index, col)| match col.label.as_deref().map(str::trim) {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => column_placeholder(index),
        })
        .collect()
}

/// Convert raw rows into inventory records, one per row
pub fn map_records(columns: &[String], rows: &[GvizRow]) -> Vec<InventoryRecord> {
    rows.iter().map(|row| map_record(columns, row)).collect()
}

/// Map a single raw row, assigning each cell to the field named by its column
fn map_record(columns: &[String], row: &GvizRow) -> InventoryRecord {
    let mut record = InventoryRecord::default();

    for (index, cell) in row.c.iter().enumerate() {
        let Some(label) = columns.get(index) else {
            debug!("Cell {} has no matching column header, skipping", index);
            continue;
        };

        let value = cell.as_ref().map(GvizCell::display_value).unwrap_or_default();
        record.assign(label, value);
    }

    record
}
