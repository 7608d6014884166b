//! Shared fixtures for record mapper tests


use crate::app::services::sheet_client::{GvizColumn, GvizRow};
use crate::constants::columns;

/// Column descriptors covering the core fields plus one passthrough column
pub fn core_columns() -> Vec<GvizColumn> {
    [
        columns::LOCATION,
        columns::ARTICLE,
        columns::DESCRIPTION,
        columns::UNITS_PER_CASE,
        columns::UNITS_PER_PALLET,
        columns::AECOC,
        columns::PRODUCT_TYPE,
        columns::PRODUCT_STATUS,
        columns::PROMOTION_CODE,
    ]
    .iter()
    .map(|label| GvizColumn {
        label: Some((*label).to_string()),
    })
    .collect()
}

/// Build a raw row of plain string cells
pub fn string_row(values: &[&str]) -> GvizRow {
    let cells = values
        .iter()
        .map(|value| {
            serde_json::from_value(serde_json::json!({ "v": value })).unwrap()
        })
        .collect();
    GvizRow { c: cells }
}
