//! Data models for the inventory lookup pipeline
//!
//! The remote sheet is loosely typed, so every field is carried as its display
//! string and coerced defensively. Columns without a dedicated field are kept
//! in a passthrough map so nothing published in the sheet is dropped.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{AISLE_PREFIX_LEN, columns};
use crate::{Error, Result};

/// One inventory line as published in the sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// Picking location code, may be empty
    pub location: String,

    /// Article identifier (numeric in the sheet, carried as text)
    pub article_id: String,

    /// Article description
    pub description: String,

    /// Units per case, empty when absent
    pub units_per_case: String,

    /// Units per pallet, empty when absent
    pub units_per_pallet: String,

    /// AECOC code
    pub aecoc_code: String,

    /// Categorical product type
    pub product_type: String,

    /// Categorical product status, drives the status badge
    pub product_status: String,

    /// Remaining columns preserved verbatim, keyed by column label
    pub extras: BTreeMap<String, String>,
}

impl InventoryRecord {
    /// Assign a cell value to the field named by its column label
    ///
    /// Unknown labels land in the passthrough map. Called once per cell by the
    /// record mapper; later assignments for a repeated label win.
    pub fn assign(&mut self, label: &str, value: String) {
        match label {
            columns::LOCATION => self.location = value,
            columns::ARTICLE => self.article_id = value,
            columns::DESCRIPTION => self.description = value,
            columns::UNITS_PER_CASE => self.units_per_case = value,
            columns::UNITS_PER_PALLET => self.units_per_pallet = value,
            columns::AECOC => self.aecoc_code = value,
            columns::PRODUCT_TYPE => self.product_type = value,
            columns::PRODUCT_STATUS => self.product_status = value,
            _ => {
                self.extras.insert(label.to_string(), value);
            }
        }
    }

    /// Validity gate: a record is retained only if it identifies an article
    pub fn is_valid(&self) -> bool {
        !self.article_id.is_empty() || !self.description.is_empty()
    }

    /// First characters of the location, up to the aisle prefix length
    ///
    /// Used for aisle filter equality; shorter locations return what they have.
    pub fn location_prefix(&self) -> String {
        self.location.chars().take(AISLE_PREFIX_LEN).collect()
    }

    /// Aisle code, only defined for locations long enough to carry one
    pub fn aisle(&self) -> Option<String> {
        if self.location.chars().count() >= AISLE_PREFIX_LEN {
            Some(self.location_prefix())
        } else {
            None
        }
    }

    /// Derived aisle side of this record's location
    pub fn side(&self) -> Option<Side> {
        Side::of(&self.location)
    }

    /// Units per case for display, absent values shown as 0
    pub fn units_per_case_display(&self) -> &str {
        if self.units_per_case.is_empty() {
            "0"
        } else {
            &self.units_per_case
        }
    }

    /// Units per pallet for display, absent values shown as 0
    pub fn units_per_pallet_display(&self) -> &str {
        if self.units_per_pallet.is_empty() {
            "0"
        } else {
            &self.units_per_pallet
        }
    }
}

/// Aisle side code derived from a picking location
///
/// A location containing 'D' is on side D; otherwise a location containing
/// 'I' is on side I. 'D' is checked first, so a location carrying both
/// resolves to side D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    D,
    I,
}

impl Side {
    /// Derive the side from a location code
    pub fn of(location: &str) -> Option<Side> {
        if location.contains('D') {
            Some(Side::D)
        } else if location.contains('I') {
            Some(Side::I)
        } else {
            None
        }
    }

    /// Single-character code for this side
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::D => "D",
            Side::I => "I",
        }
    }
}

impl FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "D" | "d" => Ok(Side::D),
            "I" | "i" => Ok(Side::I),
            other => Err(Error::configuration(format!(
                "invalid side '{}': expected D or I",
                other
            ))),
        }
    }
}
