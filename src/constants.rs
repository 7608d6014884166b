//! Application constants for inventory lookup
//!
//! This module contains connection defaults, sheet range definitions and the
//! column-label vocabulary of the published inventory sheet.

// =============================================================================
// Spreadsheet Connection Defaults
// =============================================================================

/// Base URL for Google Sheets documents
pub const SHEETS_BASE_URL: &str = "https://docs.google.com/spreadsheets/d";

/// Default spreadsheet identifier for the published inventory
pub const DEFAULT_SPREADSHEET_ID: &str = "1xycsCObrwx_m2nvwLpFMA6g5KhldWPUTJ4FrCdIKoBA";

/// Default sheet (page) name inside the spreadsheet
pub const DEFAULT_SHEET_NAME: &str = "Hoja 1";

/// Data range holding the inventory table, header row included
pub const DEFAULT_DATA_RANGE: &str = "A5:S";

/// Single-cell range holding the last-updated timestamp
pub const DEFAULT_META_RANGE: &str = "A1:A1";

// =============================================================================
// Query and Pagination Defaults
// =============================================================================

/// Records shown per page
pub const DEFAULT_ROWS_PER_PAGE: usize = 50;

/// Number of leading location characters that identify an aisle
pub const AISLE_PREFIX_LEN: usize = 3;

// =============================================================================
// Column Label Constants
// =============================================================================

/// Column header labels as published in the sheet
///
/// Labels are free text controlled by the sheet owner; mapping is by exact
/// match against these constants. Columns with any other label are carried
/// through untyped.
pub mod columns {
    // Core columns used by filtering and display
    pub const LOCATION: &str = "Ubicación de picking";
    pub const ARTICLE: &str = "Artículo";
    pub const DESCRIPTION: &str = "Descripción";
    pub const UNITS_PER_CASE: &str = "Un/Caja";
    pub const UNITS_PER_PALLET: &str = "Un/Pallet";
    pub const AECOC: &str = "Aecoc";
    pub const PRODUCT_TYPE: &str = "Tipo";
    pub const PRODUCT_STATUS: &str = "Estado del producto";

    // Passthrough columns preserved without special handling
    pub const CHANGE_PICK: &str = "Cambiar pick";
    pub const FILTER: &str = "Filtrar";
    pub const PLACE: &str = "Colocar";
    pub const PENDING_CASES: &str = "P.p. caj.";
    pub const PENDING_UNITS: &str = "P.p. ud.";
    pub const AVAILABLE_CASES: &str = "Disp. caj.";
    pub const AVAILABLE_UNITS: &str = "Disp. ud.";
    pub const WAREHOUSE_STOCK: &str = "Stock Atarfe";
    pub const CASE_WEIGHT: &str = "Peso caj.";
    pub const SHELF_LIFE_DAYS: &str = "Dias Vida Util Almacen";
    pub const PROMOTION_CODE: &str = "Codigo de Promocion";
}

/// Positional placeholder label for a column whose header is missing or empty
pub fn column_placeholder(index: usize) -> String {
    format!("Columna {}", index + 1)
}

// =============================================================================
// Display Constants
// =============================================================================

/// Badge label shown for records without a product status
pub const STATUS_LABEL_DEFAULT: &str = "NORMAL";

/// Output format for the last-updated display (day/month/two-digit year)
pub const LAST_UPDATED_DISPLAY_FORMAT: &str = "%d/%m/%y";
