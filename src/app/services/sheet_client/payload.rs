//! Permissive serde model of the gviz table payload
//!
//! The remote payload has no enforced schema, so every field is optional and
//! defaults apply throughout. The single hard precondition, presence of the
//! rows collection, is checked by the client, not here.

use serde::Deserialize;
use serde_json::Value;

/// Top-level embedded payload
#[derive(Debug, Clone, Deserialize)]
pub struct GvizResponse {
    pub table: Option<GvizTable>,
}

/// Generic row/column table structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GvizTable {
    #[serde(default)]
    pub cols: Vec<GvizColumn>,

    /// Rows collection; its absence is the one fatal payload shape
    pub rows: Option<Vec<GvizRow>>,
}

/// Column descriptor, only the label is consumed
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GvizColumn {
    #[serde(default)]
    pub label: Option<String>,
}

/// One table row: a list of cells, each possibly null
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GvizRow {
    #[serde(default)]
    pub c: Vec<Option<GvizCell>>,
}

/// One table cell with raw and optionally formatted values
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GvizCell {
    /// Raw value as typed by the sheet engine
    #[serde(default)]
    pub v: Option<Value>,

    /// Formatted display value, preferred when present
    #[serde(default)]
    pub f: Option<String>,
}

impl GvizCell {
    /// The cell's display value: formatted if present, else the coerced raw
    /// value, else empty
    pub fn display_value(&self) -> String {
        if let Some(formatted) = &self.f {
            return formatted.clone();
        }

        match &self.v {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => format_number(n),
            Some(Value::Bool(b)) => b.to_string(),
            Some(other) => other.to_string(),
        }
    }
}

/// Render a JSON number the way the sheet displays it: integral values
/// without a trailing fraction
fn format_number(number: &serde_json::Number) -> String {
    if let Some(integer) = number.as_i64() {
        return integer.to_string();
    }
    if let Some(float) = number.as_f64() {
        if float.is_finite() && float.fract() == 0.0 && float.abs() < 9e15 {
            return format!("{}", float as i64);
        }
        return float.to_string();
    }
    number.to_string()
}
