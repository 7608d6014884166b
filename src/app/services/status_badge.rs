//! Product status abbreviation and badge styling
//!
//! The sheet publishes verbose status phrases; terminals show a short badge
//! instead. Matching is accent- and case-insensitive against an ordered phrase
//! table where the first match wins. Unknown statuses fall back to the
//! uppercased raw phrase so new vocabulary stays visible rather than hidden.

use colored::{ColoredString, Colorize};

use crate::app::services::text::normalize;
use crate::constants::STATUS_LABEL_DEFAULT;

/// Severity tier of a product status, drives badge color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Sellable as usual
    Neutral,
    /// Commercially on hold
    Warning,
    /// Being withdrawn or obsolete
    Critical,
}

impl Severity {
    /// Apply this severity's color to a badge label
    pub fn colorize(&self, label: &str) -> ColoredString {
        match self {
            Severity::Neutral => label.green(),
            Severity::Warning => label.yellow(),
            Severity::Critical => label.red(),
        }
    }
}

/// Abbreviated, severity-tagged rendering of a product status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub severity: Severity,
}

/// Known status phrases in match order, with abbreviation and severity
///
/// Phrases are pre-normalized (lowercase, no accents) to match the output of
/// [`normalize`]. Order matters: the first phrase contained in the normalized
/// status wins.
const STATUS_ABBREVIATIONS: &[(&str, &str, Severity)] = &[
    ("articulo en alta comercial", "ALTA COMERC.", Severity::Neutral),
    ("detenido comercialmente", "DETENIDO", Severity::Warning),
    ("proceso de baja", "BAJA", Severity::Critical),
    ("obsoleto", "OBSOLETO", Severity::Critical),
];

/// Build the badge for a raw product status string
pub fn status_badge(status: &str) -> StatusBadge {
    if status.is_empty() {
        return StatusBadge {
            label: STATUS_LABEL_DEFAULT.to_string(),
            severity: Severity::Neutral,
        };
    }

    let normalized = normalize(status);
    for (phrase, label, severity) in STATUS_ABBREVIATIONS {
        if normalized.contains(phrase) {
            return StatusBadge {
                label: (*label).to_string(),
                severity: *severity,
            };
        }
    }

    StatusBadge {
        label: status.to_uppercase(),
        severity: Severity::Neutral,
    }
}
