//! Typed dataset row.

use serde::{Deserialize, Serialize};

/// Value stored for a cell the source row does not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// One medicine, as served by the lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Trimmed, lowercased name.
    pub medicine_name: String,
    pub composition: String,
    pub uses: String,
    pub side_effects: String,
}

impl Record {
    /// Build a record from raw cells, normalizing the name and defaulting
    /// absent or blank cells to [`NOT_AVAILABLE`].
    pub fn from_cells(
        medicine_name: &str,
        composition: Option<&str>,
        uses: Option<&str>,
        side_effects: Option<&str>,
    ) -> Self {
        Self {
            medicine_name: normalize_name(medicine_name),
            composition: or_not_available(composition),
            uses: or_not_available(uses),
            side_effects: or_not_available(side_effects),
        }
    }
}

/// Trim and lowercase. Used for both stored names and incoming queries.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn or_not_available(cell: Option<&str>) -> String {
    match cell {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}
