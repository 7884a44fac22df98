//! Medicine dataset subsystem.
//!
//! # Data Flow
//! ```text
//! medicine_data.csv
//!     → loader.rs (read headers, resolve required columns)
//!     → record.rs (typed Record, "N/A" defaults, name normalization)
//!     → Dataset (immutable, shared via Arc by the lookup service)
//! ```
//!
//! # Design Decisions
//! - Loaded once at startup; there is no reload or write path
//! - Names are normalized while loading, never per request
//! - A missing required column does not fail the load; it is kept on the
//!   dataset and reported by every lookup

pub mod loader;
pub mod record;

use std::path::PathBuf;
use thiserror::Error;

pub use loader::{load_dataset, read_dataset};
pub use record::{normalize_name, Record, NOT_AVAILABLE};

/// Header names every dataset must carry, in the order they are checked.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Medicine Name", "Composition", "Uses", "Side_effects"];

/// Errors that make the dataset unavailable.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be opened.
    #[error("failed to open dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file has no header row.
    #[error("dataset has no header row")]
    Empty,

    /// The file is not readable as CSV.
    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),
}

/// The in-memory medicine table.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    missing_column: Option<String>,
}

impl Dataset {
    /// Build a dataset from already typed records.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records,
            missing_column: None,
        }
    }

    /// Build a dataset whose source lacked a required column.
    pub(crate) fn with_missing_column(column: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            missing_column: Some(column.into()),
        }
    }

    /// All records in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First required column absent from the source header, if any.
    pub fn missing_column(&self) -> Option<&str> {
        self.missing_column.as_deref()
    }

    /// Records whose normalized name contains `needle`, in source order.
    ///
    /// `needle` must already be normalized (see [`normalize_name`]).
    pub fn matching(&self, needle: &str) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|record| record.medicine_name.contains(needle))
            .collect()
    }
}
