//! Medicine lookup.
//!
//! # Data Flow
//! ```text
//! startup: dataset path → LookupService::load → Ready(Dataset) | Unavailable
//! request: query → ensure_available → normalize → schema check → substring scan
//!     → LookupOutcome::Found(records) | LookupOutcome::NotFound | LookupError
//! ```

pub mod service;
pub mod types;

pub use service::{DatasetState, LookupService};
pub use types::{LookupError, LookupOutcome};
