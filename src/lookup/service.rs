//! Lookup service over the loaded dataset.

use std::path::Path;

use crate::dataset::{load_dataset, normalize_name, Dataset};

use super::types::{LookupError, LookupOutcome};

/// Startup result held for the lifetime of the process.
#[derive(Debug, Clone)]
pub enum DatasetState {
    Ready(Dataset),
    Unavailable { reason: String },
}

/// Read-only medicine lookup, shared across request handlers.
#[derive(Debug, Clone)]
pub struct LookupService {
    state: DatasetState,
}

impl LookupService {
    /// Serve lookups from an already loaded dataset.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            state: DatasetState::Ready(dataset),
        }
    }

    /// A service whose dataset could not be loaded.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            state: DatasetState::Unavailable {
                reason: reason.into(),
            },
        }
    }

    /// Load the dataset at `path`. A failed load degrades the service
    /// instead of returning an error.
    pub fn load(path: &Path) -> Self {
        match load_dataset(path) {
            Ok(dataset) => {
                if let Some(column) = dataset.missing_column() {
                    tracing::warn!(
                        path = %path.display(),
                        column = %column,
                        "Dataset is missing a required column; lookups will fail"
                    );
                } else {
                    tracing::info!(
                        path = %path.display(),
                        records = dataset.len(),
                        "Dataset loaded"
                    );
                }
                Self::new(dataset)
            }
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "Failed to load dataset; lookups will fail until restart"
                );
                Self::unavailable(e.to_string())
            }
        }
    }

    pub fn state(&self) -> &DatasetState {
        &self.state
    }

    pub fn is_available(&self) -> bool {
        matches!(self.state, DatasetState::Ready(_))
    }

    /// The loaded dataset, or `DatasetUnavailable`.
    pub fn ensure_available(&self) -> Result<&Dataset, LookupError> {
        match &self.state {
            DatasetState::Ready(dataset) => Ok(dataset),
            DatasetState::Unavailable { reason } => Err(LookupError::DatasetUnavailable {
                reason: reason.clone(),
            }),
        }
    }

    /// Find every record whose name contains `query`, case-insensitively.
    ///
    /// Checks run in order: dataset availability, blank query, schema.
    pub fn find_medicine(&self, query: &str) -> Result<LookupOutcome<'_>, LookupError> {
        let dataset = self.ensure_available()?;

        let needle = normalize_name(query);
        if needle.is_empty() {
            return Err(LookupError::MissingInput);
        }

        if let Some(column) = dataset.missing_column() {
            return Err(LookupError::SchemaMismatch {
                column: column.to_string(),
            });
        }

        let matches = dataset.matching(&needle);
        tracing::debug!(query = %needle, matches = matches.len(), "Lookup complete");

        if matches.is_empty() {
            Ok(LookupOutcome::NotFound)
        } else {
            Ok(LookupOutcome::Found(matches))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{read_dataset, Record};

    fn sample_service() -> LookupService {
        LookupService::new(Dataset::from_records(vec![
            Record::from_cells("Paracetamol", Some("Para+Caf"), Some("Fever"), Some("Nausea")),
            Record::from_cells("Paracinol", Some("Para+X"), Some("Pain"), Some("Drowsiness")),
            Record::from_cells("Aspirin", Some("ASA"), Some("Pain"), None),
        ]))
    }

    fn names(outcome: &LookupOutcome<'_>) -> Vec<String> {
        outcome
            .records()
            .iter()
            .map(|r| r.medicine_name.clone())
            .collect()
    }

    #[test]
    fn test_prefix_query_returns_all_in_order() {
        let service = sample_service();
        let outcome = service.find_medicine("para").unwrap();
        assert_eq!(names(&outcome), vec!["paracetamol", "paracinol"]);
    }

    #[test]
    fn test_infix_query_matches() {
        let service = sample_service();

        let outcome = service.find_medicine("cinol").unwrap();
        assert_eq!(names(&outcome), vec!["paracinol"]);

        let outcome = service.find_medicine("cin").unwrap();
        assert_eq!(outcome.records()[0].composition, "Para+X");
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let service = sample_service();
        let lower = service.find_medicine("asp").unwrap();
        let upper = service.find_medicine("ASP").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(names(&upper), vec!["aspirin"]);

        let padded = service.find_medicine("  PARACET  ").unwrap();
        assert_eq!(names(&padded), vec!["paracetamol"]);
    }

    #[test]
    fn test_no_match_is_not_found() {
        let service = sample_service();
        assert_eq!(service.find_medicine("xyz").unwrap(), LookupOutcome::NotFound);
    }

    #[test]
    fn test_blank_query_rejected() {
        let service = sample_service();
        assert_eq!(service.find_medicine(""), Err(LookupError::MissingInput));
        assert_eq!(service.find_medicine("   "), Err(LookupError::MissingInput));
    }

    #[test]
    fn test_blank_query_rejected_on_empty_dataset() {
        let service = LookupService::new(Dataset::default());
        assert_eq!(service.find_medicine(" "), Err(LookupError::MissingInput));
        assert_eq!(service.find_medicine("a").unwrap(), LookupOutcome::NotFound);
    }

    #[test]
    fn test_unavailable_fails_every_query() {
        let service = LookupService::unavailable("file not found");
        assert!(!service.is_available());

        for query in ["", "   ", "para", "xyz"] {
            assert!(matches!(
                service.find_medicine(query),
                Err(LookupError::DatasetUnavailable { .. })
            ));
        }
    }

    #[test]
    fn test_schema_checked_after_input() {
        let dataset = read_dataset("Medicine Name,Composition,Uses\nZinc,Zn,Immunity\n".as_bytes()).unwrap();
        let service = LookupService::new(dataset);

        assert_eq!(service.find_medicine(""), Err(LookupError::MissingInput));
        assert_eq!(
            service.find_medicine("zinc"),
            Err(LookupError::SchemaMismatch {
                column: "Side_effects".to_string()
            })
        );
    }

    #[test]
    fn test_load_missing_file_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let service = LookupService::load(&dir.path().join("absent.csv"));

        assert!(matches!(service.state(), DatasetState::Unavailable { .. }));
        assert!(service.ensure_available().is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(LookupError::MissingInput.to_string(), "Medicine name is required");
        assert_eq!(
            LookupError::SchemaMismatch { column: "Uses".into() }.to_string(),
            "Dataset is missing the required column: 'Uses'"
        );
        assert_eq!(LookupError::Internal("boom".into()).details(), Some("boom"));
        assert_eq!(LookupError::MissingInput.details(), None);
    }
}
