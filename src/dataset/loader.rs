//! Dataset loading from CSV.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use super::record::Record;
use super::{Dataset, DatasetError, REQUIRED_COLUMNS};

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    name: usize,
    composition: usize,
    uses: usize,
    side_effects: usize,
}

impl ColumnMap {
    /// Resolve every required column, or return the first one missing.
    fn resolve(headers: &StringRecord) -> Result<Self, &'static str> {
        let position = |column: &'static str| {
            headers
                .iter()
                .position(|header| header == column)
                .ok_or(column)
        };
        let [name, composition, uses, side_effects] = REQUIRED_COLUMNS;

        Ok(Self {
            name: position(name)?,
            composition: position(composition)?,
            uses: position(uses)?,
            side_effects: position(side_effects)?,
        })
    }

    fn record(&self, row: &StringRecord) -> Record {
        Record::from_cells(
            row.get(self.name).unwrap_or_default(),
            row.get(self.composition),
            row.get(self.uses),
            row.get(self.side_effects),
        )
    }
}

/// Load the dataset from a CSV file on disk.
pub fn load_dataset(path: &Path) -> Result<Dataset, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_dataset(file)
}

/// Read a dataset from any CSV source with a header row.
///
/// Short rows are accepted; their trailing cells count as absent. Extra
/// columns are ignored.
pub fn read_dataset<R: Read>(source: R) -> Result<Dataset, DatasetError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(DatasetError::Empty);
    }

    let columns = match ColumnMap::resolve(&headers) {
        Ok(columns) => columns,
        Err(missing) => return Ok(Dataset::with_missing_column(missing)),
    };

    let mut records = Vec::new();
    for row in reader.records() {
        records.push(columns.record(&row?));
    }

    Ok(Dataset::from_records(records))
}
