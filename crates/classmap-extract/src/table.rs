//! Reading class-size CSV files back
//!
//! The extractor's output is consumed as a lookup table keyed by slash-form
//! class name, e.g. to compare against sizes read from an AOT cache.

use crate::error::{ExtractError, Result};
use crate::record::ClassSizeRecord;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Class sizes in file order, indexed by class name
#[derive(Debug, Default, Clone)]
pub struct ClassSizeTable {
    records: Vec<ClassSizeRecord>,
    index: HashMap<String, usize>,
}

impl ClassSizeTable {
    /// Read a headerless `className,size` CSV
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut table = Self::default();
        for row in rdr.records() {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);

            if row.len() != 2 {
                return Err(ExtractError::InvalidRecord {
                    line,
                    reason: format!("expected 2 columns, found {}", row.len()),
                });
            }

            table.push(ClassSizeRecord::new(&row[0], &row[1]));
        }

        Ok(table)
    }

    /// Read a class-size CSV file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ExtractError::file(path, e))?;
        Self::from_reader(file)
    }

    /// Append a record. The first record for a name stays the one `get` returns.
    pub fn push(&mut self, record: ClassSizeRecord) {
        let position = self.records.len();
        self.index.entry(record.class_name.clone()).or_insert(position);
        self.records.push(record);
    }

    /// Look up a class by slash-form name
    pub fn get(&self, class_name: &str) -> Option<&ClassSizeRecord> {
        self.index.get(class_name).map(|&i| &self.records[i])
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in file order
    pub fn iter(&self) -> impl Iterator<Item = &ClassSizeRecord> {
        self.records.iter()
    }

    /// Sum of every size that fits in a `u64`
    pub fn total_size(&self) -> u64 {
        self.records
            .iter()
            .filter_map(ClassSizeRecord::size_bytes)
            .fold(0u64, u64::saturating_add)
    }
}

impl FromIterator<ClassSizeRecord> for ClassSizeTable {
    fn from_iter<I: IntoIterator<Item = ClassSizeRecord>>(iter: I) -> Self {
        let mut table = Self::default();
        for record in iter {
            table.push(record);
        }
        table
    }
}
