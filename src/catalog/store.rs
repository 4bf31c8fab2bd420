use super::loader::{CatalogError, read_records};
use super::types::CatalogRecord;
use crate::error::ApiError;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::io::Read;

/// The in-memory catalog: records in file order plus an identifier index.
///
/// Immutable once built. Iteration order is the order rows appeared in the
/// source file, which is also the tie-break order used by the ranker.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<CatalogRecord>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, keeping the first record for each identifier.
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        let mut kept = Vec::with_capacity(records.len());
        let mut by_id = HashMap::with_capacity(records.len());

        for record in records {
            match by_id.entry(record.show_id.clone()) {
                Entry::Occupied(_) => {
                    tracing::warn!("Duplicate show_id {}, keeping first occurrence", record.show_id);
                }
                Entry::Vacant(slot) => {
                    slot.insert(kept.len());
                    kept.push(record);
                }
            }
        }

        Self {
            records: kept,
            by_id,
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Ok(Self::new(read_records(reader)?))
    }

    pub fn get(&self, show_id: &str) -> Option<&CatalogRecord> {
        self.by_id.get(show_id).map(|&idx| &self.records[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose `listed_in` contains `category`, ignoring case. File order.
    pub fn filter_by_category(&self, category: &str) -> Vec<&CatalogRecord> {
        let needle = category.to_lowercase();
        self.records
            .iter()
            .filter(|record| {
                record
                    .listed_in
                    .as_deref()
                    .is_some_and(|listed| listed.to_lowercase().contains(&needle))
            })
            .collect()
    }
}

/// Process-wide catalog handle, fixed at startup.
#[derive(Debug)]
pub enum CatalogState {
    Ready(Catalog),
    Unavailable { reason: String },
}

impl CatalogState {
    pub fn from_load(result: Result<Catalog, CatalogError>) -> Self {
        match result {
            Ok(catalog) => CatalogState::Ready(catalog),
            Err(e) => CatalogState::Unavailable {
                reason: e.to_string(),
            },
        }
    }

    /// Every data-dependent operation goes through here before doing any work.
    pub fn catalog(&self) -> Result<&Catalog, ApiError> {
        match self {
            CatalogState::Ready(catalog) => Ok(catalog),
            CatalogState::Unavailable { reason } => Err(ApiError::DataUnavailable(reason.clone())),
        }
    }
}
