//! CSV Loader
//!
//! Reads the titles file (header row required) into [`CatalogRecord`]s.
//! Columns are matched by header name, so column order does not matter and
//! unknown columns are ignored. Any optional column missing from the header is
//! absent for every row.

use super::store::Catalog;
use super::types::CatalogRecord;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Row exactly as it appears in the file.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    show_id: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    director: Option<String>,
    #[serde(default)]
    cast: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    date_added: Option<String>,
    #[serde(default)]
    release_year: Option<String>,
    #[serde(default)]
    rating: Option<String>,
    #[serde(default)]
    duration: Option<String>,
    #[serde(default)]
    listed_in: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Empty cells are the file's representation of a missing value.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl RawRow {
    fn into_record(self, line: u64) -> Option<CatalogRecord> {
        let show_id = match present(self.show_id) {
            Some(id) => id,
            None => {
                tracing::warn!("Skipping row {} without show_id", line);
                return None;
            }
        };

        let release_year = present(self.release_year).and_then(|raw| match raw.trim().parse::<u32>() {
            Ok(year) => Some(year),
            Err(_) => {
                tracing::warn!("Row {} ({}): unparsable release_year {:?}", line, show_id, raw);
                None
            }
        });

        Some(CatalogRecord {
            show_id,
            kind: present(self.kind),
            title: present(self.title),
            director: present(self.director),
            cast: present(self.cast),
            country: present(self.country),
            date_added: present(self.date_added),
            release_year,
            rating: present(self.rating),
            duration: present(self.duration),
            listed_in: present(self.listed_in),
            description: present(self.description),
        })
    }
}

/// Parses CSV records from any reader.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<CatalogRecord>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (i, row) in csv_reader.deserialize::<RawRow>().enumerate() {
        // Line 1 is the header.
        let line = i as u64 + 2;
        if let Some(record) = row?.into_record(line) {
            records.push(record);
        }
    }
    Ok(records)
}

/// Loads and indexes the catalog file at `path`.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Catalog::from_reader(file)
}
