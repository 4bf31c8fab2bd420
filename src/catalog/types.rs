use serde::Serialize;

/// One title in the catalog.
///
/// Optional attributes use `None` as the absent marker. An absent value is never
/// stored as an empty string; that conversion happens only in [`RecordView`].
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRecord {
    pub show_id: String,
    /// Content type discriminator ("Movie", "TV Show").
    pub kind: Option<String>,
    pub title: Option<String>,
    pub director: Option<String>,
    pub cast: Option<String>,
    pub country: Option<String>,
    pub date_added: Option<String>,
    pub release_year: Option<u32>,
    pub rating: Option<String>,
    pub duration: Option<String>,
    /// Comma separated list of categories the title is listed in.
    pub listed_in: Option<String>,
    pub description: Option<String>,
}

/// Year as displayed: a number when known, an empty string when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DisplayYear {
    Year(u32),
    Blank(String),
}

impl From<Option<u32>> for DisplayYear {
    fn from(year: Option<u32>) -> Self {
        match year {
            Some(y) => DisplayYear::Year(y),
            None => DisplayYear::Blank(String::new()),
        }
    }
}

/// Serialization form of a [`CatalogRecord`] with every absent value rendered as `""`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordView {
    pub show_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub director: String,
    pub cast: String,
    pub country: String,
    pub date_added: String,
    pub release_year: DisplayYear,
    pub rating: String,
    pub duration: String,
    pub listed_in: String,
    pub description: String,
}

fn display(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl From<&CatalogRecord> for RecordView {
    fn from(record: &CatalogRecord) -> Self {
        RecordView {
            show_id: record.show_id.clone(),
            kind: display(&record.kind),
            title: display(&record.title),
            director: display(&record.director),
            cast: display(&record.cast),
            country: display(&record.country),
            date_added: display(&record.date_added),
            release_year: record.release_year.into(),
            rating: display(&record.rating),
            duration: display(&record.duration),
            listed_in: display(&record.listed_in),
            description: display(&record.description),
        }
    }
}

/// Response for `GET /titles`.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub total_count: usize,
    pub count: usize,
    pub message: String,
    pub results: Vec<RecordView>,
}

/// Response for `GET /titles/category/:category`.
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub category: String,
    pub total_count: usize,
    pub count: usize,
    pub results: Vec<RecordView>,
}
