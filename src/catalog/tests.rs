//! Catalog Module Tests
//!
//! Validates dataset loading, the absent-value model and the lookup handlers.
//!
//! ## Test Scopes
//! - **Loader**: Header-driven CSV parsing, empty cells as absent values, skipped rows.
//! - **Store**: Identifier index, duplicate handling, category filtering, degraded state.
//! - **Handlers**: Listing limit, identifier lookup, category lookup and error mapping.

#[cfg(test)]
mod tests {
    use crate::catalog::handlers::{
        LIST_LIMIT, handle_get_title, handle_list_titles, handle_titles_by_category,
    };
    use crate::catalog::loader::{CatalogError, load_catalog, read_records};
    use crate::catalog::store::{Catalog, CatalogState};
    use crate::catalog::types::{CatalogRecord, DisplayYear, RecordView};
    use crate::error::ApiError;
    use axum::Extension;
    use axum::extract::Path;
    use std::sync::Arc;

    const HEADER: &str = "show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description\n";

    fn sample_csv() -> String {
        let mut csv = HEADER.to_string();
        csv.push_str("s1,Movie,Dick Johnson Is Dead,Kirsten Johnson,,United States,\"September 25, 2021\",2020,PG-13,90 min,Documentaries,\"As her father nears the end of his life, filmmaker Kirsten Johnson stages his death.\"\n");
        csv.push_str("s2,TV Show,Blood & Water,,\"Ama Qamata, Khosi Ngema\",South Africa,\"September 24, 2021\",2021,TV-MA,2 Seasons,\"International TV Shows, TV Dramas, TV Mysteries\",\"After crossing paths at a party, a Cape Town teen sets out to prove whether a private-school swimming star is her sister.\"\n");
        csv.push_str("s3,TV Show,Ganglands,Julien Leclercq,Sami Bouajila,,\"September 24, 2021\",2021,TV-MA,1 Season,\"Crime TV Shows, International TV Shows, TV Action & Adventure\",\"To protect his family from a powerful drug lord, skilled thief Mehdi and his expert team of robbers are pulled into a violent game.\"\n");
        csv
    }

    fn record(id: &str, listed_in: Option<&str>) -> CatalogRecord {
        CatalogRecord {
            show_id: id.to_string(),
            kind: Some("Movie".to_string()),
            title: Some(format!("Title {}", id)),
            director: None,
            cast: None,
            country: None,
            date_added: None,
            release_year: Some(2020),
            rating: None,
            duration: None,
            listed_in: listed_in.map(str::to_string),
            description: None,
        }
    }

    fn ready(records: Vec<CatalogRecord>) -> Extension<Arc<CatalogState>> {
        Extension(Arc::new(CatalogState::Ready(Catalog::new(records))))
    }

    fn unavailable() -> Extension<Arc<CatalogState>> {
        Extension(Arc::new(CatalogState::Unavailable {
            reason: "file not found".to_string(),
        }))
    }

    // ============================================================
    // LOADER TESTS
    // ============================================================

    #[test]
    fn test_read_records_parses_all_rows() {
        let records = read_records(sample_csv().as_bytes()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].show_id, "s1");
        assert_eq!(records[0].kind.as_deref(), Some("Movie"));
        assert_eq!(records[0].release_year, Some(2020));
        assert_eq!(records[1].listed_in.as_deref(), Some("International TV Shows, TV Dramas, TV Mysteries"));
    }

    #[test]
    fn test_empty_cells_are_absent() {
        let records = read_records(sample_csv().as_bytes()).unwrap();

        // s1 has no cast, s2 no director, s3 no country
        assert_eq!(records[0].cast, None);
        assert_eq!(records[1].director, None);
        assert_eq!(records[2].country, None);
    }

    #[test]
    fn test_quoted_fields_keep_commas() {
        let records = read_records(sample_csv().as_bytes()).unwrap();

        assert_eq!(records[1].cast.as_deref(), Some("Ama Qamata, Khosi Ngema"));
        assert_eq!(records[0].date_added.as_deref(), Some("September 25, 2021"));
    }

    #[test]
    fn test_row_without_id_is_skipped() {
        let csv = format!("{},Movie,Orphan,,,,,2001,,,,Lost\ns9,Movie,Kept,,,,,2001,,,,Found\n", HEADER);
        let records = read_records(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].show_id, "s9");
    }

    #[test]
    fn test_bad_year_becomes_absent() {
        let csv = format!("{}s1,Movie,Odd,,,,,unknown,,,,Text\n", HEADER);
        let records = read_records(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].release_year, None);
    }

    #[test]
    fn test_missing_optional_columns() {
        let csv = "show_id,title,description\ns1,Only Three,A short text\n";
        let records = read_records(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title.as_deref(), Some("Only Three"));
        assert_eq!(records[0].listed_in, None);
        assert_eq!(records[0].release_year, None);
    }

    #[test]
    fn test_header_only_file_is_empty_catalog() {
        let catalog = Catalog::from_reader(HEADER.as_bytes()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = load_catalog(std::path::Path::new("/definitely/not/here/titles.csv"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    // ============================================================
    // STORE TESTS
    // ============================================================

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::from_reader(sample_csv().as_bytes()).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get("s2").and_then(|r| r.title.as_deref()), Some("Blood & Water"));
        assert!(catalog.get("s404").is_none());
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut second = record("s1", Some("Comedies"));
        second.title = Some("Second".to_string());
        let catalog = Catalog::new(vec![record("s1", Some("Dramas")), second, record("s2", None)]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("s1").and_then(|r| r.title.as_deref()), Some("Title s1"));
    }

    #[test]
    fn test_iteration_keeps_file_order() {
        let catalog = Catalog::from_reader(sample_csv().as_bytes()).unwrap();
        let ids: Vec<&str> = catalog.iter().map(|r| r.show_id.as_str()).collect();

        assert_eq!(ids, vec!["s1", "s2", "s3"]);
    }

    #[test]
    fn test_filter_by_category_case_insensitive_substring() {
        let catalog = Catalog::from_reader(sample_csv().as_bytes()).unwrap();

        let ids: Vec<&str> = catalog
            .filter_by_category("international tv")
            .iter()
            .map(|r| r.show_id.as_str())
            .collect();
        assert_eq!(ids, vec!["s2", "s3"]);

        assert_eq!(catalog.filter_by_category("DOCUMENT").len(), 1);
        assert!(catalog.filter_by_category("Anime").is_empty());
    }

    #[test]
    fn test_filter_skips_absent_listed_in() {
        let catalog = Catalog::new(vec![record("s1", None), record("s2", Some("Dramas"))]);
        let found = catalog.filter_by_category("");

        // An empty needle matches any present value, never an absent one.
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].show_id, "s2");
    }

    #[test]
    fn test_unavailable_state_fails_fast() {
        let state = CatalogState::from_load(Err(CatalogError::Io {
            path: "x.csv".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        }));

        assert!(matches!(state, CatalogState::Unavailable { .. }));
        assert!(matches!(state.catalog(), Err(ApiError::DataUnavailable(_))));
    }

    // ============================================================
    // VIEW TESTS
    // ============================================================

    #[test]
    fn test_record_view_blanks_absent_values() {
        let mut rec = record("s7", None);
        rec.release_year = None;
        let view = RecordView::from(&rec);

        assert_eq!(view.director, "");
        assert_eq!(view.listed_in, "");
        assert_eq!(view.release_year, DisplayYear::Blank(String::new()));

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["release_year"], "");
        assert_eq!(json["type"], "Movie");
        assert_eq!(json["description"], "");
    }

    #[test]
    fn test_record_view_keeps_year_numeric() {
        let json = serde_json::to_value(RecordView::from(&record("s1", None))).unwrap();
        assert_eq!(json["release_year"], 2020);
    }

    // ============================================================
    // HANDLER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_list_titles_is_limited() {
        let records: Vec<CatalogRecord> = (0..150).map(|i| record(&format!("s{}", i), None)).collect();
        let response = handle_list_titles(ready(records)).await.unwrap();

        assert_eq!(response.total_count, 150);
        assert_eq!(response.count, LIST_LIMIT);
        assert_eq!(response.results.len(), LIST_LIMIT);
        assert_eq!(response.results[0].show_id, "s0");
    }

    #[tokio::test]
    async fn test_list_titles_unavailable() {
        let result = handle_list_titles(unavailable()).await;
        assert!(matches!(result, Err(ApiError::DataUnavailable(_))));
    }

    #[tokio::test]
    async fn test_get_title_found_and_missing() {
        let state = ready(vec![record("s1", None)]);

        let found = handle_get_title(state.clone(), Path("s1".to_string())).await.unwrap();
        assert_eq!(found.title, "Title s1");

        let missing = handle_get_title(state, Path("s2".to_string())).await;
        assert!(matches!(missing, Err(ApiError::NoMatch(_))));
    }

    #[tokio::test]
    async fn test_get_title_unavailable() {
        let result = handle_get_title(unavailable(), Path("s1".to_string())).await;
        assert!(matches!(result, Err(ApiError::DataUnavailable(_))));
    }

    #[tokio::test]
    async fn test_category_lookup() {
        let state = ready(vec![
            record("s1", Some("Dramas, Romantic Movies")),
            record("s2", Some("Comedies")),
            record("s3", Some("International Movies, Dramas")),
        ]);

        let response = handle_titles_by_category(state.clone(), Path("dramas".to_string()))
            .await
            .unwrap();
        assert_eq!(response.category, "dramas");
        assert_eq!(response.total_count, 2);
        let ids: Vec<&str> = response.results.iter().map(|r| r.show_id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s3"]);

        let none = handle_titles_by_category(state, Path("Horror".to_string())).await;
        assert!(matches!(none, Err(ApiError::NoMatch(_))));
    }
}
