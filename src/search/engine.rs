use super::tokenizer::normalize;
use crate::catalog::store::Catalog;
use std::collections::BTreeSet;

/// A record that shares at least one keyword with the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredMatch {
    pub record_id: String,
    /// Number of shared keywords, always >= 1.
    pub score: usize,
    pub keywords: BTreeSet<String>,
}

/// Ranks catalog records by keyword overlap between `query` and their descriptions.
///
/// Records with no overlap are left out. Matches are ordered by score, highest
/// first; equal scores keep catalog order. A query without usable keywords
/// matches nothing.
pub fn rank(query: &str, catalog: &Catalog) -> Vec<ScoredMatch> {
    let query_tokens = normalize(Some(query));
    if query_tokens.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<ScoredMatch> = catalog
        .iter()
        .filter_map(|record| {
            let desc_tokens = normalize(record.description.as_deref());
            let keywords: BTreeSet<String> =
                query_tokens.intersection(&desc_tokens).cloned().collect();

            if keywords.is_empty() {
                return None;
            }

            Some(ScoredMatch {
                record_id: record.show_id.clone(),
                score: keywords.len(),
                keywords,
            })
        })
        .collect();

    // Stable: ties stay in catalog order.
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}
