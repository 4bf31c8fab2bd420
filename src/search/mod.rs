//! Search Service Module
//!
//! Description search over the in-memory catalog.
//!
//! ## Overview
//! A single-pass keyword-overlap ranker. The query is normalized once, every record's
//! description is normalized and intersected with it, and records sharing at least one
//! keyword are returned ordered by overlap count. There is no inverted index, stemming
//! or semantic matching.
//!
//! ## Responsibilities
//! - **Tokenization**: Turning free text into a set of lowercase, alphanumeric, non-stop-word tokens.
//! - **Ranking**: Scoring records by the number of shared tokens, with stable tie-breaks.
//! - **Retrieval**: Re-attaching full records to ranked identifiers in the HTTP handler.
//!
//! ## Submodules
//! - **`engine`**: The ranker and `ScoredMatch`.
//! - **`handlers`**: HTTP request handler for description search.
//! - **`tokenizer`**: Text normalization and the stop-word list.
//! - **`types`**: Data Transfer Objects (DTOs) for API responses.

pub mod engine;
pub mod handlers;
pub mod tokenizer;
pub mod types;
