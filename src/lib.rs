//! Title Catalog Service Library
//!
//! This library crate defines the modules behind the catalog HTTP service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`catalog`**: The read-only dataset. Loads titles from a CSV file once at startup,
//!   indexes them by identifier and answers listing, identifier and category lookups.
//! - **`search`**: Description search. Contains the tokenizer (lowercasing, word
//!   segmentation, stop-word removal) and the keyword-overlap ranker.
//! - **`config`**: Command line and environment configuration for the server.
//! - **`error`**: The API error taxonomy and its HTTP mapping.
//! - **`pages`**: The HTML landing page.

pub mod catalog;
pub mod config;
pub mod error;
pub mod pages;
pub mod search;
