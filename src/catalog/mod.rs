//! Catalog Module
//!
//! The read-only collection of titles the service answers from.
//!
//! ## Lifecycle
//! The catalog is built exactly once at startup from a CSV file and shared with every
//! handler through an `Arc<CatalogState>`. If loading fails the state is `Unavailable`
//! and every data-dependent endpoint answers with a `DataUnavailable` error instead
//! of working on partial data. Records are never created, updated or deleted afterwards.
//!
//! ## Submodules
//! - **`types`**: The record model and the JSON response shapes.
//! - **`loader`**: CSV parsing into records (absent cells stay absent).
//! - **`store`**: The indexed `Catalog` and the shared `CatalogState` handle.
//! - **`handlers`**: HTTP handlers for listing, identifier lookup and category filtering.

pub mod handlers;
pub mod loader;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
