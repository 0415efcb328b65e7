//! Vitrin - product discovery and pricing engine for an online storefront.
//!
//! Vitrin implements the search and pricing core behind a storefront's
//! product grid: narrowing the grid by category and title, offering
//! typo-tolerant title suggestions while the customer types, marking the
//! matched spans of each visible title, and computing cart line-item prices
//! from a base amount plus selected options.
//!
//! # Architecture
//!
//! The library is organized into these main modules:
//!
//! - [`catalog`] - Product and category data model, JSON catalog loading
//! - [`config`] - Configuration loading and management
//! - [`core`] - The [`SearchEngine`] facade over the leaf services
//! - [`services`] - Filtering, suggestions, highlighting, pricing
//!
//! Everything outside catalog/config loading is a pure, synchronous
//! transformation over data the caller already holds: no I/O, no shared
//! state, safe to call from any thread as long as the catalog itself is not
//! being mutated concurrently.
//!
//! # Example
//!
//! ```ignore
//! use vitrin::{Catalog, SearchEngine};
//!
//! // Load the catalog the data service handed us
//! let catalog = Catalog::from_json_str(&rows)?;
//!
//! let engine = SearchEngine::new();
//!
//! // Dropdown suggestions for a partial query
//! let titles = engine.suggest(catalog.products(), "latt");
//!
//! // Narrow the visible grid on submit
//! let visible = engine.filter(catalog.products(), "latte", None);
//! ```

// Public modules
pub mod catalog;
pub mod config;
pub mod core;
pub mod services;

// Internal modules
mod error;

// Re-export commonly used types for convenience
pub use catalog::{Catalog, CategoryRef, Product, ProductOption, SelectedOptions};
pub use config::Config;
pub use core::search::SearchEngine;
pub use error::{StoreError, StoreResult};
pub use services::highlight::Segment;
pub use services::pricing::PriceQuote;
