//! Core engine module - storefront-agnostic discovery and pricing logic.
//!
//! This module ties the leaf services together behind a single facade that
//! the presentation layer talks to:
//! - Grid filtering (category + exact/substring title matching)
//! - Dropdown suggestions (typo-tolerant title ranking)
//! - Title highlighting (matched/unmatched spans)
//! - Cart pricing (base amount + selected options × quantity)

pub mod search;

pub use search::SearchEngine;
