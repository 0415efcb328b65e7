//! Leaf services consumed by the search engine facade.
//!
//! Each service is a small, pure transformation:
//! - Filtering (exact/substring narrowing of the product grid)
//! - Suggestions (typo-tolerant title ranking)
//! - Highlighting (matched/unmatched span annotation)
//! - Pricing (unit and total price composition)

pub mod filter;
pub mod highlight;
pub mod pricing;
pub mod suggest;
