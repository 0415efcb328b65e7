//! Exact/substring filtering for the storefront product grid.

use crate::catalog::Product;

/// Narrow `products` to those matching an optional category and a title
/// query, preserving catalog order.
///
/// Category narrowing always runs first; products without a category never
/// match a category filter. An empty query returns the category-narrowed set
/// unchanged. Otherwise, case-insensitive exact title matches pre-empt
/// substring matches entirely: a customer typing a complete title should see
/// that product alone, not a noisy list of partial matches.
pub fn filter<'a>(
    products: &'a [Product],
    query: &str,
    category_id: Option<&str>,
) -> Vec<&'a Product> {
    let mut candidates: Vec<&Product> = match category_id {
        Some(category) if !category.is_empty() => products
            .iter()
            .filter(|p| p.category.as_ref().is_some_and(|c| c.id == category))
            .collect(),
        _ => products.iter().collect(),
    };

    if query.is_empty() {
        return candidates;
    }

    let query_lower = query.to_lowercase();

    let exact: Vec<&Product> = candidates
        .iter()
        .filter(|p| p.title.to_lowercase() == query_lower)
        .copied()
        .collect();
    if !exact.is_empty() {
        return exact;
    }

    candidates.retain(|p| p.title.to_lowercase().contains(&query_lower));
    candidates
}
