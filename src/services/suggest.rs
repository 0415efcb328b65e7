//! Typo-tolerant title suggestions for the search dropdown.
//!
//! Each title is scored by the minimum edit distance between the query and
//! any contiguous substring of the title, so a match in the middle of a
//! title costs the same as a prefix match. Scores are normalized by query
//! length and candidates above the tolerance threshold are dropped.

use crate::catalog::Product;

/// A candidate survives when `edit distance / query length` stays at or
/// below this ratio. At 0.4, "latte" tolerates up to two edits.
const MAX_DISTANCE_RATIO: f64 = 0.4;

/// Rank product titles against a partial query, best match first.
///
/// Returns at most `limit` titles. Ties keep catalog order, and duplicate
/// titles are not collapsed. An empty query yields no suggestions.
pub fn suggest(products: &[Product], query: &str, limit: usize) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    let query_folded = fold(query);

    let mut scored: Vec<(f64, &Product)> = products
        .iter()
        .filter_map(|product| {
            let title_folded = fold(&product.title);
            let distance = substring_distance(&query_folded, &title_folded);
            let score = distance as f64 / query_folded.len() as f64;
            (score <= MAX_DISTANCE_RATIO).then_some((score, product))
        })
        .collect();

    // Stable sort keeps catalog order within equal scores
    scored.sort_by(|a, b| a.0.total_cmp(&b.0));

    scored
        .into_iter()
        .take(limit)
        .map(|(_, product)| product.title.clone())
        .collect()
}

/// Lowercase a string into a flat char sequence.
fn fold(s: &str) -> Vec<char> {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Minimum edit distance between `needle` and any contiguous substring of
/// `haystack`.
///
/// Standard Levenshtein recurrence over two rolling rows, with a free start
/// and end on the haystack side so the position of the match is irrelevant.
fn substring_distance(needle: &[char], haystack: &[char]) -> usize {
    if needle.is_empty() {
        return 0;
    }

    // Row 0 is all zeros: a match may begin at any haystack position
    let mut prev: Vec<usize> = vec![0; haystack.len() + 1];
    let mut curr: Vec<usize> = vec![0; haystack.len() + 1];

    for (i, nc) in needle.iter().enumerate() {
        curr[0] = i + 1;
        for (j, hc) in haystack.iter().enumerate() {
            let cost = usize::from(nc != hc);
            curr[j + 1] = (prev[j] + cost)
                .min(prev[j + 1] + 1)
                .min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    // A match may end at any haystack position
    prev.iter().copied().min().unwrap_or(needle.len())
}
