//! Search engine for Vitrin - the facade the presentation layer talks to.
//!
//! A keystroke in the search field feeds the raw query to [`SearchEngine::suggest`]
//! for the dropdown; submitting the query goes through [`SearchEngine::filter`]
//! to narrow the visible grid; each visible title is passed through
//! [`SearchEngine::highlight`] independently. Pricing is invoked when a
//! customer configures options and quantity, independent of search.

use crate::catalog::{Product, SelectedOptions};
use crate::config::Config;
use crate::services::highlight::{self, Segment};
use crate::services::pricing::{self, PriceQuote};
use crate::services::{filter, suggest};

/// Default number of dropdown suggestions offered per query.
const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// The engine that powers product discovery and pricing.
pub struct SearchEngine {
    max_suggestions: usize,
}

impl SearchEngine {
    /// Create an engine with default settings.
    pub fn new() -> Self {
        Self {
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }

    /// Create an engine from loaded configuration.
    pub fn with_config(config: &Config) -> Self {
        Self {
            max_suggestions: config.search.max_suggestions as usize,
        }
    }

    /// Narrow the product grid by category and title query.
    ///
    /// See [`filter::filter`] for the matching rules.
    pub fn filter<'a>(
        &self,
        products: &'a [Product],
        query: &str,
        category_id: Option<&str>,
    ) -> Vec<&'a Product> {
        filter::filter(products, query, category_id)
    }

    /// Ranked title suggestions for a partial query, bounded by the
    /// configured limit.
    pub fn suggest(&self, products: &[Product], query: &str) -> Vec<String> {
        suggest::suggest(products, query, self.max_suggestions)
    }

    /// Annotate display text with matched/unmatched spans.
    pub fn highlight(&self, text: &str, query: &str) -> Vec<Segment> {
        highlight::highlight(text, query)
    }

    /// Price `quantity` units of `product` configured with the selected
    /// options.
    pub fn quote(
        &self,
        product: &Product,
        selected: &SelectedOptions,
        quantity: i64,
    ) -> PriceQuote {
        pricing::compute_price(product.price, selected, quantity)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}
