//! Product catalog data model and loading.
//!
//! Products and categories live in a hosted data service; the storefront
//! fetches them as JSON rows and hands them to the engine as an ordered,
//! read-only collection. Nothing in this crate ever mutates a product.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::error::{StoreError, StoreResult};

/// A category referenced by products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub title: String,
}

/// A purchasable option on a product (size, topping, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOption {
    #[serde(default)]
    pub label: Option<String>,
    pub price: f64,
}

impl ProductOption {
    pub fn new(price: f64) -> Self {
        Self { label: None, price }
    }
}

/// Options a customer picked while configuring a product, keyed by option
/// name. Supplied transiently per pricing computation, never persisted.
pub type SelectedOptions = HashMap<String, ProductOption>;

/// A product row from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Base amount before options.
    pub price: f64,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub options: HashMap<String, ProductOption>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
}

fn default_in_stock() -> bool {
    true
}

/// An ordered collection of products, as fetched from the data service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Decode a catalog from a JSON array of product rows.
    ///
    /// Product ids must be unique within a catalog; a repeated id is
    /// rejected.
    pub fn from_json_str(json: &str) -> StoreResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(StoreError::Catalog(format!(
                    "duplicate product id '{}'",
                    product.id
                )));
            }
        }

        Ok(Self { products })
    }

    /// Load a catalog from a JSON file on disk
    pub fn load_from(path: impl AsRef<Path>) -> StoreResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// The products in their original fetch order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
