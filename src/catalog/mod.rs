//! Static product catalog loaded once at process start.
//!
//! The catalog ships embedded in the binary as JSON and is parsed lazily on
//! first access. It is never mutated afterwards; views derive filtered copies.

use std::sync::{Arc, OnceLock};

/// Embedded catalog document (camelCase fields, one object per product).
const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/apps.json");

/// What: One labelled data point of a product's review histogram.
///
/// Details:
/// - Order inside `Product::review_data` is display order (e.g. "5 star" first).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReviewPoint {
    pub name: String,
    pub value: u64,
}

/// What: Immutable product record shown by every page of the store.
///
/// Inputs:
/// - Deserialized from the embedded catalog (or a test fixture) via Serde.
///
/// Output:
/// - Cloned into derived views (search results, installed list) as needed.
///
/// Details:
/// - `id` is unique within a catalog; `rating_avg` lies in `[0, 5]`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub company_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub rating_avg: f64,
    pub downloads: u64,
    /// Download size in megabytes.
    pub size: f64,
    #[serde(default)]
    pub reviews: u64,
    #[serde(default)]
    pub review_data: Vec<ReviewPoint>,
}

/// Read-only ordered product list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

/// Process-wide builtin catalog, parsed on first use.
static BUILTIN: OnceLock<Arc<Catalog>> = OnceLock::new();

impl Catalog {
    /// Wrap an already-built product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// What: Parse a catalog from a JSON array of products.
    ///
    /// Inputs:
    /// - `body`: JSON text using the camelCase field names.
    ///
    /// Output:
    /// - `Ok(Catalog)` preserving document order; `Err` on malformed JSON.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        let products: Vec<Product> = serde_json::from_str(body)?;
        Ok(Self { products })
    }

    /// What: Access the catalog embedded in the binary.
    ///
    /// Output:
    /// - Shared handle to the parsed builtin catalog.
    ///
    /// Details:
    /// - Parsing happens once; a corrupt embedded document yields an empty catalog
    ///   and an error log instead of aborting the UI.
    pub fn builtin() -> Arc<Catalog> {
        BUILTIN
            .get_or_init(|| match Catalog::from_json(BUILTIN_CATALOG_JSON) {
                Ok(c) => {
                    tracing::debug!(count = c.len(), "loaded builtin catalog");
                    Arc::new(c)
                }
                Err(e) => {
                    tracing::error!(error = %e, "builtin catalog is malformed; starting empty");
                    Arc::new(Catalog::default())
                }
            })
            .clone()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id; stale or unknown ids yield `None`.
    pub fn find(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Sum of downloads across the whole catalog.
    pub fn total_downloads(&self) -> u64 {
        self.products.iter().map(|p| p.downloads).sum()
    }

    /// Sum of review counts across the whole catalog.
    pub fn total_reviews(&self) -> u64 {
        self.products.iter().map(|p| p.reviews).sum()
    }
}
