//! # Catalog Module
//!
//! The searchable product snapshot for one editing session.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Search Flow                                  │
//! │                                                                         │
//! │  User types "rice" in a line's product box                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Catalog::search("rice")                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Case-insensitive substring match over name, code, category            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Matches in catalog order (no relevance re-sorting)                    │
//! │                                                                         │
//! │  Empty query → the whole catalog, order preserved                      │
//! │  Empty catalog (fetch not done) → no matches, never an error           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Search is pure and side-effect free: identical inputs always produce
//! identical output. The advisory produced on selection is returned as data
//! (`StockAdvisory`) so the engine itself stays pure; forwarding it to a
//! notification sink is the session layer's job.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Product, ProductId};

// =============================================================================
// Catalog
// =============================================================================

/// The product list as fetched at the start of an editing session.
///
/// Snapshot semantics: not live-synced afterwards; staleness is accepted.
/// If the one-shot fetch has not completed, the session runs over an empty
/// catalog and search degrades to "no products found".
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from a fetched product list, preserving order.
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// An empty catalog (fetch pending or failed).
    pub fn empty() -> Self {
        Catalog::default()
    }

    /// All products in snapshot order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Filters the snapshot by a free-text query.
    ///
    /// Case-insensitive substring match against name, code, or category.
    /// The empty query returns the full catalog unfiltered; result order is
    /// snapshot order.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        if query.is_empty() {
            return self.products.iter().collect();
        }

        let q = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&q)
                    || p.code.to_lowercase().contains(&q)
                    || p.category.to_lowercase().contains(&q)
            })
            .collect()
    }
}

// =============================================================================
// Stock Advisory
// =============================================================================

/// Severity of an advisory notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Info,
    Warning,
}

/// A non-fatal stock notice produced when a product is selected into a line.
///
/// Advisory only: it never prevents the selection or invoice submission.
/// Stock is informational at invoice time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StockAdvisory {
    pub severity: Severity,
    pub message: String,
}

impl StockAdvisory {
    /// The advisory for selecting `product`, if its stock warrants one.
    ///
    /// Out of stock takes precedence over low stock.
    pub fn for_product(product: &Product) -> Option<StockAdvisory> {
        if product.is_out_of_stock() {
            Some(StockAdvisory {
                severity: Severity::Warning,
                message: format!(
                    "{} is out of stock! You can still create the invoice, \
                     but consider updating stock levels.",
                    product.name
                ),
            })
        } else if product.is_low_stock() {
            Some(StockAdvisory {
                severity: Severity::Info,
                message: format!(
                    "{} is running low on stock ({} remaining)",
                    product.name, product.stock
                ),
            })
        } else {
            None
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
