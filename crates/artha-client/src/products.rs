//! # Product Endpoints
//!
//! Catalog fetch and product CRUD against the remote API.
//!
//! ## Key Operations
//! - `catalog()` — the one-shot snapshot fetch that starts an editing
//!   session (the whole list, sorted by name)
//! - categories / units for the product form pickers
//! - low-stock list for the dashboard
//! - create / update / delete

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use artha_core::{Catalog, Money, Product, ProductId, Unit};

use crate::client::ApiClient;
use crate::error::ClientResult;

/// Page size used when fetching "everything" (the backend caps pages).
const FULL_PAGE_SIZE: u32 = 1000;

// =============================================================================
// Paging Envelope
// =============================================================================

/// Spring-style page envelope.
///
/// Only the fields the client actually reads; the rest of the envelope is
/// ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: i64,
    #[serde(default)]
    pub total_pages: i64,
}

// =============================================================================
// DTOs
// =============================================================================

/// Product as returned by the remote API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub unit: Unit,
    pub price: Decimal,
    /// Absent or null means "no MRP data".
    #[serde(default)]
    pub mrp: Option<Decimal>,
    /// Current stock level.
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub min_stock_level: Decimal,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Product {
            id: dto.id,
            name: dto.name,
            code: dto.code.unwrap_or_default(),
            category: dto.category.unwrap_or_default(),
            unit: dto.unit,
            price: Money::new(dto.price),
            // Missing MRP and explicit zero both mean "no savings possible"
            mrp: dto.mrp.map(Money::new).unwrap_or_else(Money::zero),
            stock: dto.quantity,
            min_stock_level: dto.min_stock_level,
            active: dto.active,
        }
    }
}

/// Create/update payload for a product.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub mrp: Option<Decimal>,
    pub quantity: Decimal,
    pub min_stock_level: Decimal,
    pub category: String,
    pub unit: Unit,
    pub active: bool,
}

/// One entry of the `/products/units` picker list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitInfo {
    pub name: Unit,
    pub display_name: String,
    pub code: String,
}

impl UnitInfo {
    /// Built-in picker list, used when the units endpoint is unavailable.
    pub fn fallback() -> Vec<UnitInfo> {
        Unit::ALL
            .iter()
            .map(|unit| UnitInfo {
                name: *unit,
                display_name: unit.display_name().to_string(),
                code: unit.code().to_string(),
            })
            .collect()
    }
}

// =============================================================================
// Endpoints
// =============================================================================

/// Product endpoints.
pub struct ProductsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl ProductsApi<'_> {
    /// One page of products.
    pub async fn list(&self, page: u32, size: u32, sort: &str) -> ClientResult<Page<ProductDto>> {
        self.client
            .get_json_query(
                "/products",
                &[
                    ("page", page.to_string()),
                    ("size", size.to_string()),
                    ("sort", sort.to_string()),
                ],
            )
            .await
    }

    /// The whole product list, sorted by name.
    pub async fn list_all(&self) -> ClientResult<Vec<ProductDto>> {
        Ok(self.list(0, FULL_PAGE_SIZE, "name,asc").await?.content)
    }

    /// Fetches the catalog snapshot for an editing session.
    ///
    /// One-shot: the session works over this snapshot and accepts
    /// staleness until the next session starts.
    pub async fn catalog(&self) -> ClientResult<Catalog> {
        let products = self
            .list_all()
            .await?
            .into_iter()
            .map(Product::from)
            .collect();
        Ok(Catalog::new(products))
    }

    /// Distinct category names for the pickers.
    pub async fn categories(&self) -> ClientResult<Vec<String>> {
        self.client.get_json("/products/categories").await
    }

    /// Unit picker entries. See [`UnitInfo::fallback`] for the offline list.
    pub async fn units(&self) -> ClientResult<Vec<UnitInfo>> {
        self.client.get_json("/products/units").await
    }

    /// Products at or below their minimum stock level.
    pub async fn low_stock(&self) -> ClientResult<Vec<ProductDto>> {
        self.client.get_json("/products/low-stock").await
    }

    pub async fn create(&self, request: &ProductRequest) -> ClientResult<ProductDto> {
        self.client.post_json("/products", request).await
    }

    pub async fn update(&self, id: ProductId, request: &ProductRequest) -> ClientResult<ProductDto> {
        self.client
            .put_json(&format!("/products/{}", id), request)
            .await
    }

    pub async fn delete(&self, id: ProductId) -> ClientResult<()> {
        self.client.delete(&format!("/products/{}", id)).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
