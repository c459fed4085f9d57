//! # Invoice Draft
//!
//! The invoice being edited: line items plus header amounts.
//!
//! ## Draft Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Draft Operations                                     │
//! │                                                                         │
//! │  Editor Action            Line Update              Draft Change         │
//! │  ─────────────            ───────────              ────────────         │
//! │                                                                         │
//! │  Add Item ───────────────────────────────────────► items.push(empty)   │
//! │                                                                         │
//! │  Pick Product ───────────► item.selected(p) ─────► set_item(new)       │
//! │                                                                         │
//! │  Type Quantity ──────────► validate, then                               │
//! │                            item.with_quantity(q) ─► set_item(new)       │
//! │                            (rejected edit: draft untouched)             │
//! │                                                                         │
//! │  Click Remove ───────────────────────────────────► remove_item(key)    │
//! │                                                                         │
//! │  Totals are recomputed on demand, never stored.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Notes
//! - Line updates are immutable: each update method returns a NEW `LineItem`
//!   and the caller stores it back. Rejected updates therefore leave the
//!   stored line untouched by construction.
//! - Every line carries a stable `LineKey` generated at creation time.
//!   Auxiliary per-line state (search terms, dropdown flags) must key off
//!   it, never off the array position, so removing a line cannot shift
//!   state onto a neighbour.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::ValidationResult;
use crate::money::Money;
use crate::types::{Invoice, InvoiceStatus, Product, ProductId, Quantity, Unit};
use crate::validation::validate_line_item;

// =============================================================================
// Line Key
// =============================================================================

/// Stable identity of one line within a draft.
///
/// Generated at line creation, never reused, survives removal and
/// reordering of other lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey(Uuid);

impl LineKey {
    fn generate() -> Self {
        LineKey(Uuid::new_v4())
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One product/quantity/price row within the draft.
///
/// ## Design Notes
/// - `product_unit` is captured from the product at selection time and
///   governs quantity granularity even if the underlying product later
///   changes.
/// - `unit_price` and `description` are auto-filled on selection but stay
///   independently editable afterwards; re-selecting overwrites them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Stable per-line key (see [`LineKey`]).
    pub key: LineKey,

    /// Selected product, or `None` while the line is unresolved.
    pub product_id: Option<ProductId>,

    /// Entered quantity; `Unset` while the field is empty.
    pub quantity: Quantity,

    /// Editable unit price; may diverge from the product's current price.
    pub unit_price: Money,

    /// Editable description, auto-filled from the product name.
    pub description: String,

    /// Unit captured at selection time; quantity granularity follows this.
    pub product_unit: Unit,
}

impl LineItem {
    /// Creates a fresh, unresolved line.
    pub fn new() -> Self {
        LineItem {
            key: LineKey::generate(),
            product_id: None,
            quantity: Quantity::Unset,
            unit_price: Money::zero(),
            description: String::new(),
            product_unit: Unit::Pieces,
        }
    }

    /// Whether a product has been selected into this line.
    #[inline]
    pub fn is_selected(&self) -> bool {
        self.product_id.is_some()
    }

    /// Binds `product` to this line, auto-filling the derived fields.
    ///
    /// Overwrites any prior manual edits to `unit_price` and `description`
    /// — selection is destructive, matching the auto-fill policy.
    pub fn selected(&self, product: &Product) -> LineItem {
        LineItem {
            product_id: Some(product.id),
            unit_price: product.price,
            description: product.name.clone(),
            product_unit: product.unit,
            ..self.clone()
        }
    }

    /// Clears the selection so the user can search again.
    ///
    /// Resets the price to zero and clears the description; the entered
    /// quantity and the captured unit are left as they are.
    pub fn deselected(&self) -> LineItem {
        LineItem {
            product_id: None,
            unit_price: Money::zero(),
            description: String::new(),
            ..self.clone()
        }
    }

    /// Returns a copy with the given quantity.
    pub fn with_quantity(&self, quantity: Quantity) -> LineItem {
        LineItem {
            quantity,
            ..self.clone()
        }
    }

    /// Returns a copy with the given unit price.
    pub fn with_unit_price(&self, unit_price: Money) -> LineItem {
        LineItem {
            unit_price,
            ..self.clone()
        }
    }

    /// Returns a copy with the given description.
    pub fn with_description(&self, description: impl Into<String>) -> LineItem {
        LineItem {
            description: description.into(),
            ..self.clone()
        }
    }

    /// Line total: quantity (0 if unset) × unit price.
    ///
    /// Never negative by construction for validated lines, since both
    /// factors are non-negative.
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity.or_zero()
    }

    /// Savings versus MRP for this line.
    ///
    /// Display-only and always recomputed from the current unit price and
    /// the catalog snapshot, so it reflects live editing. Zero whenever the
    /// product is absent, has no MRP data, the MRP does not exceed the unit
    /// price, or the quantity is unresolved.
    pub fn savings(&self, product: Option<&Product>) -> Money {
        let Some(product) = product else {
            return Money::zero();
        };
        let qty = self.quantity.or_zero();
        if product.has_mrp() && product.mrp > self.unit_price && !qty.is_zero() {
            (product.mrp - self.unit_price) * qty
        } else {
            Money::zero()
        }
    }
}

impl Default for LineItem {
    fn default() -> Self {
        LineItem::new()
    }
}

// =============================================================================
// Invoice Draft
// =============================================================================

/// The invoice being edited.
///
/// ## Lifecycle
/// Created empty (new invoice) or hydrated from a fetched invoice (edit).
/// Owned exclusively by one editing session; discarded on cancel, handed to
/// the remote API on submit. Nothing is persisted until explicit submission.
///
/// ## Invariants
/// - Lines are mutated only through the key-addressed item operations, so
///   a rejected update can never leave a half-applied line behind.
/// - `tax_amount` and `discount_amount` are entered, not derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    pub invoice_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub status: InvoiceStatus,
    pub notes: String,
    pub tax_amount: Money,
    pub discount_amount: Money,
    items: Vec<LineItem>,
}

impl InvoiceDraft {
    /// Creates an empty draft dated `invoice_date`.
    ///
    /// The date comes from the caller — this crate takes no clock.
    pub fn new(invoice_date: NaiveDate) -> Self {
        InvoiceDraft {
            invoice_date,
            due_date: None,
            customer_name: String::new(),
            customer_email: String::new(),
            customer_phone: String::new(),
            customer_address: String::new(),
            status: InvoiceStatus::Draft,
            notes: String::new(),
            tax_amount: Money::zero(),
            discount_amount: Money::zero(),
            items: Vec::new(),
        }
    }

    /// Builds a draft from a fetched invoice for editing.
    ///
    /// Each line gets a fresh key. The captured unit is re-resolved through
    /// the catalog snapshot; lines whose product is no longer in the
    /// catalog fall back to the default unit and validate loosely until
    /// re-selected.
    pub fn hydrate(invoice: &Invoice, catalog: &Catalog) -> Self {
        let items = invoice
            .items
            .iter()
            .map(|item| LineItem {
                key: LineKey::generate(),
                product_id: item.product_id,
                quantity: Quantity::Value(item.quantity),
                unit_price: item.unit_price,
                description: item.description.clone(),
                product_unit: item
                    .product_id
                    .and_then(|id| catalog.get(id))
                    .map(|p| p.unit)
                    .unwrap_or_default(),
            })
            .collect();

        InvoiceDraft {
            invoice_date: invoice.invoice_date,
            due_date: invoice.due_date,
            customer_name: invoice.customer_name.clone(),
            customer_email: invoice.customer_email.clone(),
            customer_phone: invoice.customer_phone.clone(),
            customer_address: invoice.customer_address.clone(),
            status: invoice.status,
            notes: invoice.notes.clone(),
            tax_amount: invoice.tax_amount,
            discount_amount: invoice.discount_amount,
            items,
        }
    }

    // -------------------------------------------------------------------------
    // Item access
    // -------------------------------------------------------------------------

    /// The lines in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up a line by key.
    pub fn item(&self, key: LineKey) -> Option<&LineItem> {
        self.items.iter().find(|i| i.key == key)
    }

    /// Appends a fresh, unresolved line and returns its key.
    pub fn add_item(&mut self) -> LineKey {
        let item = LineItem::new();
        let key = item.key;
        self.items.push(item);
        key
    }

    /// Removes the line with the given key. Returns false if absent.
    pub fn remove_item(&mut self, key: LineKey) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.key != key);
        self.items.len() != before
    }

    /// Stores an updated line back, addressed by its own key.
    ///
    /// Returns false (and stores nothing) if no line has that key.
    pub fn set_item(&mut self, item: LineItem) -> bool {
        match self.items.iter_mut().find(|i| i.key == item.key) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Totals (recomputed on demand, never stored)
    // -------------------------------------------------------------------------

    /// Sum of line totals, accumulated at full precision.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Sum of per-line savings against the catalog snapshot.
    pub fn total_savings(&self, catalog: &Catalog) -> Money {
        self.items
            .iter()
            .map(|i| i.savings(i.product_id.and_then(|id| catalog.get(id))))
            .sum()
    }

    /// Subtotal + tax − discount.
    ///
    /// May be negative when the discount exceeds subtotal + tax; that is
    /// accepted and displayed as-is. The remote API is the final arbiter.
    pub fn grand_total(&self) -> Money {
        self.subtotal() + self.tax_amount - self.discount_amount
    }

    /// All display totals in one shot.
    pub fn totals(&self, catalog: &Catalog) -> DraftTotals {
        DraftTotals {
            subtotal: self.subtotal(),
            savings: self.total_savings(catalog),
            tax: self.tax_amount,
            discount: self.discount_amount,
            grand_total: self.grand_total(),
        }
    }

    // -------------------------------------------------------------------------
    // Submission gate
    // -------------------------------------------------------------------------

    /// Submit-time completeness check over every line.
    ///
    /// On failure the draft is left intact so the user can fix it.
    pub fn validate(&self) -> ValidationResult<()> {
        self.items.iter().try_for_each(validate_line_item)
    }
}

/// Draft totals summary for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftTotals {
    pub subtotal: Money,
    pub savings: Money,
    pub tax: Money,
    pub discount: Money,
    pub grand_total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
