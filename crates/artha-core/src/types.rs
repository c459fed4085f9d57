//! # Domain Types
//!
//! Core domain types used throughout the Artha billing client.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Invoice      │   │     Unit        │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  id (i64)       │   │  Pieces         │       │
//! │  │  name/code      │   │  invoice_number │   │  Kilograms      │       │
//! │  │  price / mrp    │   │  status         │   │  Grams          │       │
//! │  │  stock          │   │  total_amount   │   │  Liters         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Products are an immutable SNAPSHOT for one editing session;            │
//! │  Invoice is the fetched record, InvoiceDraft (draft.rs) is the          │
//! │  mutable one being edited.                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Backend entities carry `i64` ids assigned by the remote API. Draft lines,
//! which the backend has never seen, carry uuid `LineKey`s instead (draft.rs).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Backend-assigned product identifier.
pub type ProductId = i64;

/// Backend-assigned invoice identifier.
pub type InvoiceId = i64;

// =============================================================================
// Unit
// =============================================================================

/// Measurement unit of a product.
///
/// The unit governs quantity granularity: `Pieces` is discrete (whole
/// numbers ≥ 1), everything else is continuous (any amount ≥ 0.001).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Unit {
    #[default]
    Pieces,
    Kilograms,
    Grams,
    Liters,
}

impl Unit {
    /// All known units, in display order.
    pub const ALL: [Unit; 4] = [Unit::Pieces, Unit::Kilograms, Unit::Grams, Unit::Liters];

    /// Whether quantities of this unit must be whole numbers.
    #[inline]
    pub const fn is_discrete(&self) -> bool {
        matches!(self, Unit::Pieces)
    }

    /// Human-readable name for pickers and labels.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Unit::Pieces => "Pieces",
            Unit::Kilograms => "Kilograms",
            Unit::Grams => "Grams",
            Unit::Liters => "Liters",
        }
    }

    /// Short code printed next to quantities.
    pub const fn code(&self) -> &'static str {
        match self {
            Unit::Pieces => "pcs",
            Unit::Kilograms => "kg",
            Unit::Grams => "g",
            Unit::Liters => "L",
        }
    }
}

// =============================================================================
// Quantity
// =============================================================================

/// A line item quantity, or the "unset" sentinel.
///
/// While the user is mid-edit the field may be empty; that state is `Unset`,
/// which is NOT the same as zero. `Unset` contributes 0 to totals but fails
/// the submit-time completeness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Quantity {
    /// Empty field, user still typing. Serialized as `null`.
    #[default]
    Unset,
    Value(Decimal),
}

impl Quantity {
    /// Whether a value has been entered.
    #[inline]
    pub const fn is_set(&self) -> bool {
        matches!(self, Quantity::Value(_))
    }

    /// The entered value, if any.
    #[inline]
    pub const fn value(&self) -> Option<Decimal> {
        match self {
            Quantity::Unset => None,
            Quantity::Value(v) => Some(*v),
        }
    }

    /// The value used in totals: unset counts as zero.
    #[inline]
    pub fn or_zero(&self) -> Decimal {
        self.value().unwrap_or(Decimal::ZERO)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product from the catalog snapshot.
///
/// Immutable for the duration of an editing session: the catalog is fetched
/// once when editing begins and staleness is accepted (snapshot semantics).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Backend-assigned identifier, stable across the session.
    pub id: ProductId,

    /// Display name shown in search results and auto-filled descriptions.
    pub name: String,

    /// Business code, searchable alongside name and category.
    pub code: String,

    /// Category label, searchable.
    pub category: String,

    /// Measurement unit; governs quantity granularity for lines selling
    /// this product.
    pub unit: Unit,

    /// Current unit selling price.
    pub price: Money,

    /// Maximum retail price. Zero means "no MRP data" — savings display is
    /// suppressed, this is not a zero-rupee ceiling.
    pub mrp: Money,

    /// Current stock level. Informational only at invoice time.
    #[ts(as = "String")]
    pub stock: Decimal,

    /// Threshold at or below which the product counts as low stock.
    #[ts(as = "String")]
    pub min_stock_level: Decimal,

    /// Whether the product is active (soft delete).
    pub active: bool,
}

impl Product {
    /// Whether MRP data exists for this product.
    ///
    /// `mrp == 0` is treated as "no savings possible", matching the
    /// upstream behavior of suppressing savings for falsy MRP.
    #[inline]
    pub fn has_mrp(&self) -> bool {
        self.mrp.is_positive()
    }

    /// Stock is exactly zero.
    #[inline]
    pub fn is_out_of_stock(&self) -> bool {
        self.stock.is_zero()
    }

    /// Stock is positive but at or below the minimum stock level.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        !self.is_out_of_stock() && self.stock <= self.min_stock_level
    }
}

// =============================================================================
// Invoice Status
// =============================================================================

/// Lifecycle status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum InvoiceStatus {
    /// Being drafted, not yet sent to the customer.
    #[default]
    Draft,
    /// Sent to the customer, awaiting payment.
    Sent,
    /// Paid in full.
    Paid,
    /// Past its due date without payment.
    Overdue,
    /// Cancelled; excluded from revenue.
    Cancelled,
}

impl InvoiceStatus {
    /// Wire representation (matches the serde rename).
    pub const fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "DRAFT",
            InvoiceStatus::Sent => "SENT",
            InvoiceStatus::Paid => "PAID",
            InvoiceStatus::Overdue => "OVERDUE",
            InvoiceStatus::Cancelled => "CANCELLED",
        }
    }

    /// Whether the invoice can be emailed to the customer.
    ///
    /// Only drafts are sendable, and only when a customer email exists.
    #[inline]
    pub const fn can_send(&self, has_customer_email: bool) -> bool {
        matches!(self, InvoiceStatus::Draft) && has_customer_email
    }

    /// Whether "mark as paid" is offered.
    #[inline]
    pub const fn can_mark_paid(&self) -> bool {
        matches!(
            self,
            InvoiceStatus::Draft | InvoiceStatus::Sent | InvoiceStatus::Overdue
        )
    }

    /// Whether cancellation is offered.
    #[inline]
    pub const fn can_cancel(&self) -> bool {
        matches!(self, InvoiceStatus::Draft | InvoiceStatus::Sent)
    }

    /// Paid and cancelled invoices are settled; nothing further is owed.
    #[inline]
    pub const fn is_settled(&self) -> bool {
        matches!(self, InvoiceStatus::Paid | InvoiceStatus::Cancelled)
    }
}

// =============================================================================
// Invoice (fetched record)
// =============================================================================

/// A line on a fetched invoice.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceItem {
    /// Product reference; may be absent on legacy rows.
    pub product_id: Option<ProductId>,
    #[ts(as = "String")]
    pub quantity: Decimal,
    pub unit_price: Money,
    pub description: String,
}

/// An invoice as returned by the remote API.
///
/// The server is the authority on `total_amount`; client-side totals are
/// advisory/display-only.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Invoice {
    pub id: InvoiceId,
    pub invoice_number: String,
    pub status: InvoiceStatus,
    #[ts(as = "String")]
    pub invoice_date: NaiveDate,
    #[ts(as = "Option<String>")]
    pub due_date: Option<NaiveDate>,
    /// Empty for cash sales.
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub tax_amount: Money,
    pub discount_amount: Money,
    pub total_amount: Money,
    pub notes: String,
    pub items: Vec<InvoiceItem>,
}

impl Invoice {
    /// Whether a usable customer email exists (non-blank after trimming).
    #[inline]
    pub fn has_customer_email(&self) -> bool {
        !self.customer_email.trim().is_empty()
    }

    /// Case-insensitive list filter over customer name and invoice number.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.customer_name.to_lowercase().contains(&q)
            || self.invoice_number.to_lowercase().contains(&q)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
