//! # artha-core: Pure Business Logic for the Artha Billing Client
//!
//! This crate is the **heart** of the billing front end. It contains the
//! invoice line-item model as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Artha Billing Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI Surface (out of scope)                    │   │
//! │  │    Invoice modal ──► Line rows ──► Totals panel ──► Toasts      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                artha-editor (session state)                     │   │
//! │  │    one InvoiceDraft + catalog snapshot + per-line search        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ artha-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   draft   │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │ LineItem  │  │   rules   │  │   │
//! │  │   │  Invoice  │  │  Decimal  │  │  totals   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐                                 │   │
//! │  │   │  catalog  │  │  summary  │                                 │   │
//! │  │   │  search   │  │ dashboard │                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO CLOCK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               artha-client (remote REST API)                    │   │
//! │  │         products, invoices, auth, reports endpoints             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Invoice, Unit, Quantity, statuses)
//! - [`money`] - Money type with exact decimal arithmetic
//! - [`error`] - Validation error types
//! - [`validation`] - Unit-aware quantity rules and the submit gate
//! - [`catalog`] - Searchable product snapshot and stock advisories
//! - [`draft`] - The invoice being edited: line items and totals
//! - [`summary`] - Dashboard reductions over fetched invoices
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and clock access are FORBIDDEN here
//! 3. **Decimal Money**: Full precision while accumulating, round only for display
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use artha_core::money::Money;
//! use artha_core::types::{Quantity, Unit};
//! use artha_core::validation::validate_quantity;
//! use rust_decimal_macros::dec;
//!
//! // Pieces take whole numbers; weight units go down to 0.001
//! let qty = validate_quantity(Some(Unit::Kilograms), "0.5").unwrap();
//! assert_eq!(qty, Quantity::Value(dec!(0.5)));
//!
//! // Line total = quantity × unit price
//! let total = Money::new(dec!(48.50)) * qty.or_zero();
//! assert_eq!(total.rounded(), dec!(24.25));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod draft;
pub mod error;
pub mod money;
pub mod summary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use artha_core::Money` instead of
// `use artha_core::money::Money`

pub use catalog::{Catalog, Severity, StockAdvisory};
pub use draft::{DraftTotals, InvoiceDraft, LineItem, LineKey};
pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use summary::{overdue, summarize, DashboardSummary};
pub use types::*;
