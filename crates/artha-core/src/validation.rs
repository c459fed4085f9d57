//! # Validation Module
//!
//! Line item validation rules.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Per keystroke                                                │
//! │  └── validate_quantity — unit-aware granularity rule                   │
//! │      Rejected edits are NOT applied; prior value stays                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: At submit                                                    │
//! │  └── validate_line_item — completeness gate                            │
//! │      Blocks submission, draft is kept intact                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Remote API                                                   │
//! │  └── Authoritative validation and totals recomputation                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use artha_core::types::Unit;
//! use artha_core::validation::validate_quantity;
//!
//! // Pieces take whole numbers only
//! assert!(validate_quantity(Some(Unit::Pieces), "3").is_ok());
//! assert!(validate_quantity(Some(Unit::Pieces), "2.5").is_err());
//! ```

use rust_decimal::Decimal;

use crate::draft::LineItem;
use crate::error::{ValidationError, ValidationResult};
use crate::types::{Quantity, Unit};

/// Smallest accepted quantity for fractional units (1 gram / 1 ml scale).
pub fn min_fractional_quantity() -> Decimal {
    Decimal::new(1, 3) // 0.001
}

// =============================================================================
// Quantity Validation (per keystroke)
// =============================================================================

/// Validates a raw quantity string against the governing unit.
///
/// The governing unit is the one captured on the line at selection time
/// (`LineItem::product_unit`), so granularity holds even if the underlying
/// product changes later. `None` means no product is selected yet.
///
/// ## Rules
/// - Empty input → `Quantity::Unset` (the user is mid-typing; not an error,
///   not zero)
/// - No unit yet → loose parse; unparseable text also behaves as unset
/// - Discrete unit (pieces) → integer ≥ 1
/// - Fractional unit → any value ≥ 0.001
///
/// On `Err` the caller must keep the previous quantity and surface the
/// message; the rejected keystroke is not applied.
pub fn validate_quantity(unit: Option<Unit>, raw: &str) -> ValidationResult<Quantity> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Quantity::Unset);
    }

    let parsed = raw.parse::<Decimal>();

    let Some(unit) = unit else {
        // No selection yet: no unit rule applies until a product is chosen.
        return Ok(parsed.map(Quantity::Value).unwrap_or(Quantity::Unset));
    };

    if unit.is_discrete() {
        let value = parsed.map_err(|_| ValidationError::pieces_quantity())?;
        if value < Decimal::ONE || !value.fract().is_zero() {
            return Err(ValidationError::pieces_quantity());
        }
        Ok(Quantity::Value(value))
    } else {
        let value = parsed.map_err(|_| ValidationError::fractional_quantity())?;
        if value < min_fractional_quantity() {
            return Err(ValidationError::fractional_quantity());
        }
        Ok(Quantity::Value(value))
    }
}

// =============================================================================
// Completeness Validation (at submit)
// =============================================================================

/// Validates that a line is complete enough to submit.
///
/// ## Rules
/// - A product must be selected
/// - The quantity must be resolved (not the unset sentinel) and > 0
/// - The unit price must be non-negative (zero is allowed: free items)
///
/// Failing any rule blocks submission with `IncompleteLineItem`; the draft
/// is not cleared.
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    if item.product_id.is_none() {
        return Err(ValidationError::IncompleteLineItem { field: "product" });
    }

    match item.quantity.value() {
        Some(q) if q > Decimal::ZERO => {}
        _ => {
            return Err(ValidationError::IncompleteLineItem { field: "quantity" });
        }
    }

    if item.unit_price.is_negative() {
        return Err(ValidationError::IncompleteLineItem { field: "unit price" });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
