//! # Error Types
//!
//! Domain-specific error types for artha-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  artha-core errors (this file)                                         │
//! │  └── ValidationError  - Line item rule violations                      │
//! │                                                                         │
//! │  artha-editor errors (separate crate)                                  │
//! │  └── EditorError      - Session operation failures                     │
//! │                                                                         │
//! │  artha-client errors (separate crate)                                  │
//! │  └── ClientError      - Remote API failures                            │
//! │                                                                         │
//! │  Flow: ValidationError → EditorError → UI message                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every variant is a local, user-correctable condition
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Line item validation errors.
///
/// Both variants are recoverable: the caller keeps the previous state and
/// shows the message. Nothing in this crate is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A quantity edit violated the unit rule for the line.
    ///
    /// The rejected keystroke is not applied; the line keeps its prior
    /// quantity.
    #[error("{reason}")]
    InvalidQuantity { reason: String },

    /// A line is missing a required field at submit time.
    ///
    /// Blocks submission without clearing the draft.
    #[error("line item is incomplete: {field} is required")]
    IncompleteLineItem { field: &'static str },
}

impl ValidationError {
    /// Quantity rule message for discrete (pieces) units.
    pub(crate) fn pieces_quantity() -> Self {
        ValidationError::InvalidQuantity {
            reason: "quantity for pieces must be a whole number (minimum 1)".to_string(),
        }
    }

    /// Quantity rule message for fractional (weight/volume) units.
    pub(crate) fn fractional_quantity() -> Self {
        ValidationError::InvalidQuantity {
            reason: "quantity must be at least 0.001".to_string(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::pieces_quantity().to_string(),
            "quantity for pieces must be a whole number (minimum 1)"
        );
        assert_eq!(
            ValidationError::fractional_quantity().to_string(),
            "quantity must be at least 0.001"
        );
        let err = ValidationError::IncompleteLineItem { field: "quantity" };
        assert_eq!(
            err.to_string(),
            "line item is incomplete: quantity is required"
        );
    }
}
