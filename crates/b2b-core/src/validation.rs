//! # Validation Module
//!
//! Input validation for hosts that want to reject bad input before it
//! reaches the reducers.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront (TypeScript)                                      │
//! │  └── Quantity steppers bounded by min/max order quantity               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Host (b2b-store)                                             │
//! │  └── THIS MODULE: rejects malformed items with a precise error         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Reducer (b2b-core::cart)                                     │
//! │  ├── Never rejects: clamps quantities, ignores unknown product ids     │
//! │  └── Surfaces leftovers as "Some items have invalid quantities"        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use b2b_core::validation::{validate_order_bounds, validate_purchase_order_number};
//!
//! assert!(validate_order_bounds(5, 200).is_ok());
//! assert!(validate_purchase_order_number("PO-2024/0117").is_ok());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::B2BCartItem;
use crate::{MAX_ORDER_QUANTITY, MAX_PO_NUMBER_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a SKU.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Letters, digits, hyphens and underscores only
///
/// ```rust
/// use b2b_core::validation::validate_sku;
///
/// assert!(validate_sku("PAP-A4-10").is_ok());
/// assert!(validate_sku("").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: 50,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product id: non-empty after trimming.
pub fn validate_product_id(product_id: &str) -> ValidationResult<()> {
    if product_id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "productId".to_string(),
        });
    }
    Ok(())
}

/// Validates a purchase order number.
///
/// ## Rules
/// - Empty is allowed (the PO number is optional)
/// - At most [`MAX_PO_NUMBER_LENGTH`] characters
/// - Letters, digits, `-`, `_`, `/` and `.` only; buyers' ERP systems
///   commonly emit `PO-2024/0117` or `4500012345.01`
pub fn validate_purchase_order_number(po: &str) -> ValidationResult<()> {
    let po = po.trim();

    if po.len() > MAX_PO_NUMBER_LENGTH {
        return Err(ValidationError::TooLong {
            field: "purchaseOrderNumber".to_string(),
            max: MAX_PO_NUMBER_LENGTH,
        });
    }

    if !po
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '/' | '.'))
    {
        return Err(ValidationError::InvalidFormat {
            field: "purchaseOrderNumber".to_string(),
            reason: "must contain only letters, numbers, and - _ / .".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price: zero is allowed (samples), negative is not.
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "unitPrice".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }
    Ok(())
}

/// Validates a product's order bounds.
///
/// ## Rules
/// - `min` must be at least 1
/// - `max` must not exceed [`MAX_ORDER_QUANTITY`]
/// - `min ≤ max`
pub fn validate_order_bounds(min: i64, max: i64) -> ValidationResult<()> {
    if min <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "minOrderQuantity".to_string(),
        });
    }

    if max > MAX_ORDER_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "maxOrderQuantity".to_string(),
            min: 1,
            max: MAX_ORDER_QUANTITY,
        });
    }

    if min > max {
        return Err(ValidationError::InvertedBounds { min, max });
    }

    Ok(())
}

/// Validates a quantity against a product's order bounds.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Quick order: "PAP-A4-10" × 3   (min 5, max 200)                       │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity_in_bounds(3, 5, 200) ← THIS FUNCTION                │
/// │       │                                                                 │
/// │       └── Error: "quantity must be between 5 and 200"                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity_in_bounds(qty: i64, min: i64, max: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty < min || qty > max {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min,
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Runs every check that applies to a cart line.
///
/// `line_total` is not checked: the reducer recomputes it on every
/// transition.
pub fn validate_cart_item(item: &B2BCartItem) -> ValidationResult<()> {
    validate_product_id(&item.product_id)?;
    validate_sku(&item.sku)?;
    validate_unit_price(item.unit_price)?;
    validate_order_bounds(item.min_order_quantity, item.max_order_quantity)?;
    validate_quantity_in_bounds(item.quantity, item.min_order_quantity, item.max_order_quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================
