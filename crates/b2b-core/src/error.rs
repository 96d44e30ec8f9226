//! # Error Types
//!
//! Domain-specific error types for b2b-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  b2b-core errors (this file)                                           │
//! │  ├── CoreError        - Persistence shape and wrapped validation       │
//! │  └── ValidationError  - Input checks before an action is dispatched    │
//! │                                                                         │
//! │  b2b-store errors (separate crate)                                     │
//! │  └── StoreError       - Configuration, I/O, wrapped CoreError          │
//! │                                                                         │
//! │  Reducers themselves NEVER return errors: invalid input is clamped or  │
//! │  ignored and surfaces as a checkout blocked reason instead.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised around (never inside) the reducers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A persisted cart could not be encoded or decoded.
    ///
    /// ## When This Occurs
    /// - Local storage holds a cart written by an incompatible client
    /// - The persisted JSON was truncated
    #[error("Persisted cart is malformed: {0}")]
    PersistedCart(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Hosts may run these checks before dispatching an add-to-cart so the user
/// gets a precise message instead of a silently clamped quantity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Minimum order quantity is above the maximum.
    #[error("Order bounds are inverted: min {min} exceeds max {max}")]
    InvertedBounds { min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
