//! # b2b-core: Pure State Logic for the B2B Storefront
//!
//! This crate holds the storefront's client state: the B2B cart and its
//! sibling slices (company context, quotes, approvals), written as pure
//! reducers and selectors with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     B2B Storefront Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront UI                                │   │
//! │  │   Catalog ──► Cart ──► Checkout ──► Quotes / Approvals          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ actions / state snapshots              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    b2b-store (host layer)                       │   │
//! │  │    Store::dispatch, config, tracing                             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ b2b-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │  company  │  │  quotes   │  │ approvals │  │   │
//! │  │   │ reducer   │  │  reducer  │  │  reducer  │  │  reducer  │  │   │
//! │  │   │ selectors │  │ selectors │  │ selectors │  │ selectors │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │          memo • pagination • money • validation                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • DETERMINISTIC TRANSITIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (cart items, spending limits, companies, quotes, approvals)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Cart item and purchase order validation
//! - [`pagination`] - Pagination state shared by list slices
//! - [`memo`] - Selector caches
//! - [`clock`] - Injected time source for reducers
//! - [`cart`], [`company`], [`quotes`], [`approvals`] - State slices
//! - [`root`] - Root state and reducer
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: `(state, action) → state`, time comes from a [`clock::Clock`]
//! 2. **Structural Sharing**: unchanged slices keep their `Arc`, so identity means "unchanged"
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Never Fail**: Reducers surface problems as state, never as errors or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use b2b_core::cart::{cart_b2b_reducer, initial_cart_b2b_state, CartB2BAction};
//! use b2b_core::clock::SystemClock;
//! use b2b_core::{B2BCartItem, CheckoutBlockedReason, Money};
//!
//! let state = Arc::new(initial_cart_b2b_state());
//! let item = B2BCartItem::new("P1", "SKU-P1", "Copy paper", Money::from_cents(100), 2, 1, 10);
//!
//! let state = cart_b2b_reducer(&state, &CartB2BAction::AddItem(item), &SystemClock);
//! assert_eq!(state.totals.subtotal.cents(), 200);
//! assert_eq!(
//!     state.checkout_blocked_reason,
//!     Some(CheckoutBlockedReason::ShippingAddressRequired)
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod approvals;
pub mod cart;
pub mod clock;
pub mod company;
pub mod error;
pub mod memo;
pub mod money;
pub mod pagination;
pub mod quotes;
pub mod root;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use b2b_core::Money` instead of
// `use b2b_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pagination::{create_pagination_state, PaginationState};
pub use root::{root_reducer, RootAction, RootState};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency used for empty carts and totals before the pricing service
/// reports one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Page size for list slices before the first fetch.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upper bound for any product's `max_order_quantity`.
///
/// ## Business Reason
/// Catches catalog errors such as a maximum entered in units instead of
/// cases before they reach a cart.
pub const MAX_ORDER_QUANTITY: i64 = 100_000;

/// Maximum length of a purchase order number.
///
/// Matches the longest PO reference accepted by the ERP export.
pub const MAX_PO_NUMBER_LENGTH: usize = 50;

/// Default capacity of parameterized selector caches.
pub const DEFAULT_SELECTOR_CACHE_SIZE: usize = 10;

/// Default spending-limit utilisation, in basis points, at which a limit is
/// reported as nearly exhausted (80%).
pub const DEFAULT_WARNING_THRESHOLD_BPS: i64 = 8_000;
