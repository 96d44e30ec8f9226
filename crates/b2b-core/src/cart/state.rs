//! Cart slice state, its initial values and the persisted projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::types::{
    AsyncStatus, B2BCartItem, B2BCartTotals, CheckoutBlockedReason, SpendingValidation,
};

// =============================================================================
// Cart State
// =============================================================================

/// The B2B cart slice.
///
/// ## Derived Fields
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  items ──────────────┬──► item_count   (Σ quantity)                     │
/// │                      ├──► totals       (calculate_totals)               │
/// │                      └──► can_checkout / checkout_blocked_reason        │
/// │                             ▲                   ▲                       │
/// │  spending_validation ───────┘                   │                       │
/// │  shipping_address_id ───────────────────────────┘                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Derived fields are only ever written by the reducer; `checkout_blocked_reason`
/// is `None` exactly when `can_checkout` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartB2BState {
    pub items: Vec<B2BCartItem>,
    pub item_count: i64,
    pub totals: B2BCartTotals,
    pub spending_validation: SpendingValidation,
    pub can_checkout: bool,
    pub checkout_blocked_reason: Option<CheckoutBlockedReason>,
    pub shipping_address_id: Option<String>,
    pub purchase_order_number: Option<String>,
    pub notes: Option<String>,
    pub status: AsyncStatus,
    pub error: Option<String>,
    #[ts(as = "Option<String>")]
    pub last_updated_at: Option<DateTime<Utc>>,
}

impl Default for CartB2BState {
    fn default() -> Self {
        initial_cart_b2b_state()
    }
}

/// Totals of an empty cart: everything zero, default currency.
pub fn initial_cart_totals() -> B2BCartTotals {
    B2BCartTotals::default()
}

/// Spending validation before any validation pass: within limits.
pub fn initial_spending_validation() -> SpendingValidation {
    SpendingValidation::default()
}

/// The empty cart every session starts from.
pub fn initial_cart_b2b_state() -> CartB2BState {
    CartB2BState {
        items: Vec::new(),
        item_count: 0,
        totals: initial_cart_totals(),
        spending_validation: initial_spending_validation(),
        can_checkout: false,
        checkout_blocked_reason: Some(CheckoutBlockedReason::CartEmpty),
        shipping_address_id: None,
        purchase_order_number: None,
        notes: None,
        status: AsyncStatus::Idle,
        error: None,
        last_updated_at: None,
    }
}

// =============================================================================
// Persisted Cart
// =============================================================================

/// The part of the cart worth persisting between sessions.
///
/// Totals and spending validation are deliberately absent: hydration
/// recomputes them. Older clients that wrote those fields are still
/// readable because unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PersistedCart {
    #[serde(default)]
    pub items: Vec<B2BCartItem>,
    #[serde(default)]
    pub shipping_address_id: Option<String>,
    #[serde(default)]
    pub purchase_order_number: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl PersistedCart {
    /// Encodes the persisted cart as JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a persisted cart from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
