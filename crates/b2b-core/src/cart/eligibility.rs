//! Checkout eligibility evaluator.

use crate::types::{B2BCartItem, CheckoutBlockedReason};

/// Decides whether the cart can go to checkout, and if not, why.
///
/// ## Cascade (first match wins)
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. no items                      ──► "Cart is empty"                   │
/// │  2. !is_within_limits             ──► "Order exceeds spending limits"   │
/// │  3. no shipping address           ──► "Shipping address required"       │
/// │  4. any qty outside [min, max]    ──► "Some items have invalid quantities"
/// │  5. otherwise                     ──► (true, None)                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// An empty shipping address id counts as missing. Any other id, including
/// whitespace, is passed through for the checkout flow to resolve.
pub fn determine_checkout_status(
    items: &[B2BCartItem],
    is_within_limits: bool,
    shipping_address_id: Option<&str>,
) -> (bool, Option<CheckoutBlockedReason>) {
    if items.is_empty() {
        return (false, Some(CheckoutBlockedReason::CartEmpty));
    }

    if !is_within_limits {
        return (false, Some(CheckoutBlockedReason::SpendingLimitExceeded));
    }

    if shipping_address_id.map_or(true, str::is_empty) {
        return (false, Some(CheckoutBlockedReason::ShippingAddressRequired));
    }

    if items.iter().any(|item| !item.has_valid_quantity()) {
        return (false, Some(CheckoutBlockedReason::InvalidQuantities));
    }

    (true, None)
}
