//! # Cart Selectors
//!
//! Read-only views over [`CartB2BState`].
//!
//! Plain selectors are free functions returning borrowed fields. Derived and
//! parameterized selectors live on [`CartSelectors`], which owns their
//! caches; hosts keep one `CartSelectors` per store and call it with the
//! current state snapshot.
//!
//! ## Checkout Screen Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  dispatch(action) ──► new Arc<CartB2BState>                             │
//! │                              │                                          │
//! │                              ▼                                          │
//! │          selectors.checkout_summary(&state)                             │
//! │                              │                                          │
//! │          ┌───────────────────┴───────────────────┐                      │
//! │          ▼                                       ▼                      │
//! │   same Arc as last render                 new Arc                       │
//! │   (skip re-render)                        (re-render summary panel)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

use crate::cart::state::{CartB2BState, PersistedCart};
use crate::memo::{DerivedMemo, Memo, ParamMemo, ShallowMemo};
use crate::money::Money;
use crate::types::{
    AsyncStatus, B2BCartItem, B2BCartTotals, CheckoutBlockedReason, SpendingLimit,
    SpendingValidation,
};
use crate::DEFAULT_SELECTOR_CACHE_SIZE;

// =============================================================================
// Plain Field Selectors
// =============================================================================

pub fn select_cart_items(state: &CartB2BState) -> &[B2BCartItem] {
    &state.items
}

pub fn select_cart_item_count(state: &CartB2BState) -> i64 {
    state.item_count
}

/// Number of distinct products in the cart.
pub fn select_cart_unique_item_count(state: &CartB2BState) -> usize {
    state.items.len()
}

pub fn select_cart_totals(state: &CartB2BState) -> &B2BCartTotals {
    &state.totals
}

pub fn select_cart_subtotal(state: &CartB2BState) -> Money {
    state.totals.subtotal
}

pub fn select_cart_total(state: &CartB2BState) -> Money {
    state.totals.total
}

pub fn select_cart_currency(state: &CartB2BState) -> &str {
    &state.totals.currency
}

pub fn select_can_checkout(state: &CartB2BState) -> bool {
    state.can_checkout
}

pub fn select_checkout_blocked_reason(state: &CartB2BState) -> Option<CheckoutBlockedReason> {
    state.checkout_blocked_reason
}

pub fn select_shipping_address_id(state: &CartB2BState) -> Option<&str> {
    state.shipping_address_id.as_deref()
}

pub fn select_purchase_order_number(state: &CartB2BState) -> Option<&str> {
    state.purchase_order_number.as_deref()
}

pub fn select_cart_notes(state: &CartB2BState) -> Option<&str> {
    state.notes.as_deref()
}

pub fn select_cart_status(state: &CartB2BState) -> AsyncStatus {
    state.status
}

pub fn select_cart_error(state: &CartB2BState) -> Option<&str> {
    state.error.as_deref()
}

pub fn select_cart_is_loading(state: &CartB2BState) -> bool {
    state.status.is_loading()
}

pub fn select_cart_last_updated_at(state: &CartB2BState) -> Option<DateTime<Utc>> {
    state.last_updated_at
}

pub fn select_cart_is_empty(state: &CartB2BState) -> bool {
    state.items.is_empty()
}

/// Whether any line sits outside its product's order bounds.
pub fn select_has_invalid_quantities(state: &CartB2BState) -> bool {
    state.items.iter().any(|item| !item.has_valid_quantity())
}

// =============================================================================
// Spending Selectors
// =============================================================================
// Cart-side view of the last spending-limit validation pass.

pub fn select_spending_validation(state: &CartB2BState) -> &SpendingValidation {
    &state.spending_validation
}

pub fn select_requires_approval(state: &CartB2BState) -> bool {
    state.spending_validation.requires_approval
}

pub fn select_approval_reason(state: &CartB2BState) -> Option<&str> {
    state.spending_validation.approval_reason.as_deref()
}

pub fn select_spending_warnings(state: &CartB2BState) -> &[String] {
    &state.spending_validation.warnings
}

pub fn select_applicable_limits(state: &CartB2BState) -> &[SpendingLimit] {
    &state.spending_validation.applicable_limits
}

pub fn select_is_within_limits(state: &CartB2BState) -> bool {
    state.spending_validation.is_within_limits
}

// =============================================================================
// Checkout Summary
// =============================================================================

/// What the checkout panel renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub item_count: i64,
    pub unique_items: usize,
    pub subtotal: Money,
    pub discount: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
    pub currency: String,
    pub requires_approval: bool,
    pub can_checkout: bool,
    pub blocked_reason: Option<CheckoutBlockedReason>,
}

/// Inputs of the checkout summary. Comparing these instead of the whole
/// state lets a loading-status change reuse the previous summary.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SummaryInputs {
    item_count: i64,
    unique_items: usize,
    totals: B2BCartTotals,
    requires_approval: bool,
    can_checkout: bool,
    blocked_reason: Option<CheckoutBlockedReason>,
}

fn summary_inputs(state: &CartB2BState) -> SummaryInputs {
    SummaryInputs {
        item_count: select_cart_item_count(state),
        unique_items: select_cart_unique_item_count(state),
        totals: select_cart_totals(state).clone(),
        requires_approval: select_requires_approval(state),
        can_checkout: select_can_checkout(state),
        blocked_reason: select_checkout_blocked_reason(state),
    }
}

fn build_summary(inputs: &SummaryInputs) -> CheckoutSummary {
    CheckoutSummary {
        item_count: inputs.item_count,
        unique_items: inputs.unique_items,
        subtotal: inputs.totals.subtotal,
        discount: inputs.totals.total_discount,
        shipping: inputs.totals.shipping_estimate,
        tax: inputs.totals.tax,
        total: inputs.totals.total,
        currency: inputs.totals.currency.clone(),
        requires_approval: inputs.requires_approval,
        can_checkout: inputs.can_checkout,
        blocked_reason: inputs.blocked_reason,
    }
}

fn persistence_projection(state: &CartB2BState) -> PersistedCart {
    PersistedCart {
        items: state.items.clone(),
        shipping_address_id: state.shipping_address_id.clone(),
        purchase_order_number: state.purchase_order_number.clone(),
        notes: state.notes.clone(),
    }
}

fn find_item(state: &CartB2BState, product_id: &String) -> Option<B2BCartItem> {
    state
        .items
        .iter()
        .find(|item| item.product_id == *product_id)
        .cloned()
}

// =============================================================================
// Cart Selectors
// =============================================================================

/// Memoized cart selectors.
///
/// Selection takes `&mut self` because it fills the caches; keep one behind
/// the store lock or one per consumer.
#[derive(Debug)]
pub struct CartSelectors {
    checkout_summary: DerivedMemo<CartB2BState, SummaryInputs, CheckoutSummary>,
    for_persistence: ShallowMemo<CartB2BState, PersistedCart>,
    invalid_items: ShallowMemo<CartB2BState, Vec<B2BCartItem>>,
    product_ids: Memo<CartB2BState, Vec<String>>,
    item_by_product: ParamMemo<CartB2BState, String, Option<B2BCartItem>>,
}

impl Default for CartSelectors {
    fn default() -> Self {
        CartSelectors::new(DEFAULT_SELECTOR_CACHE_SIZE)
    }
}

impl CartSelectors {
    /// `item_cache_size` bounds the per-product lookup cache.
    pub fn new(item_cache_size: usize) -> Self {
        CartSelectors {
            checkout_summary: DerivedMemo::new(summary_inputs, build_summary),
            for_persistence: ShallowMemo::new(persistence_projection),
            invalid_items: ShallowMemo::new(|state: &CartB2BState| -> Vec<B2BCartItem> {
                state
                    .items
                    .iter()
                    .filter(|item| !item.has_valid_quantity())
                    .cloned()
                    .collect()
            }),
            product_ids: Memo::new(|state: &CartB2BState| -> Vec<String> {
                state.items.iter().map(|item| item.product_id.clone()).collect()
            }),
            item_by_product: ParamMemo::new(item_cache_size, find_item),
        }
    }

    /// The checkout panel contract.
    ///
    /// Returns the previous `Arc` whenever the summary's inputs are
    /// unchanged, even across unrelated state transitions.
    pub fn checkout_summary(&mut self, state: &Arc<CartB2BState>) -> Arc<CheckoutSummary> {
        self.checkout_summary.select(state)
    }

    /// The `{items, shippingAddressId, purchaseOrderNumber, notes}` shape the
    /// persistence layer stores.
    pub fn cart_for_persistence(&mut self, state: &Arc<CartB2BState>) -> Arc<PersistedCart> {
        self.for_persistence.select(state)
    }

    /// Lines whose quantity is outside the product's order bounds.
    pub fn invalid_items(&mut self, state: &Arc<CartB2BState>) -> Arc<Vec<B2BCartItem>> {
        self.invalid_items.select(state)
    }

    /// Product ids in cart order.
    pub fn product_ids(&mut self, state: &Arc<CartB2BState>) -> Arc<Vec<String>> {
        self.product_ids.select(state)
    }

    /// The cart line for `product_id`, if any.
    pub fn item_by_product(
        &mut self,
        state: &Arc<CartB2BState>,
        product_id: &str,
    ) -> Arc<Option<B2BCartItem>> {
        self.item_by_product.select(state, &product_id.to_string())
    }

    pub fn is_product_in_cart(&mut self, state: &Arc<CartB2BState>, product_id: &str) -> bool {
        self.item_by_product(state, product_id).is_some()
    }

    /// Recompute counts, mainly for diagnostics.
    pub fn recomputations(&self) -> CartSelectorStats {
        CartSelectorStats {
            checkout_summary: self.checkout_summary.recomputations(),
            cart_for_persistence: self.for_persistence.recomputations(),
            item_by_product: self.item_by_product.recomputations(),
            cached_products: self.item_by_product.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSelectorStats {
    pub checkout_summary: usize,
    pub cart_for_persistence: usize,
    pub item_by_product: usize,
    pub cached_products: usize,
}

// =============================================================================
// Unit Tests
// =============================================================================
