//! # Store
//!
//! Single-writer store around the root reducer.
//!
//! ## Thread Safety
//! The current state is an `Arc<RootState>` behind a `Mutex`:
//! 1. Dispatches are serialized: one transition at a time
//! 2. Readers clone the `Arc` and release the lock immediately
//! 3. Snapshots are immutable, so readers never block writers for long
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI event ──► Store::dispatch(action)                                   │
//! │                   │  lock                                               │
//! │                   ▼                                                     │
//! │             root_reducer(&current, &action, clock)                      │
//! │                   │                                                     │
//! │                   ▼                                                     │
//! │             current = next; unlock                                      │
//! │                   │                                                     │
//! │                   ▼                                                     │
//! │             selectors read the new snapshot                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use b2b_core::approvals::ApprovalSelectors;
use b2b_core::cart::{CartB2BAction, CartSelectors, CheckoutSummary, PersistedCart};
use b2b_core::clock::{Clock, SystemClock};
use b2b_core::company::CompanySelectors;
use b2b_core::quotes::QuoteSelectors;
use b2b_core::validation::{validate_cart_item, validate_purchase_order_number};
use b2b_core::{root_reducer, B2BCartItem, RootAction, RootState};
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};

/// Memoized selectors for every slice, sized from the store config.
#[derive(Debug)]
pub struct SelectorSet {
    pub cart: CartSelectors,
    pub company: CompanySelectors,
    pub quotes: QuoteSelectors,
    pub approvals: ApprovalSelectors,
}

impl SelectorSet {
    pub fn new(config: &StoreConfig) -> Self {
        let cache_size = config.selectors.item_cache_size;
        SelectorSet {
            cart: CartSelectors::new(cache_size),
            company: CompanySelectors::new(cache_size, config.cart.warning_threshold_bps),
            quotes: QuoteSelectors::new(cache_size),
            approvals: ApprovalSelectors::new(cache_size),
        }
    }
}

pub struct Store {
    state: Mutex<Arc<RootState>>,
    selectors: Mutex<SelectorSet>,
    clock: Box<dyn Clock>,
}

impl Store {
    /// Creates a store with the initial root state and the wall clock.
    pub fn new(config: &StoreConfig) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: &StoreConfig, clock: Box<dyn Clock>) -> Self {
        info!(
            item_cache_size = config.selectors.item_cache_size,
            warning_threshold_bps = config.cart.warning_threshold_bps,
            "Creating store"
        );
        Store {
            state: Mutex::new(Arc::new(RootState::default())),
            selectors: Mutex::new(SelectorSet::new(config)),
            clock,
        }
    }

    // =========================================================================
    // Dispatch & Snapshots
    // =========================================================================

    /// Applies one action and returns the resulting snapshot.
    pub fn dispatch(&self, action: impl Into<RootAction>) -> Arc<RootState> {
        let action = action.into();
        let mut current = self.lock_state();
        let next = root_reducer(&current, &action, self.clock.as_ref());

        if Arc::ptr_eq(&next, &current) {
            debug!(action = action.name(), "Dispatch left state unchanged");
        } else {
            debug!(action = action.name(), "Dispatched");
        }

        *current = Arc::clone(&next);
        next
    }

    /// Applies an action received as storefront JSON.
    ///
    /// An object whose `type` no slice recognizes is ignored and the current
    /// snapshot is returned, the same as an unknown action reaching a
    /// reducer. Input that is not an action object, or a known action whose
    /// payload does not decode, is an error and leaves the state alone.
    pub fn dispatch_json(&self, json: &str) -> StoreResult<Arc<RootState>> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|err| StoreError::InvalidAction(err.to_string()))?;

        let Some(action_type) = value.get("type").and_then(|t| t.as_str()) else {
            return Err(StoreError::InvalidAction("missing string `type`".into()));
        };

        if !RootAction::is_known_type(action_type) {
            warn!(action = action_type, "Ignoring unrecognized action");
            return Ok(self.state());
        }

        let action = RootAction::from_json_value(value.clone()).map_err(|err| {
            warn!(action = action_type, error = %err, "Rejecting malformed action payload");
            StoreError::InvalidAction(format!("{action_type}: {err}"))
        })?;
        Ok(self.dispatch(action))
    }

    /// The current snapshot.
    pub fn state(&self) -> Arc<RootState> {
        Arc::clone(&self.lock_state())
    }

    /// Runs `f` with the selector caches and the current snapshot.
    ///
    /// Do not dispatch from inside `f` on the same thread: the selector lock
    /// is held for its duration.
    pub fn with_selectors<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SelectorSet, &Arc<RootState>) -> R,
    {
        let state = self.state();
        let mut selectors = self
            .selectors
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut selectors, &state)
    }

    pub fn checkout_summary(&self) -> Arc<CheckoutSummary> {
        self.with_selectors(|selectors, state| selectors.cart.checkout_summary(&state.cart))
    }

    // =========================================================================
    // Validated Entry Points
    // =========================================================================

    /// Adds a catalog item after checking its identifiers, price, order
    /// bounds and requested quantity. Merging with an existing line still
    /// follows the reducer's merge rules.
    pub fn add_validated_item(&self, item: B2BCartItem) -> StoreResult<Arc<RootState>> {
        if let Err(err) = validate_cart_item(&item) {
            warn!(product_id = %item.product_id, error = %err, "Rejected cart item");
            return Err(err.into());
        }
        Ok(self.dispatch(CartB2BAction::AddItem(item)))
    }

    /// Sets the purchase order number; blank input clears it.
    pub fn set_purchase_order_number(&self, po: &str) -> StoreResult<Arc<RootState>> {
        let trimmed = po.trim();
        if trimmed.is_empty() {
            return Ok(self.dispatch(CartB2BAction::SetPurchaseOrderNumber(None)));
        }
        validate_purchase_order_number(trimmed)?;
        Ok(self.dispatch(CartB2BAction::SetPurchaseOrderNumber(Some(trimmed.to_string()))))
    }

    // =========================================================================
    // Persistence Glue
    // =========================================================================

    /// The cart in its persisted JSON shape.
    pub fn persisted_cart_json(&self) -> StoreResult<String> {
        let persisted = self.with_selectors(|selectors, state| selectors.cart.cart_for_persistence(&state.cart));
        Ok(persisted.to_json()?)
    }

    /// Restores a cart saved by [`Store::persisted_cart_json`].
    ///
    /// Malformed JSON leaves the store untouched.
    pub fn hydrate_from_json(&self, json: &str) -> StoreResult<Arc<RootState>> {
        let persisted = PersistedCart::from_json(json).inspect_err(|err| {
            warn!(error = %err, "Discarding malformed persisted cart");
        })?;
        info!(items = persisted.items.len(), "Hydrating cart");
        Ok(self.dispatch(CartB2BAction::HydrateCart(persisted)))
    }

    /// A panicking reader cannot leave a half-written snapshot behind, so a
    /// poisoned lock still holds a valid state.
    fn lock_state(&self) -> MutexGuard<'_, Arc<RootState>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use b2b_core::clock::FixedClock;
    use b2b_core::company::CompanyAction;
    use b2b_core::{CheckoutBlockedReason, Money, ValidationError};
    use chrono::{TimeZone, Utc};

    fn store() -> Store {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 5, 14, 10, 0, 0).unwrap());
        Store::with_clock(&StoreConfig::default(), Box::new(clock))
    }

    fn paper(qty: i64) -> B2BCartItem {
        B2BCartItem::new("P1", "PAPER-A4-500", "Copy paper A4", Money::from_cents(100), qty, 1, 10)
    }

    #[test]
    fn test_dispatch_updates_snapshot() {
        let store = store();
        let before = store.state();

        store.dispatch(CartB2BAction::AddItem(paper(2)));
        store.dispatch(CartB2BAction::SetShippingAddress(Some("addr-1".to_string())));

        let after = store.state();
        assert!(Arc::ptr_eq(&before.company, &after.company));
        assert_eq!(after.cart.totals.subtotal.cents(), 200);
        assert!(after.cart.can_checkout);
        assert!(store.checkout_summary().can_checkout);
    }

    #[test]
    fn test_noop_dispatch_keeps_snapshot() {
        let store = store();
        let before = store.state();
        let after = store.dispatch(CompanyAction::ClearError);
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_add_validated_item_rejects_bad_catalog_data() {
        let store = store();
        let mut item = paper(2);
        item.min_order_quantity = 20;

        let err = store.add_validated_item(item).unwrap_err();
        assert!(matches!(err, StoreError::Validation(ValidationError::InvertedBounds { .. })));
        assert!(store.state().cart.items.is_empty());

        store.add_validated_item(paper(2)).unwrap();
        assert_eq!(store.state().cart.item_count, 2);
    }

    #[test]
    fn test_purchase_order_number() {
        let store = store();
        let state = store.set_purchase_order_number("  PO-2024-0117 ").unwrap();
        assert_eq!(state.cart.purchase_order_number.as_deref(), Some("PO-2024-0117"));

        assert!(store.set_purchase_order_number(&"X".repeat(80)).is_err());
        assert_eq!(store.state().cart.purchase_order_number.as_deref(), Some("PO-2024-0117"));

        let state = store.set_purchase_order_number("").unwrap();
        assert_eq!(state.cart.purchase_order_number, None);
    }

    #[test]
    fn test_persist_and_hydrate_round_trip() {
        let source = store();
        source.dispatch(CartB2BAction::AddItem(paper(3)));
        source.dispatch(CartB2BAction::SetShippingAddress(Some("addr-1".to_string())));
        let json = source.persisted_cart_json().unwrap();

        let target = store();
        let state = target.hydrate_from_json(&json).unwrap();
        assert_eq!(state.cart.items, source.state().cart.items);
        assert_eq!(state.cart.totals.subtotal.cents(), 300);
        assert!(state.cart.can_checkout);
        assert_eq!(state.cart.checkout_blocked_reason, None);
    }

    #[test]
    fn test_malformed_hydrate_leaves_store_untouched() {
        let store = store();
        store.dispatch(CartB2BAction::AddItem(paper(1)));
        let before = store.state();

        let err = store.hydrate_from_json("{not json").unwrap_err();
        assert!(matches!(err, StoreError::Core(_)));
        assert!(Arc::ptr_eq(&before, &store.state()));
        assert_eq!(
            store.state().cart.checkout_blocked_reason,
            Some(CheckoutBlockedReason::ShippingAddressRequired)
        );
    }

    #[test]
    fn test_dispatch_json() {
        let store = store();
        let state = store
            .dispatch_json(r#"{"type":"cartB2B/setShippingAddress","payload":"addr-7"}"#)
            .unwrap();
        assert_eq!(state.cart.shipping_address_id.as_deref(), Some("addr-7"));

        let before = store.state();
        let after = store.dispatch_json(r#"{"type":"wishlist/addItem","payload":{}}"#).unwrap();
        assert!(Arc::ptr_eq(&before, &after));

        let before = store.state();
        let fractional_price = r#"{"type":"cartB2B/addItem","payload":{
            "productId":"P1","sku":"SKU-P1","name":"Widget","unitPrice":12.5,
            "quantity":2,"minOrderQuantity":1,"maxOrderQuantity":10,"lineTotal":25
        }}"#;
        assert!(matches!(store.dispatch_json(fractional_price), Err(StoreError::InvalidAction(_))));
        assert!(Arc::ptr_eq(&before, &store.state()));

        assert!(matches!(store.dispatch_json("[1, 2]"), Err(StoreError::InvalidAction(_))));
        assert!(matches!(store.dispatch_json("{nope"), Err(StoreError::InvalidAction(_))));
    }

    #[test]
    fn test_selectors_follow_config() {
        let mut config = StoreConfig::default();
        config.cart.warning_threshold_bps = 9_000;
        let store = Store::new(&config);
        let threshold = store.with_selectors(|selectors, _| selectors.company.warning_threshold_bps());
        assert_eq!(threshold, 9_000);
    }
}
