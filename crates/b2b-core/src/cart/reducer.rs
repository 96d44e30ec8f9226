//! # Cart Reducer
//!
//! The B2B cart state machine: `(state, action) → state`.
//!
//! ## Item Mutation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  action ──► new item list                                               │
//! │                 │                                                       │
//! │                 ├──► item_count   = Σ quantity                          │
//! │                 ├──► totals       = calculate_totals(items, totals)     │
//! │                 ├──► eligibility  = determine_checkout_status(          │
//! │                 │                     items,                            │
//! │                 │                     spending_validation.is_within_limits,
//! │                 │                     shipping_address_id)              │
//! │                 └──► last_updated_at = clock.now()                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! The reducer never fails. Unknown product ids are no-ops that return the
//! same `Arc`; out-of-bounds quantities are clamped on explicit updates and
//! otherwise surface as a checkout blocked reason.

use std::sync::Arc;

use crate::cart::actions::CartB2BAction;
use crate::cart::eligibility::determine_checkout_status;
use crate::cart::state::{
    initial_cart_b2b_state, initial_cart_totals, initial_spending_validation, CartB2BState,
    PersistedCart,
};
use crate::cart::totals::calculate_totals;
use crate::clock::Clock;
use crate::types::{AsyncStatus, B2BCartItem, SpendingValidation};

// =============================================================================
// Reducer
// =============================================================================

/// Applies one cart action.
///
/// Returns the input `Arc` untouched for no-op transitions so that selector
/// caches keyed on state identity stay warm.
pub fn cart_b2b_reducer(
    state: &Arc<CartB2BState>,
    action: &CartB2BAction,
    clock: &dyn Clock,
) -> Arc<CartB2BState> {
    match action {
        CartB2BAction::AddItem(item) => {
            let items = add_or_merge(&state.items, item);
            Arc::new(with_items(state, items, clock))
        }

        CartB2BAction::UpdateQuantity {
            product_id,
            quantity,
        } => {
            let Some(index) = position_of(&state.items, product_id) else {
                return Arc::clone(state);
            };
            let mut items = state.items.clone();
            let clamped = items[index].clamp_quantity(*quantity);
            items[index] = items[index].with_quantity(clamped);
            Arc::new(with_items(state, items, clock))
        }

        CartB2BAction::RemoveItem { product_id } => {
            let items = state
                .items
                .iter()
                .filter(|item| item.product_id != *product_id)
                .cloned()
                .collect();
            Arc::new(with_items(state, items, clock))
        }

        CartB2BAction::UpdateItemNotes { product_id, notes } => {
            let Some(index) = position_of(&state.items, product_id) else {
                return Arc::clone(state);
            };
            let mut next = (**state).clone();
            next.items[index].notes = notes.clone();
            next.last_updated_at = Some(clock.now());
            Arc::new(next)
        }

        CartB2BAction::ClearCart => Arc::new(CartB2BState {
            shipping_address_id: state.shipping_address_id.clone(),
            last_updated_at: Some(clock.now()),
            ..initial_cart_b2b_state()
        }),

        CartB2BAction::BulkAddItems(incoming) => {
            let items = incoming
                .iter()
                .fold(state.items.clone(), |items, item| add_or_merge(&items, item));
            Arc::new(with_items(state, items, clock))
        }

        CartB2BAction::SetShippingAddress(address_id) => {
            let (can_checkout, checkout_blocked_reason) = determine_checkout_status(
                &state.items,
                state.spending_validation.is_within_limits,
                address_id.as_deref(),
            );
            Arc::new(CartB2BState {
                shipping_address_id: address_id.clone(),
                can_checkout,
                checkout_blocked_reason,
                last_updated_at: Some(clock.now()),
                ..(**state).clone()
            })
        }

        CartB2BAction::SetPurchaseOrderNumber(po) => Arc::new(CartB2BState {
            purchase_order_number: po.clone(),
            last_updated_at: Some(clock.now()),
            ..(**state).clone()
        }),

        CartB2BAction::SetNotes(notes) => Arc::new(CartB2BState {
            notes: notes.clone(),
            last_updated_at: Some(clock.now()),
            ..(**state).clone()
        }),

        CartB2BAction::UpdateTotals(totals) => Arc::new(CartB2BState {
            totals: totals.clone(),
            last_updated_at: Some(clock.now()),
            ..(**state).clone()
        }),

        CartB2BAction::UpdateSpendingValidation { validation, limits } => {
            let spending_validation = SpendingValidation {
                applicable_limits: limits.clone(),
                ..validation.clone()
            };
            let (can_checkout, checkout_blocked_reason) = determine_checkout_status(
                &state.items,
                spending_validation.is_within_limits,
                state.shipping_address_id.as_deref(),
            );
            Arc::new(CartB2BState {
                spending_validation,
                can_checkout,
                checkout_blocked_reason,
                last_updated_at: Some(clock.now()),
                ..(**state).clone()
            })
        }

        CartB2BAction::CartLoadingStart => Arc::new(CartB2BState {
            status: AsyncStatus::Loading,
            error: None,
            ..(**state).clone()
        }),

        CartB2BAction::CartLoadingSuccess => Arc::new(CartB2BState {
            status: AsyncStatus::Succeeded,
            ..(**state).clone()
        }),

        CartB2BAction::CartLoadingFailure(message) => Arc::new(CartB2BState {
            status: AsyncStatus::Failed,
            error: Some(message.clone()),
            ..(**state).clone()
        }),

        CartB2BAction::HydrateCart(persisted) => Arc::new(hydrate(state, persisted, clock)),

        CartB2BAction::ResetCart => Arc::new(initial_cart_b2b_state()),

        CartB2BAction::ClearError if state.error.is_none() => Arc::clone(state),

        CartB2BAction::ClearError => Arc::new(CartB2BState {
            error: None,
            ..(**state).clone()
        }),
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn position_of(items: &[B2BCartItem], product_id: &str) -> Option<usize> {
    items.iter().position(|item| item.product_id == product_id)
}

/// Merge policy for a product already in the cart.
///
/// The incoming quantity is added and capped at the INCOMING line's
/// `max_order_quantity`; there is no minimum clamp here. The existing unit
/// price wins.
fn merge_item(existing: &B2BCartItem, incoming: &B2BCartItem) -> B2BCartItem {
    let quantity = existing
        .quantity
        .saturating_add(incoming.quantity)
        .min(incoming.max_order_quantity);
    existing.with_quantity(quantity)
}

/// Returns a new item list with `incoming` merged in or appended.
fn add_or_merge(items: &[B2BCartItem], incoming: &B2BCartItem) -> Vec<B2BCartItem> {
    let mut next = items.to_vec();
    match position_of(&next, &incoming.product_id) {
        Some(index) => next[index] = merge_item(&next[index], incoming),
        None => next.push(incoming.with_quantity(incoming.quantity)),
    }
    next
}

fn total_quantity(items: &[B2BCartItem]) -> i64 {
    items.iter().fold(0, |acc, item| acc.saturating_add(item.quantity))
}

/// Full recompute after an item mutation.
fn with_items(state: &CartB2BState, items: Vec<B2BCartItem>, clock: &dyn Clock) -> CartB2BState {
    let item_count = total_quantity(&items);
    let totals = calculate_totals(&items, &state.totals);
    let (can_checkout, checkout_blocked_reason) = determine_checkout_status(
        &items,
        state.spending_validation.is_within_limits,
        state.shipping_address_id.as_deref(),
    );

    CartB2BState {
        items,
        item_count,
        totals,
        can_checkout,
        checkout_blocked_reason,
        last_updated_at: Some(clock.now()),
        ..state.clone()
    }
}

/// Rebuilds the cart from persisted data without trusting any derived
/// value: totals start from the initial totals, spending validation from
/// the initial "within limits" value until the next validation pass.
fn hydrate(state: &CartB2BState, persisted: &PersistedCart, clock: &dyn Clock) -> CartB2BState {
    let items: Vec<B2BCartItem> = persisted
        .items
        .iter()
        .map(|item| item.with_quantity(item.quantity))
        .collect();
    let spending_validation = initial_spending_validation();
    let item_count = total_quantity(&items);
    let totals = calculate_totals(&items, &initial_cart_totals());
    let (can_checkout, checkout_blocked_reason) = determine_checkout_status(
        &items,
        spending_validation.is_within_limits,
        persisted.shipping_address_id.as_deref(),
    );

    CartB2BState {
        items,
        item_count,
        totals,
        spending_validation,
        can_checkout,
        checkout_blocked_reason,
        shipping_address_id: persisted.shipping_address_id.clone(),
        purchase_order_number: persisted.purchase_order_number.clone(),
        notes: persisted.notes.clone(),
        status: AsyncStatus::Succeeded,
        error: None,
        last_updated_at: Some(clock.now()),
        ..state.clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::money::Money;
    use crate::types::{
        B2BCartTotals, CheckoutBlockedReason, SpendingLimit, SpendingPeriod, SpendingScope,
    };
    use chrono::{TimeZone, Utc};

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2024, 5, 14, 10, 0, 0).unwrap())
    }

    fn item(id: &str, price: i64, qty: i64, min: i64, max: i64) -> B2BCartItem {
        B2BCartItem::new(id, format!("SKU-{id}"), format!("Product {id}"), Money::from_cents(price), qty, min, max)
    }

    fn p1(qty: i64) -> B2BCartItem {
        item("P1", 100, qty, 1, 10)
    }

    fn dispatch(state: &Arc<CartB2BState>, actions: &[CartB2BAction]) -> Arc<CartB2BState> {
        actions
            .iter()
            .fold(Arc::clone(state), |s, a| cart_b2b_reducer(&s, a, &clock()))
    }

    fn initial() -> Arc<CartB2BState> {
        Arc::new(initial_cart_b2b_state())
    }

    fn assert_consistent(state: &CartB2BState) {
        for item in &state.items {
            assert_eq!(item.line_total, item.unit_price.multiply_quantity(item.quantity));
        }
        let subtotal: Money = state.items.iter().map(|i| i.line_total).sum();
        assert_eq!(state.totals.subtotal, subtotal);
        assert!(!state.totals.total.is_negative());
        assert_eq!(state.item_count, state.items.iter().map(|i| i.quantity).sum::<i64>());
        assert_eq!(state.can_checkout, state.checkout_blocked_reason.is_none());
    }

    #[test]
    fn test_add_item_then_set_shipping_address() {
        let state = dispatch(&initial(), &[CartB2BAction::AddItem(p1(2))]);

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.item_count, 2);
        assert_eq!(state.totals.subtotal.cents(), 200);
        assert!(!state.can_checkout);
        assert_eq!(
            state.checkout_blocked_reason,
            Some(CheckoutBlockedReason::ShippingAddressRequired)
        );
        assert_eq!(state.last_updated_at, Some(clock().0));

        let state = dispatch(&state, &[CartB2BAction::SetShippingAddress(Some("addr-1".to_string()))]);
        assert!(state.can_checkout);
        assert_eq!(state.checkout_blocked_reason, None);
        assert_consistent(&state);
    }

    #[test]
    fn test_merge_clamps_to_incoming_max() {
        let state = dispatch(
            &initial(),
            &[CartB2BAction::AddItem(p1(2)), CartB2BAction::AddItem(p1(9))],
        );

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].quantity, 10);
        assert_eq!(state.items[0].line_total.cents(), 1_000);
        assert_consistent(&state);
    }

    #[test]
    fn test_merge_uses_existing_price_and_incoming_bound() {
        let mut repriced = item("P1", 999, 5, 1, 6);
        repriced.name = "Renamed".to_string();

        let state = dispatch(
            &initial(),
            &[CartB2BAction::AddItem(p1(3)), CartB2BAction::AddItem(repriced)],
        );

        let line = &state.items[0];
        assert_eq!(line.quantity, 6);
        assert_eq!(line.unit_price.cents(), 100);
        assert_eq!(line.line_total.cents(), 600);
        assert_eq!(line.name, "Product P1");
        assert_eq!(line.max_order_quantity, 10);
    }

    #[test]
    fn test_add_recomputes_stale_line_total() {
        let mut stale = p1(3);
        stale.line_total = Money::from_cents(1);
        let state = dispatch(&initial(), &[CartB2BAction::AddItem(stale)]);
        assert_eq!(state.items[0].line_total.cents(), 300);
    }

    #[test]
    fn test_update_quantity_clamps_both_sides() {
        let start = dispatch(&initial(), &[CartB2BAction::AddItem(item("P2", 50, 10, 5, 20))]);

        for (requested, expected) in [(1, 5), (0, 5), (-3, 5), (12, 12), (21, 20), (500, 20)] {
            let state = dispatch(
                &start,
                &[CartB2BAction::UpdateQuantity {
                    product_id: "P2".to_string(),
                    quantity: requested,
                }],
            );
            let line = &state.items[0];
            assert_eq!(line.quantity, expected, "requested {requested}");
            assert!(line.min_order_quantity <= line.quantity && line.quantity <= line.max_order_quantity);
            assert_consistent(&state);
        }
    }

    #[test]
    fn test_update_quantity_unknown_product_is_noop() {
        let start = dispatch(&initial(), &[CartB2BAction::AddItem(p1(2))]);
        let next = cart_b2b_reducer(
            &start,
            &CartB2BAction::UpdateQuantity {
                product_id: "missing".to_string(),
                quantity: 4,
            },
            &clock(),
        );
        assert!(Arc::ptr_eq(&start, &next));
    }

    #[test]
    fn test_remove_unknown_product_keeps_items_and_totals() {
        let start = dispatch(&initial(), &[CartB2BAction::AddItem(p1(2))]);
        let next = dispatch(
            &start,
            &[CartB2BAction::RemoveItem {
                product_id: "missing".to_string(),
            }],
        );
        assert_eq!(next.items, start.items);
        assert_eq!(next.totals, start.totals);
        assert_eq!(next.can_checkout, start.can_checkout);
    }

    #[test]
    fn test_remove_last_item_blocks_on_empty_cart() {
        let state = dispatch(
            &initial(),
            &[
                CartB2BAction::SetShippingAddress(Some("addr-1".to_string())),
                CartB2BAction::AddItem(p1(2)),
                CartB2BAction::RemoveItem {
                    product_id: "P1".to_string(),
                },
            ],
        );
        assert!(state.items.is_empty());
        assert_eq!(state.item_count, 0);
        assert!(state.totals.subtotal.is_zero());
        assert_eq!(state.checkout_blocked_reason, Some(CheckoutBlockedReason::CartEmpty));
    }

    #[test]
    fn test_update_item_notes_does_not_recompute() {
        let mut start = (*dispatch(&initial(), &[CartB2BAction::AddItem(p1(2))])).clone();
        // Totals supplied by the pricing service must survive a notes edit.
        start.totals.total = Money::from_cents(12_345);
        let start = Arc::new(start);

        let next = dispatch(
            &start,
            &[CartB2BAction::UpdateItemNotes {
                product_id: "P1".to_string(),
                notes: Some("Deliver to loading dock B".to_string()),
            }],
        );
        assert_eq!(next.items[0].notes.as_deref(), Some("Deliver to loading dock B"));
        assert_eq!(next.totals.total.cents(), 12_345);

        let missing = cart_b2b_reducer(
            &next,
            &CartB2BAction::UpdateItemNotes {
                product_id: "nope".to_string(),
                notes: None,
            },
            &clock(),
        );
        assert!(Arc::ptr_eq(&next, &missing));
    }

    #[test]
    fn test_clear_cart_keeps_shipping_address() {
        let state = dispatch(
            &initial(),
            &[
                CartB2BAction::AddItem(p1(2)),
                CartB2BAction::SetShippingAddress(Some("addr-1".to_string())),
                CartB2BAction::SetPurchaseOrderNumber(Some("PO-7".to_string())),
                CartB2BAction::ClearCart,
            ],
        );
        assert!(state.items.is_empty());
        assert_eq!(state.shipping_address_id.as_deref(), Some("addr-1"));
        assert_eq!(state.purchase_order_number, None);
        assert_eq!(state.checkout_blocked_reason, Some(CheckoutBlockedReason::CartEmpty));
        assert_eq!(state.last_updated_at, Some(clock().0));
    }

    #[test]
    fn test_reset_drops_shipping_address() {
        let state = dispatch(
            &initial(),
            &[
                CartB2BAction::AddItem(p1(2)),
                CartB2BAction::SetShippingAddress(Some("addr-1".to_string())),
                CartB2BAction::ResetCart,
            ],
        );
        assert_eq!(*state, initial_cart_b2b_state());
    }

    #[test]
    fn test_bulk_add_merges_and_preserves_order() {
        let start = dispatch(
            &initial(),
            &[CartB2BAction::AddItem(item("A", 100, 2, 1, 10)), CartB2BAction::AddItem(item("B", 200, 1, 1, 5))],
        );

        let state = dispatch(
            &start,
            &[CartB2BAction::BulkAddItems(vec![
                item("C", 300, 1, 1, 10),
                item("A", 999, 3, 1, 4),
                item("C", 300, 2, 1, 10),
            ])],
        );

        let ids: Vec<&str> = state.items.iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, ["A", "B", "C"]);
        assert_eq!(state.items[0].quantity, 4);
        assert_eq!(state.items[0].unit_price.cents(), 100);
        assert_eq!(state.items[2].quantity, 3);
        assert_eq!(state.item_count, 4 + 1 + 3);
        assert_consistent(&state);
    }

    #[test]
    fn test_eligibility_cascade_reports_empty_cart_first() {
        let state = dispatch(
            &initial(),
            &[CartB2BAction::UpdateSpendingValidation {
                validation: SpendingValidation {
                    is_within_limits: false,
                    ..SpendingValidation::default()
                },
                limits: Vec::new(),
            }],
        );
        assert_eq!(state.shipping_address_id, None);
        assert_eq!(state.checkout_blocked_reason, Some(CheckoutBlockedReason::CartEmpty));
    }

    #[test]
    fn test_spending_validation_merges_limits_and_gates_checkout() {
        let limit = SpendingLimit {
            id: "L1".to_string(),
            scope: SpendingScope::Employee,
            scope_id: Some("E1".to_string()),
            period: SpendingPeriod::PerOrder,
            amount: Money::from_cents(150),
            spent: Money::zero(),
            currency: "USD".to_string(),
            requires_approval_above: None,
            is_active: true,
        };

        let state = dispatch(
            &initial(),
            &[
                CartB2BAction::AddItem(p1(2)),
                CartB2BAction::SetShippingAddress(Some("addr-1".to_string())),
                CartB2BAction::UpdateSpendingValidation {
                    validation: SpendingValidation {
                        is_within_limits: false,
                        requires_approval: true,
                        approval_reason: Some("Exceeds per-order limit".to_string()),
                        applicable_limits: Vec::new(),
                        warnings: vec!["Over by $0.50".to_string()],
                    },
                    limits: vec![limit.clone()],
                },
            ],
        );

        assert_eq!(state.spending_validation.applicable_limits, vec![limit]);
        assert!(state.spending_validation.requires_approval);
        assert_eq!(
            state.checkout_blocked_reason,
            Some(CheckoutBlockedReason::SpendingLimitExceeded)
        );

        // Item mutations reuse the stored validation rather than re-deriving it.
        let state = dispatch(&state, &[CartB2BAction::AddItem(p1(1))]);
        assert_eq!(
            state.checkout_blocked_reason,
            Some(CheckoutBlockedReason::SpendingLimitExceeded)
        );
    }

    #[test]
    fn test_update_totals_is_trusted_and_used_by_next_mutation() {
        let external = B2BCartTotals {
            tier_discount: Money::from_cents(20),
            volume_discount: Money::from_cents(10),
            shipping_estimate: Money::from_cents(500),
            tax: Money::from_cents(16),
            total: Money::from_cents(7),
            ..B2BCartTotals::default()
        };

        let state = dispatch(
            &initial(),
            &[CartB2BAction::AddItem(p1(2)), CartB2BAction::UpdateTotals(external)],
        );
        assert_eq!(state.totals.total.cents(), 7);

        let state = dispatch(
            &state,
            &[CartB2BAction::UpdateQuantity {
                product_id: "P1".to_string(),
                quantity: 3,
            }],
        );
        assert_eq!(state.totals.subtotal.cents(), 300);
        assert_eq!(state.totals.total_discount.cents(), 30);
        assert_eq!(state.totals.total.cents(), 300 - 30 + 500 + 16);
    }

    #[test]
    fn test_invalid_quantity_from_add_surfaces_as_blocked_reason() {
        let state = dispatch(
            &initial(),
            &[
                CartB2BAction::SetShippingAddress(Some("addr-1".to_string())),
                CartB2BAction::AddItem(item("P3", 100, 2, 5, 50)),
            ],
        );
        assert_eq!(state.items[0].quantity, 2);
        assert_eq!(state.checkout_blocked_reason, Some(CheckoutBlockedReason::InvalidQuantities));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_loading_lifecycle_only_touches_status() {
        let start = dispatch(&initial(), &[CartB2BAction::AddItem(p1(2))]);

        let loading = dispatch(&start, &[CartB2BAction::CartLoadingStart]);
        assert_eq!(loading.status, AsyncStatus::Loading);
        assert_eq!(loading.items, start.items);
        assert_eq!(loading.last_updated_at, start.last_updated_at);

        let failed = dispatch(&loading, &[CartB2BAction::CartLoadingFailure("Network error".to_string())]);
        assert_eq!(failed.status, AsyncStatus::Failed);
        assert_eq!(failed.error.as_deref(), Some("Network error"));

        let cleared = dispatch(&failed, &[CartB2BAction::ClearError]);
        assert_eq!(cleared.error, None);
        assert_eq!(cleared.status, AsyncStatus::Failed);

        let ok = dispatch(&cleared, &[CartB2BAction::CartLoadingStart, CartB2BAction::CartLoadingSuccess]);
        assert_eq!(ok.status, AsyncStatus::Succeeded);
        assert_eq!(ok.totals, start.totals);
    }

    #[test]
    fn test_hydrate_recomputes_instead_of_trusting_persisted_state() {
        let mut stale = p1(3);
        stale.line_total = Money::from_cents(1);

        // A cart whose spending validation failed and whose totals were
        // overwritten by the pricing service before being persisted.
        let start = dispatch(
            &initial(),
            &[
                CartB2BAction::UpdateSpendingValidation {
                    validation: SpendingValidation {
                        is_within_limits: false,
                        ..SpendingValidation::default()
                    },
                    limits: Vec::new(),
                },
                CartB2BAction::UpdateTotals(B2BCartTotals {
                    shipping_estimate: Money::from_cents(900),
                    tax: Money::from_cents(90),
                    ..B2BCartTotals::default()
                }),
                CartB2BAction::CartLoadingFailure("stale".to_string()),
            ],
        );

        let state = dispatch(
            &start,
            &[CartB2BAction::HydrateCart(PersistedCart {
                items: vec![stale],
                shipping_address_id: Some("addr-9".to_string()),
                purchase_order_number: Some("PO-1".to_string()),
                notes: Some("Call ahead".to_string()),
            })],
        );

        assert_eq!(state.items[0].line_total.cents(), 300);
        assert_eq!(state.totals.subtotal.cents(), 300);
        assert!(state.totals.shipping_estimate.is_zero());
        assert_eq!(state.totals.total.cents(), 300);
        assert!(state.spending_validation.is_within_limits);
        assert!(state.can_checkout);
        assert_eq!(state.status, AsyncStatus::Succeeded);
        assert_eq!(state.error, None);
        assert_eq!(state.purchase_order_number.as_deref(), Some("PO-1"));
        assert_consistent(&state);
    }

    #[test]
    fn test_field_setters_do_not_recompute() {
        let state = dispatch(
            &initial(),
            &[
                CartB2BAction::AddItem(p1(2)),
                CartB2BAction::SetPurchaseOrderNumber(Some("PO-2024/0117".to_string())),
                CartB2BAction::SetNotes(Some("Net 30".to_string())),
            ],
        );
        assert_eq!(state.purchase_order_number.as_deref(), Some("PO-2024/0117"));
        assert_eq!(state.notes.as_deref(), Some("Net 30"));
        assert_eq!(
            state.checkout_blocked_reason,
            Some(CheckoutBlockedReason::ShippingAddressRequired)
        );
    }

    #[test]
    fn test_huge_quantities_saturate() {
        let huge = item("P1", 1, i64::MAX, 1, i64::MAX);
        let state = dispatch(&initial(), &[CartB2BAction::AddItem(huge.clone()), CartB2BAction::AddItem(huge)]);
        assert_eq!(state.items[0].quantity, i64::MAX);
        assert_eq!(state.item_count, i64::MAX);

        let state = dispatch(
            &initial(),
            &[CartB2BAction::BulkAddItems(vec![
                item("P1", 1, i64::MAX, 1, i64::MAX),
                item("P2", 1, 1, 1, 10),
            ])],
        );
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.item_count, i64::MAX);
        assert!(state.totals.total >= Money::zero());
    }

    #[test]
    fn test_clear_error_without_error_keeps_identity() {
        let start = dispatch(&initial(), &[CartB2BAction::AddItem(p1(2))]);
        let next = cart_b2b_reducer(&start, &CartB2BAction::ClearError, &clock());
        assert!(Arc::ptr_eq(&start, &next));
    }
}
