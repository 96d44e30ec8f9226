//! # Root State
//!
//! Combines the four slices into one store state and fans each action out
//! to the slice that owns it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RootAction::Cart(a)      ──► cart_b2b_reducer(cart, a, clock)          │
//! │  RootAction::Company(a)   ──► company_reducer(company, a)               │
//! │  RootAction::Quotes(a)    ──► quotes_reducer(quotes, a)                 │
//! │  RootAction::Approvals(a) ──► approvals_reducer(approvals, a)           │
//! │                                                                         │
//! │  Untouched slices keep their Arc. If the target slice also comes back   │
//! │  unchanged, the root Arc itself is returned.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::approvals::{approvals_reducer, initial_approvals_state, ApprovalsAction, ApprovalsState};
use crate::cart::{cart_b2b_reducer, initial_cart_b2b_state, CartB2BAction, CartB2BState};
use crate::clock::Clock;
use crate::company::{company_reducer, initial_company_state, CompanyAction, CompanyState};
use crate::quotes::{initial_quotes_state, quotes_reducer, QuotesAction, QuotesState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootState {
    pub cart: Arc<CartB2BState>,
    pub company: Arc<CompanyState>,
    pub quotes: Arc<QuotesState>,
    pub approvals: Arc<ApprovalsState>,
}

impl Default for RootState {
    fn default() -> Self {
        RootState {
            cart: Arc::new(initial_cart_b2b_state()),
            company: Arc::new(initial_company_state()),
            quotes: Arc::new(initial_quotes_state()),
            approvals: Arc::new(initial_approvals_state()),
        }
    }
}

/// Any action the store accepts.
///
/// Untagged on the wire: each slice action already carries a unique
/// `type`, so a storefront action object deserializes directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RootAction {
    Cart(CartB2BAction),
    Company(CompanyAction),
    Quotes(QuotesAction),
    Approvals(ApprovalsAction),
}

impl RootAction {
    /// Whether any slice accepts an action with this `type`.
    pub fn is_known_type(action_type: &str) -> bool {
        [
            CartB2BAction::TYPES,
            CompanyAction::TYPES,
            QuotesAction::TYPES,
            ApprovalsAction::TYPES,
        ]
        .iter()
        .any(|types| types.contains(&action_type))
    }

    /// Decodes a storefront action object through the slice its `type`
    /// prefix names, so a payload error reports that slice's field.
    pub fn from_json_value(value: serde_json::Value) -> serde_json::Result<RootAction> {
        let prefix = value
            .get("type")
            .and_then(|t| t.as_str())
            .and_then(|t| t.split_once('/'))
            .map(|(prefix, _)| prefix.to_string());

        match prefix.as_deref() {
            Some("cartB2B") => serde_json::from_value::<CartB2BAction>(value).map(RootAction::from),
            Some("company") => serde_json::from_value::<CompanyAction>(value).map(RootAction::from),
            Some("quotes") => serde_json::from_value::<QuotesAction>(value).map(RootAction::from),
            Some("approvals") => serde_json::from_value::<ApprovalsAction>(value).map(RootAction::from),
            _ => serde_json::from_value(value),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RootAction::Cart(action) => action.name(),
            RootAction::Company(action) => action.name(),
            RootAction::Quotes(action) => action.name(),
            RootAction::Approvals(action) => action.name(),
        }
    }
}

impl From<CartB2BAction> for RootAction {
    fn from(action: CartB2BAction) -> Self {
        RootAction::Cart(action)
    }
}

impl From<CompanyAction> for RootAction {
    fn from(action: CompanyAction) -> Self {
        RootAction::Company(action)
    }
}

impl From<QuotesAction> for RootAction {
    fn from(action: QuotesAction) -> Self {
        RootAction::Quotes(action)
    }
}

impl From<ApprovalsAction> for RootAction {
    fn from(action: ApprovalsAction) -> Self {
        RootAction::Approvals(action)
    }
}

pub fn root_reducer(state: &Arc<RootState>, action: &RootAction, clock: &dyn Clock) -> Arc<RootState> {
    match action {
        RootAction::Cart(action) => {
            let cart = cart_b2b_reducer(&state.cart, action, clock);
            if Arc::ptr_eq(&cart, &state.cart) {
                return Arc::clone(state);
            }
            Arc::new(RootState { cart, ..(**state).clone() })
        }
        RootAction::Company(action) => {
            let company = company_reducer(&state.company, action);
            if Arc::ptr_eq(&company, &state.company) {
                return Arc::clone(state);
            }
            Arc::new(RootState { company, ..(**state).clone() })
        }
        RootAction::Quotes(action) => {
            let quotes = quotes_reducer(&state.quotes, action);
            if Arc::ptr_eq(&quotes, &state.quotes) {
                return Arc::clone(state);
            }
            Arc::new(RootState { quotes, ..(**state).clone() })
        }
        RootAction::Approvals(action) => {
            let approvals = approvals_reducer(&state.approvals, action);
            if Arc::ptr_eq(&approvals, &state.approvals) {
                return Arc::clone(state);
            }
            Arc::new(RootState { approvals, ..(**state).clone() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::money::Money;
    use crate::types::B2BCartItem;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2024, 5, 14, 10, 0, 0).unwrap())
    }

    #[test]
    fn test_untouched_slices_keep_identity() {
        let state = Arc::new(RootState::default());
        let item = B2BCartItem::new("P1", "SKU-P1", "Widget", Money::from_cents(100), 2, 1, 10);

        let next = root_reducer(&state, &CartB2BAction::AddItem(item).into(), &clock());

        assert!(!Arc::ptr_eq(&state.cart, &next.cart));
        assert!(Arc::ptr_eq(&state.company, &next.company));
        assert!(Arc::ptr_eq(&state.quotes, &next.quotes));
        assert!(Arc::ptr_eq(&state.approvals, &next.approvals));
    }

    #[test]
    fn test_noop_returns_same_root() {
        let state = Arc::new(RootState::default());
        let next = root_reducer(
            &state,
            &RootAction::Cart(CartB2BAction::UpdateQuantity {
                product_id: "missing".to_string(),
                quantity: 3,
            }),
            &clock(),
        );
        assert!(Arc::ptr_eq(&state, &next));

        let next = root_reducer(&state, &QuotesAction::ClearError.into(), &clock());
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_storefront_json_routes_to_slice() {
        let action: RootAction = serde_json::from_value(json!({
            "type": "approvals/setPage",
            "payload": 2
        }))
        .unwrap();
        assert_eq!(action, RootAction::Approvals(ApprovalsAction::SetPage(2)));
        assert_eq!(action.name(), "approvals/setPage");

        let action: RootAction = serde_json::from_value(json!({ "type": "cartB2B/resetCart" })).unwrap();
        assert_eq!(action, RootAction::Cart(CartB2BAction::ResetCart));
    }

    #[test]
    fn test_payload_error_names_the_field() {
        let err = RootAction::from_json_value(json!({
            "type": "approvals/setPage",
            "payload": "two"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("invalid type"));

        let action = RootAction::from_json_value(json!({ "type": "company/reset" })).unwrap();
        assert_eq!(action, RootAction::Company(CompanyAction::Reset));
    }

    #[test]
    fn test_known_types() {
        assert!(RootAction::is_known_type("cartB2B/addItem"));
        assert!(RootAction::is_known_type("company/updateSpendingLimits"));
        assert!(RootAction::is_known_type("quotes/quoteCreated"));
        assert!(RootAction::is_known_type("approvals/decisionSuccess"));
        assert!(!RootAction::is_known_type("cartB2B/applyCoupon"));
        assert!(!RootAction::is_known_type("wishlist/addItem"));

        let action = RootAction::from(QuotesAction::SetPage(2));
        assert!(RootAction::is_known_type(action.name()));
    }
}
