//! Cart actions.
//!
//! Serialized in the `{ "type": "...", "payload": ... }` shape the
//! storefront dispatches, so actions can cross an IPC boundary unchanged.

use serde::{Deserialize, Serialize};

use crate::cart::state::PersistedCart;
use crate::types::{B2BCartItem, B2BCartTotals, SpendingLimit, SpendingValidation};

/// Every transition the cart reducer understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum CartB2BAction {
    /// Add a line, merging with an existing line for the same product.
    #[serde(rename = "cartB2B/addItem")]
    AddItem(B2BCartItem),

    /// Set a line's quantity, clamped to the product's order bounds.
    #[serde(rename = "cartB2B/updateQuantity", rename_all = "camelCase")]
    UpdateQuantity { product_id: String, quantity: i64 },

    #[serde(rename = "cartB2B/removeItem", rename_all = "camelCase")]
    RemoveItem { product_id: String },

    /// Replace a line's notes. Does not touch totals.
    #[serde(rename = "cartB2B/updateItemNotes", rename_all = "camelCase")]
    UpdateItemNotes {
        product_id: String,
        notes: Option<String>,
    },

    /// Empty the cart, keeping the shipping address.
    #[serde(rename = "cartB2B/clearCart")]
    ClearCart,

    /// Add many lines at once (quick order, reorder, CSV upload).
    #[serde(rename = "cartB2B/bulkAddItems")]
    BulkAddItems(Vec<B2BCartItem>),

    #[serde(rename = "cartB2B/setShippingAddress")]
    SetShippingAddress(Option<String>),

    #[serde(rename = "cartB2B/setPurchaseOrderNumber")]
    SetPurchaseOrderNumber(Option<String>),

    #[serde(rename = "cartB2B/setNotes")]
    SetNotes(Option<String>),

    /// Totals computed by the pricing service; trusted as they are.
    #[serde(rename = "cartB2B/updateTotals")]
    UpdateTotals(B2BCartTotals),

    /// Result of the external spending-limit validation.
    #[serde(rename = "cartB2B/updateSpendingValidation")]
    UpdateSpendingValidation {
        validation: SpendingValidation,
        limits: Vec<SpendingLimit>,
    },

    #[serde(rename = "cartB2B/cartLoadingStart")]
    CartLoadingStart,

    #[serde(rename = "cartB2B/cartLoadingSuccess")]
    CartLoadingSuccess,

    #[serde(rename = "cartB2B/cartLoadingFailure")]
    CartLoadingFailure(String),

    /// Restore a persisted cart; derived fields are recomputed.
    #[serde(rename = "cartB2B/hydrateCart")]
    HydrateCart(PersistedCart),

    #[serde(rename = "cartB2B/resetCart")]
    ResetCart,

    #[serde(rename = "cartB2B/clearError")]
    ClearError,
}

impl CartB2BAction {
    /// The action's type string, as used on the wire and in logs.
    /// Every `type` this slice accepts.
    pub const TYPES: &'static [&'static str] = &[
        "cartB2B/addItem",
        "cartB2B/updateQuantity",
        "cartB2B/removeItem",
        "cartB2B/updateItemNotes",
        "cartB2B/clearCart",
        "cartB2B/bulkAddItems",
        "cartB2B/setShippingAddress",
        "cartB2B/setPurchaseOrderNumber",
        "cartB2B/setNotes",
        "cartB2B/updateTotals",
        "cartB2B/updateSpendingValidation",
        "cartB2B/cartLoadingStart",
        "cartB2B/cartLoadingSuccess",
        "cartB2B/cartLoadingFailure",
        "cartB2B/hydrateCart",
        "cartB2B/resetCart",
        "cartB2B/clearError",
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CartB2BAction::AddItem(_) => "cartB2B/addItem",
            CartB2BAction::UpdateQuantity { .. } => "cartB2B/updateQuantity",
            CartB2BAction::RemoveItem { .. } => "cartB2B/removeItem",
            CartB2BAction::UpdateItemNotes { .. } => "cartB2B/updateItemNotes",
            CartB2BAction::ClearCart => "cartB2B/clearCart",
            CartB2BAction::BulkAddItems(_) => "cartB2B/bulkAddItems",
            CartB2BAction::SetShippingAddress(_) => "cartB2B/setShippingAddress",
            CartB2BAction::SetPurchaseOrderNumber(_) => "cartB2B/setPurchaseOrderNumber",
            CartB2BAction::SetNotes(_) => "cartB2B/setNotes",
            CartB2BAction::UpdateTotals(_) => "cartB2B/updateTotals",
            CartB2BAction::UpdateSpendingValidation { .. } => "cartB2B/updateSpendingValidation",
            CartB2BAction::CartLoadingStart => "cartB2B/cartLoadingStart",
            CartB2BAction::CartLoadingSuccess => "cartB2B/cartLoadingSuccess",
            CartB2BAction::CartLoadingFailure(_) => "cartB2B/cartLoadingFailure",
            CartB2BAction::HydrateCart(_) => "cartB2B/hydrateCart",
            CartB2BAction::ResetCart => "cartB2B/resetCart",
            CartB2BAction::ClearError => "cartB2B/clearError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape() {
        let action = CartB2BAction::UpdateQuantity {
            product_id: "P1".to_string(),
            quantity: 4,
        };
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(
            value,
            json!({ "type": "cartB2B/updateQuantity", "payload": { "productId": "P1", "quantity": 4 } })
        );
        assert_eq!(action.name(), "cartB2B/updateQuantity");
    }

    #[test]
    fn test_unit_action_round_trips_from_storefront_json() {
        let action: CartB2BAction = serde_json::from_value(json!({ "type": "cartB2B/clearCart" })).unwrap();
        assert_eq!(action, CartB2BAction::ClearCart);
    }

    #[test]
    fn test_name_matches_serialized_type() {
        let actions = [
            CartB2BAction::SetShippingAddress(Some("addr-1".to_string())),
            CartB2BAction::CartLoadingFailure("timeout".to_string()),
            CartB2BAction::ResetCart,
        ];
        for action in actions {
            let value = serde_json::to_value(&action).unwrap();
            assert_eq!(value["type"], action.name());
        }
    }
}
