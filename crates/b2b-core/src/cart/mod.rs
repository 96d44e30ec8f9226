//! # Cart Slice
//!
//! The B2B cart: line items with per-product order bounds, totals, spending
//! validation and checkout eligibility.
//!
//! - [`state`] - `CartB2BState`, initial values, persisted projection
//! - [`actions`] - `CartB2BAction`
//! - [`reducer`] - `cart_b2b_reducer`
//! - [`totals`] - totals calculator
//! - [`eligibility`] - checkout eligibility cascade
//! - [`selectors`] - plain and memoized selectors

pub mod actions;
pub mod eligibility;
pub mod reducer;
pub mod selectors;
pub mod state;
pub mod totals;

pub use actions::CartB2BAction;
pub use eligibility::determine_checkout_status;
pub use reducer::cart_b2b_reducer;
pub use selectors::{CartSelectors, CheckoutSummary};
pub use state::{
    initial_cart_b2b_state, initial_cart_totals, initial_spending_validation, CartB2BState,
    PersistedCart,
};
pub use totals::calculate_totals;
