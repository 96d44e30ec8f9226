//! # Domain Types
//!
//! Shared B2B domain types used by every slice of the state tree.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  B2BCartItem    │   │  B2BCartTotals  │   │ SpendingLimit   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  product_id     │   │  subtotal       │   │  scope, period  │       │
//! │  │  unit_price     │   │  discounts      │   │  amount, spent  │       │
//! │  │  quantity       │   │  shipping, tax  │   │  is_active      │       │
//! │  │  min/max qty    │   │  total ≥ 0      │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Company      │   │     Quote       │   │    Approval     │       │
//! │  │    Employee     │   │   QuoteStatus   │   │ ApprovalStatus  │       │
//! │  │ ShippingAddress │   │  QuoteFilters   │   │ ApprovalFilters │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All types serialize with camelCase field names so the storefront reads
//! the same shape it always has.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::DEFAULT_CURRENCY;

// =============================================================================
// Async Status
// =============================================================================

/// Lifecycle of an asynchronous operation tracked in a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum AsyncStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl AsyncStatus {
    #[inline]
    pub fn is_loading(&self) -> bool {
        matches!(self, AsyncStatus::Loading)
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// One product line in the B2B cart.
///
/// ## Invariants
/// - `line_total == unit_price × quantity` after every reducer transition
/// - `product_id` appears at most once per cart
/// - Explicit quantity updates keep `min_order_quantity ≤ quantity ≤ max_order_quantity`
///
/// `sku`, `name`, `notes` and `image_url` are display data; the reducer
/// never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct B2BCartItem {
    pub product_id: String,
    pub sku: String,
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub min_order_quantity: i64,
    pub max_order_quantity: i64,
    pub line_total: Money,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl B2BCartItem {
    /// Creates a cart line with a consistent `line_total`.
    pub fn new(
        product_id: impl Into<String>,
        sku: impl Into<String>,
        name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
        min_order_quantity: i64,
        max_order_quantity: i64,
    ) -> Self {
        B2BCartItem {
            product_id: product_id.into(),
            sku: sku.into(),
            name: name.into(),
            unit_price,
            quantity,
            min_order_quantity,
            max_order_quantity,
            line_total: unit_price.multiply_quantity(quantity),
            notes: None,
            image_url: None,
        }
    }

    /// Returns a copy with a new quantity and a recomputed line total.
    pub fn with_quantity(&self, quantity: i64) -> Self {
        B2BCartItem {
            quantity,
            line_total: self.unit_price.multiply_quantity(quantity),
            ..self.clone()
        }
    }

    /// Clamps a requested quantity into this product's order bounds.
    ///
    /// `max` is applied first, then `min`, so a misconfigured product with
    /// `min > max` resolves to `min`.
    #[inline]
    pub fn clamp_quantity(&self, requested: i64) -> i64 {
        requested.min(self.max_order_quantity).max(self.min_order_quantity)
    }

    /// Whether the quantity sits inside the product's order bounds.
    #[inline]
    pub fn has_valid_quantity(&self) -> bool {
        self.quantity >= self.min_order_quantity && self.quantity <= self.max_order_quantity
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Money breakdown of the cart.
///
/// `tier_discount`, `volume_discount`, `shipping_estimate` and `tax` come from
/// the external pricing service; `subtotal`, `total_discount` and `total` are
/// derived by [`crate::cart::calculate_totals`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct B2BCartTotals {
    pub subtotal: Money,
    pub tier_discount: Money,
    pub volume_discount: Money,
    pub total_discount: Money,
    pub shipping_estimate: Money,
    pub tax: Money,
    pub total: Money,
    pub currency: String,
}

impl Default for B2BCartTotals {
    fn default() -> Self {
        B2BCartTotals {
            subtotal: Money::zero(),
            tier_discount: Money::zero(),
            volume_discount: Money::zero(),
            total_discount: Money::zero(),
            shipping_estimate: Money::zero(),
            tax: Money::zero(),
            total: Money::zero(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

// =============================================================================
// Spending Limits
// =============================================================================

/// Who a spending limit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SpendingScope {
    Company,
    Department,
    Employee,
}

/// The window a spending limit is measured over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SpendingPeriod {
    PerOrder,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

/// A spending limit descriptor supplied by the spending-limit service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SpendingLimit {
    pub id: String,
    pub scope: SpendingScope,
    #[serde(default)]
    pub scope_id: Option<String>,
    pub period: SpendingPeriod,
    pub amount: Money,
    pub spent: Money,
    pub currency: String,
    #[serde(default)]
    pub requires_approval_above: Option<Money>,
    pub is_active: bool,
}

impl SpendingLimit {
    /// Budget left in the current period, never negative.
    pub fn remaining(&self) -> Money {
        (self.amount - self.spent).floor_at_zero()
    }

    /// Spent share of the limit in basis points, `None` for a zero limit.
    pub fn utilisation_bps(&self) -> Option<i64> {
        self.spent.ratio_bps(self.amount)
    }
}

/// Outcome of the external spending-limit validation pass.
///
/// The cart reducer only reads `is_within_limits`; the rest is carried for
/// the checkout UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SpendingValidation {
    pub is_within_limits: bool,
    pub requires_approval: bool,
    #[serde(default)]
    pub approval_reason: Option<String>,
    #[serde(default)]
    pub applicable_limits: Vec<SpendingLimit>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl Default for SpendingValidation {
    /// Within limits until a validation pass says otherwise.
    fn default() -> Self {
        SpendingValidation {
            is_within_limits: true,
            requires_approval: false,
            approval_reason: None,
            applicable_limits: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

// =============================================================================
// Checkout Blocked Reason
// =============================================================================

/// Why checkout is currently unavailable.
///
/// Serialized as the exact sentences the storefront has always displayed,
/// so consumers comparing strings keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CheckoutBlockedReason {
    #[serde(rename = "Cart is empty")]
    CartEmpty,
    #[serde(rename = "Order exceeds spending limits")]
    SpendingLimitExceeded,
    #[serde(rename = "Shipping address required")]
    ShippingAddressRequired,
    #[serde(rename = "Some items have invalid quantities")]
    InvalidQuantities,
}

impl CheckoutBlockedReason {
    /// The user-facing sentence for this reason.
    pub const fn message(&self) -> &'static str {
        match self {
            CheckoutBlockedReason::CartEmpty => "Cart is empty",
            CheckoutBlockedReason::SpendingLimitExceeded => "Order exceeds spending limits",
            CheckoutBlockedReason::ShippingAddressRequired => "Shipping address required",
            CheckoutBlockedReason::InvalidQuantities => "Some items have invalid quantities",
        }
    }
}

impl fmt::Display for CheckoutBlockedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// =============================================================================
// Company Context
// =============================================================================

/// Commercial tier negotiated with the company; drives tier discounts
/// upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CompanyTier {
    #[default]
    Standard,
    Silver,
    Gold,
    Platinum,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub tier: CompanyTier,
    pub credit_limit: Money,
    pub currency: String,
    pub is_active: bool,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// Role of an employee inside their company account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeRole {
    /// Manages the company account, users and limits.
    Admin,
    /// Approves orders and quotes for their department.
    Manager,
    /// Places orders within their limits.
    Buyer,
    /// Read-only access.
    Viewer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub company_id: String,
    pub name: String,
    pub email: String,
    pub role: EmployeeRole,
    #[serde(default)]
    pub department: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub id: String,
    pub label: String,
    pub line1: String,
    #[serde(default)]
    pub line2: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub is_default: bool,
}

// =============================================================================
// Quotes
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    Draft,
    Pending,
    Approved,
    Rejected,
    Expired,
    Converted,
}

impl QuoteStatus {
    /// Quotes still being negotiated.
    pub fn is_open(&self) -> bool {
        matches!(self, QuoteStatus::Draft | QuoteStatus::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLineItem {
    pub product_id: String,
    pub sku: String,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_total: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub quote_number: String,
    pub company_id: String,
    pub status: QuoteStatus,
    #[serde(default)]
    pub items: Vec<QuoteLineItem>,
    pub total: Money,
    pub currency: String,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub valid_until: Option<DateTime<Utc>>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteFilters {
    #[serde(default)]
    pub status: Option<QuoteStatus>,
    #[serde(default)]
    pub search: Option<String>,
}

// =============================================================================
// Approvals
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
    Escalated,
}

/// A request for a manager to approve an order that breached a limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    pub id: String,
    pub order_reference: String,
    pub requester_id: String,
    #[serde(default)]
    pub approver_id: Option<String>,
    pub status: ApprovalStatus,
    pub amount: Money,
    pub currency: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub decided_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalFilters {
    #[serde(default)]
    pub status: Option<ApprovalStatus>,
    #[serde(default)]
    pub requester_id: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
