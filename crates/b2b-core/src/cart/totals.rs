//! Cart totals calculator.

use crate::money::Money;
use crate::types::{B2BCartItem, B2BCartTotals};

/// Recomputes the derived money fields of the cart.
///
/// ## Formula
/// ```text
/// subtotal       = Σ item.line_total
/// total_discount = tier_discount + volume_discount      (both external)
/// total          = max(0, subtotal − total_discount + shipping_estimate + tax)
/// ```
///
/// Discounts, shipping and tax are taken from `current` as they are; the
/// pricing service owns them. Every other field passes through.
pub fn calculate_totals(items: &[B2BCartItem], current: &B2BCartTotals) -> B2BCartTotals {
    let subtotal: Money = items.iter().map(|item| item.line_total).sum();
    let total_discount = current.tier_discount + current.volume_discount;
    let total = (subtotal - total_discount + current.shipping_estimate + current.tax).floor_at_zero();

    B2BCartTotals {
        subtotal,
        total_discount,
        total,
        ..current.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: i64, qty: i64) -> B2BCartItem {
        B2BCartItem::new(id, format!("SKU-{id}"), id, Money::from_cents(price), qty, 1, 100)
    }

    #[test]
    fn test_empty_cart_has_zero_subtotal() {
        let totals = calculate_totals(&[], &B2BCartTotals::default());
        assert!(totals.subtotal.is_zero());
        assert!(totals.total.is_zero());
    }

    #[test]
    fn test_subtotal_sums_line_totals() {
        let items = [item("A", 100, 2), item("B", 250, 4)];
        let totals = calculate_totals(&items, &B2BCartTotals::default());
        assert_eq!(totals.subtotal.cents(), 1_200);
        assert_eq!(totals.total.cents(), 1_200);
    }

    #[test]
    fn test_discounts_shipping_and_tax_apply() {
        let current = B2BCartTotals {
            tier_discount: Money::from_cents(100),
            volume_discount: Money::from_cents(50),
            shipping_estimate: Money::from_cents(500),
            tax: Money::from_cents(80),
            currency: "EUR".to_string(),
            ..B2BCartTotals::default()
        };

        let totals = calculate_totals(&[item("A", 1_000, 1)], &current);

        assert_eq!(totals.total_discount.cents(), 150);
        assert_eq!(totals.total.cents(), 1_000 - 150 + 500 + 80);
        assert_eq!(totals.shipping_estimate.cents(), 500);
        assert_eq!(totals.currency, "EUR");
    }

    #[test]
    fn test_total_never_negative() {
        let current = B2BCartTotals {
            tier_discount: Money::from_cents(5_000),
            ..B2BCartTotals::default()
        };
        let totals = calculate_totals(&[item("A", 100, 1)], &current);
        assert!(totals.total.is_zero());
        assert_eq!(totals.total_discount.cents(), 5_000);
    }

    #[test]
    fn test_stale_total_discount_is_replaced() {
        let current = B2BCartTotals {
            tier_discount: Money::from_cents(10),
            volume_discount: Money::from_cents(20),
            total_discount: Money::from_cents(9_999),
            ..B2BCartTotals::default()
        };
        let totals = calculate_totals(&[], &current);
        assert_eq!(totals.total_discount.cents(), 30);
    }
}
