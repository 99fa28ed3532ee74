use super::repository::{FullCartItem, PriceSource};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use serde::Serialize;

/// Flat fee charged on every order, even an empty one.
pub fn delivery_fee() -> BigDecimal {
    BigDecimal::from(40).with_scale(2)
}

/// 18% tax rate.
pub fn tax_rate() -> BigDecimal {
    BigDecimal::new(BigInt::from(18), 2)
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Totals {
    pub subtotal: BigDecimal,
    pub delivery_fee: BigDecimal,
    pub tax: BigDecimal,
    pub total: BigDecimal,
}

/// The price a line is charged at right now: the frozen offer price for
/// offer lines, the current catalog price for everything else.
pub fn effective_unit_price(item: &FullCartItem) -> BigDecimal {
    match item.price.source {
        PriceSource::Offer => item.price.unit_price.clone(),
        PriceSource::Catalog => item.catalog_price.clone(),
    }
}

pub fn line_total(item: &FullCartItem) -> BigDecimal {
    effective_unit_price(item) * BigDecimal::from(item.quantity)
}

/// Exact decimal arithmetic throughout; rounding happens only on the tax
/// line.
pub fn compute_totals(items: &[FullCartItem]) -> Totals {
    let subtotal = items
        .iter()
        .fold(BigDecimal::from(0), |acc, item| acc + line_total(item))
        .with_scale(2);
    let delivery_fee = delivery_fee();
    let tax = (subtotal.clone() * tax_rate()).round(2);
    let total = subtotal.clone() + delivery_fee.clone() + tax.clone();

    Totals {
        subtotal,
        delivery_fee,
        tax,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::cart::repository::PriceSnapshot;
    use std::str::FromStr;

    fn line(
        quantity: i32,
        frozen_price: &str,
        source: PriceSource,
        catalog_price: &str,
    ) -> FullCartItem {
        FullCartItem {
            id: String::from("01J00000000000000000000001"),
            food_item_id: String::from("01J00000000000000000000002"),
            quantity,
            price: PriceSnapshot {
                unit_price: BigDecimal::from_str(frozen_price).unwrap(),
                source,
            },
            name: String::from("Paneer Tikka"),
            description: String::from("Char-grilled paneer"),
            catalog_price: BigDecimal::from_str(catalog_price).unwrap(),
            icon_class: String::from("fa-utensils"),
            is_available: true,
        }
    }

    fn decimal(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    #[test]
    fn totals_for_a_two_line_cart() {
        let items = vec![
            line(2, "50.00", PriceSource::Catalog, "50.00"),
            line(1, "130.00", PriceSource::Offer, "160.00"),
        ];
        let totals = compute_totals(&items);

        assert_eq!(totals.subtotal, decimal("230.00"));
        assert_eq!(totals.delivery_fee, decimal("40.00"));
        assert_eq!(totals.tax, decimal("41.40"));
        assert_eq!(totals.total, decimal("311.40"));
    }

    #[test]
    fn empty_cart_is_charged_the_fee_only() {
        let totals = compute_totals(&[]);

        assert_eq!(totals.subtotal, decimal("0.00"));
        assert_eq!(totals.tax, decimal("0.00"));
        assert_eq!(totals.total, decimal("40.00"));
    }

    #[test]
    fn offer_lines_keep_their_frozen_price() {
        // Catalog price moved after the item was added; the offer line
        // does not follow it.
        let item = line(1, "30.00", PriceSource::Offer, "75.00");
        assert_eq!(effective_unit_price(&item), decimal("30.00"));
    }

    #[test]
    fn catalog_lines_track_the_current_catalog_price() {
        let item = line(3, "50.00", PriceSource::Catalog, "55.00");
        assert_eq!(effective_unit_price(&item), decimal("55.00"));
        assert_eq!(line_total(&item), decimal("165.00"));
    }

    #[test]
    fn tax_is_rounded_to_two_decimals() {
        // 33.33 * 0.18 = 5.9994 -> 6.00
        let items = vec![line(1, "33.33", PriceSource::Catalog, "33.33")];
        let totals = compute_totals(&items);

        assert_eq!(totals.tax, decimal("6.00"));
        assert_eq!(totals.total, decimal("79.33"));
    }
}
