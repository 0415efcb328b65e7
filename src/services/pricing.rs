//! Cart pricing for configured products.

use crate::catalog::SelectedOptions;

/// Computed unit and total price for a cart line item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub unit_price: f64,
    pub total_price: f64,
}

/// Compute the price of `quantity` units of a product configured with the
/// given options.
///
/// The unit price is the base price plus the price of every selected option;
/// the total multiplies that by the quantity. Inputs are not validated here:
/// a zero or negative quantity yields a zero or negative total, and
/// non-finite prices propagate arithmetically. Callers wanting strict
/// guarantees validate before calling.
pub fn compute_price(base_price: f64, selected: &SelectedOptions, quantity: i64) -> PriceQuote {
    let options_total: f64 = selected.values().map(|option| option.price).sum();
    let unit_price = base_price + options_total;

    PriceQuote {
        unit_price,
        total_price: unit_price * quantity as f64,
    }
}
