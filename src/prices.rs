//! Prices

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

/// Formats a decimal amount as money in the given currency.
///
/// The display contract for cart views and order messages: a fixed currency
/// symbol prefix and exactly the currency's minor-unit digits (two for USD).
#[must_use]
pub fn format(amount: Decimal, currency: &'static Currency) -> String {
    Money::from_decimal(amount, currency).to_string()
}
