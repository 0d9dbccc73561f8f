//! Items

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::products::Product;

/// One product entry in the cart with its quantity.
///
/// Serializes in the persisted-slot wire shape: camelCase field names, the
/// unit price as a JSON number and `addedAt` as milliseconds since the epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    id: String,
    name: String,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
    image: String,
    quantity: u32,
    added_at: i64,
}

impl LineItem {
    /// Creates a line item from a catalog product.
    ///
    /// The quantity is clamped to a minimum of one unit.
    #[must_use]
    pub fn from_product(product: &Product, quantity: i64, added_at: i64) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: clamp_quantity(quantity),
            added_at,
        }
    }

    /// Returns the item identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the image reference.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Returns the quantity, always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the instant the item was first added, in milliseconds since the epoch.
    pub fn added_at(&self) -> i64 {
        self.added_at
    }

    /// Calculates the line subtotal (unit price times quantity).
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// Sets the quantity, clamping to a minimum of one unit.
    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = clamp_quantity(quantity);
    }

    /// Increases the quantity by the given amount (at least one unit).
    pub fn increment(&mut self, by: i64) {
        self.quantity = self.quantity.saturating_add(clamp_quantity(by));
    }

    /// Restores the quantity invariant after deserialization.
    pub(crate) fn restore_invariants(&mut self) {
        self.quantity = self.quantity.max(1);
    }
}

/// Clamp a requested quantity into the valid range (at least one unit).
fn clamp_quantity(quantity: i64) -> u32 {
    u32::try_from(quantity.max(1)).unwrap_or(u32::MAX)
}
