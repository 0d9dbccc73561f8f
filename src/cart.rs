//! Cart

use rust_decimal::Decimal;

use crate::{items::LineItem, products::Product};

/// In-memory cart snapshot: line items in insertion order, keyed by product
/// identifier.
///
/// Identifiers are unique within a cart: adding a product that matches an
/// existing identifier increments that item's quantity rather than
/// duplicating it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create a new, empty cart.
    #[must_use]
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Create a cart from previously persisted items, restoring the
    /// quantity invariant on each.
    #[must_use]
    pub fn with_items(items: impl Into<Vec<LineItem>>) -> Self {
        let mut items = items.into();
        for item in &mut items {
            item.restore_invariants();
        }

        Cart { items }
    }

    /// Get the line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up a line item by identifier.
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Add a product to the cart.
    ///
    /// If an item with the same identifier already exists, its quantity is
    /// incremented by the given amount; otherwise a new line item is appended
    /// with the given added-at instant. Quantities below one clamp to one.
    pub fn add(&mut self, product: &Product, quantity: i64, added_at: i64) {
        match self.items.iter_mut().find(|item| item.id() == product.id) {
            Some(existing) => existing.increment(quantity),
            None => self
                .items
                .push(LineItem::from_product(product, quantity, added_at)),
        }
    }

    /// Remove the item with the given identifier.
    ///
    /// Returns whether an item was removed; removing an absent identifier is
    /// a silent no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);

        self.items.len() != before
    }

    /// Set the quantity of the item with the given identifier, clamping to a
    /// minimum of one unit.
    ///
    /// Returns whether an item was updated; absent identifiers are a no-op.
    pub fn set_quantity(&mut self, id: &str, quantity: i64) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                item.set_quantity(quantity);
                true
            }
            None => false,
        }
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Calculate the cart total: the sum of unit price times quantity over
    /// all items. Never negative.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// Count the units in the cart: the sum of quantities (badge count).
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity())).sum()
    }

    /// Get the number of distinct line items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
