//! Cart store
//!
//! The authoritative in-memory cart and its persisted mirror: every mutation
//! runs to completion synchronously, persists the new snapshot, and notifies
//! the registered observer so presentation can redraw without the store
//! knowing anything about it.

use tracing::{debug, warn};
use url::Url;

use crate::{
    cart::Cart,
    checkout::{CheckoutError, CheckoutFormatter},
    products::Product,
    storage::{Storage, StorageError, StoredCart},
    time::{DAY_MS, now_ms},
};

/// Retention window for a persisted snapshot: 7 days in milliseconds.
///
/// A snapshot older than this (measured from its saved-at timestamp) is
/// discarded in its entirety on the next load.
pub const CART_TTL_MS: i64 = 7 * DAY_MS;

/// Receives change notifications from a [`CartStore`].
///
/// Both hooks default to no-ops so implementations subscribe only to what
/// they present.
pub trait CartObserver {
    /// Called with the new cart state after every persisted mutation, and
    /// once when the store opens.
    fn cart_changed(&mut self, _cart: &Cart) {}

    /// Called with a short user-facing confirmation message.
    fn notice(&mut self, _message: &str) {}
}

/// Observer that ignores all notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CartObserver for NoopObserver {}

/// The cart store: owns the in-memory [`Cart`] and mirrors it into a
/// persisted [`Storage`] slot with a time-to-live.
#[derive(Debug)]
pub struct CartStore<S: Storage, O: CartObserver = NoopObserver> {
    cart: Cart,
    storage: S,
    ttl_ms: i64,
    observer: O,
}

impl<S: Storage> CartStore<S> {
    /// Open a store over the given slot with the default 7-day retention
    /// window and no observer.
    ///
    /// The persisted snapshot is loaded (and expired if stale) immediately;
    /// loading is fail-soft and never errors to the caller.
    #[must_use]
    pub fn open(storage: S) -> Self {
        Self::open_with(storage, CART_TTL_MS, NoopObserver)
    }
}

impl<S: Storage, O: CartObserver> CartStore<S, O> {
    /// Open a store with an explicit retention window and observer.
    ///
    /// The observer receives an initial `cart_changed` with the loaded
    /// state, the page-ready render hook.
    pub fn open_with(mut storage: S, ttl_ms: i64, mut observer: O) -> Self {
        let cart = load_snapshot(&mut storage, ttl_ms, now_ms());
        observer.cart_changed(&cart);

        Self {
            cart,
            storage,
            ttl_ms,
            observer,
        }
    }

    /// Get the current cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Get the underlying storage slot.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Get the registered observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Get the registered observer, mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Re-read the persisted slot, replacing the in-memory cart.
    ///
    /// Fail-soft like the initial load: malformed or stale snapshots degrade
    /// to an empty cart.
    pub fn reload(&mut self) {
        self.cart = load_snapshot(&mut self.storage, self.ttl_ms, now_ms());
        self.observer.cart_changed(&self.cart);
    }

    /// Persist the current cart with a fresh saved-at timestamp and notify
    /// the observer.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the snapshot cannot be encoded or
    /// written.
    pub fn save(&mut self) -> Result<(), StorageError> {
        let stored = StoredCart {
            items: self.cart.items().to_vec(),
            timestamp: now_ms(),
        };
        let payload = serde_json::to_string(&stored)?;
        self.storage.write(&payload)?;

        debug!(items = self.cart.len(), "persisted cart snapshot");
        self.observer.cart_changed(&self.cart);

        Ok(())
    }

    /// Add a product to the cart, merging by identifier, then persist.
    ///
    /// Quantities below one clamp to one. Emits a user-facing confirmation
    /// through the observer.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the snapshot cannot be written.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Result<(), StorageError> {
        self.cart.add(product, quantity, now_ms());
        self.save()?;
        self.observer.notice("Item added to cart");

        Ok(())
    }

    /// Remove the item with the given identifier, then persist.
    ///
    /// Removing an absent identifier is a silent no-op on the cart but still
    /// refreshes the persisted snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the snapshot cannot be written.
    pub fn remove_item(&mut self, id: &str) -> Result<(), StorageError> {
        self.cart.remove(id);
        self.save()
    }

    /// Set the quantity of the item with the given identifier (clamped to at
    /// least one), persisting only when an item matched.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the snapshot cannot be written.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> Result<(), StorageError> {
        if self.cart.set_quantity(id, quantity) {
            self.save()?;
        }

        Ok(())
    }

    /// Empty the cart and erase the persisted slot entirely.
    ///
    /// Distinct from saving an empty cart: no timestamp is written, so a
    /// later load sees the slot as absent rather than empty-but-fresh.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the slot cannot be erased.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.cart.clear();
        self.storage.erase()?;

        debug!("erased cart slot");
        self.observer.cart_changed(&self.cart);

        Ok(())
    }

    /// Hand off checkout: build the order deep link, clear the cart, and
    /// return the link.
    ///
    /// An empty cart is a no-op: no link is built, nothing is cleared, and
    /// `Ok(None)` is returned.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] if the link cannot be built or the slot
    /// cannot be erased.
    pub fn checkout(
        &mut self,
        formatter: &CheckoutFormatter,
    ) -> Result<Option<Url>, CheckoutError> {
        if self.cart.is_empty() {
            return Ok(None);
        }

        let url = formatter.checkout_url(&self.cart)?;
        self.clear()?;

        Ok(Some(url))
    }
}

/// Read the persisted slot into a cart, enforcing the retention window.
///
/// Fail-soft by design: an absent slot, a stale snapshot, or a malformed
/// payload all degrade to an empty cart. Stale snapshots erase the slot;
/// malformed ones are logged and left in place to be overwritten by the next
/// save.
fn load_snapshot<S: Storage>(storage: &mut S, ttl_ms: i64, now: i64) -> Cart {
    let payload = match storage.read() {
        Ok(Some(payload)) => payload,
        Ok(None) => return Cart::new(),
        Err(err) => {
            warn!(error = %err, "failed to read cart slot; starting empty");
            return Cart::new();
        }
    };

    match serde_json::from_str::<StoredCart>(&payload) {
        Ok(stored) if now - stored.timestamp > ttl_ms => {
            debug!(age_ms = now - stored.timestamp, "cart snapshot expired");
            if let Err(err) = storage.erase() {
                warn!(error = %err, "failed to erase expired cart slot");
            }
            Cart::new()
        }
        Ok(stored) => Cart::with_items(stored.items),
        Err(err) => {
            warn!(error = %err, "discarding malformed cart snapshot");
            Cart::new()
        }
    }
}
