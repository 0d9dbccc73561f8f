//! Bodega prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::Cart,
    checkout::{CheckoutError, CheckoutFormatter},
    config::{Config, ConfigError},
    items::LineItem,
    notify::{Notification, NotificationCenter},
    products::Product,
    render::{BadgeView, DrawerRow, DrawerState, DrawerView},
    storage::{FileStorage, MemoryStorage, Storage, StorageError, StoredCart},
    store::{CART_TTL_MS, CartObserver, CartStore, NoopObserver},
};
