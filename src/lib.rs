//! Bodega
//!
//! Bodega is a storefront shopping cart engine: it keeps the selected
//! products in a persisted key-value slot with a time-to-live, derives the
//! badge and drawer views, and hands off checkout as a pre-formatted
//! messaging deep link.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod fixtures;
pub mod items;
pub mod notify;
pub mod prelude;
pub mod prices;
pub mod products;
pub mod render;
pub mod storage;
pub mod store;
pub mod time;
pub mod utils;
