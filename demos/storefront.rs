//! Storefront Example
//!
//! Walks the full cart lifecycle against the embedded sample catalog: add a
//! few products, render the badge and drawer fragments, then hand off
//! checkout as a messaging deep link.
//!
//! Use `-c` to load a YAML configuration file
//! Use `--contact` to override the checkout contact address
//! Use `-i` to pick catalog product identifiers (comma separated)

use anyhow::Result;
use askama::Template;
use clap::Parser;

use bodega::{
    checkout::CheckoutFormatter,
    config::Config,
    fixtures,
    notify::NotificationCenter,
    render::{BadgeView, DrawerView},
    storage::FileStorage,
    store::CartStore,
    time::now_ms,
    utils::ExampleStorefrontArgs,
};

/// Storefront Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = ExampleStorefrontArgs::parse();

    let mut config = match args.config.as_deref() {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };
    if let Some(contact) = args.contact {
        config.contact = contact;
    }

    let currency = config.currency()?;
    let formatter = CheckoutFormatter::from_config(&config)?;

    let storage = FileStorage::new(&config.storage_path);
    let mut store = CartStore::open_with(storage, config.ttl_ms, NotificationCenter::new());

    for id in &args.items {
        let product = fixtures::product(id)?;
        store.add_item(&product, 1)?;
    }

    let badge = BadgeView::from_cart(store.cart());
    println!("badge ({} items):\n{}", badge.count(), badge.render()?);

    let drawer = DrawerView::from_cart(store.cart(), currency);
    println!("drawer:\n{}", drawer.render()?);

    for notification in store.observer().active(now_ms()) {
        println!("notification: {}", notification.message());
    }

    match store.checkout(&formatter)? {
        Some(url) => println!("checkout link: {url}"),
        None => println!("cart is empty; nothing to check out"),
    }

    println!(
        "cart after checkout: {} items",
        store.cart().item_count()
    );

    Ok(())
}
