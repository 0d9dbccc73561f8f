//! Integration tests for the checkout hand-off: message formatting, the
//! encoded deep link, the empty-cart no-op, and the clear-on-success rule.

use percent_encoding::percent_decode_str;
use rust_decimal::Decimal;
use testresult::TestResult;

use bodega::{
    checkout::CheckoutFormatter,
    config::Config,
    products::Product,
    storage::FileStorage,
    store::CartStore,
};

fn test_config() -> Config {
    Config {
        store_name: "TropicaFarm".into(),
        contact: "6282246632200".into(),
        ..Config::default()
    }
}

#[test]
fn checkout_with_empty_cart_is_a_no_op() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("cart.json");
    let formatter = CheckoutFormatter::from_config(&test_config())?;

    let mut store = CartStore::open(FileStorage::new(&path));
    let link = store.checkout(&formatter)?;

    assert!(link.is_none(), "empty cart must not produce a link");
    assert!(!path.exists(), "no clear side effect should fire");

    Ok(())
}

#[test]
fn checkout_builds_the_link_and_clears_the_cart() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("cart.json");
    let formatter = CheckoutFormatter::from_config(&test_config())?;

    let mut store = CartStore::open(FileStorage::new(&path));
    store.add_item(
        &Product {
            id: "mango".into(),
            name: "Mango".into(),
            price: Decimal::new(25, 1),
            image: "mango.jpg".into(),
        },
        3,
    )?;

    let link = store.checkout(&formatter)?;
    let Some(link) = link else {
        panic!("expected a checkout link, got none");
    };

    assert_eq!(link.host_str(), Some("wa.me"));
    assert_eq!(link.path(), "/6282246632200");

    let query = link.query().unwrap_or_default();
    let encoded = query.strip_prefix("text=").unwrap_or(query);
    let message = percent_decode_str(encoded).decode_utf8()?;

    assert!(
        message.contains("- Mango x 3 ($7.50)"),
        "item line expected in {message}"
    );
    assert!(
        message.contains("Total: $7.50"),
        "grand total expected in {message}"
    );
    assert!(
        message.starts_with("Hello TropicaFarm, I would like to place an order:"),
        "greeting expected in {message}"
    );

    assert!(store.cart().is_empty(), "checkout should clear the cart");
    assert!(!path.exists(), "checkout should erase the persisted slot");

    Ok(())
}

#[test]
fn order_message_enumerates_every_item() -> TestResult {
    let formatter = CheckoutFormatter::from_config(&test_config())?;

    let dir = tempfile::tempdir()?;
    let mut store = CartStore::open(FileStorage::new(dir.path().join("cart.json")));
    store.add_item(
        &Product {
            id: "a".into(),
            name: "Papaya".into(),
            price: Decimal::from(3),
            image: "a.jpg".into(),
        },
        2,
    )?;
    store.add_item(
        &Product {
            id: "b".into(),
            name: "Coconut".into(),
            price: Decimal::new(375, 2),
            image: "b.jpg".into(),
        },
        1,
    )?;

    let message = formatter.order_message(store.cart());

    assert!(message.contains("- Papaya x 2 ($6.00)"), "got {message}");
    assert!(message.contains("- Coconut x 1 ($3.75)"), "got {message}");
    assert!(message.contains("Total: $9.75"), "got {message}");

    Ok(())
}
