//! Checkout

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rusty_money::iso::Currency;
use thiserror::Error;
use url::Url;

use crate::{cart::Cart, config::Config, prices, storage::StorageError};

/// Characters left bare when encoding the order message into the deep link
/// query: the RFC 3986 unreserved set.
const MESSAGE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Errors that can occur during checkout hand-off.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The configured messaging base and contact do not form a valid URL.
    #[error("invalid checkout destination: {0}")]
    Destination(#[from] url::ParseError),

    /// Wrapped storage error clearing the cart after hand-off.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Serializes cart state into a human-readable order message and the deep
/// link that carries it to the configured messaging contact.
#[derive(Debug, Clone)]
pub struct CheckoutFormatter {
    store_name: String,
    contact: String,
    messaging_base: String,
    currency: &'static Currency,
}

impl CheckoutFormatter {
    /// Build a formatter from deployment configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::config::ConfigError`] if the configured currency
    /// code is unknown.
    pub fn from_config(config: &Config) -> Result<Self, crate::config::ConfigError> {
        Ok(Self {
            store_name: config.store_name.clone(),
            contact: config.contact.clone(),
            messaging_base: config.messaging_base.clone(),
            currency: config.currency()?,
        })
    }

    /// Compose the plain-text order message for the given cart.
    ///
    /// One line per item as `- <name> x <quantity> ($<subtotal>)`, followed
    /// by the grand total and a closing request for shipment and payment
    /// information.
    #[must_use]
    pub fn order_message(&self, cart: &Cart) -> String {
        let mut lines = vec![
            format!(
                "Hello {}, I would like to place an order:",
                self.store_name
            ),
            String::new(),
            "Items:".to_owned(),
        ];

        for item in cart.items() {
            lines.push(format!(
                "- {} x {} ({})",
                item.name(),
                item.quantity(),
                prices::format(item.subtotal(), self.currency)
            ));
        }

        lines.push(String::new());
        lines.push(format!(
            "Total: {}",
            prices::format(cart.total(), self.currency)
        ));
        lines.push(String::new());
        lines.push(
            "Could you please provide information about shipment and payment options?".to_owned(),
        );

        lines.join("\n")
    }

    /// Build the checkout deep link: the order message, percent-encoded,
    /// appended to the configured messaging address.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] if the configured destination is not a
    /// valid URL.
    pub fn checkout_url(&self, cart: &Cart) -> Result<Url, CheckoutError> {
        let mut url = Url::parse(&format!("{}/{}", self.messaging_base, self.contact))?;

        let message = self.order_message(cart);
        let encoded = utf8_percent_encode(&message, MESSAGE_ENCODE_SET).to_string();
        url.set_query(Some(&format!("text={encoded}")));

        Ok(url)
    }
}
