//! Rendering
//!
//! View derivation for the cart badge and drawer. Markup goes through
//! askama templates, so the untrusted catalog fields (name, image,
//! identifier) are escaped at render time, never before. Each fragment
//! renders independently: hosts missing a mount point simply skip it.

use askama::Template;
use rusty_money::iso::Currency;

use crate::{cart::Cart, prices};

/// Badge fragment: the item count, hidden entirely at zero.
#[derive(Debug, Clone, Template)]
#[template(path = "badge.html")]
pub struct BadgeView {
    count: u64,
}

impl BadgeView {
    /// Derive the badge from the current cart state.
    #[must_use]
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            count: cart.item_count(),
        }
    }

    /// Returns the badge count (the sum of quantities).
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Whether the badge should be shown at all.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.count > 0
    }
}

/// One itemized drawer row.
#[derive(Debug, Clone)]
pub struct DrawerRow {
    /// Item identifier, carried on the remove affordance
    pub id: String,

    /// Item display name (escaped at render time)
    pub name: String,

    /// Item image reference (escaped at render time)
    pub image: String,

    /// Quantity in the cart
    pub quantity: u32,

    /// Formatted unit price
    pub unit_price: String,

    /// Formatted line subtotal
    pub subtotal: String,
}

/// Drawer fragment: the empty-state message or one row per item, plus the
/// formatted total.
#[derive(Debug, Clone, Template)]
#[template(path = "drawer.html")]
pub struct DrawerView {
    rows: Vec<DrawerRow>,
    total: String,
}

impl DrawerView {
    /// Derive the drawer from the current cart state.
    #[must_use]
    pub fn from_cart(cart: &Cart, currency: &'static Currency) -> Self {
        let rows = cart
            .items()
            .iter()
            .map(|item| DrawerRow {
                id: item.id().to_owned(),
                name: item.name().to_owned(),
                image: item.image().to_owned(),
                quantity: item.quantity(),
                unit_price: prices::format(item.price(), currency),
                subtotal: prices::format(item.subtotal(), currency),
            })
            .collect();

        Self {
            rows,
            total: prices::format(cart.total(), currency),
        }
    }

    /// Returns the itemized rows, in cart insertion order.
    pub fn rows(&self) -> &[DrawerRow] {
        &self.rows
    }

    /// Returns the formatted cart total.
    pub fn total(&self) -> &str {
        &self.total
    }
}

/// Open/closed state of the slide-out drawer.
///
/// While the drawer is open, background scrolling is suppressed. Closing via
/// the close control and via the overlay both map to [`DrawerState::close`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawerState {
    open: bool,
}

impl DrawerState {
    /// Create a closed drawer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the drawer and its overlay.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the drawer and its overlay.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Whether the drawer is currently shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether background scrolling should be suppressed.
    pub fn scroll_locked(&self) -> bool {
        self.open
    }
}
