//! Cart and line item types.

use crate::cart::{CartSummary, LineSummary};
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Smallest quantity a line may hold.
pub const MIN_QUANTITY_PER_ITEM: u32 = 1;

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: u32 = 99;

/// Clamp an arbitrary requested quantity into `[1, 99]`.
pub fn clamp_quantity(quantity: i64) -> u32 {
    quantity.clamp(
        i64::from(MIN_QUANTITY_PER_ITEM),
        i64::from(MAX_QUANTITY_PER_ITEM),
    ) as u32
}

/// What a caller hands to [`Cart::add_item`]: everything a line needs except
/// its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product being purchased.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub title: String,
    /// Unit price.
    pub unit_price: Money,
    /// Product image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CartItem {
    /// Create a new cart item without an image.
    pub fn new(id: ProductId, title: impl Into<String>, unit_price: Money) -> Self {
        Self {
            id,
            title: title.into(),
            unit_price,
            image: None,
        }
    }

    /// Attach an image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// A line in the cart. At most one exists per product id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product id, unique within the cart.
    pub id: ProductId,
    /// Product name.
    pub title: String,
    /// Unit price in the cart currency.
    pub unit_price: Money,
    /// Product image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Quantity, always within `[1, 99]`.
    pub quantity: u32,
}

impl CartLine {
    /// `unit_price * quantity`.
    pub fn subtotal(&self) -> Money {
        self.unit_price.multiply(i64::from(self.quantity))
    }
}

/// A shopping cart.
///
/// Lines keep insertion order. The cart is single-currency: unit prices are
/// taken as amounts in [`Cart::currency`].
///
/// Deserialized carts are rebuilt line by line through [`Cart::add_item`],
/// so duplicate ids merge and quantities are clamped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(from = "CartRepr")]
pub struct Cart {
    /// Cart currency.
    pub currency: Currency,
    lines: Vec<CartLine>,
}

/// Wire form of a [`Cart`], accepted as-is and then normalized.
#[derive(Deserialize)]
struct CartRepr {
    #[serde(default)]
    currency: Currency,
    #[serde(default)]
    lines: Vec<CartLine>,
}

impl From<CartRepr> for Cart {
    fn from(repr: CartRepr) -> Self {
        let mut cart = Cart::new(repr.currency);
        for line in repr.lines {
            let quantity = i64::from(line.quantity);
            let item = CartItem {
                id: line.id,
                title: line.title,
                unit_price: line.unit_price,
                image: line.image,
            };
            cart.add_item(item, quantity);
        }
        cart
    }
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            lines: Vec::new(),
        }
    }

    /// Add `quantity` of an item, merging into an existing line with the
    /// same id.
    ///
    /// The requested quantity is clamped to `[1, 99]` and the merged total
    /// is capped at [`MAX_QUANTITY_PER_ITEM`].
    pub fn add_item(&mut self, item: CartItem, quantity: i64) {
        let quantity = clamp_quantity(quantity);

        if let Some(existing) = self.lines.iter_mut().find(|l| l.id == item.id) {
            existing.quantity = existing
                .quantity
                .saturating_add(quantity)
                .min(MAX_QUANTITY_PER_ITEM);
            debug!(product_id = %item.id, quantity = existing.quantity, "merged cart line");
            return;
        }

        if item.unit_price.currency != self.currency {
            warn!(
                product_id = %item.id,
                item_currency = %item.unit_price.currency,
                cart_currency = %self.currency,
                "unit price currency differs from cart currency; using cart currency"
            );
        }

        let unit_price = Money::new(item.unit_price.amount_cents.max(0), self.currency);
        debug!(product_id = %item.id, quantity, "added cart line");
        self.lines.push(CartLine {
            id: item.id,
            title: item.title,
            unit_price,
            image: item.image,
            quantity,
        });
    }

    /// Remove the line for `id`. Returns whether a line was removed.
    pub fn remove_item(&mut self, id: ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.id != id);
        let removed = self.lines.len() < len_before;
        if !removed {
            debug!(product_id = %id, "remove ignored: not in cart");
        }
        removed
    }

    /// Set an absolute quantity, clamped to `[1, 99]`.
    ///
    /// Returns whether a line with `id` exists.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        match self.lines.iter_mut().find(|l| l.id == id) {
            Some(line) => {
                line.quantity = clamp_quantity(quantity);
                true
            }
            None => {
                debug!(product_id = %id, "quantity update ignored: not in cart");
                false
            }
        }
    }

    /// Clear all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of quantities over all lines.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of `unit_price * quantity` over all lines.
    pub fn total_price(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(self.currency), |acc, l| acc + l.subtotal())
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the line for a product.
    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// All lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Snapshot for rendering the cart drawer.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self
                .lines
                .iter()
                .map(|l| LineSummary {
                    id: l.id,
                    title: l.title.clone(),
                    unit_price: l.unit_price,
                    quantity: l.quantity,
                    subtotal: l.subtotal(),
                })
                .collect(),
            total_quantity: self.total_quantity(),
            subtotal: self.total_price(),
        }
    }
}
