//! Storefront state and command dispatch.
//!
//! UI events (button clicks, timer ticks, animation-end signals) are turned
//! into [`Command`]s and applied one at a time by [`Storefront::dispatch`].
//! Nothing here blocks or fails; requests that do not apply are reported as
//! [`Outcome::Ignored`].

use eco_commerce::cart::{Cart, CartItem};
use eco_commerce::carousel::{Direction, GroupCarousel};
use eco_commerce::catalog::{weekly_offers, OfferPolicy, OfferTile, Product};
use eco_commerce::ProductId;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{StorefrontConfig, StorefrontError};

/// An independently animated carousel on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rail {
    /// "This week's essential offers".
    Offers,
    /// "100% Organic" rail, stepped by hand.
    Organic,
    /// Hero image rotator.
    Hero,
}

/// A state change requested by the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add to cart (merging by id).
    AddItem { item: CartItem, quantity: i64 },
    /// Remove a cart line.
    RemoveItem(ProductId),
    /// Set a cart line's quantity.
    SetQuantity { id: ProductId, quantity: i64 },
    /// Empty the cart.
    Clear,
    /// Start sliding a rail.
    BeginAdvance { rail: Rail, direction: Direction },
    /// A rail's slide animation finished.
    CompleteAdvance { rail: Rail },
    /// Pointer entered or left a rail.
    SetHovered { rail: Rail, hovered: bool },
}

/// Whether a command changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored,
}

impl From<bool> for Outcome {
    fn from(applied: bool) -> Self {
        if applied {
            Outcome::Applied
        } else {
            Outcome::Ignored
        }
    }
}

/// Everything one storefront session holds in memory.
#[derive(Debug, Clone)]
pub struct Storefront {
    cart: Cart,
    offers: GroupCarousel<OfferTile>,
    organic: GroupCarousel<OfferTile>,
    hero: GroupCarousel<String>,
    policy: OfferPolicy,
}

impl Storefront {
    /// Create an empty storefront from config. Offers stay empty until a
    /// catalog is loaded.
    pub fn new(config: &StorefrontConfig) -> Result<Self, StorefrontError> {
        config.validate()?;
        let currency = config.currency()?;
        Ok(Self {
            cart: Cart::new(currency),
            offers: GroupCarousel::new(Vec::new(), config.offers.visible)
                .with_stride(config.offers.stride),
            organic: GroupCarousel::new(Vec::new(), config.organic.visible)
                .with_stride(config.organic.stride),
            hero: GroupCarousel::new(config.hero.images.clone(), config.hero.visible),
            policy: config.offer_policy()?,
        })
    }

    /// Rebuild the offers and organic rails from a fresh product list.
    /// Returns the number of offers selected.
    pub fn load_catalog(&mut self, products: &[Product]) -> usize {
        let offers = weekly_offers(products, &self.policy);
        let count = offers.len();
        self.organic.replace_items(offers.clone());
        self.offers.replace_items(offers);
        info!(products = products.len(), offers = count, "catalog loaded");
        count
    }

    /// Apply one command.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        debug!(?command, "dispatch");
        match command {
            Command::AddItem { item, quantity } => {
                let id = item.id;
                self.cart.add_item(item, quantity);
                info!(
                    product_id = %id,
                    total_quantity = self.cart.total_quantity(),
                    "added to cart"
                );
                Outcome::Applied
            }
            Command::RemoveItem(id) => {
                let removed = self.cart.remove_item(id);
                if removed {
                    info!(product_id = %id, "removed from cart");
                }
                removed.into()
            }
            Command::SetQuantity { id, quantity } => {
                self.cart.update_quantity(id, quantity).into()
            }
            Command::Clear => {
                let had_items = !self.cart.is_empty();
                self.cart.clear();
                had_items.into()
            }
            Command::BeginAdvance { rail, direction } => self.rail_mut(rail).begin(direction).into(),
            Command::CompleteAdvance { rail } => self.rail_mut(rail).complete().into(),
            Command::SetHovered { rail, hovered } => self.rail_mut(rail).hover(hovered).into(),
        }
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The offers rail.
    pub fn offers(&self) -> &GroupCarousel<OfferTile> {
        &self.offers
    }

    /// The "100% Organic" rail.
    pub fn organic(&self) -> &GroupCarousel<OfferTile> {
        &self.organic
    }

    /// The hero rotator.
    pub fn hero(&self) -> &GroupCarousel<String> {
        &self.hero
    }

    /// Committed offset and transitioning flag of a rail.
    pub fn rail_state(&self, rail: Rail) -> (usize, bool) {
        let rail: &dyn RailControl = match rail {
            Rail::Offers => &self.offers,
            Rail::Organic => &self.organic,
            Rail::Hero => &self.hero,
        };
        (rail.offset(), rail.transitioning())
    }

    fn rail_mut(&mut self, rail: Rail) -> &mut dyn RailControl {
        match rail {
            Rail::Offers => &mut self.offers,
            Rail::Organic => &mut self.organic,
            Rail::Hero => &mut self.hero,
        }
    }
}

/// The item-type-independent part of a rail.
trait RailControl {
    fn begin(&mut self, direction: Direction) -> bool;
    fn complete(&mut self) -> bool;
    /// Returns whether the hover state changed.
    fn hover(&mut self, hovered: bool) -> bool;
    fn offset(&self) -> usize;
    fn transitioning(&self) -> bool;
}

impl<T> RailControl for GroupCarousel<T> {
    fn begin(&mut self, direction: Direction) -> bool {
        self.begin_advance(direction)
    }

    fn complete(&mut self) -> bool {
        self.complete_advance()
    }

    fn hover(&mut self, hovered: bool) -> bool {
        let changed = self.is_hovered() != hovered;
        self.set_hovered(hovered);
        changed
    }

    fn offset(&self) -> usize {
        GroupCarousel::offset(self)
    }

    fn transitioning(&self) -> bool {
        self.is_transitioning()
    }
}
