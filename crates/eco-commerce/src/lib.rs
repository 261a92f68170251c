//! Storefront domain types and logic for EcoHealth Naturals.
//!
//! This crate provides the in-process core behind the storefront pages:
//!
//! - **Cart**: line items keyed by product id, merge-on-add, derived totals
//! - **Carousel**: cyclic group selection with a two-phase slide
//! - **Catalog**: backend product records, shop listings, weekly offers
//!
//! # Example
//!
//! ```rust
//! use eco_commerce::prelude::*;
//!
//! let mut cart = Cart::new(Currency::KES);
//! let tea = CartItem::new(ProductId::new(1), "Hibiscus Tea", Money::from_major(300, Currency::KES));
//! cart.add_item(tea.clone(), 2);
//! cart.add_item(tea, 1);
//! assert_eq!(cart.total_quantity(), 3);
//! assert_eq!(cart.total_price().display_compact(), "KShs 900");
//!
//! let mut rail = GroupCarousel::new(vec!['a', 'b', 'c', 'd', 'e'], 3);
//! rail.begin_advance(Direction::Forward);
//! rail.complete_advance();
//! assert_eq!(rail.window(), vec![&'d', &'e', &'a']);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod carousel;
pub mod catalog;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{Cart, CartItem, CartLine, CartSummary, LineSummary, QuantityPicker};

    // Carousel
    pub use crate::carousel::{Direction, GroupCarousel, Phase, RevealSet, SlideOrigin, Stride};

    // Catalog
    pub use crate::catalog::{
        Category, Listing, ListingQuery, OfferPolicy, OfferTile, Product, SortOption,
    };
}
