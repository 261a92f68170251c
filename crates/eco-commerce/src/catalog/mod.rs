//! Product catalog module.
//!
//! Contains backend product records, categories, shop listings and the
//! weekly offers selection.

mod category;
mod listing;
mod offers;
pub(crate) mod product;

pub use category::{Category, UNCATEGORISED};
pub use listing::{listings, Listing, ListingQuery, SortOption, ALL_CATEGORIES};
pub use offers::{slugify, weekly_offers, OfferPolicy, OfferTile};
pub use product::{Demand, Product, FALLBACK_IMAGE};
