//! Shop page listings: filter, search and sort.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// Description shown when a product has none.
const FALLBACK_DESCRIPTION: &str = "EcoHealth Naturals wellness product.";

/// Category filter value that matches everything.
pub const ALL_CATEGORIES: &str = "All";

/// Sort options for the shop grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Popular,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
}

impl SortOption {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Popular => "Popular",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
        }
    }
}

impl FromStr for SortOption {
    type Err = CommerceError;

    /// Case-insensitive; accepts the same kebab-case names serde does.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "popular" => Ok(SortOption::Popular),
            "price-asc" => Ok(SortOption::PriceAsc),
            "price-desc" => Ok(SortOption::PriceDesc),
            _ => Err(CommerceError::UnknownSort(s.to_string())),
        }
    }
}

/// A product tile on the shop page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: Money,
    pub image: String,
    pub category: String,
}

impl Listing {
    /// Map a catalog product to its tile.
    pub fn from_product(product: &Product, currency: Currency) -> Self {
        let description = if product.description.trim().is_empty() {
            FALLBACK_DESCRIPTION.to_string()
        } else {
            product.description.clone()
        };
        Self {
            id: product.id,
            title: product.name.clone(),
            description,
            price: product.unit_price_or_zero(currency),
            image: product.image_or_fallback().to_string(),
            category: product.category_name().to_string(),
        }
    }

    /// "Add to cart" from the shop grid.
    pub fn to_cart_item(&self) -> CartItem {
        CartItem::new(self.id, self.title.clone(), self.price).with_image(self.image.clone())
    }
}

/// Available products as shop tiles, in catalog order.
pub fn listings(products: &[Product], currency: Currency) -> Vec<Listing> {
    products
        .iter()
        .filter(|p| p.is_available)
        .map(|p| Listing::from_product(p, currency))
        .collect()
}

/// Category filter, free-text search and sort over shop tiles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingQuery {
    /// Category name; `None` or `"All"` matches everything.
    pub category: Option<String>,
    /// Case-insensitive substring of the title or description.
    pub query: Option<String>,
    /// Sort order.
    pub sort: SortOption,
}

impl ListingQuery {
    /// Apply the query, returning matching tiles in display order.
    pub fn apply<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        let needle = self
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        let category = self
            .category
            .as_deref()
            .filter(|c| *c != ALL_CATEGORIES);

        let mut matched: Vec<&Listing> = listings
            .iter()
            .filter(|l| category.map_or(true, |c| l.category == c))
            .filter(|l| {
                needle.as_deref().map_or(true, |n| {
                    l.title.to_lowercase().contains(n) || l.description.to_lowercase().contains(n)
                })
            })
            .collect();

        match self.sort {
            SortOption::Popular => {}
            SortOption::PriceAsc => matched.sort_by_key(|l| l.price.amount_cents),
            SortOption::PriceDesc => {
                matched.sort_by(|a, b| b.price.amount_cents.cmp(&a.price.amount_cents))
            }
        }
        matched
    }
}
