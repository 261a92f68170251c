//! "This week's essential offers" selection.

use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

const FALLBACK_SUBTITLE: &str = "Natural wellness favourite from EcoHealth Naturals.";

/// How many products the offers rail shows and how they are priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfferPolicy {
    /// Maximum number of offers.
    pub limit: usize,
    /// Added to the price to form the strike-through "original" price.
    pub markup: Money,
}

impl OfferPolicy {
    pub fn new(limit: usize, markup: Money) -> Self {
        Self { limit, markup }
    }
}

impl Default for OfferPolicy {
    fn default() -> Self {
        Self::new(8, Money::from_major(50, Currency::KES))
    }
}

/// A tile in the offers carousel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OfferTile {
    pub id: ProductId,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    /// Product page slug.
    pub slug: String,
    /// Strike-through price.
    pub original_price: Money,
    /// Selling price.
    pub price: Money,
}

impl OfferTile {
    /// "Add to cart" from the offers rail.
    pub fn to_cart_item(&self) -> CartItem {
        CartItem::new(self.id, self.title.clone(), self.price).with_image(self.image.clone())
    }
}

/// Pick the newest available products as offer tiles.
///
/// Products with an unparseable or zero price show no markup.
pub fn weekly_offers(products: &[Product], policy: &OfferPolicy) -> Vec<OfferTile> {
    let currency = policy.markup.currency;

    let mut available: Vec<&Product> = products.iter().filter(|p| p.is_available).collect();
    available.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    available
        .into_iter()
        .take(policy.limit)
        .map(|p| {
            let price = p.unit_price_or_zero(currency);
            let original_price = if price.is_zero() {
                price
            } else {
                price + policy.markup
            };
            let subtitle = if p.description.trim().is_empty() {
                FALLBACK_SUBTITLE.to_string()
            } else {
                p.description.clone()
            };
            OfferTile {
                id: p.id,
                title: p.name.clone(),
                subtitle,
                image: p.image_or_fallback().to_string(),
                slug: slugify(&p.name),
                original_price,
                price,
            }
        })
        .collect()
}

/// Lowercase, collapse non-alphanumeric runs to `-`, trim dashes.
///
/// ```
/// use eco_commerce::catalog::slugify;
/// assert_eq!(slugify("Aloe Vera Gel (200ml)"), "aloe-vera-gel-200ml");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::fixtures::product;

    #[test]
    fn test_newest_available_first() {
        let products: Vec<Product> = (1..=12)
            .map(|i| product(i as u64, &format!("Item {i}"), "100", i != 12, i))
            .collect();

        let offers = weekly_offers(&products, &OfferPolicy::default());
        let ids: Vec<u64> = offers.iter().map(|o| o.id.get()).collect();
        assert_eq!(ids, vec![11, 10, 9, 8, 7, 6, 5, 4]);
    }

    #[test]
    fn test_markup_and_fallbacks() {
        let products = vec![
            product(1, "Neem Soap", "250", true, 1),
            product(2, "Ask Us", "tbd", true, 2),
        ];
        let offers = weekly_offers(&products, &OfferPolicy::default());

        let soap = offers.iter().find(|o| o.id == ProductId::new(1)).unwrap();
        assert_eq!(soap.price.major(), 250);
        assert_eq!(soap.original_price.major(), 300);
        assert_eq!(soap.subtitle, FALLBACK_SUBTITLE);
        assert_eq!(soap.slug, "neem-soap");

        let unknown = offers.iter().find(|o| o.id == ProductId::new(2)).unwrap();
        assert!(unknown.original_price.is_zero());
    }

    #[test]
    fn test_offer_to_cart_item() {
        let offers = weekly_offers(
            &[product(5, "Baobab Powder", "700", true, 5)],
            &OfferPolicy::default(),
        );
        let item = offers[0].to_cart_item();
        assert_eq!(item.unit_price.major(), 700);
        assert!(item.image.is_some());
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("  --Hello, World!-- "), "hello-world");
        assert_eq!(slugify("Chamomile & Lemon"), "chamomile-lemon");
        assert_eq!(slugify("!!!"), "");
    }
}
