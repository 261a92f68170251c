//! Product records as served by the catalog backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cart::CartItem;
use crate::catalog::Category;
use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::money::{Currency, Money};

/// Image shown when a product has none.
pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1501183638710-841dd1904471?q=80&w=1600&auto=format&fit=crop";

/// Demand indicator set by admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Demand {
    Low,
    #[default]
    Medium,
    High,
}

impl Demand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Demand::Low => "low",
            Demand::Medium => "medium",
            Demand::High => "high",
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Long description; may be empty.
    #[serde(default)]
    pub description: String,
    /// Price as a decimal string (e.g., "1200.00").
    pub price: String,
    /// Units in stock.
    #[serde(default)]
    pub amount: i64,
    /// Category primary key.
    #[serde(default)]
    pub category: Option<CategoryId>,
    /// Whether the product is listed on the storefront.
    #[serde(default)]
    pub is_available: bool,
    /// Demand indicator.
    #[serde(default)]
    pub demand: Demand,
    /// Product image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Parse a JSON array of products, as returned by the products endpoint.
    pub fn parse_list(json: &str) -> Result<Vec<Product>, CommerceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parsed unit price.
    pub fn unit_price(&self, currency: Currency) -> Result<Money, CommerceError> {
        Money::parse(&self.price, currency)
    }

    /// Parsed unit price, or zero if the price string is malformed.
    pub fn unit_price_or_zero(&self, currency: Currency) -> Money {
        self.unit_price(currency).unwrap_or_else(|e| {
            warn!(product_id = %self.id, error = %e, "unparseable product price");
            Money::zero(currency)
        })
    }

    /// Display name of the product's category.
    pub fn category_name(&self) -> &'static str {
        Category::name_for(self.category)
    }

    /// Image URL, falling back to the storefront placeholder.
    pub fn image_or_fallback(&self) -> &str {
        self.image_url
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(FALLBACK_IMAGE)
    }

    /// Build the item handed to the cart when this product is added.
    pub fn to_cart_item(&self, currency: Currency) -> CartItem {
        CartItem {
            id: self.id,
            title: self.name.clone(),
            unit_price: self.unit_price_or_zero(currency),
            image: Some(self.image_or_fallback().to_string()),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::TimeZone;

    pub fn product(id: u64, name: &str, price: &str, available: bool, day: u32) -> Product {
        let ts = Utc.with_ymd_and_hms(2025, 11, day, 9, 0, 0).unwrap();
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: String::new(),
            price: price.to_string(),
            amount: 10,
            category: Some(CategoryId::new(1)),
            is_available: available,
            demand: Demand::Medium,
            image_url: None,
            created_at: ts,
            updated_at: ts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "id": 12,
            "name": "Moringa Powder",
            "description": "Dried leaf powder",
            "price": "450.00",
            "amount": 30,
            "category": 5,
            "is_available": true,
            "demand": "high",
            "image_url": "https://res.cloudinary.com/demo/image/upload/moringa.webp",
            "created_at": "2025-11-20T10:11:12.123456Z",
            "updated_at": "2025-11-21T08:00:00+03:00"
        },
        {
            "id": 13,
            "name": "Hibiscus Tea",
            "price": "300",
            "category": null,
            "is_available": false,
            "created_at": "2025-11-18T10:00:00Z",
            "updated_at": "2025-11-18T10:00:00Z"
        }
    ]"#;

    #[test]
    fn test_parse_list() {
        let products = Product::parse_list(SAMPLE).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].demand, Demand::High);
        assert_eq!(products[0].category_name(), "Supplements & Natural Extracts");
        assert_eq!(products[1].category_name(), "Uncategorised");
        assert_eq!(products[1].demand, Demand::Medium);
    }

    #[test]
    fn test_unit_price() {
        let products = Product::parse_list(SAMPLE).unwrap();
        let price = products[0].unit_price(Currency::KES).unwrap();
        assert_eq!(price.major(), 450);
    }

    #[test]
    fn test_bad_price_falls_back_to_zero() {
        let p = fixtures::product(1, "Mystery", "call us", true, 1);
        assert!(p.unit_price(Currency::KES).is_err());
        assert!(p.unit_price_or_zero(Currency::KES).is_zero());
    }

    #[test]
    fn test_to_cart_item_uses_fallback_image() {
        let p = fixtures::product(1, "Neem Oil", "800", true, 1);
        let item = p.to_cart_item(Currency::KES);
        assert_eq!(item.id, ProductId::new(1));
        assert_eq!(item.image.as_deref(), Some(FALLBACK_IMAGE));
        assert_eq!(item.unit_price.major(), 800);
    }
}
