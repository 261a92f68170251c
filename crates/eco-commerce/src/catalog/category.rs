//! Fixed storefront categories.

use crate::ids::CategoryId;
use serde::Serialize;

/// Name shown for products without a known category.
pub const UNCATEGORISED: &str = "Uncategorised";

/// A product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Backend primary key.
    pub id: CategoryId,
    /// Display name.
    pub name: &'static str,
}

const ALL: [Category; 9] = [
    Category::new(1, "Herbal Remedies"),
    Category::new(2, "Essential Oils"),
    Category::new(3, "Natural Food-Based Remedies"),
    Category::new(4, "Herbal Teas & Infusions"),
    Category::new(5, "Supplements & Natural Extracts"),
    Category::new(6, "Minerals & Earth-Based Remedies"),
    Category::new(7, "Natural Mushrooms"),
    Category::new(8, "Skin & Topical Natural Products"),
    Category::new(9, "Detox & Wellness Remedies"),
];

impl Category {
    const fn new(id: u64, name: &'static str) -> Self {
        Self {
            id: CategoryId::new(id),
            name,
        }
    }

    /// All storefront categories in menu order.
    pub fn all() -> &'static [Category] {
        &ALL
    }

    /// Look up a category by id.
    pub fn find(id: CategoryId) -> Option<&'static Category> {
        ALL.iter().find(|c| c.id == id)
    }

    /// Display name for an optional category id.
    pub fn name_for(id: Option<CategoryId>) -> &'static str {
        id.and_then(Self::find)
            .map(|c| c.name)
            .unwrap_or(UNCATEGORISED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_for() {
        assert_eq!(Category::name_for(Some(CategoryId::new(2))), "Essential Oils");
        assert_eq!(Category::name_for(Some(CategoryId::new(42))), UNCATEGORISED);
        assert_eq!(Category::name_for(None), UNCATEGORISED);
    }

    #[test]
    fn test_all_in_order() {
        let ids: Vec<u64> = Category::all().iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
    }
}
