//! Cart summary shown in the cart drawer.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Snapshot of a cart's lines and totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LineSummary>,
    /// Sum of quantities (the badge on the cart icon).
    pub total_quantity: u64,
    /// Sum of line subtotals.
    pub subtotal: Money,
}

impl CartSummary {
    /// Whether the drawer should show its empty state.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One row of the cart drawer: "KShs 100 × 2 = KShs 200".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineSummary {
    /// Product id.
    pub id: ProductId,
    /// Product name.
    pub title: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// `unit_price * quantity`.
    pub subtotal: Money,
}

impl LineSummary {
    /// Render as shown under the product name in the drawer.
    pub fn price_breakdown(&self) -> String {
        format!("{} \u{00d7} {}", self.unit_price.display_compact(), self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_price_breakdown() {
        let line = LineSummary {
            id: ProductId::new(1),
            title: "Moringa powder".to_string(),
            unit_price: Money::from_major(450, Currency::KES),
            quantity: 2,
            subtotal: Money::from_major(900, Currency::KES),
        };
        assert_eq!(line.price_breakdown(), "KShs 450 \u{00d7} 2");
    }

    #[test]
    fn test_empty_summary() {
        let summary = CartSummary {
            lines: vec![],
            total_quantity: 0,
            subtotal: Money::zero(Currency::KES),
        };
        assert!(summary.is_empty());
    }
}
