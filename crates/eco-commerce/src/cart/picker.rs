//! Per-product quantity selectors shown next to "Add to cart".

use std::collections::HashMap;

use crate::cart::{clamp_quantity, MAX_QUANTITY_PER_ITEM, MIN_QUANTITY_PER_ITEM};
use crate::ids::ProductId;

/// Pending quantities for product tiles that have not been added yet.
///
/// Products without an entry read as `1`.
#[derive(Debug, Clone, Default)]
pub struct QuantityPicker {
    pending: HashMap<ProductId, u32>,
}

impl QuantityPicker {
    /// Create an empty picker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current quantity for a product.
    pub fn get(&self, id: ProductId) -> u32 {
        self.pending
            .get(&id)
            .copied()
            .unwrap_or(MIN_QUANTITY_PER_ITEM)
    }

    /// "+" button. Saturates at 99.
    pub fn increment(&mut self, id: ProductId) -> u32 {
        let next = (self.get(id) + 1).min(MAX_QUANTITY_PER_ITEM);
        self.pending.insert(id, next);
        next
    }

    /// "−" button. Saturates at 1.
    pub fn decrement(&mut self, id: ProductId) -> u32 {
        let next = self.get(id).saturating_sub(1).max(MIN_QUANTITY_PER_ITEM);
        self.pending.insert(id, next);
        next
    }

    /// Set directly from a typed value, clamped to `[1, 99]`.
    pub fn set(&mut self, id: ProductId, quantity: i64) -> u32 {
        let q = clamp_quantity(quantity);
        self.pending.insert(id, q);
        q
    }

    /// Forget a product's pending quantity.
    pub fn reset(&mut self, id: ProductId) {
        self.pending.remove(&id);
    }
}
