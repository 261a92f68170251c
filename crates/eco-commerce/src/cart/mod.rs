//! Shopping cart module.
//!
//! Contains the cart aggregator, its line items and the drawer summary.

mod cart;
mod picker;
mod pricing;

pub use cart::{
    clamp_quantity, Cart, CartItem, CartLine, MAX_QUANTITY_PER_ITEM, MIN_QUANTITY_PER_ITEM,
};
pub use picker::QuantityPicker;
pub use pricing::{CartSummary, LineSummary};
