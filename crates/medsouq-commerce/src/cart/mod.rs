//! Shopping cart module.
//!
//! Contains the cart aggregate, the notifying store that owns it, and
//! the order pricing aggregator.

mod cart;
mod pricing;
mod store;

pub use cart::{Cart, CartChange, LineItem, MAX_QUANTITY_PER_ITEM};
pub use pricing::{OrderPricing, PricingConfig, VAT_RATE_PERCENT};
pub use store::CartStore;
