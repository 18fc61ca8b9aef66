//! Commerce domain types and logic for the medsouq storefront.
//!
//! This crate provides the core types for the bilingual healthcare
//! storefront:
//!
//! - **Money**: minor-unit amounts with locale-aware display formatting
//! - **Catalog**: product records consumed by the cart and product views
//! - **Cart**: the cart store, line items, and the order pricing aggregator
//! - **Collaborators**: notification, translation, and navigation contracts
//!
//! # Example
//!
//! ```rust
//! use medsouq_commerce::prelude::*;
//! use std::sync::Arc;
//!
//! let mut store = CartStore::new(Arc::new(NullNotifier), Arc::new(KeyEchoTranslator));
//! let product = Product {
//!     id: ProductId::new("1"),
//!     name_key: "products.items.1.name".to_string(),
//!     pack_size_key: "products.items.1.packSize".to_string(),
//!     category: CategoryId::new("fertility"),
//!     price: Money::from_major(450, Currency::SAR),
//!     image: None,
//! };
//! store.add_item(&product, 2).unwrap();
//!
//! let pricing = store.pricing(&PricingConfig::default()).unwrap();
//! assert_eq!(pricing.total.format(Locale::En), "SAR 1,060");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod i18n;
pub mod nav;
pub mod notify;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Locale, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Locale, Money};

    // Catalog
    pub use crate::catalog::{Category, Product};

    // Cart
    pub use crate::cart::{
        Cart, CartChange, CartStore, LineItem, OrderPricing, PricingConfig, MAX_QUANTITY_PER_ITEM,
    };

    // Collaborators
    pub use crate::i18n::{KeyEchoTranslator, Translator};
    pub use crate::nav::{Navigator, RecordingNavigator, Route};
    pub use crate::notify::{Notifier, NullNotifier, RecordingNotifier};
}
