//! Product catalog records.
//!
//! The catalog itself is static host data; these are the records the
//! cart and product views consume. Display strings are translation keys,
//! resolved through the [`Translator`](crate::i18n::Translator).

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product available for ordering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Translation key for the display name.
    pub name_key: String,
    /// Translation key for the pack size (e.g., "box of 50").
    pub pack_size_key: String,
    /// Category this product belongs to.
    pub category: CategoryId,
    /// Unit price.
    pub price: Money,
    /// Optional product image reference.
    pub image: Option<String>,
}

/// A product category tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Translation key for the category label.
    pub name_key: String,
}
