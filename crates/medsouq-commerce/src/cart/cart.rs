//! Cart aggregate and line item types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// A line item in the cart.
///
/// Quantity never persists at zero or below: a reduction to zero removes
/// the item from the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased; unique within the cart.
    pub id: ProductId,
    /// Translation key for the display name.
    pub name_key: String,
    /// Translation key for the pack size.
    pub pack_size_key: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity, always >= 1.
    pub quantity: i64,
    /// Optional product image reference.
    pub image: Option<String>,
}

impl LineItem {
    /// Line total (unit_price * quantity).
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// The observable outcome of a cart mutation, used by the store to pick
/// which notification to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// A new line item was appended.
    ItemAdded,
    /// An existing line item's quantity changed.
    QuantityUpdated,
    /// A line item was removed.
    ItemRemoved,
    /// All items were removed.
    Cleared,
    /// Nothing changed (e.g., unknown id).
    Noop,
}

/// The shopping cart: an ordered line-item collection keyed by product id.
///
/// Insertion order is preserved for display. Created empty at session
/// start; lives only for the browsing session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Replace the cart contents (e.g., restored from a navigation payload).
    pub fn set_items(&mut self, items: Vec<LineItem>) {
        self.items = items;
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total item count (sum of quantities). Recomputed on every access.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Subtotal across all line items. Recomputed on every access.
    pub fn subtotal(&self, default_currency: crate::money::Currency) -> Result<Money, CommerceError> {
        let currency = self.currency().unwrap_or(default_currency);
        let mut acc = Money::zero(currency);
        for item in &self.items {
            let line = item.line_total()?;
            acc = acc
                .try_add(&line)
                .ok_or_else(|| CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: line.currency.code().to_string(),
                })?;
        }
        Ok(acc)
    }

    /// Currency of the first line item, if any.
    pub fn currency(&self) -> Option<crate::money::Currency> {
        self.items.first().map(|i| i.unit_price.currency)
    }

    /// Get a line item by product id.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Add a product to the cart.
    ///
    /// If the product is already present, increments the existing
    /// quantity by `quantity`; otherwise appends a new line item.
    /// Quantity must be >= 1.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Result<CartChange, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == product.id) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }
            existing.quantity = new_quantity;
            return Ok(CartChange::QuantityUpdated);
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        self.items.push(LineItem {
            id: product.id.clone(),
            name_key: product.name_key.clone(),
            pack_size_key: product.pack_size_key.clone(),
            unit_price: product.price,
            quantity,
            image: product.image.clone(),
        });
        Ok(CartChange::ItemAdded)
    }

    /// Set a line item's quantity to an exact value.
    ///
    /// A quantity <= 0 removes the item. Unknown ids are a no-op.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<CartChange, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove_item(id));
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        match self.items.iter_mut().find(|i| &i.id == id) {
            Some(item) => {
                item.quantity = quantity;
                Ok(CartChange::QuantityUpdated)
            }
            None => Ok(CartChange::Noop),
        }
    }

    /// Remove a line item. Unknown ids are a no-op.
    pub fn remove_item(&mut self, id: &ProductId) -> CartChange {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        if self.items.len() < len_before {
            CartChange::ItemRemoved
        } else {
            CartChange::Noop
        }
    }

    /// Remove all line items.
    pub fn clear(&mut self) -> CartChange {
        self.items.clear();
        CartChange::Cleared
    }
}
