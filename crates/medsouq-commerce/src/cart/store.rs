//! The cart store: single owner of all cart mutations.
//!
//! Shared by every page that reads or updates the cart. Mutations go
//! through this store so the notification side effects fire exactly once
//! per logical change; views only ever hold a shared reference.

use crate::cart::{Cart, CartChange, LineItem, OrderPricing, PricingConfig};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::i18n::Translator;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::notify::Notifier;
use std::collections::HashMap;
use std::sync::Arc;

/// Cart store owning the cart and its notification side effects.
pub struct CartStore {
    cart: Cart,
    notifier: Arc<dyn Notifier>,
    translator: Arc<dyn Translator>,
}

impl CartStore {
    /// Create an empty cart store.
    pub fn new(notifier: Arc<dyn Notifier>, translator: Arc<dyn Translator>) -> Self {
        Self {
            cart: Cart::new(),
            notifier,
            translator,
        }
    }

    /// Read-only view of the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Subtotal across all line items.
    pub fn subtotal(&self, default_currency: Currency) -> Result<Money, CommerceError> {
        self.cart.subtotal(default_currency)
    }

    /// Full pricing breakdown, recomputed on every call.
    pub fn pricing(&self, config: &PricingConfig) -> Result<OrderPricing, CommerceError> {
        OrderPricing::for_items(self.cart.items(), config)
    }

    /// Replace the cart contents (e.g., restored from a navigation payload).
    pub fn set_items(&mut self, items: Vec<LineItem>) {
        self.cart.set_items(items);
    }

    /// Add a product, emitting "added to cart" or "quantity updated".
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Result<(), CommerceError> {
        let change = self.cart.add_item(product, quantity)?;
        let mut vars = HashMap::new();
        vars.insert("name".to_string(), self.translator.t(&product.name_key));
        match change {
            CartChange::ItemAdded => self
                .notifier
                .notify_success(&self.translator.t_with("toasts.addedToCart", &vars)),
            CartChange::QuantityUpdated => self
                .notifier
                .notify_success(&self.translator.t_with("toasts.updatedQuantity", &vars)),
            _ => {}
        }
        Ok(())
    }

    /// Add a single unit of a product.
    pub fn add_one(&mut self, product: &Product) -> Result<(), CommerceError> {
        self.add_item(product, 1)
    }

    /// Set a line item's quantity; <= 0 removes the item.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<(), CommerceError> {
        let change = self.cart.update_quantity(id, quantity)?;
        if change == CartChange::ItemRemoved {
            self.notifier
                .notify_success(&self.translator.t("toasts.itemRemoved"));
        }
        Ok(())
    }

    /// Remove a line item; a no-op for unknown ids.
    pub fn remove_item(&mut self, id: &ProductId) {
        if self.cart.remove_item(id) == CartChange::ItemRemoved {
            self.notifier
                .notify_success(&self.translator.t("toasts.itemRemoved"));
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.notifier
            .notify_success(&self.translator.t("toasts.cartCleared"));
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore").field("cart", &self.cart).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::KeyEchoTranslator;
    use crate::ids::CategoryId;
    use crate::notify::RecordingNotifier;

    fn product(id: &str, major: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name_key: format!("products.items.{}.name", id),
            pack_size_key: format!("products.items.{}.packSize", id),
            category: CategoryId::new("all"),
            price: Money::from_major(major, Currency::SAR),
            image: None,
        }
    }

    fn store() -> (CartStore, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        let store = CartStore::new(notifier.clone(), Arc::new(KeyEchoTranslator));
        (store, notifier)
    }

    #[test]
    fn test_add_emits_distinct_messages() {
        let (mut store, notifier) = store();
        store.add_item(&product("1", 450), 1).unwrap();
        store.add_item(&product("1", 450), 2).unwrap();

        let messages = notifier.successes();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], "toasts.addedToCart");
        assert_eq!(messages[1], "toasts.updatedQuantity");
        assert_eq!(store.item_count(), 3);
    }

    #[test]
    fn test_remove_emits_item_removed_once() {
        let (mut store, notifier) = store();
        store.add_item(&product("1", 450), 1).unwrap();
        notifier.reset();

        store.remove_item(&ProductId::new("1"));
        store.remove_item(&ProductId::new("1")); // absent id: silent no-op
        assert_eq!(notifier.successes(), vec!["toasts.itemRemoved"]);
    }

    #[test]
    fn test_update_to_zero_notifies_removed() {
        let (mut store, notifier) = store();
        store.add_item(&product("1", 450), 2).unwrap();
        notifier.reset();

        store.update_quantity(&ProductId::new("1"), 0).unwrap();
        assert_eq!(notifier.successes(), vec!["toasts.itemRemoved"]);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_clear_notifies() {
        let (mut store, notifier) = store();
        store.add_item(&product("1", 450), 2).unwrap();
        notifier.reset();

        store.clear();
        assert_eq!(notifier.successes(), vec!["toasts.cartCleared"]);
    }

    #[test]
    fn test_pricing_through_store() {
        let (mut store, _) = store();
        store.add_item(&product("1", 450), 2).unwrap();
        let pricing = store.pricing(&PricingConfig::default()).unwrap();
        assert_eq!(pricing.total, Money::from_major(1060, Currency::SAR));
    }
}
