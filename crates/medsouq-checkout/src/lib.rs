//! Two-step checkout flow for the medsouq storefront.
//!
//! The flow moves through details, payment, and a terminal confirmation
//! step. [`CheckoutController`] owns the state machine, a snapshot of the
//! order line items, and the payment gateway, notification, and
//! translation collaborators.
//!
//! # Example
//!
//! ```rust
//! use medsouq_checkout::prelude::*;
//! use medsouq_commerce::prelude::*;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let items = vec![LineItem {
//!     id: ProductId::new("1"),
//!     name_key: "products.items.1.name".to_string(),
//!     pack_size_key: "products.items.1.packSize".to_string(),
//!     unit_price: Money::from_major(450, Currency::SAR),
//!     quantity: 2,
//!     image: None,
//! }];
//! let mut checkout = CheckoutController::new(
//!     items,
//!     PricingConfig::default(),
//!     Arc::new(SimulatedGateway::new().with_delay(Duration::ZERO)),
//!     Arc::new(NullNotifier),
//!     Arc::new(KeyEchoTranslator),
//! );
//!
//! let delivery = checkout.delivery_mut();
//! delivery.full_name = "Sara Al-Qahtani".to_string();
//! delivery.phone = "+966 55 123 4567".to_string();
//! delivery.street_address = "7910 King Fahd Road".to_string();
//! delivery.city = "Riyadh".to_string();
//! checkout.continue_to_payment().unwrap();
//!
//! checkout.select_payment_method(PaymentMethod::ApplePay);
//! let confirmation = checkout.place_order().await.unwrap();
//! assert!(confirmation.order_number.starts_with("#MED-"));
//! # }
//! ```

pub mod controller;
pub mod delivery;
pub mod error;
pub mod flow;
pub mod gateway;
pub mod payment;

pub use controller::{CheckoutController, OrderConfirmation};
pub use error::CheckoutError;
pub use flow::{CheckoutState, CheckoutStep};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::controller::{CheckoutController, OrderConfirmation};
    pub use crate::delivery::DeliveryDetails;
    pub use crate::error::CheckoutError;
    pub use crate::flow::{CheckoutState, CheckoutStep};
    pub use crate::gateway::{
        PaymentGateway, PaymentOutcome, PaymentRequest, SimulatedGateway,
    };
    pub use crate::payment::{CardDetails, PaymentMethod};
}
