//! Checkout error types.

use medsouq_commerce::CommerceError;
use thiserror::Error;

/// Errors that can occur in the checkout flow.
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// A required field is missing or malformed. Carries the translation
    /// key of the field-specific message; never fatal.
    #[error("Validation failed: {0}")]
    Validation(&'static str),

    /// Illegal state-machine transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    /// An order submission is already in flight.
    #[error("Order is already processing")]
    AlreadyProcessing,

    /// The payment collaborator declined the order.
    #[error("Payment declined: {0}")]
    PaymentDeclined(String),

    /// Pricing or cart error.
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}
