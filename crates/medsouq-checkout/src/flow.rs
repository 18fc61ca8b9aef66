//! Checkout step state machine.

use crate::delivery::DeliveryDetails;
use crate::error::CheckoutError;
use crate::payment::{CardDetails, PaymentMethod};
use serde::{Deserialize, Serialize};

/// The three checkout steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    /// Delivery details entry.
    Details,
    /// Payment method selection and card entry.
    Payment,
    /// Terminal order recap; no way back.
    Confirmation,
}

impl CheckoutStep {
    /// Stable identifier used in logs and transition errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Details => "details",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Confirmation => "confirmation",
        }
    }

    /// 1-based position for the step indicator.
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Details => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Confirmation => 3,
        }
    }
}

impl Default for CheckoutStep {
    fn default() -> Self {
        CheckoutStep::Details
    }
}

/// Everything the checkout flow has collected so far.
///
/// Moving between the details and payment steps never discards entered
/// data; both forms survive round trips intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CheckoutState {
    /// Current step.
    pub step: CheckoutStep,
    /// Delivery form contents.
    pub delivery: DeliveryDetails,
    /// Selected payment method, if any.
    pub payment_method: Option<PaymentMethod>,
    /// Card form contents.
    pub card: CardDetails,
    /// Whether an order submission is in flight.
    pub is_processing: bool,
}

impl CheckoutState {
    /// Start a fresh flow on the details step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance from details to payment after validating the delivery form.
    ///
    /// On a validation failure the step does not change and the error
    /// carries the translation key of the first failing field.
    pub fn continue_to_payment(&mut self) -> Result<(), CheckoutError> {
        if self.step != CheckoutStep::Details {
            return Err(CheckoutError::InvalidTransition {
                from: self.step.as_str(),
                to: CheckoutStep::Payment.as_str(),
            });
        }
        self.delivery.validate().map_err(CheckoutError::Validation)?;
        self.step = CheckoutStep::Payment;
        Ok(())
    }

    /// Return from payment to details, preserving all entered data.
    pub fn back_to_details(&mut self) -> Result<(), CheckoutError> {
        if self.step != CheckoutStep::Payment {
            return Err(CheckoutError::InvalidTransition {
                from: self.step.as_str(),
                to: CheckoutStep::Details.as_str(),
            });
        }
        self.step = CheckoutStep::Details;
        Ok(())
    }

    /// Mark a submission as in flight. Fails if one already is.
    pub fn begin_processing(&mut self) -> Result<(), CheckoutError> {
        if self.is_processing {
            return Err(CheckoutError::AlreadyProcessing);
        }
        self.is_processing = true;
        Ok(())
    }

    /// Clear the in-flight flag.
    pub fn finish_processing(&mut self) {
        self.is_processing = false;
    }

    /// Move to the terminal confirmation step.
    pub fn confirm(&mut self) -> Result<(), CheckoutError> {
        if self.step != CheckoutStep::Payment {
            return Err(CheckoutError::InvalidTransition {
                from: self.step.as_str(),
                to: CheckoutStep::Confirmation.as_str(),
            });
        }
        self.step = CheckoutStep::Confirmation;
        Ok(())
    }
}
