//! Checkout controller: owns the flow state, the order payload, and the
//! collaborators needed to place an order.

use crate::delivery::DeliveryDetails;
use crate::error::CheckoutError;
use crate::flow::{CheckoutState, CheckoutStep};
use crate::gateway::{PaymentGateway, PaymentOutcome, PaymentRequest};
use crate::payment::{validate_payment, CardDetails, PaymentMethod};
use medsouq_commerce::cart::{LineItem, OrderPricing, PricingConfig};
use medsouq_commerce::i18n::Translator;
use medsouq_commerce::notify::Notifier;
use medsouq_geo::LocationData;
use std::fmt;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Result of a successfully placed order, shown on the confirmation step.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    /// Display order number, e.g. "#MED-482913".
    pub order_number: String,
    /// Delivery details the order was placed with.
    pub delivery: DeliveryDetails,
    /// Payment method used.
    pub method: PaymentMethod,
    /// Final pricing breakdown.
    pub pricing: OrderPricing,
}

/// Drives a single checkout session from details entry to confirmation.
///
/// The controller owns the order payload for its lifetime: the line items
/// are snapshotted at construction and a later cart mutation does not
/// change the order being placed.
pub struct CheckoutController {
    state: CheckoutState,
    items: Vec<LineItem>,
    pricing_config: PricingConfig,
    gateway: Arc<dyn PaymentGateway>,
    notifier: Arc<dyn Notifier>,
    translator: Arc<dyn Translator>,
}

impl CheckoutController {
    /// Start a checkout session over a snapshot of line items.
    pub fn new(
        items: Vec<LineItem>,
        pricing_config: PricingConfig,
        gateway: Arc<dyn PaymentGateway>,
        notifier: Arc<dyn Notifier>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            state: CheckoutState::new(),
            items,
            pricing_config,
            gateway,
            notifier,
            translator,
        }
    }

    /// Current step.
    pub fn step(&self) -> CheckoutStep {
        self.state.step
    }

    /// Whether an order submission is in flight.
    pub fn is_processing(&self) -> bool {
        self.state.is_processing
    }

    /// The line items this order will be placed with.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Delivery form, for field-by-field entry.
    pub fn delivery_mut(&mut self) -> &mut DeliveryDetails {
        &mut self.state.delivery
    }

    /// Read-only view of the delivery form.
    pub fn delivery(&self) -> &DeliveryDetails {
        &self.state.delivery
    }

    /// Card form, for field-by-field entry.
    pub fn card_mut(&mut self) -> &mut CardDetails {
        &mut self.state.card
    }

    /// Selected payment method, if any.
    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.state.payment_method
    }

    /// Select a payment method.
    pub fn select_payment_method(&mut self, method: PaymentMethod) {
        self.state.payment_method = Some(method);
    }

    /// Overwrite the delivery address with a resolved map location.
    pub fn apply_location(&mut self, location: &LocationData) {
        self.state.delivery.apply_location(location);
    }

    /// Current pricing breakdown for the order payload.
    pub fn pricing(&self) -> Result<OrderPricing, CheckoutError> {
        Ok(OrderPricing::for_items(&self.items, &self.pricing_config)?)
    }

    /// Advance to the payment step.
    ///
    /// On a validation failure the translated field message is pushed to
    /// the notifier and the step stays on details.
    pub fn continue_to_payment(&mut self) -> Result<(), CheckoutError> {
        match self.state.continue_to_payment() {
            Ok(()) => Ok(()),
            Err(CheckoutError::Validation(key)) => {
                self.notifier.notify_error(&self.translator.t(key));
                Err(CheckoutError::Validation(key))
            }
            Err(other) => Err(other),
        }
    }

    /// Return to the details step, preserving entered data.
    pub fn back_to_details(&mut self) -> Result<(), CheckoutError> {
        self.state.back_to_details()
    }

    /// Submit the order: validate the payment selection, authorize it
    /// with the gateway, and on approval move to confirmation.
    ///
    /// While the authorization is in flight a second call fails with
    /// [`CheckoutError::AlreadyProcessing`]. A declined or failed payment
    /// leaves the flow on the payment step with all data intact.
    pub async fn place_order(&mut self) -> Result<OrderConfirmation, CheckoutError> {
        if self.state.step != CheckoutStep::Payment {
            return Err(CheckoutError::InvalidTransition {
                from: self.state.step.as_str(),
                to: CheckoutStep::Confirmation.as_str(),
            });
        }

        if let Err(key) = validate_payment(self.state.payment_method, &self.state.card) {
            self.notifier.notify_error(&self.translator.t(key));
            return Err(CheckoutError::Validation(key));
        }
        let method = self.state.payment_method.unwrap_or(PaymentMethod::Mada);

        let pricing = self.pricing()?;
        self.state.begin_processing()?;

        let request = PaymentRequest {
            amount: pricing.total,
            method,
        };
        let outcome = self.gateway.authorize(&request).await;
        self.state.finish_processing();

        match outcome {
            Ok(PaymentOutcome::Approved) => {
                self.state.confirm()?;
                let order_number = generate_order_number();
                tracing::info!(
                    order_number = %order_number,
                    method = method.as_str(),
                    total_minor = pricing.total.amount_minor,
                    "order placed"
                );
                self.notifier
                    .notify_success(&self.translator.t("checkout.confirmation.toast"));
                Ok(OrderConfirmation {
                    order_number,
                    delivery: self.state.delivery.clone(),
                    method,
                    pricing,
                })
            }
            Ok(PaymentOutcome::Declined { reason }) => {
                self.notifier
                    .notify_error(&self.translator.t("checkout.validation.paymentFailed"));
                Err(CheckoutError::PaymentDeclined(reason))
            }
            Err(err) => {
                self.notifier
                    .notify_error(&self.translator.t("checkout.validation.paymentFailed"));
                Err(err)
            }
        }
    }
}

impl fmt::Debug for CheckoutController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutController")
            .field("state", &self.state)
            .field("items", &self.items.len())
            .finish()
    }
}

/// Display order number: "#MED-" followed by the last six digits of the
/// current unix-epoch milliseconds.
fn generate_order_number() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("#MED-{:06}", millis % 1_000_000)
}
