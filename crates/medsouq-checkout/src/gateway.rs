//! Payment gateway seam.
//!
//! The reference storefront has no real payment processing: submission is
//! a fixed ~2 second wait that always succeeds. The gateway is still a
//! trait with an injectable outcome so the declined path is testable.

use crate::error::CheckoutError;
use crate::payment::PaymentMethod;
use async_trait::async_trait;
use medsouq_commerce::Money;
use std::time::Duration;

/// A payment authorization request.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    /// Amount to charge.
    pub amount: Money,
    /// Selected payment method.
    pub method: PaymentMethod,
}

/// Outcome of a payment authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// Payment approved.
    Approved,
    /// Payment declined with a reason.
    Declined { reason: String },
}

/// External payment collaborator.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Authorize a payment. Suspends without blocking; there is no
    /// cancellation — once started it runs to completion.
    async fn authorize(&self, request: &PaymentRequest) -> Result<PaymentOutcome, CheckoutError>;
}

/// Simulated gateway with a configurable delay and outcome.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
    outcome: PaymentOutcome,
}

impl SimulatedGateway {
    /// The reference behavior: approve after a ~2 second delay.
    pub fn new() -> Self {
        Self {
            delay: Duration::from_secs(2),
            outcome: PaymentOutcome::Approved,
        }
    }

    /// Override the processing delay (tests use zero).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Make the gateway decline every request.
    pub fn declining(reason: impl Into<String>) -> Self {
        Self {
            delay: Duration::from_secs(2),
            outcome: PaymentOutcome::Declined {
                reason: reason.into(),
            },
        }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn authorize(&self, _request: &PaymentRequest) -> Result<PaymentOutcome, CheckoutError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.outcome.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medsouq_commerce::Currency;

    fn request() -> PaymentRequest {
        PaymentRequest {
            amount: Money::from_major(1060, Currency::SAR),
            method: PaymentMethod::Visa,
        }
    }

    #[tokio::test]
    async fn test_simulated_gateway_approves_by_default() {
        let gateway = SimulatedGateway::new().with_delay(Duration::ZERO);
        let outcome = gateway.authorize(&request()).await.unwrap();
        assert_eq!(outcome, PaymentOutcome::Approved);
    }

    #[tokio::test]
    async fn test_simulated_gateway_can_decline() {
        let gateway = SimulatedGateway::declining("insufficient funds").with_delay(Duration::ZERO);
        let outcome = gateway.authorize(&request()).await.unwrap();
        assert_eq!(
            outcome,
            PaymentOutcome::Declined {
                reason: "insufficient funds".to_string()
            }
        );
    }
}
