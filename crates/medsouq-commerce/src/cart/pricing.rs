//! Order pricing aggregation.
//!
//! A pure function over the current line items: no cached state, the
//! breakdown is recomputed on every read. Amounts carry full minor-unit
//! precision; only display formatting rounds.

use crate::cart::LineItem;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Flat VAT rate applied to the subtotal, in percent.
pub const VAT_RATE_PERCENT: f64 = 15.0;

/// Externally-configurable pricing parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingConfig {
    /// Fixed delivery fee, in minor units of the order currency.
    pub delivery_fee_minor: i64,
    /// VAT rate in percent.
    pub vat_rate_percent: f64,
    /// Currency used when the cart is empty.
    pub default_currency: Currency,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            delivery_fee_minor: 2500, // 25.00 SAR
            vat_rate_percent: VAT_RATE_PERCENT,
            default_currency: Currency::SAR,
        }
    }
}

/// Complete pricing breakdown for an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderPricing {
    /// Sum of unit_price * quantity across line items.
    pub subtotal: Money,
    /// Fixed delivery fee.
    pub delivery_fee: Money,
    /// VAT on the subtotal.
    pub vat: Money,
    /// subtotal + delivery_fee + vat.
    pub total: Money,
    /// Currency of the first line item, or the configured default.
    pub currency: Currency,
}

impl OrderPricing {
    /// Compute the pricing breakdown for a set of line items.
    ///
    /// The delivery fee is charged even on an empty cart, matching the
    /// reference storefront.
    pub fn for_items(items: &[LineItem], config: &PricingConfig) -> Result<Self, CommerceError> {
        let currency = items
            .first()
            .map(|i| i.unit_price.currency)
            .unwrap_or(config.default_currency);

        let mut subtotal = Money::zero(currency);
        for item in items {
            let line = item.line_total()?;
            subtotal = subtotal
                .try_add(&line)
                .ok_or_else(|| CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: line.currency.code().to_string(),
                })?;
        }

        let delivery_fee = Money::new(config.delivery_fee_minor, currency);
        let vat = subtotal.percentage(config.vat_rate_percent);
        let total = subtotal
            .try_add(&delivery_fee)
            .and_then(|t| t.try_add(&vat))
            .ok_or(CommerceError::Overflow)?;

        Ok(Self {
            subtotal,
            delivery_fee,
            vat,
            total,
            currency,
        })
    }
}
