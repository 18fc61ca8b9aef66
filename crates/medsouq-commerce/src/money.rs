//! Money type and locale-aware display formatting.
//!
//! Amounts are stored in the smallest unit of the currency (halalas for
//! SAR, cents for USD) to avoid floating-point precision issues. Totals
//! carried for payment keep full minor-unit precision; only the display
//! formatter rounds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display locales supported by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (Saudi Arabia).
    #[default]
    En,
    /// Arabic (Saudi Arabia).
    Ar,
}

impl Locale {
    /// Get the BCP-47 tag for this locale.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en-SA",
            Locale::Ar => "ar-SA",
        }
    }

    /// Whether this locale lays out right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Locale::Ar)
    }

    /// Parse a locale from a language code, defaulting to English.
    pub fn from_code(code: &str) -> Self {
        match code {
            "ar" | "ar-SA" => Locale::Ar,
            _ => Locale::En,
        }
    }
}

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Saudi riyal.
    #[default]
    SAR,
    /// UAE dirham.
    AED,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the ISO-4217 currency code (e.g., "SAR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::SAR => "SAR",
            Currency::AED => "AED",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the symbol used in English-locale display.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::SAR => "SAR",
            Currency::AED => "AED",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Get the symbol used in Arabic-locale display.
    pub fn arabic_symbol(&self) -> &'static str {
        match self {
            Currency::SAR => "\u{631}.\u{633}",
            Currency::AED => "\u{62f}.\u{625}",
            other => other.symbol(),
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "SAR" => Some(Currency::SAR),
            "AED" => Some(Currency::AED),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., halalas for SAR).
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from a major-unit amount.
    ///
    /// ```
    /// use medsouq_commerce::money::{Currency, Money};
    /// let price = Money::from_major(450, Currency::SAR);
    /// assert_eq!(price.amount_minor, 45000);
    /// ```
    pub fn from_major(amount: i64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        Self::new(amount * multiplier, currency)
    }

    /// Create a Money value from a decimal amount.
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_minor = (amount * multiplier as f64).round() as i64;
        Self::new(amount_minor, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_minor as f64 / divisor as f64
    }

    /// Try to add another Money value, returning None if currencies don't match.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_minor.checked_add(other.amount_minor)?,
            self.currency,
        ))
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_minor.checked_sub(other.amount_minor)?,
            self.currency,
        ))
    }

    /// Try to multiply by a scalar, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        Some(Money::new(
            self.amount_minor.checked_mul(factor)?,
            self.currency,
        ))
    }

    /// Calculate a percentage of this amount, rounded to the nearest minor unit.
    pub fn percentage(&self, percent: f64) -> Money {
        let new_amount = (self.amount_minor as f64 * percent / 100.0).round() as i64;
        Money::new(new_amount, self.currency)
    }

    /// Sum an iterator of Money values, returning None on mismatch or overflow.
    pub fn try_sum<'a>(
        iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        let mut acc = Money::zero(currency);
        for m in iter {
            acc = acc.try_add(m)?;
        }
        Some(acc)
    }

    /// Format for display in the given locale.
    ///
    /// Grouping separators, minimum 0 / maximum 2 fraction digits: whole
    /// amounts render without a fraction part. English places the currency
    /// before the amount, Arabic after.
    ///
    /// ```
    /// use medsouq_commerce::money::{Currency, Locale, Money};
    /// let total = Money::from_major(1060, Currency::SAR);
    /// assert_eq!(total.format(Locale::En), "SAR 1,060");
    /// ```
    pub fn format(&self, locale: Locale) -> String {
        let amount = self.format_amount();
        match locale {
            Locale::En => {
                let symbol = self.currency.symbol();
                if symbol.chars().all(|c| c.is_ascii_alphabetic()) {
                    format!("{} {}", symbol, amount)
                } else {
                    format!("{}{}", symbol, amount)
                }
            }
            Locale::Ar => format!("{} {}", amount, self.currency.arabic_symbol()),
        }
    }

    /// Format the bare amount with grouping and trimmed fraction digits.
    pub fn format_amount(&self) -> String {
        let minor = self.amount_minor.abs();
        let divisor = 10_i64.pow(self.currency.decimal_places());
        let whole = minor / divisor;
        let frac = minor % divisor;

        let grouped = group_thousands(whole);
        let sign = if self.amount_minor < 0 { "-" } else { "" };

        if frac == 0 {
            format!("{}{}", sign, grouped)
        } else if frac % 10 == 0 {
            format!("{}{}.{}", sign, grouped, frac / 10)
        } else {
            format!("{}{}.{:02}", sign, grouped, frac)
        }
    }

    /// Parse a displayed amount back into Money.
    ///
    /// Strips currency symbols and grouping separators; recovers the
    /// amount within one display-precision unit of the original.
    pub fn parse_display(text: &str, currency: Currency) -> Option<Money> {
        let cleaned: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();
        if cleaned.is_empty() || cleaned == "-" {
            return None;
        }

        let negative = cleaned.starts_with('-');
        let cleaned = cleaned.trim_start_matches('-');
        let (whole, frac) = match cleaned.split_once('.') {
            Some((w, f)) => (w, f),
            None => (cleaned, ""),
        };

        let places = currency.decimal_places() as usize;
        let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
        let mut frac_digits: String = frac.chars().take(places).collect();
        while frac_digits.len() < places {
            frac_digits.push('0');
        }
        let frac: i64 = if frac_digits.is_empty() {
            0
        } else {
            frac_digits.parse().ok()?
        };

        let divisor = 10_i64.pow(currency.decimal_places());
        let minor = whole.checked_mul(divisor)?.checked_add(frac)?;
        Some(Money::new(if negative { -minor } else { minor }, currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(Locale::En))
    }
}

/// Insert thousands separators into a non-negative whole amount.
fn group_thousands(mut value: i64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut groups = Vec::new();
    while value > 0 {
        groups.push((value % 1000) as u16);
        value /= 1000;
    }
    let mut out = String::new();
    for (i, group) in groups.iter().rev().enumerate() {
        if i == 0 {
            out.push_str(&group.to_string());
        } else {
            out.push_str(&format!(",{:03}", group));
        }
    }
    out
}
