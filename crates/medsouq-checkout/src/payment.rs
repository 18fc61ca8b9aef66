//! Payment method selection and card entry.
//!
//! Card fields are stored display-formatted; the raw digits are always
//! recoverable by stripping non-digit characters.

use serde::{Deserialize, Serialize};

/// Available payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Saudi domestic debit network.
    Mada,
    Visa,
    Mastercard,
    /// Wallet payment confirmed via a device-level prompt; no card entry.
    ApplePay,
}

impl PaymentMethod {
    /// All methods, in display order.
    pub fn all() -> [PaymentMethod; 4] {
        [
            PaymentMethod::Mada,
            PaymentMethod::Visa,
            PaymentMethod::Mastercard,
            PaymentMethod::ApplePay,
        ]
    }

    /// Stable identifier used in translation keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Mada => "mada",
            PaymentMethod::Visa => "visa",
            PaymentMethod::Mastercard => "mastercard",
            PaymentMethod::ApplePay => "applepay",
        }
    }

    /// Translation key for the method label.
    pub fn label_key(&self) -> String {
        format!("payment.methodLabels.{}", self.as_str())
    }

    /// Translation key for the method description.
    pub fn description_key(&self) -> String {
        format!("payment.methods.{}", self.as_str())
    }

    /// Whether this is a wallet method with no card entry.
    pub fn is_wallet(&self) -> bool {
        matches!(self, PaymentMethod::ApplePay)
    }
}

/// Card entry fields, kept display-formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CardDetails {
    /// Digits grouped in fours, e.g. "4111 1111 1111 1111".
    pub card_number: String,
    /// "MM/YY".
    pub expiry_date: String,
    /// 3-4 digits.
    pub cvv: String,
    /// Name on card.
    pub cardholder_name: String,
}

impl CardDetails {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the card number from raw keystrokes, formatting as groups of 4.
    pub fn set_card_number(&mut self, raw: &str) {
        self.card_number = format_card_number(raw);
    }

    /// Set the expiry from raw keystrokes, formatting as MM/YY.
    pub fn set_expiry_date(&mut self, raw: &str) {
        self.expiry_date = format_expiry_date(raw);
    }

    /// Set the CVV from raw keystrokes, keeping digits only.
    pub fn set_cvv(&mut self, raw: &str) {
        self.cvv = sanitize_cvv(raw);
    }

    /// Set the cardholder name.
    pub fn set_cardholder_name(&mut self, name: &str) {
        self.cardholder_name = name.to_string();
    }

    /// The card number with formatting stripped.
    pub fn raw_card_digits(&self) -> String {
        self.card_number.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

/// Format raw card-number input: digits only, grouped in 4s, at most
/// 19 characters (16 digits plus 3 spaces).
pub fn format_card_number(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let mut out = String::new();
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(*digit);
    }
    out.chars().take(19).collect()
}

/// Format raw expiry input as "MM/YY", at most four digits.
pub fn format_expiry_date(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(4).collect();
    if digits.len() >= 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// Keep only digits in CVV input, at most four.
pub fn sanitize_cvv(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).take(4).collect()
}

/// Validate a payment selection for order submission.
///
/// Wallet methods skip all card checks. Card methods require 16 digits,
/// a fully-entered expiry, a 3+ digit CVV, and a cardholder name, in
/// that order; the first failure wins. Returns the translation key of
/// the field-specific message.
pub fn validate_payment(
    method: Option<PaymentMethod>,
    card: &CardDetails,
) -> Result<(), &'static str> {
    let method = match method {
        Some(m) => m,
        None => return Err("checkout.validation.paymentMethod"),
    };
    if method.is_wallet() {
        return Ok(());
    }

    if card.raw_card_digits().len() < 16 {
        return Err("checkout.validation.cardNumber");
    }
    if card.expiry_date.len() < 5 {
        return Err("checkout.validation.expiryDate");
    }
    if card.cvv.len() < 3 {
        return Err("checkout.validation.cvv");
    }
    if card.cardholder_name.trim().is_empty() {
        return Err("checkout.validation.cardholderName");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_number_grouping() {
        assert_eq!(
            format_card_number("4111111111111111"),
            "4111 1111 1111 1111"
        );
    }

    #[test]
    fn test_card_number_strips_non_digits_and_caps_length() {
        assert_eq!(format_card_number("4111-1111 22ab"), "4111 1111 22");
        assert_eq!(
            format_card_number("41111111111111112222"),
            "4111 1111 1111 1111"
        );
    }

    #[test]
    fn test_expiry_formatting_inserts_slash() {
        assert_eq!(format_expiry_date("1"), "1");
        assert_eq!(format_expiry_date("12"), "12/");
        assert_eq!(format_expiry_date("1227"), "12/27");
        assert_eq!(format_expiry_date("12/27"), "12/27");
        assert_eq!(format_expiry_date("122799"), "12/27");
    }

    #[test]
    fn test_cvv_sanitization() {
        assert_eq!(sanitize_cvv("12a3"), "123");
        assert_eq!(sanitize_cvv("123456"), "1234");
    }

    #[test]
    fn test_raw_digits_recoverable() {
        let mut card = CardDetails::new();
        card.set_card_number("4111 1111 1111 1111");
        assert_eq!(card.raw_card_digits(), "4111111111111111");
    }

    fn complete_card() -> CardDetails {
        let mut card = CardDetails::new();
        card.set_card_number("4111111111111111");
        card.set_expiry_date("1227");
        card.set_cvv("123");
        card.set_cardholder_name("SARA ALQAHTANI");
        card
    }

    #[test]
    fn test_validate_complete_card() {
        assert!(validate_payment(Some(PaymentMethod::Visa), &complete_card()).is_ok());
    }

    #[test]
    fn test_validate_requires_method() {
        assert_eq!(
            validate_payment(None, &complete_card()),
            Err("checkout.validation.paymentMethod")
        );
    }

    #[test]
    fn test_validate_card_checks_in_order() {
        let mut card = CardDetails::new();
        assert_eq!(
            validate_payment(Some(PaymentMethod::Mada), &card),
            Err("checkout.validation.cardNumber")
        );

        card.set_card_number("4111111111111111");
        assert_eq!(
            validate_payment(Some(PaymentMethod::Mada), &card),
            Err("checkout.validation.expiryDate")
        );

        card.set_expiry_date("1227");
        assert_eq!(
            validate_payment(Some(PaymentMethod::Mada), &card),
            Err("checkout.validation.cvv")
        );

        card.set_cvv("123");
        assert_eq!(
            validate_payment(Some(PaymentMethod::Mada), &card),
            Err("checkout.validation.cardholderName")
        );
    }

    #[test]
    fn test_wallet_skips_card_checks() {
        let empty = CardDetails::new();
        assert!(validate_payment(Some(PaymentMethod::ApplePay), &empty).is_ok());
    }

    #[test]
    fn test_method_keys() {
        assert_eq!(PaymentMethod::Mada.label_key(), "payment.methodLabels.mada");
        assert_eq!(
            PaymentMethod::ApplePay.description_key(),
            "payment.methods.applepay"
        );
        assert!(PaymentMethod::ApplePay.is_wallet());
        assert!(!PaymentMethod::Visa.is_wallet());
    }
}
