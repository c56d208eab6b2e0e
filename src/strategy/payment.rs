//! Payment strategies.

use clap::ValueEnum;

/// An interchangeable payment algorithm.
pub trait PaymentStrategy {
    /// Short name of the payment channel, used in logs.
    fn name(&self) -> &'static str;

    /// Performs the payment and returns the receipt line.
    ///
    /// The amount has already been validated by the caller.
    fn pay(&self, amount: f64) -> String;
}

/// Pays by credit card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreditCardPayment;

impl PaymentStrategy for CreditCardPayment {
    fn name(&self) -> &'static str {
        "credit-card"
    }

    fn pay(&self, amount: f64) -> String {
        format!("Paid ${amount:.2} using Credit Card.")
    }
}

/// Pays through PayPal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PayPalPayment;

impl PaymentStrategy for PayPalPayment {
    fn name(&self) -> &'static str {
        "paypal"
    }

    fn pay(&self, amount: f64) -> String {
        format!("Paid ${amount:.2} using PayPal.")
    }
}

/// Pays in cash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CashPayment;

impl PaymentStrategy for CashPayment {
    fn name(&self) -> &'static str {
        "cash"
    }

    fn pay(&self, amount: f64) -> String {
        format!("Paid ${amount:.2} in cash.")
    }
}

/// The built-in payment methods, selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaymentMethod {
    /// [`CreditCardPayment`].
    CreditCard,
    /// [`PayPalPayment`].
    #[value(name = "paypal")]
    PayPal,
    /// [`CashPayment`].
    Cash,
}

impl PaymentMethod {
    /// Returns the strategy implementing this method.
    pub fn strategy(self) -> Box<dyn PaymentStrategy> {
        match self {
            Self::CreditCard => Box::new(CreditCardPayment),
            Self::PayPal => Box::new(PayPalPayment),
            Self::Cash => Box::new(CashPayment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipts() {
        assert_eq!(CreditCardPayment.pay(100.0), "Paid $100.00 using Credit Card.");
        assert_eq!(PayPalPayment.pay(50.25), "Paid $50.25 using PayPal.");
        assert_eq!(CashPayment.pay(30.5), "Paid $30.50 in cash.");
    }

    #[test]
    fn test_method_maps_to_strategy() {
        assert_eq!(PaymentMethod::CreditCard.strategy().name(), "credit-card");
        assert_eq!(PaymentMethod::PayPal.strategy().name(), "paypal");
        assert_eq!(PaymentMethod::Cash.strategy().name(), "cash");
    }

    #[test]
    fn test_method_parses_from_cli_names() {
        assert_eq!(
            PaymentMethod::from_str("credit-card", false).unwrap(),
            PaymentMethod::CreditCard
        );
        assert_eq!(
            PaymentMethod::from_str("paypal", false).unwrap(),
            PaymentMethod::PayPal
        );
        assert!(PaymentMethod::from_str("bitcoin", false).is_err());
    }
}
