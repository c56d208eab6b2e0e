//! The payment context.

use std::io::{self, Stdout, Write};

use tracing::{debug, info};

use super::{PaymentResult, PaymentStrategy};
use crate::error::PaymentError;

/// Holds the selected [`PaymentStrategy`] and delegates payments to it.
///
/// Receipts are written to `W`, which is stdout unless built with
/// [`PaymentContext::with_writer`].
pub struct PaymentContext<W: Write = Stdout> {
    strategy: Option<Box<dyn PaymentStrategy>>,
    out: W,
}

impl PaymentContext<Stdout> {
    /// Creates a context with no strategy, printing to stdout.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for PaymentContext<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> PaymentContext<W> {
    /// Creates a context with no strategy, writing receipts to `out`.
    pub fn with_writer(out: W) -> Self {
        Self {
            strategy: None,
            out,
        }
    }

    /// Replaces the active strategy.
    pub fn set_payment_strategy(&mut self, strategy: impl PaymentStrategy + 'static) {
        self.set_boxed_strategy(Box::new(strategy));
    }

    /// Replaces the active strategy with an already boxed one.
    pub fn set_boxed_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        debug!(strategy = strategy.name(), "payment strategy selected");
        self.strategy = Some(strategy);
    }

    /// Deselects the active strategy.
    pub fn clear_payment_strategy(&mut self) {
        self.strategy = None;
    }

    /// Name of the active strategy, if any.
    pub fn strategy_name(&self) -> Option<&'static str> {
        self.strategy.as_ref().map(|s| s.name())
    }

    /// Pays `amount` with the active strategy and writes the receipt.
    ///
    /// # Errors
    ///
    /// - [`PaymentError::NoStrategySelected`] if no strategy has been set
    /// - [`PaymentError::InvalidAmount`] if `amount` is not finite or not
    ///   strictly positive
    /// - [`PaymentError::Io`] if the receipt cannot be written
    pub fn process_payment(&mut self, amount: f64) -> PaymentResult<()> {
        let strategy = self
            .strategy
            .as_deref()
            .ok_or(PaymentError::NoStrategySelected)?;

        if !amount.is_finite() || amount <= 0.0 {
            return Err(PaymentError::InvalidAmount(amount));
        }

        let receipt = strategy.pay(amount);
        writeln!(self.out, "{receipt}")?;
        info!(strategy = strategy.name(), amount, "payment processed");
        Ok(())
    }

    /// The sink receipts are written to.
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Consumes the context and returns its sink.
    pub fn into_writer(self) -> W {
        self.out
    }
}
