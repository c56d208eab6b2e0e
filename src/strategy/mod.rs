//! Strategy pattern demo: interchangeable payment methods.
//!
//! # Architecture
//!
//! The strategy module is organized into:
//! - `payment`: the [`PaymentStrategy`] trait and its three implementations
//! - `context`: [`PaymentContext`], which holds the selected strategy and
//!   delegates to it
//!
//! # Usage
//!
//! ```
//! use pattern_demos::strategy::{CreditCardPayment, PaymentContext};
//!
//! let mut context = PaymentContext::with_writer(Vec::new());
//! context.set_payment_strategy(CreditCardPayment);
//! context.process_payment(100.0)?;
//! assert_eq!(context.writer(), b"Paid $100.00 using Credit Card.\n");
//! # Ok::<(), pattern_demos::error::PaymentError>(())
//! ```

pub mod context;
pub mod payment;

pub use context::PaymentContext;
pub use payment::{CashPayment, CreditCardPayment, PayPalPayment, PaymentMethod, PaymentStrategy};

use crate::error::PaymentError;

/// Result type for payment operations.
pub type PaymentResult<T> = std::result::Result<T, PaymentError>;
