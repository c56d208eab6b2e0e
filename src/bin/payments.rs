//! Payments - Strategy demo entry point
//!
//! Runs a fixed sequence of payments through one context, switching the
//! payment method between calls, or a single payment chosen on the command
//! line.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use pattern_demos::logging::LogArgs;
use pattern_demos::strategy::{
    CashPayment, CreditCardPayment, PayPalPayment, PaymentContext, PaymentMethod,
};

/// Strategy pattern demo: interchangeable payment methods.
#[derive(Parser, Debug)]
#[command(name = "payments")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Process a single payment with this method instead of the demo script.
    #[arg(long, value_enum, requires = "amount")]
    method: Option<PaymentMethod>,

    /// Amount for the single payment.
    #[arg(long, requires = "method", allow_hyphen_values = true)]
    amount: Option<f64>,

    #[command(flatten)]
    log: LogArgs,
}

/// Runs the three-payment demo script.
fn run_script<W: std::io::Write>(context: &mut PaymentContext<W>) -> Result<()> {
    context.set_payment_strategy(CreditCardPayment);
    context
        .process_payment(100.00)
        .context("credit card payment failed")?;

    context.set_payment_strategy(PayPalPayment);
    context
        .process_payment(50.25)
        .context("PayPal payment failed")?;

    context.set_payment_strategy(CashPayment);
    context
        .process_payment(30.50)
        .context("cash payment failed")?;

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    args.log.init("payments").context("failed to set up logging")?;

    let mut context = PaymentContext::new();

    if let (Some(method), Some(amount)) = (args.method, args.amount) {
        info!(?method, amount, "processing single payment");
        context.set_boxed_strategy(method.strategy());
        context
            .process_payment(amount)
            .with_context(|| format!("payment of {amount} failed"))?;
        return Ok(());
    }

    println!("Processing payments:");
    run_script(&mut context)
}
