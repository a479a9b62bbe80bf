//! This example generates a CSV file of payment line items (configurable through the constants)
//! for a number of payments supplied as a command-line argument.
//!
//! The CSV file can then be used to test the `payment-queries` crate.
//!
//! Example (1000 payments):
//! ```bash
//! cargo run --example generator 1000 > data/1K_payments.csv
//! ```
//! ### Maths
//! Based on the constants, the monthly report for the generated file can be derived by hand.
//!
//! Let:
//! - P = number of payments, D = DAYS_PER_PAYMENT, I = ITEMS_PER_PAYMENT,
//! - R = REGULAR_PRICE, F = FINAL_PRICE.
//!
//! Payment `n` (0-based) is dated `START + n·D days` at noon UTC and has I items,
//! each priced R regular and F final. So every payment is worth I·F and grants
//! a discount of I·(R−F).
//!
//! With D = 1 every calendar day gets exactly one payment, so for a full month
//! of `d` days the report shows `d` payments, `I·d` items, total `I·F·d` and
//! discount `I·(R−F)·d`.
//!

use chrono::{DateTime, Duration};
use csv::Writer;
use payment_queries::PaymentRow;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::{env, error::Error};

fn main() -> Result<(), Box<dyn Error>> {
    // Get command-line arguments
    let args: Vec<String> = env::args().collect();

    // Ensure we have the correct number of arguments
    if args.len() != 2 {
        eprintln!("Usage: cargo run --example generator <num_payments>");
        std::process::exit(1);
    }

    // Parse the payment count from the first argument
    let num_payments: u64 = match args[1].parse() {
        Ok(n) if n > 0 => n,
        _ => {
            eprintln!("Error: <num_payments> must be a positive integer.");
            std::process::exit(1);
        }
    };

    // Configuration constants.
    const START: &str = "2024-01-01T12:00:00+00:00";
    const DAYS_PER_PAYMENT: i64 = 1;
    const ITEMS_PER_PAYMENT: u64 = 3;
    const NUM_USERS: u64 = 50;
    const REGULAR_PRICE: Decimal = dec!(20.00);
    const FINAL_PRICE: Decimal = dec!(17.50);

    let start = DateTime::parse_from_rfc3339(START)?;
    let mut wtr = Writer::from_writer(std::io::stdout());

    for payment in 0..num_payments {
        let payment_date = start + Duration::days(payment as i64 * DAYS_PER_PAYMENT);
        let user_email = format!("user{}@example.com", payment % NUM_USERS);
        for item in 0..ITEMS_PER_PAYMENT {
            wtr.serialize(PaymentRow {
                payment_id: payment + 1,
                payment_date,
                user_email: user_email.clone(),
                item_name: Some(format!("product-{}", (payment + item) % 20)),
                regular_price: Some(REGULAR_PRICE),
                final_price: Some(FINAL_PRICE),
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}
