//! Domain-specific errors for the payment query system.
//!
//! Contains error variants for:
//! - Calendar parameter validation (month out of range, malformed `YYYY-MM`)
//! - Store consistency (duplicate payment, rows disagreeing on payment header)
//!
//! Empty query results are never errors. I/O and CSV parsing failures are
//! reported by the runners as their own error types.

use thiserror::Error;

use crate::model::PaymentId;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("month {0} is out of range (expected 1-12)")]
    InvalidMonth(u32),

    #[error("invalid year-month {0:?} (expected YYYY-MM)")]
    InvalidYearMonth(String),

    #[error("payment {0} already exists")]
    DuplicatePayment(PaymentId),

    /// Two rows for the same payment disagree on its date or user.
    #[error("rows for payment {0} disagree on date or user")]
    PaymentHeaderMismatch(PaymentId),

    /// A row names an item but is missing one of its prices, or the reverse.
    #[error("row for payment {0} has an incomplete item")]
    IncompleteItem(PaymentId),
}
