//! Read-only queries and aggregations over payment records.
//!
//! [`PaymentQueryService`] answers questions such as "which payments happened
//! this month" or "what was the total discount in March" over any
//! [`PaymentSource`], using a [`ClockSource`] for "now".

mod clock;
mod csv_utils;
mod dto;
mod error;
mod model;
mod query;
mod runner;
mod source;
mod stores;

pub use clock::{ClockSource, FixedClock, SystemClock};
pub use dto::{MonthlySummaryRow, PaymentRow};
pub use error::Error;
pub use model::{Payment, PaymentId, PaymentItem, User, YearMonth};
pub use query::{MonthlySummary, PaymentQueryService};
pub use runner::{load_payments, run, run_async};
pub use source::PaymentSource;
pub use stores::PaymentStore;
