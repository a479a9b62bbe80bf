use std::error::Error;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::{
    clock::SystemClock,
    csv_utils::{read_csv, write_csv},
    dto::{MonthlySummaryRow, PaymentRow},
    PaymentQueryService, PaymentStore,
};

/// Loads every payment from a CSV file of line-item rows.
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read
/// * The CSV is malformed
/// * Two rows of the same payment disagree on its date or user
pub fn load_payments<P>(input_path: P) -> Result<PaymentStore, Box<dyn Error>>
where
    P: AsRef<Path>,
{
    let mut store = PaymentStore::new();
    for row in read_csv::<PaymentRow, _>(input_path)? {
        store.insert_row(row?)?;
    }
    info!(payments = store.len(), "loaded payments");
    Ok(store)
}

/// Loads payments from the given input file and writes a per-month summary to the provided writer.
///
/// # Arguments
/// * `input_path` - Path to the input CSV file containing payment line items
/// * `writer` - Where to write the monthly summaries (e.g. stdout)
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read
/// * The CSV is malformed or inconsistent
/// * Writing to the output fails
pub fn run<P, W>(input_path: P, writer: W) -> Result<(), Box<dyn Error>>
where
    P: AsRef<Path>,
    W: Write,
{
    let store = load_payments(input_path)?;
    let service = PaymentQueryService::new(&store, SystemClock);

    let summaries = match service.monthly_summaries() {
        Ok(summaries) => summaries,
        Err(never) => match never {},
    };
    info!(months = summaries.len(), "writing monthly report");

    write_csv(writer, summaries.into_iter().map(MonthlySummaryRow::from))?;
    Ok(())
}
