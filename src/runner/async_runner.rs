use std::error::Error;
use std::io::Write;
use std::path::Path;

use crate::{
    clock::SystemClock,
    csv_utils::write_csv,
    dto::{MonthlySummaryRow, PaymentRow},
    PaymentQueryService, PaymentStore,
};

use csv_async::{AsyncReaderBuilder, Error as CsvError, Trim};
use tokio::fs::File;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;
use tracing::{debug, info};

const BUFFER_SIZE: usize = 1024;

type Result<T, E = Box<dyn Error + Send + Sync>> = std::result::Result<T, E>;

/// Loads payments async from the given input file and writes a per-month summary to the provided writer.
/// Spawns two tasks:
/// * CSV reader - streams payment rows from the input file, deserializes them and sends them to the collector via channel.
/// * Collector - receives rows from the channel and assembles them into a store until the channel is closed.
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
pub async fn run<P, W>(input_path: P, writer: W) -> Result<()>
where
    P: AsRef<Path>,
    W: Write,
{
    // Create channel for passing rows from reader to collector
    let (tx, rx) = mpsc::channel(BUFFER_SIZE);
    let input_path = input_path.as_ref().to_owned();

    let reader_handle = tokio::spawn(read_rows(input_path, tx));
    let collector_handle = tokio::spawn(collect_payments(rx));

    // A rejected row drops the receiver, so the reader may stop early; report
    // the collector's error first as it names the offending payment.
    let store = collector_handle.await??;
    reader_handle.await??;
    info!(payments = store.len(), "loaded payments");

    let service = PaymentQueryService::new(&store, SystemClock);
    let summaries = match service.monthly_summaries() {
        Ok(summaries) => summaries,
        Err(never) => match never {},
    };

    write_csv(writer, summaries.into_iter().map(MonthlySummaryRow::from))?;
    Ok(())
}

/// Reads and deserializes payment rows from a CSV file.
/// Returns them through the provided channel.
async fn read_rows(
    input_path: impl AsRef<Path> + Send,
    tx: mpsc::Sender<PaymentRow>,
) -> Result<(), CsvError> {
    let file = File::open(input_path).await?;
    let mut csv_reader = AsyncReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .create_deserializer(file);

    let mut records = csv_reader.deserialize::<PaymentRow>();
    while let Some(result) = records.next().await {
        match result {
            Ok(row) => {
                if tx.send(row).await.is_err() {
                    debug!("collector stopped, ending read");
                    break;
                }
            }
            // CSV parsing errors are critical - propagate them
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Assembles payments from rows received through the channel.
/// Returns the store once the channel is closed by the reader.
async fn collect_payments(mut rx: mpsc::Receiver<PaymentRow>) -> Result<PaymentStore, crate::Error> {
    let mut store = PaymentStore::new();
    while let Some(row) = rx.recv().await {
        store.insert_row(row)?;
    }
    Ok(store)
}
