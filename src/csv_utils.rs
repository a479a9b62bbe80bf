//! CSV plumbing shared by the runners.
//!
//! Input files hold one [`PaymentRow`](crate::PaymentRow) per line item, with a
//! header line and whitespace around fields ignored. Reports are written as
//! [`MonthlySummaryRow`](crate::MonthlySummaryRow) records.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Reader settings every payment CSV is parsed with.
fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).trim(csv::Trim::All);
    builder
}

/// Opens a CSV file and deserializes each record into `T`.
pub fn read_csv<T, P>(path: P) -> csv::Result<impl Iterator<Item = csv::Result<T>>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    Ok(read_csv_from(file))
}

/// Same as [`read_csv`], over any reader rather than a file.
pub fn read_csv_from<T, R>(reader: R) -> impl Iterator<Item = csv::Result<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    reader_builder().from_reader(reader).into_deserialize()
}

/// Writes the records, header first, and flushes the writer.
pub fn write_csv<T, W>(writer: W, records: impl Iterator<Item = T>) -> csv::Result<()>
where
    T: Serialize,
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
