//! Writes repaired transactions out as CSV.


use std::{io::Write, path::Path};

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;

use crate::table::TransactionSequence;

/// Writes `transactions` as CSV to `out`, with a header of the canonical column names. Missing
/// cells are written as empty fields.
pub fn write_transactions_csv<W: Write>(transactions: &TransactionSequence, out: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(out);

    csv_writer
        .write_record(transactions.schema())
        .with_context(|| "writing header")?;
    for row in transactions.iter() {
        csv_writer
            .write_record(row.cells().map(|cell| cell.as_deref().unwrap_or("")))
            .with_context(|| "writing record")?;
    }

    // Check for error rather than implicitly flushing and ignoring.
    csv_writer.flush().with_context(|| "flushing to CSV")?;
    Ok(())
}

/// Saves `transactions` as a CSV file at `path`, replacing any existing file. Nothing is written
/// when there are no transactions.
pub fn save_transactions_csv(transactions: &TransactionSequence, path: &Path) -> Result<()> {
    if transactions.is_empty() {
        log::warn!("No data found to write to CSV.");
        return Ok(());
    }

    let mut csv_file = AtomicWriteFile::open(path)
        .with_context(|| format!("opening {:?} for writing", path))?;
    write_transactions_csv(transactions, &mut csv_file)?;
    csv_file
        .commit()
        .with_context(|| format!("committing CSV file {:?}", path))?;

    log::info!(
        "Wrote {} transaction(s) to {:?}.",
        transactions.len(),
        path
    );
    Ok(())
}
