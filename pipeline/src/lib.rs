pub mod config;
pub mod dateparse;
pub mod extract;
pub mod output_csv;
pub mod repair;
pub mod table;
pub mod tabula_wrapper;
#[cfg(test)]
mod testutil;

pub use config::ExtractionConfig;
pub use table::{CanonicalRow, TransactionSequence};
