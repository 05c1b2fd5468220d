use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use pipeline::{
    ExtractionConfig, dateparse::FlexibleDateParser, extract::extract_transactions,
    output_csv::save_transactions_csv,
    tabula_wrapper::singlethreaded::SingleThreadedTabulaExtractor,
};

/// Extracts the transaction table from a bank statement PDF, repairs its rows, and writes them
/// as a CSV file.
#[derive(Args, Debug)]
pub struct Command {
    /// Path to input PDF.
    input_pdf: PathBuf,

    /// Path to the CSV file to write. Defaults to `<PDF stem>_transactions.csv` alongside the
    /// input PDF.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Password to open the PDF with.
    #[arg(long)]
    password: Option<String>,

    /// Path to a YAML file configuring extraction and repair.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to Tabula JAR file.
    #[arg(long)]
    tabula_libpath: String,
}

/// Runs the subcommand.
pub fn run(cmd: &Command) -> Result<()> {
    let cfg = match &cmd.config {
        Some(path) => ExtractionConfig::load(path)?,
        None => ExtractionConfig::default(),
    };

    let vm = tabula::TabulaVM::new(&cmd.tabula_libpath, false)
        .with_context(|| "initialising Tabula")?;
    let env = vm.attach().with_context(|| "attaching to TabulaVM")?;
    let extractor = SingleThreadedTabulaExtractor::new(env);

    let Some(transactions) = extract_transactions(
        &extractor,
        &cfg,
        &FlexibleDateParser,
        &cmd.input_pdf,
        cmd.password.as_deref(),
    ) else {
        log::error!("Failed to extract transactions from the PDF.");
        return Ok(());
    };

    let output = cmd
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cmd.input_pdf));
    save_transactions_csv(&transactions, &output)
}

/// Path of the CSV file written for `input_pdf` when none is given.
fn default_output_path(input_pdf: &Path) -> PathBuf {
    let stem = input_pdf.file_stem().unwrap_or_default().to_string_lossy();
    input_pdf.with_file_name(format!("{stem}_transactions.csv"))
}
