//! Extracts repaired transactions from a statement PDF.


use std::path::Path;

use anyhow::{Context, Result};

use crate::{
    config::ExtractionConfig,
    dateparse::DateParser,
    table::{Page, TransactionSequence},
    tabula_wrapper::TabulaExtractor,
};

/// Failures of extraction that are not reported by Tabula itself.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ExtractionError {
    #[error("no tables found in the PDF")]
    NoTablesFound,
}

/// Extracts the raw tables of the PDF at `pdf_path`, one [Page] per table.
pub fn extract_pages(
    extractor: &dyn TabulaExtractor,
    cfg: &ExtractionConfig,
    pdf_path: &Path,
    password: Option<&str>,
) -> Result<Vec<Page>> {
    let table_set = extractor
        .extract_tables(cfg.tabula_request(pdf_path, password))
        .with_context(|| format!("extracting tables from {:?}", pdf_path))?;

    let pages = table_set.into_pages();
    if pages.is_empty() {
        return Err(ExtractionError::NoTablesFound)
            .with_context(|| format!("extracting tables from {:?}", pdf_path));
    }
    log::info!("Extracted {} table(s) from {:?}.", pages.len(), pdf_path);

    Ok(pages)
}

/// Extracts and repairs the transactions in the PDF at `pdf_path`.
///
/// Any failure to extract tables is logged and gives `None`. Problems with individual rows never
/// fail the extraction.
pub fn extract_transactions(
    extractor: &dyn TabulaExtractor,
    cfg: &ExtractionConfig,
    parser: &dyn DateParser,
    pdf_path: &Path,
    password: Option<&str>,
) -> Option<TransactionSequence> {
    match extract_pages(extractor, cfg, pdf_path, password) {
        Ok(pages) => Some(cfg.repair.apply(pages, parser)),
        Err(err) => {
            log::error!("Error processing PDF: {err:#}");
            None
        }
    }
}
