//! Repairs the column misalignments left by extracting statement tables from a PDF.
//!
//! Each page is normalized, has merged date cells split, noise rows invalidated, and date column
//! fragments reattached. Pages are then concatenated in order so that descriptions wrapped over
//! three rows can be merged, including across page boundaries.

pub mod continuation;
pub mod datesplit;
mod internal;
pub mod normalize;
pub mod validate;

use serde::Deserialize;

use crate::{
    dateparse::DateParser,
    table::{CanonicalRow, Page, TransactionSequence},
};

/// Sample of a date and time immediately followed by a date, as extracted into a single cell.
const SAMPLE_MERGED_DATE_TIME: &str = "2025 Mar 05 20:27:5905 Mar 2025";
/// Sample of a date as printed in the date column.
const SAMPLE_DATE: &str = "25 Jan 2025";

/// Minimum length of a cell that may hold a merged date and time plus date.
pub const MERGED_DATE_TIME_LEN: usize = SAMPLE_MERGED_DATE_TIME.len();
/// Length of a date in the date column.
pub const DATE_LEN: usize = SAMPLE_DATE.len();
/// Length of a date with time of day in the `date_time` column.
pub const DATE_TIME_LEN: usize = MERGED_DATE_TIME_LEN - DATE_LEN;

/// What the repair stages decided about a single row.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RowDisposition {
    /// Row to keep.
    Valid(CanonicalRow),
    /// Lone description row, which may yet be merged into a neighbour.
    PendingContinuation(CanonicalRow),
    /// Noise row, to be dropped.
    Invalidated,
    /// Row merged into a neighbour, to be dropped.
    Absorbed,
}

impl RowDisposition {
    /// The row, if it is to be kept.
    pub fn row(&self) -> Option<&CanonicalRow> {
        use RowDisposition::*;
        match self {
            Valid(row) | PendingContinuation(row) => Some(row),
            Invalidated | Absorbed => None,
        }
    }

    pub fn into_row(self) -> Option<CanonicalRow> {
        use RowDisposition::*;
        match self {
            Valid(row) | PendingContinuation(row) => Some(row),
            Invalidated | Absorbed => None,
        }
    }

    /// Marks a kept lone description row as a [RowDisposition::PendingContinuation].
    pub fn tag_continuation(self) -> Self {
        match self {
            RowDisposition::Valid(row) if row.is_lone_description() => {
                RowDisposition::PendingContinuation(row)
            }
            other => other,
        }
    }

    /// Text of a [RowDisposition::PendingContinuation].
    fn continuation_text(&self) -> Option<&str> {
        match self {
            RowDisposition::PendingContinuation(row) => row.date_time.as_deref(),
            _ => None,
        }
    }

    /// Replaces `date_time` of a kept row, which is then no longer pending.
    fn with_date_time(self, date_time: String) -> Self {
        match self.into_row() {
            Some(row) => RowDisposition::Valid(CanonicalRow {
                date_time: Some(date_time),
                ..row
            }),
            None => RowDisposition::Absorbed,
        }
    }
}

/// How much of the repair pipeline to run over extracted pages.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RepairMode {
    /// Run every repair stage.
    #[default]
    Full,
    /// Only fit rows to the canonical schema and drop blank rows.
    Raw,
}

impl RepairMode {
    pub fn apply(self, pages: Vec<Page>, parser: &dyn DateParser) -> TransactionSequence {
        match self {
            RepairMode::Full => repair_pages(pages, parser),
            RepairMode::Raw => passthrough_pages(pages),
        }
    }
}

/// Repairs `pages` into a single ordered sequence of transactions.
pub fn repair_pages(mut pages: Vec<Page>, parser: &dyn DateParser) -> TransactionSequence {
    // Stable, so multiple tables from one page keep their relative order.
    pages.sort_by_key(|page| page.number);

    let concatenated: Vec<RowDisposition> = pages
        .into_iter()
        .flat_map(|page| repair_page(page, parser))
        .collect();

    let rows: Vec<CanonicalRow> = continuation::merge_wrapped_descriptions(concatenated)
        .into_iter()
        .filter_map(RowDisposition::into_row)
        .collect();
    log::info!("Repaired {} transaction row(s).", rows.len());

    TransactionSequence::new(rows)
}

/// Runs the stages that only ever look within a single page.
fn repair_page(page: Page, parser: &dyn DateParser) -> Vec<RowDisposition> {
    log::debug!("Repairing {} row(s) from page {}.", page.rows.len(), page.number);

    let validated: Vec<RowDisposition> = page
        .rows
        .into_iter()
        .map(normalize::normalize)
        .map(|row| datesplit::split_merged_date(row, parser))
        .map(|row| validate::validate(row, parser))
        .collect();

    continuation::reattach_date_column_fragments(validated, parser)
        .into_iter()
        .map(RowDisposition::tag_continuation)
        .collect()
}

/// Concatenates `pages` with no repairs beyond fitting rows to the canonical schema and dropping
/// rows with no values.
pub fn passthrough_pages(mut pages: Vec<Page>) -> TransactionSequence {
    pages.sort_by_key(|page| page.number);

    TransactionSequence::new(
        pages
            .into_iter()
            .flat_map(|page| page.rows)
            .map(normalize::normalize)
            .filter(|row| !row.is_blank())
            .collect(),
    )
}
