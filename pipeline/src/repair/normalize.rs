//! Fits raw rows of any width onto the canonical schema.

use crate::table::{CANONICAL_ARITY, CanonicalRow, RawRow};

/// Maps the cells of `row` positionally onto a [CanonicalRow].
///
/// Short rows are padded with missing cells. Cells beyond [CANONICAL_ARITY] are dropped, on the
/// assumption that extra columns are extraction noise.
pub fn normalize(row: RawRow) -> CanonicalRow {
    if row.len() > CANONICAL_ARITY {
        log::debug!(
            "Discarding {} trailing cell(s) from row of width {}.",
            row.len() - CANONICAL_ARITY,
            row.len()
        );
    }

    let mut cells = row.0.into_iter();
    CanonicalRow::from_cells(std::array::from_fn(|_| cells.next().flatten()))
}
