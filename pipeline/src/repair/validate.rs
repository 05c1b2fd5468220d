//! Drops header, footer and other noise rows.

use crate::{dateparse::DateParser, table::CanonicalRow};

use super::{
    DATE_LEN, DATE_TIME_LEN, RowDisposition,
    internal::leading_chars,
};

/// `date_time` value that is let through even though it is not a date.
pub const DATE_TIME_SENTINEL: &str = "00";

/// True if `text` starts with a date, or with a date and time of day.
pub fn includes_valid_date(text: &str, parser: &dyn DateParser) -> bool {
    parser.is_date(leading_chars(text, DATE_LEN).trim())
        || parser.is_date(leading_chars(text, DATE_TIME_LEN).trim())
}

/// Invalidates the row unless its `date_time` starts with a date.
///
/// Rows with a missing `date_time`, or the [DATE_TIME_SENTINEL], are kept as they are likely
/// continuations of a neighbouring row.
pub fn validate(row: CanonicalRow, parser: &dyn DateParser) -> RowDisposition {
    let keep = match row.date_time.as_deref() {
        None => true,
        Some(text) => text == DATE_TIME_SENTINEL || includes_valid_date(text, parser),
    };

    if keep {
        RowDisposition::Valid(row)
    } else {
        log::debug!("Invalidating row with leading cell {:?}.", row.date_time);
        RowDisposition::Invalidated
    }
}
