//! Repairs a date-time and a date that were extracted into a single cell.

use crate::{dateparse::DateParser, table::CanonicalRow};

use super::{
    DATE_LEN, MERGED_DATE_TIME_LEN,
    internal::{char_len, split_trailing_chars},
};

/// Splits a merged `date_time` cell when it is too long to be a single date and does not parse
/// as one.
///
/// The trailing [DATE_LEN] characters become `date`. The cells from `description` up to
/// `channel` are shifted one place right, so the original `date` and `reference` values are
/// lost while `description` is left as it was.
// TODO: compare the dropped `reference` values against statements with a populated reference
// column before relying on that column downstream.
pub fn split_merged_date(row: CanonicalRow, parser: &dyn DateParser) -> CanonicalRow {
    let Some(merged) = row.date_time.as_deref() else {
        return row;
    };
    if char_len(merged) < MERGED_DATE_TIME_LEN || parser.is_date(merged) {
        return row;
    }

    let (date_time, date) = split_trailing_chars(merged, DATE_LEN);
    let (date_time, date) = (date_time.to_owned(), date.to_owned());
    log::debug!("Split merged date cell into {date_time:?} and {date:?}.");

    let CanonicalRow {
        description,
        debit_credit,
        balance,
        channel,
        extras,
        ..
    } = row;

    CanonicalRow {
        date_time: Some(date_time),
        date: Some(date),
        debit_credit: description.clone(),
        description,
        balance: debit_credit,
        channel: balance,
        reference: channel,
        extras,
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use crate::{
        dateparse::FlexibleDateParser,
        repair::{DATE_LEN, internal::char_len},
        testutil::{canonical_row, lone_row},
    };

    use super::split_merged_date;

    #[gtest]
    fn test_splits_merged_date_and_shifts_cells() {
        let row = canonical_row([
            Some("2025 Mar 05 20:27:5905 Mar 2025"),
            Some("stale"),
            Some("Deposit"),
            Some("+100"),
            Some("500"),
            Some("ATM"),
            Some("REF1"),
            Some("x"),
        ]);

        expect_that!(
            split_merged_date(row, &FlexibleDateParser),
            eq(&canonical_row([
                Some("2025 Mar 05 20:27:59"),
                Some("05 Mar 2025"),
                Some("Deposit"),
                Some("Deposit"),
                Some("+100"),
                Some("500"),
                Some("ATM"),
                Some("x"),
            ]))
        );
    }

    #[gtest]
    fn test_split_lengths() {
        let merged = "2025 Mar 05 20:27:59 05 Mar 2025 trailing";
        let split = split_merged_date(lone_row(merged), &FlexibleDateParser);

        expect_that!(
            split.date_time.as_deref().map(char_len),
            some(eq(char_len(merged) - DATE_LEN))
        );
        expect_that!(split.date.as_deref().map(char_len), some(eq(DATE_LEN)));
    }

    #[gtest]
    fn test_leaves_parseable_dates() {
        let row = lone_row("2025 Mar 05 20:27:59");
        expect_that!(split_merged_date(row.clone(), &FlexibleDateParser), eq(&row));

        // Long enough, but the parser accepts it.
        let accept_all = |_: &str| true;
        let row = lone_row("2025 Mar 05 20:27:5905 Mar 2025");
        expect_that!(split_merged_date(row.clone(), &accept_all), eq(&row));
    }

    #[gtest]
    fn test_leaves_short_cells() {
        let row = canonical_row([
            Some("Opening balance"),
            None,
            Some("desc"),
            None,
            None,
            None,
            None,
            None,
        ]);
        expect_that!(split_merged_date(row.clone(), &FlexibleDateParser), eq(&row));
    }

    #[gtest]
    fn test_leaves_missing_date_time() {
        let row = canonical_row([None, Some("05 Mar 2025"), None, None, None, None, None, None]);
        expect_that!(split_merged_date(row.clone(), &FlexibleDateParser), eq(&row));
    }
}
