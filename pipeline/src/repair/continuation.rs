//! Reattaches description text that the extractor split away from its transaction row.

use crate::{dateparse::DateParser, table::CanonicalRow};

use super::RowDisposition;

/// Moves a non-date `date` value into `description` when the previous row on the same page has
/// no `date`.
///
/// Such a value is a wrapped description fragment that landed in the date column. The existing
/// `description` is overwritten. Rows are checked against the previous row as already repaired,
/// so a run of fragments is realigned as a whole.
///
/// `rows` must come from a single page.
pub fn reattach_date_column_fragments(
    rows: Vec<RowDisposition>,
    parser: &dyn DateParser,
) -> Vec<RowDisposition> {
    let mut out: Vec<RowDisposition> = Vec::with_capacity(rows.len());

    for disposition in rows {
        let previous_date_missing = out
            .last()
            .is_some_and(|previous| previous.row().is_none_or(|row| row.date.is_none()));

        let disposition = match disposition {
            RowDisposition::Valid(row)
                if previous_date_missing
                    && row.date.as_deref().is_some_and(|date| !parser.is_date(date)) =>
            {
                log::debug!("Moving {:?} from date column into description.", row.date);
                RowDisposition::Valid(CanonicalRow {
                    description: row.date,
                    date: None,
                    ..row
                })
            }
            other => other,
        };

        out.push(disposition);
    }

    out
}

/// Merges three-line wrapped descriptions into the middle row.
///
/// Wherever rows `i` and `i + 2` are lone descriptions (see
/// [CanonicalRow::is_lone_description]) around a kept row `i + 1`, the middle row's `date_time`
/// becomes `"{row i} {row i + 2} {row i + 1}"` and the outer rows are absorbed. Windows are taken
/// leftmost first and never share a row, so runs of four or more lone rows only merge once per
/// three rows.
pub fn merge_wrapped_descriptions(rows: Vec<RowDisposition>) -> Vec<RowDisposition> {
    let windows = find_merge_windows(&rows);

    let mut rows = rows;
    for window in windows {
        rows[window.start] = RowDisposition::Absorbed;
        rows[window.start + 2] = RowDisposition::Absorbed;
        let middle = std::mem::replace(&mut rows[window.start + 1], RowDisposition::Absorbed);
        rows[window.start + 1] = middle.with_date_time(window.date_time);
    }

    rows
}

struct MergeWindow {
    start: usize,
    date_time: String,
}

fn find_merge_windows(rows: &[RowDisposition]) -> Vec<MergeWindow> {
    let mut windows = Vec::new();
    let mut merged = vec![false; rows.len()];

    for start in 0..rows.len().saturating_sub(2) {
        if merged[start..start + 3].iter().any(|&m| m) {
            continue;
        }

        let (Some(above), Some(middle), Some(below)) = (
            rows[start].continuation_text(),
            rows[start + 1].row(),
            rows[start + 2].continuation_text(),
        ) else {
            continue;
        };

        let date_time = format!(
            "{above} {below} {}",
            middle.date_time.as_deref().unwrap_or_default()
        );
        log::debug!("Merging wrapped description rows {start}..={} into {date_time:?}.", start + 2);

        merged[start..start + 3].fill(true);
        windows.push(MergeWindow { start, date_time });
    }

    windows
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use crate::{
        dateparse::FlexibleDateParser,
        repair::RowDisposition::{self, *},
        table::CanonicalRow,
        testutil::{canonical_row, cell, lone_row},
    };

    use super::{merge_wrapped_descriptions, reattach_date_column_fragments};

    fn transaction(date_time: &str, description: &str) -> CanonicalRow {
        canonical_row([
            Some(date_time),
            Some("06 Mar 2025"),
            Some(description),
            Some("-50"),
            Some("450"),
            Some("POS"),
            Some("REF2"),
            None,
        ])
    }

    fn pending(text: &str) -> RowDisposition {
        PendingContinuation(lone_row(text))
    }

    #[gtest]
    fn test_reattaches_fragment_after_row_without_date() {
        let fragment = canonical_row([
            Some("2025 Mar 06 10:15:00"),
            Some("to John Doe"),
            Some("old"),
            None,
            None,
            None,
            None,
            None,
        ]);

        let out = reattach_date_column_fragments(
            vec![Valid(lone_row("2025 Mar 06")), Valid(fragment)],
            &FlexibleDateParser,
        );

        expect_that!(
            out,
            elements_are![
                eq(&Valid(lone_row("2025 Mar 06"))),
                eq(&Valid(canonical_row([
                    Some("2025 Mar 06 10:15:00"),
                    None,
                    Some("to John Doe"),
                    None,
                    None,
                    None,
                    None,
                    None,
                ]))),
            ]
        );
    }

    #[gtest]
    fn test_previous_invalidated_row_has_no_date() {
        let fragment = CanonicalRow {
            date: cell("wrapped"),
            ..Default::default()
        };

        let out = reattach_date_column_fragments(
            vec![Invalidated, Valid(fragment)],
            &FlexibleDateParser,
        );

        expect_that!(
            out,
            elements_are![
                eq(&Invalidated),
                eq(&Valid(CanonicalRow {
                    description: cell("wrapped"),
                    ..Default::default()
                })),
            ]
        );
    }

    #[gtest]
    fn test_keeps_dates_and_first_row() {
        let first = CanonicalRow {
            date: cell("not a date"),
            ..Default::default()
        };
        let dated = transaction("2025 Mar 06 10:15:00", "Withdrawal");
        let rows = vec![
            Valid(first.clone()),
            Valid(lone_row("2025 Mar 06")),
            Valid(dated.clone()),
        ];

        expect_that!(
            reattach_date_column_fragments(rows.clone(), &FlexibleDateParser),
            eq(&rows)
        );
    }

    #[gtest]
    fn test_previous_row_with_date_blocks_reattachment() {
        let rows = vec![
            Valid(transaction("2025 Mar 06 10:15:00", "Withdrawal")),
            Valid(CanonicalRow {
                date: cell("not a date"),
                ..Default::default()
            }),
        ];

        expect_that!(
            reattach_date_column_fragments(rows.clone(), &FlexibleDateParser),
            eq(&rows)
        );
    }

    #[gtest]
    fn test_merges_three_line_description() {
        let rows = vec![
            Valid(transaction("2025 Mar 05 09:00:00", "Earlier")),
            pending("line1"),
            Valid(transaction("2025 Mar 06 10:15:00", "Withdrawal")),
            pending("line3"),
            Valid(transaction("2025 Mar 07 11:00:00", "Later")),
        ];

        expect_that!(
            merge_wrapped_descriptions(rows),
            elements_are![
                eq(&Valid(transaction("2025 Mar 05 09:00:00", "Earlier"))),
                eq(&Absorbed),
                eq(&Valid(transaction(
                    "line1 line3 2025 Mar 06 10:15:00",
                    "Withdrawal"
                ))),
                eq(&Absorbed),
                eq(&Valid(transaction("2025 Mar 07 11:00:00", "Later"))),
            ]
        );
    }

    #[gtest]
    fn test_middle_without_date_time_contributes_empty_text() {
        let middle = CanonicalRow {
            balance: cell("450"),
            ..Default::default()
        };
        let rows = vec![pending("a"), Valid(middle), pending("b")];

        expect_that!(
            merge_wrapped_descriptions(rows),
            elements_are![
                eq(&Absorbed),
                eq(&Valid(CanonicalRow {
                    date_time: cell("a b "),
                    balance: cell("450"),
                    ..Default::default()
                })),
                eq(&Absorbed),
            ]
        );
    }

    #[gtest]
    fn test_does_not_merge_around_invalidated_row() {
        let rows = vec![pending("a"), Invalidated, pending("b")];
        expect_that!(merge_wrapped_descriptions(rows.clone()), eq(&rows));
    }

    #[gtest]
    fn test_overlapping_lone_runs_merge_leftmost_first() {
        let rows = vec![
            pending("l0"),
            pending("l1"),
            pending("l2"),
            pending("l3"),
            pending("l4"),
        ];

        expect_that!(
            merge_wrapped_descriptions(rows),
            elements_are![
                eq(&Absorbed),
                eq(&Valid(lone_row("l0 l2 l1"))),
                eq(&Absorbed),
                eq(&pending("l3")),
                eq(&pending("l4")),
            ]
        );
    }

    #[gtest]
    fn test_six_lone_rows_merge_twice() {
        let rows = (0..6).map(|i| pending(&format!("l{i}"))).collect();

        expect_that!(
            merge_wrapped_descriptions(rows),
            elements_are![
                eq(&Absorbed),
                eq(&Valid(lone_row("l0 l2 l1"))),
                eq(&Absorbed),
                eq(&Absorbed),
                eq(&Valid(lone_row("l3 l5 l4"))),
                eq(&Absorbed),
            ]
        );
    }

    #[gtest]
    fn test_short_sequences_pass_through() {
        expect_that!(merge_wrapped_descriptions(vec![]), is_empty());
        let rows = vec![pending("a"), pending("b")];
        expect_that!(merge_wrapped_descriptions(rows.clone()), eq(&rows));
    }
}
