use crate::table::{CANONICAL_ARITY, CanonicalRow, Cell, Page, RawRow};

pub fn cell(s: &str) -> Cell {
    Some(s.to_string())
}

pub fn raw_row(cells: &[Option<&str>]) -> RawRow {
    cells.iter().map(|c| c.map(str::to_string)).into()
}

pub fn canonical_row(cells: [Option<&str>; CANONICAL_ARITY]) -> CanonicalRow {
    CanonicalRow::from_cells(cells.map(|c| c.map(str::to_string)))
}

/// Row with only `date_time` set.
pub fn lone_row(text: &str) -> CanonicalRow {
    CanonicalRow {
        date_time: cell(text),
        ..Default::default()
    }
}

pub fn page(number: i32, rows: &[&[Option<&str>]]) -> Page {
    Page::new(number, rows.iter().map(|r| raw_row(r)).collect())
}
