//! Row and table types flowing through the repair stages.


use std::ops::{Deref, DerefMut};

use strum::IntoEnumIterator;

/// A single extracted cell. `None` marks a missing value, which is distinct from `Some("")`.
pub type Cell = Option<String>;

/// Number of fields in a [CanonicalRow].
pub const CANONICAL_ARITY: usize = 8;

/// Variable width row of cells, as extracted from a single page.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RawRow(pub Vec<Cell>);

impl Deref for RawRow {
    type Target = Vec<Cell>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for RawRow {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<C> From<C> for RawRow
where
    C: IntoIterator<Item = Cell>,
{
    fn from(value: C) -> Self {
        RawRow(value.into_iter().collect())
    }
}

/// Raw rows of a single extracted table, tagged with the page they came from.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Page {
    pub number: i32,
    pub rows: Vec<RawRow>,
}

impl Page {
    pub fn new(number: i32, rows: Vec<RawRow>) -> Self {
        Self { number, rows }
    }
}

/// Names of the fields of a [CanonicalRow], in column order.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, strum_macros::EnumIter, strum_macros::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum CanonicalField {
    DateTime,
    Date,
    Description,
    DebitCredit,
    Balance,
    Channel,
    Reference,
    Extras,
}

impl CanonicalField {
    /// Column name used in output headers.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// All field names in column order.
    pub fn names() -> Vec<&'static str> {
        Self::iter().map(Self::name).collect()
    }
}

/// Transaction row with exactly [CANONICAL_ARITY] positional fields.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CanonicalRow {
    pub date_time: Cell,
    pub date: Cell,
    pub description: Cell,
    pub debit_credit: Cell,
    pub balance: Cell,
    pub channel: Cell,
    pub reference: Cell,
    pub extras: Cell,
}

impl CanonicalRow {
    pub fn from_cells(cells: [Cell; CANONICAL_ARITY]) -> Self {
        let [
            date_time,
            date,
            description,
            debit_credit,
            balance,
            channel,
            reference,
            extras,
        ] = cells;
        Self {
            date_time,
            date,
            description,
            debit_credit,
            balance,
            channel,
            reference,
            extras,
        }
    }

    pub fn into_cells(self) -> [Cell; CANONICAL_ARITY] {
        [
            self.date_time,
            self.date,
            self.description,
            self.debit_credit,
            self.balance,
            self.channel,
            self.reference,
            self.extras,
        ]
    }

    pub fn cells(&self) -> [&Cell; CANONICAL_ARITY] {
        [
            &self.date_time,
            &self.date,
            &self.description,
            &self.debit_credit,
            &self.balance,
            &self.channel,
            &self.reference,
            &self.extras,
        ]
    }

    /// True when only `date_time` is present, i.e. a wrapped description fragment that was
    /// extracted as its own row.
    pub fn is_lone_description(&self) -> bool {
        let [date_time, rest @ ..] = self.cells();
        date_time.is_some() && rest.iter().all(|cell| cell.is_none())
    }

    /// True when every field is missing or empty.
    pub fn is_blank(&self) -> bool {
        self.cells()
            .iter()
            .all(|cell| cell.as_deref().is_none_or(str::is_empty))
    }
}

/// Final, ordered sequence of repaired transaction rows.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TransactionSequence {
    pub rows: Vec<CanonicalRow>,
}

impl TransactionSequence {
    pub fn new(rows: Vec<CanonicalRow>) -> Self {
        Self { rows }
    }

    /// Column names for the rows, in order.
    pub fn schema(&self) -> Vec<&'static str> {
        CanonicalField::names()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CanonicalRow> {
        self.rows.iter()
    }
}
