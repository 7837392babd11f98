use serde::Serialize;
use tracing::trace;

use crate::{
    consts::{DAYS_PER_WEEK, MIN_DAY},
    types::Weekday,
};

/// One week of the calendar, Sunday through Saturday.
/// `None` marks a blank cell before the 1st or after the last day.
pub type Row = [Option<u8>; DAYS_PER_WEEK];

/// Days of a single month laid out into Sunday-first weeks.
///
/// Exactly `days_in_month` cells are filled, in ascending order starting at
/// the column of the weekday of the 1st. The grid never ends with an
/// all-blank row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CalendarGrid {
    rows: Vec<Row>,
}

impl CalendarGrid {
    /// Lays out `days` day numbers, the first of which falls on `first`.
    pub fn layout(first: Weekday, days: u8) -> Self {
        let mut builder = RowBuilder::new(first.ordinal());
        for day in MIN_DAY..=days {
            builder.push(day);
        }
        builder.finish()
    }

    /// The rows, top to bottom
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of weeks the month spans
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Every filled cell as `(row, column, day)`, scanning rows top to bottom
    /// and columns left to right.
    pub fn days(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, cell)| cell.map(|day| (r, c, day)))
        })
    }

    /// Number of filled cells
    pub fn day_count(&self) -> usize {
        self.days().count()
    }

    /// Column of the 1st, or `None` for an empty grid.
    pub fn first_column(&self) -> Option<usize> {
        self.days().next().map(|(_, column, _)| column)
    }
}

/// Accumulates cells for the row in progress and flushes completed rows.
struct RowBuilder {
    rows: Vec<Row>,
    current: Row,
    column: usize,
}

impl RowBuilder {
    const fn new(column: usize) -> Self {
        Self {
            rows: Vec::new(),
            current: [None; DAYS_PER_WEEK],
            column,
        }
    }

    fn push(&mut self, day: u8) {
        self.current[self.column] = Some(day);
        self.column = (self.column + 1) % DAYS_PER_WEEK;
        if self.column == 0 {
            self.flush();
        }
    }

    fn flush(&mut self) {
        trace!(row = self.rows.len(), cells = ?self.current, "flushing calendar row");
        self.rows.push(std::mem::replace(&mut self.current, [None; DAYS_PER_WEEK]));
    }

    /// Emits the partial last row, if any cell of it was written.
    fn finish(mut self) -> CalendarGrid {
        if self.current.iter().any(Option::is_some) {
            self.flush();
        }
        CalendarGrid { rows: self.rows }
    }
}
