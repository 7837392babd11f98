//! Fixed-width text rendering of a [`CalendarGrid`].
//!
//! Every cell, header included, is right-justified in a field of
//! `CELL_WIDTH` characters and each line ends with a single `\n`.

use std::fmt;

use crate::{consts::CELL_WIDTH, grid::CalendarGrid, types::Weekday};

/// Renders the weekday header followed by one line per grid row.
pub fn render(grid: &CalendarGrid) -> String {
    grid.to_string()
}

/// Writes the header and rows of `grid` into `out`.
///
/// # Errors
/// Only propagates errors raised by the underlying writer.
pub fn write_calendar<W: fmt::Write>(out: &mut W, grid: &CalendarGrid) -> fmt::Result {
    write_header(out)?;
    for row in grid.rows() {
        for cell in row {
            match cell {
                Some(day) => write!(out, "{day:>CELL_WIDTH$}")?,
                None => write!(out, "{:CELL_WIDTH$}", "")?,
            }
        }
        out.write_char('\n')?;
    }
    Ok(())
}

fn write_header<W: fmt::Write>(out: &mut W) -> fmt::Result {
    for day in Weekday::ALL {
        write!(out, "{:>CELL_WIDTH$}", day.abbreviation())?;
    }
    out.write_char('\n')
}

impl fmt::Display for CalendarGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_calendar(f, self)
    }
}
