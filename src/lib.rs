mod arithmetic;
mod consts;
mod format;
mod grid;
mod prelude;
mod types;

pub use arithmetic::{days_in_month, is_leap_year, weekday_of_first};
pub use consts::*;
pub use format::{render, write_calendar};
pub use grid::{CalendarGrid, Row};
pub use types::{Month, Weekday, Year};

use crate::prelude::*;
use serde::Serialize;
use tracing::debug;

/// A validated (year, month) pair in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[display(fmt = "{:04}-{:02}", "year.get()", "month.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
}

/// Error type for calendar construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Month outside 1..=12.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(i64),

    /// Year outside the supported proleptic range.
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i64),

    /// An argument that is not a decimal integer.
    #[error("Invalid {field}: {value:?} is not a decimal integer")]
    InvalidNumber { field: &'static str, value: String },
}

impl CalendarDate {
    /// Validates raw integers into a date.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` or `CalendarError::InvalidMonth`
    /// for out-of-range components; the year is checked first.
    pub fn new(year: i64, month: i64) -> Result<Self, CalendarError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
        })
    }

    /// Parses two decimal arguments, as given on a command line.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidNumber` naming the first argument that
    /// is not an integer, otherwise the errors of [`CalendarDate::new`].
    pub fn parse_args(year: &str, month: &str) -> Result<Self, CalendarError> {
        let year = Self::parse_number("year", year)?;
        let month = Self::parse_number("month", month)?;
        Self::new(year, month)
    }

    fn parse_number(field: &'static str, s: &str) -> Result<i64, CalendarError> {
        s.trim()
            .parse::<i64>()
            .map_err(|_| CalendarError::InvalidNumber {
                field,
                value: s.to_owned(),
            })
    }

    /// The validated year
    pub const fn year(&self) -> Year {
        self.year
    }

    /// The validated month
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Length of this month in days
    pub const fn days_in_month(&self) -> u8 {
        arithmetic::month_length(self.year.get(), self.month)
    }

    /// Weekday of the 1st of this month
    pub fn weekday_of_first(&self) -> Weekday {
        arithmetic::first_weekday(i64::from(self.year.get()), self.month)
    }

    /// Lays the month out into Sunday-first weeks.
    pub fn grid(&self) -> CalendarGrid {
        let first = self.weekday_of_first();
        let days = self.days_in_month();
        debug!(date = %self, %first, days, "laying out month");
        CalendarGrid::layout(first, days)
    }
}

impl TryFrom<(i64, i64)> for CalendarDate {
    type Error = CalendarError;

    fn try_from(value: (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1)
    }
}

/// Renders the calendar of `month` in `year` as header plus week lines.
///
/// # Errors
/// Returns `CalendarError` if the year or month is out of range.
pub fn render_month(year: i64, month: i64) -> Result<String, CalendarError> {
    let date = CalendarDate::new(year, month)?;
    Ok(render(&date.grid()))
}
