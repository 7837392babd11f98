//! Proleptic Gregorian date arithmetic.
//!
//! Everything here is a closed-form integer computation; no calendar
//! library or global state is consulted.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_ERA, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MIN_DAY, UNIX_EPOCH_OFFSET, UNIX_EPOCH_WEEKDAY,
};
use crate::types::{Month, Weekday, Year};
use crate::CalendarError;

/// Whether `year` has 366 days under the Gregorian rule.
pub const fn is_leap_year(year: u16) -> bool {
    year % LEAP_YEAR_CYCLE == 0 && (year % CENTURY_CYCLE != 0 || year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`.
///
/// # Errors
/// Returns `CalendarError::InvalidYear` if `year` is outside 1..=9999, or
/// `CalendarError::InvalidMonth` if `month` is outside 1..=12.
pub fn days_in_month(year: u16, month: u8) -> Result<u8, CalendarError> {
    let year = Year::try_from(year)?;
    let month = Month::try_from(month)?;
    Ok(month_length(year.get(), month))
}

/// Weekday on which the 1st of `month` in `year` falls.
///
/// # Errors
/// Returns `CalendarError::InvalidYear` if `year` is outside 1..=9999, or
/// `CalendarError::InvalidMonth` if `month` is outside 1..=12.
pub fn weekday_of_first(year: u16, month: u8) -> Result<Weekday, CalendarError> {
    let year = Year::try_from(year)?;
    let month = Month::try_from(month)?;
    Ok(first_weekday(i64::from(year.get()), month))
}

pub(crate) const fn month_length(year: u16, month: Month) -> u8 {
    let month = month.get();
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub(crate) fn first_weekday(year: i64, month: Month) -> Weekday {
    let days = days_from_unix_epoch(year, month.get(), MIN_DAY);
    Weekday::from_ordinal(days + UNIX_EPOCH_WEEKDAY)
}

/// Days from 1970-01-01 to the given civil date; negative before the epoch.
///
/// Counts in 400-year eras of a March-based year so that the leap day
/// falls at the end of the counted year.
fn days_from_unix_epoch(year: i64, month: u8, day: u8) -> i64 {
    let month = i64::from(month);
    let day = i64::from(day);

    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(i64::from(GREGORIAN_CYCLE));
    let year_of_era = year.rem_euclid(i64::from(GREGORIAN_CYCLE));
    let month_from_march = (month + 9) % 12;
    let day_of_year = (153 * month_from_march + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

    era * DAYS_PER_ERA + day_of_era - UNIX_EPOCH_OFFSET
}

impl Year {
    /// Whether this year has 366 days
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}
