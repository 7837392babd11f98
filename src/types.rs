use crate::CalendarError;
use crate::consts::{DAYS_PER_WEEK, MAX_MONTH, MAX_YEAR, MIN_YEAR};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it lies in `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if the value is below 1 or above `MAX_YEAR`.
    pub fn new(value: i64) -> Result<Self, CalendarError> {
        if !(i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&value) {
            return Err(CalendarError::InvalidYear(value));
        }
        u16::try_from(value)
            .ok()
            .and_then(NonZeroU16::new)
            .map(Self)
            .ok_or(CalendarError::InvalidYear(value))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = CalendarError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's in `1..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the value is outside 1..=12.
    pub fn new(value: i64) -> Result<Self, CalendarError> {
        if !(1..=i64::from(MAX_MONTH)).contains(&value) {
            return Err(CalendarError::InvalidMonth(value));
        }
        u8::try_from(value)
            .ok()
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(CalendarError::InvalidMonth(value))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week, Sunday first.
///
/// The ordinal doubles as the column index of a calendar row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All weekdays in column order
    pub const ALL: [Self; DAYS_PER_WEEK] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Sunday = 0 through Saturday = 6
    #[inline]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Maps any integer onto a weekday, wrapping modulo 7.
    pub const fn from_ordinal(ordinal: i64) -> Self {
        // rem_euclid keeps negative inputs in 0..7
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = ordinal.rem_euclid(DAYS_PER_WEEK as i64) as usize;
        Self::ALL[index]
    }

    /// Three-letter English abbreviation used in the header row
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Sunday => "Sun",
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl Serialize for Weekday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.abbreviation())
    }
}
