use clap::{Parser, ValueEnum};
use month_grid::{CalendarDate, CalendarGrid, Weekday};
use serde::Serialize;

/// Print a month of the proleptic Gregorian calendar as a Sunday-first grid.
#[derive(Parser)]
#[command(name = "month_grid", version, about, allow_negative_numbers = true)]
pub struct Cli {
    /// Year, 1-9999.
    pub year: String,

    /// Month, 1-12.
    pub month: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// JSON shape of a rendered month.
#[derive(Debug, Serialize)]
pub struct MonthView<'a> {
    #[serde(flatten)]
    pub date: CalendarDate,
    pub first_weekday: Weekday,
    pub days_in_month: u8,
    pub rows: &'a CalendarGrid,
}

impl<'a> MonthView<'a> {
    pub fn new(date: CalendarDate, grid: &'a CalendarGrid) -> Self {
        Self {
            date,
            first_weekday: date.weekday_of_first(),
            days_in_month: date.days_in_month(),
            rows: grid,
        }
    }
}
