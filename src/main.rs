//! month_grid - print a month as a fixed-width calendar grid

mod cli;
mod logging;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use month_grid::{CalendarDate, render};
use tracing::info;

use crate::cli::{Cli, MonthView, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(cli: &Cli) -> Result<()> {
    let date = CalendarDate::parse_args(&cli.year, &cli.month)?;
    let grid = date.grid();
    info!(%date, rows = grid.row_count(), "rendering calendar");

    let output = match cli.format {
        OutputFormat::Text => render(&grid),
        OutputFormat::Json => {
            let mut json = serde_json::to_string(&MonthView::new(date, &grid))
                .context("failed to serialize calendar")?;
            json.push('\n');
            json
        }
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write calendar to stdout")
}
