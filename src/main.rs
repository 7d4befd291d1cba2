mod logging;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use ical_fixtures_core::FixtureError;
use ical_fixtures_core::ics::generate_ics;
use ical_fixtures_core::output::{validate_output_path, write_calendar};
use ical_fixtures_core::{FixtureConfig, RunClock, build_calendar, sample_events};
use tracing::info;

#[derive(Parser)]
#[command(name = "make-ical-calendar")]
#[command(version)]
#[command(about = "Write an .ics calendar filled with today's sample events")]
struct Cli {
    /// Where to write the .ics file (its folder must exist)
    #[arg(value_name = "OUTPUT_FILE")]
    paths: Vec<PathBuf>,
}

fn main() -> Result<()> {
    logging::init()?;

    let cli = parse_cli()?;
    let output_path = validate_output_path(&cli.paths)?;
    let config = FixtureConfig::load()?;

    run(output_path, &config)
}

/// Parse arguments, reporting any usage error as a wrong argument list.
/// `--help` and `--version` still print and exit normally.
fn parse_cli() -> Result<Cli> {
    match Cli::try_parse() {
        Ok(cli) => Ok(cli),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => Err(FixtureError::InvalidArguments.into()),
    }
}

fn run(output_path: &Path, config: &FixtureConfig) -> Result<()> {
    let clock = RunClock::capture();
    let descriptors = sample_events(config.include_descriptions);
    let calendar = build_calendar(&descriptors, &clock)?;

    write_calendar(output_path, &generate_ics(&calendar))?;

    info!(
        path = %output_path.display(),
        events = calendar.events.len(),
        "wrote calendar"
    );

    Ok(())
}
