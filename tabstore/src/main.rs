use std::{io, process};

use anyhow::Result;
use clap::Parser;
use tabstore::{
    config::{Cli, Config, Mode},
    logging,
    report::StatsReport,
    session::Session,
    source,
    stats::{StatsError, Summary},
};
use tracing::info;

fn main() -> Result<()> {
    let config = Config::from(Cli::parse());
    logging::init(&config.log_filter)?;

    match config.mode {
        Mode::Employees => run_employees(&config),
        Mode::Stats => run_stats(&config),
    }
}

fn run_employees(config: &Config) -> Result<()> {
    let (store, report) = source::load_employees(source::open(&config.input)?, config.load_policy)?;
    info!(
        loaded = report.loaded,
        skipped = report.skipped,
        dropped = report.dropped,
        "starting session"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(store, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}

fn run_stats(config: &Config) -> Result<()> {
    let dataset = source::read_samples(source::open(&config.input)?)?;
    let summary = match Summary::compute(&dataset) {
        Ok(summary) => summary,
        Err(StatsError::EmptyDataset) => {
            println!("No data in the input file.");
            process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };
    print!("{}", StatsReport(&summary));
    Ok(())
}
