// SPDX-License-Identifier: PMPL-1.0-or-later

//! astro-card: print a colorized card for an astronomical term

use anyhow::{Context, Result};
use astro_card::card::{self, CARD_WIDTH};
use astro_card::selector::{self, RandomSource};
use astro_card::{catalog, logging};
use clap::Parser;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "astro-card")]
#[command(version)]
#[command(about = "Print a colorized card for an astronomical term")]
#[command(long_about = None)]
struct Cli {
    /// Astronomical term to display (aphelion, perihelion, apogee, perigee)
    #[arg(long, default_value = "")]
    term: String,

    /// Display a random astronomical term
    #[arg(long)]
    random: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init();

    let mut rng = RandomSource::from_time();
    let key = selector::resolve(&cli.term, cli.random, &mut rng);

    let term = match catalog::lookup(&key) {
        Ok(term) => term,
        Err(err) => {
            tracing::debug!(key = %err.key, "unknown term requested");
            eprintln!("{}", err);
            return Ok(ExitCode::FAILURE);
        }
    };

    card::render(term, CARD_WIDTH).context("failed to write card to stdout")?;
    Ok(ExitCode::SUCCESS)
}
