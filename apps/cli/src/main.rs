// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `fom` - explore finite topological spaces from the command line.
//!
//! Spaces are read from JSON snapshots of the form
//! `{"elements": ["a", "b"], "open_sets": [[], ["a"], ["a", "b"]]}`.
//!
//! # Commands
//!
//! - `fom inspect <file>` - open, closed and basis sets plus separation properties
//! - `fom closure|interior|boundary <file> --subset a,b`
//! - `fom random --elements a,b,c [--rounds N] [--seed S]` - random topology as JSON
//! - `fom product <left> <right> [--open-sets]` - open rectangles of the product space

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod config;

use cli::{Cli, Commands};
use commands::Operation;
use config::Config;

fn main() -> Result<()> {
    let args = Cli::parse();
    let config = Config::from_env();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(config.filter(args.log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let output = match args.command {
        Commands::Inspect { file } => commands::inspect(&commands::load(&file)?),
        Commands::Closure { file, subset } => {
            commands::apply(&commands::load(&file)?, Operation::Closure, &subset)?
        }
        Commands::Interior { file, subset } => {
            commands::apply(&commands::load(&file)?, Operation::Interior, &subset)?
        }
        Commands::Boundary { file, subset } => {
            commands::apply(&commands::load(&file)?, Operation::Boundary, &subset)?
        }
        Commands::Random {
            elements,
            rounds,
            seed,
        } => {
            let mut random = config.random.clone();
            if let Some(rounds) = rounds {
                random = random.with_rounds(rounds);
            }
            if let Some(seed) = seed {
                random = random.with_seed(seed);
            }
            commands::random(&elements, &random)?
        }
        Commands::Product {
            left,
            right,
            open_sets,
        } => commands::product(&commands::load(&left)?, &commands::load(&right)?, open_sets),
    };

    println!("{output}");
    Ok(())
}
