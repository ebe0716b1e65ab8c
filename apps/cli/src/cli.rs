// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fom")]
#[command(author, version, about = "Explore finite topological spaces")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log filter (overrides FOM_LOG)
    #[arg(long, global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the open and closed sets and the properties of a space
    Inspect {
        /// Topology snapshot (JSON)
        file: PathBuf,
    },

    /// Smallest closed set containing a subset
    Closure {
        /// Topology snapshot (JSON)
        file: PathBuf,

        /// Comma-separated points, e.g. `a,b`
        #[arg(long, short, default_value = "")]
        subset: String,
    },

    /// Largest open set contained in a subset
    Interior {
        /// Topology snapshot (JSON)
        file: PathBuf,

        /// Comma-separated points, e.g. `a,b`
        #[arg(long, short, default_value = "")]
        subset: String,
    },

    /// Closure of a subset intersected with the closure of its complement
    Boundary {
        /// Topology snapshot (JSON)
        file: PathBuf,

        /// Comma-separated points, e.g. `a,b`
        #[arg(long, short, default_value = "")]
        subset: String,
    },

    /// Print a random topology as JSON
    Random {
        /// Comma-separated points, e.g. `a,b,c`
        #[arg(long, short)]
        elements: String,

        /// Number of random rounds (overrides FOM_RANDOM_ROUNDS)
        #[arg(long, short)]
        rounds: Option<usize>,

        /// Seed for reproducible output (overrides FOM_RANDOM_SEED)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the open rectangles of the product of two spaces
    Product {
        /// Left factor (JSON)
        left: PathBuf,

        /// Right factor (JSON)
        right: PathBuf,

        /// Also count the open sets; this closes the rectangles under unions
        #[arg(long)]
        open_sets: bool,
    },
}
