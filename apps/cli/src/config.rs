// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI configuration loaded from environment variables.

use fom_topology::RandomConfig;

const DEFAULT_LOG_FILTER: &str = "warn,fom_topology=info,fom=info";

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Settings for `random`.
    pub random: RandomConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            log_filter: std::env::var("FOM_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
            random: RandomConfig::from_env(),
        }
    }

    /// The filter to install: `RUST_LOG` wins, then `--log`, then `FOM_LOG`.
    pub fn filter(&self, flag: Option<&str>) -> String {
        std::env::var("RUST_LOG")
            .ok()
            .or_else(|| flag.map(str::to_string))
            .unwrap_or_else(|| self.log_filter.clone())
    }
}
