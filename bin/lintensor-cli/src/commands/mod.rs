// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared CLI helpers.

pub mod demo;
pub mod inspect;
pub mod train;

use std::path::Path;
use tracing_subscriber::EnvFilter;
use trainer::{TrainConfig, TrainMetrics};

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows the `-v` count:
/// none → `warn`, `-v` → `info`, `-vv` → `debug`, `-vvv` → `trace`.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Reads the `--config` file when given, else the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<TrainConfig> {
    match path {
        Some(path) => {
            let config = TrainConfig::from_file(path)?;
            tracing::info!("loaded config from '{}'", path.display());
            Ok(config)
        }
        None => Ok(TrainConfig::default()),
    }
}

/// Prints the loss at every `log_every`-th epoch.
pub fn print_progress(metrics: &TrainMetrics, log_every: usize) {
    for (epoch, loss) in metrics
        .epoch_losses
        .iter()
        .enumerate()
        .step_by(log_every.max(1))
    {
        println!("   Epoch {epoch:>5}: loss = {loss:.6}");
    }
}
