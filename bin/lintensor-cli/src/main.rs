// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # lintensor
//!
//! Command-line interface for fitting a linear layer to CSV data.
//!
//! ## Usage
//! ```bash
//! # Train on CSV data and predict new samples
//! lintensor train --inputs x.csv --targets y.csv --epochs 500 --sample new.csv --output pred.csv
//!
//! # Run the built-in two-sample example
//! lintensor demo
//!
//! # Inspect a CSV file as a tensor
//! lintensor inspect --file x.csv
//! ```

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lintensor",
    about = "Minimal tensor library and linear-layer trainer",
    version,
    author
)]
struct Cli {
    /// Path to a TOML training configuration (explicit flags override it).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a linear layer on CSV inputs and targets.
    Train {
        /// Header-less CSV of inputs, one sample per row.
        #[arg(short, long)]
        inputs: PathBuf,

        /// Header-less CSV of targets, one value per sample.
        #[arg(short, long)]
        targets: PathBuf,

        /// Number of epochs.
        #[arg(short, long)]
        epochs: Option<usize>,

        /// Gradient-descent learning rate.
        #[arg(short, long)]
        learning_rate: Option<f64>,

        /// CSV of new samples to predict after training.
        #[arg(short, long)]
        sample: Option<PathBuf>,

        /// Where to write predictions for `--sample`.
        #[arg(short, long, requires = "sample")]
        output: Option<PathBuf>,

        /// Where to write the training metrics as JSON.
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// Train on the built-in example and predict [[5, 6]].
    Demo {
        /// Number of epochs.
        #[arg(short, long)]
        epochs: Option<usize>,

        /// Gradient-descent learning rate.
        #[arg(short, long)]
        learning_rate: Option<f64>,
    },

    /// Load a CSV file and print it as a tensor.
    Inspect {
        /// Header-less CSV file.
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Train {
            inputs,
            targets,
            epochs,
            learning_rate,
            sample,
            output,
            report,
        } => commands::train::execute(commands::train::TrainArgs {
            config: cli.config,
            inputs,
            targets,
            epochs,
            learning_rate,
            sample,
            output,
            report,
        }),
        Commands::Demo {
            epochs,
            learning_rate,
        } => commands::demo::execute(cli.config, epochs, learning_rate),
        Commands::Inspect { file } => commands::inspect::execute(file),
    }
}
