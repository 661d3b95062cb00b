// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `lintensor train` command: fit a linear layer to CSV data.
//!
//! Demonstrates the full type-state pipeline:
//! ```text
//! Trainer<Idle> → load_csv → <Loaded> → prepare → <Ready> → fit
//! ```

use std::path::PathBuf;
use trainer::Trainer;

/// Arguments collected from the command line.
pub struct TrainArgs {
    pub config: Option<PathBuf>,
    pub inputs: PathBuf,
    pub targets: PathBuf,
    pub epochs: Option<usize>,
    pub learning_rate: Option<f64>,
    pub sample: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub report: Option<PathBuf>,
}

pub fn execute(args: TrainArgs) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║              lintensor · Linear Trainer              ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    // ── Configuration ──────────────────────────────────────────
    let mut config = super::load_config(args.config.as_deref())?;
    if let Some(epochs) = args.epochs {
        config.epochs = epochs;
    }
    if let Some(lr) = args.learning_rate {
        config.learning_rate = lr;
    }
    config.validate()?;

    println!("  Config:");
    println!("   Inputs:        {}", args.inputs.display());
    println!("   Targets:       {}", args.targets.display());
    println!("   Epochs:        {}", config.epochs);
    println!("   Learning rate: {}", config.learning_rate);
    if config.momentum > 0.0 {
        println!("   Momentum:      {}", config.momentum);
    }
    println!();

    // ── Type-State Pipeline ────────────────────────────────────
    println!("  [1/3] Loading data...");
    let loaded = Trainer::new(config.clone())
        .load_csv(&args.inputs, &args.targets)
        .map_err(|e| anyhow::anyhow!("failed to load training data: {e}"))?;
    println!(
        "        {} samples, {} features",
        loaded.inputs().shape().dim(0).unwrap_or(0),
        loaded.inputs().shape().dim(1).unwrap_or(0),
    );
    println!();

    println!("  [2/3] Initializing layer...");
    let mut ready = loaded.prepare()?;
    println!("        weights = {:?}", ready.layer().weights());
    println!("        biases  = {:?}", ready.layer().biases());
    println!();

    println!("  [3/3] Training...");
    let metrics = ready.fit()?;
    super::print_progress(&metrics, config.log_every);
    println!();

    // ── Results ────────────────────────────────────────────────
    println!("  {}", metrics.summary());
    println!("   weights = {:?}", ready.layer().weights());
    println!("   biases  = {:?}", ready.layer().biases());
    println!();

    if let Some(sample) = &args.sample {
        let input = data_io::load_csv(sample)
            .map_err(|e| anyhow::anyhow!("failed to load sample '{}': {e}", sample.display()))?;
        let prediction = ready.predict(&input)?;
        println!("  Prediction for {}:", sample.display());
        println!("   {prediction}");

        if let Some(output) = &args.output {
            data_io::save_csv(&prediction, output)?;
            println!("   written to {}", output.display());
        }
        println!();
    }

    if let Some(report) = &args.report {
        let json = serde_json::to_string_pretty(&metrics)?;
        std::fs::write(report, json)
            .map_err(|e| anyhow::anyhow!("cannot write report '{}': {e}", report.display()))?;
        println!("  Metrics report written to {}", report.display());
    }

    Ok(())
}
