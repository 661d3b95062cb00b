// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `lintensor demo` command: the built-in two-sample regression.
//!
//! Fits weights `[1, 2]` and bias `[0.5]` to inputs `[[1, 2], [3, 4]]` with
//! targets `[[5], [11]]`, then predicts `[[5, 6]]`.

use std::path::PathBuf;
use tensor_core::Tensor;
use trainer::Trainer;

pub fn execute(
    config: Option<PathBuf>,
    epochs: Option<usize>,
    learning_rate: Option<f64>,
) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║                 lintensor · Demo                     ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let mut config = super::load_config(config.as_deref())?;
    if let Some(epochs) = epochs {
        config.epochs = epochs;
    }
    if let Some(lr) = learning_rate {
        config.learning_rate = lr;
    }
    if config.weights.is_none() {
        config.weights = Some(vec![1.0, 2.0]);
    }
    if config.biases.is_none() {
        config.biases = Some(vec![0.5]);
    }

    let inputs = Tensor::matrix(&[[1.0, 2.0], [3.0, 4.0]])?;
    let targets = Tensor::matrix(&[[5.0], [11.0]])?;

    println!("  Inputs:  {inputs}");
    println!("  Targets: {targets}");
    println!(
        "  Epochs:  {}, learning rate {}",
        config.epochs, config.learning_rate
    );
    println!();

    let log_every = config.log_every;
    let mut trainer = Trainer::new(config).load(inputs, targets)?.prepare()?;
    let metrics = trainer.fit()?;
    super::print_progress(&metrics, log_every);
    println!();

    let sample = Tensor::matrix(&[[5.0, 6.0]])?;
    let prediction = trainer.predict(&sample)?;

    // ── Results ────────────────────────────────────────────────
    println!("  {}", metrics.summary());
    println!("  Prediction for {sample}: {prediction}");

    Ok(())
}
