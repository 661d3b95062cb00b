// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Training metrics.
//!
//! [`TrainMetrics`] records the loss observed at every epoch together with
//! the run's wall-clock time and the parameters it ended with.

use std::time::Duration;

/// Aggregate metrics for a training run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TrainMetrics {
    /// Name of the optimizer that produced the updates.
    pub optimizer: String,
    /// Number of samples (batch rows).
    pub samples: usize,
    /// Number of input features.
    pub features: usize,
    /// MSE loss measured in each epoch before that epoch's update.
    pub epoch_losses: Vec<f64>,
    /// Total wall-clock time of the run.
    pub total_duration: Duration,
    /// Weights after the last update.
    pub weights: Vec<f64>,
    /// Biases after the last update.
    pub biases: Vec<f64>,
}

impl TrainMetrics {
    /// Creates an empty metrics container.
    pub fn new(optimizer: impl Into<String>, samples: usize, features: usize) -> Self {
        Self {
            optimizer: optimizer.into(),
            samples,
            features,
            epoch_losses: Vec::new(),
            total_duration: Duration::ZERO,
            weights: Vec::new(),
            biases: Vec::new(),
        }
    }

    /// Records the loss of one epoch.
    pub fn record_epoch(&mut self, loss: f64) {
        self.epoch_losses.push(loss);
    }

    /// Finalises metrics with the total wall-clock time and final parameters.
    pub fn finalise(&mut self, total: Duration, weights: &[f64], biases: &[f64]) {
        self.total_duration = total;
        self.weights = weights.to_vec();
        self.biases = biases.to_vec();
    }

    /// Number of epochs recorded.
    pub fn epochs(&self) -> usize {
        self.epoch_losses.len()
    }

    /// Loss of the first epoch.
    pub fn initial_loss(&self) -> Option<f64> {
        self.epoch_losses.first().copied()
    }

    /// Loss of the last epoch.
    pub fn final_loss(&self) -> Option<f64> {
        self.epoch_losses.last().copied()
    }

    /// Returns a human-readable summary suitable for CLI output.
    pub fn summary(&self) -> String {
        let fmt_loss = |l: Option<f64>| l.map_or_else(|| "n/a".to_string(), |v| format!("{v:.6}"));
        format!(
            "Training: {} epochs with {} on {} samples x {} features, \
             loss {} -> {}, {:.2}ms total",
            self.epochs(),
            self.optimizer,
            self.samples,
            self.features,
            fmt_loss(self.initial_loss()),
            fmt_loss(self.final_loss()),
            self.total_duration.as_secs_f64() * 1000.0,
        )
    }
}
