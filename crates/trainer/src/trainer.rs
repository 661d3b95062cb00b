// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The training loop with a type-state–enforced pipeline.
//!
//! ```text
//! Trainer<Idle>
//!     │  .load(inputs, targets)  or  .load_csv(inputs_path, targets_path)
//!     ▼
//! Trainer<Loaded>
//!     │  .prepare()  or  .prepare_with(layer)
//!     ▼
//! Trainer<Ready>
//!     │  .fit()
//!     ▼
//!   TrainMetrics
//! ```
//!
//! Each state transition consumes the old value and returns a new one,
//! making invalid state sequences a compile error.

use crate::{TrainConfig, TrainError, TrainMetrics};
use nn::{Linear, Optimizer};
use std::path::Path;
use std::time::Instant;
use tensor_core::{mse_loss, mse_loss_grad, Shape, Tensor};

// ── Type-state markers ─────────────────────────────────────────

/// Trainer is configured but has no data.
#[derive(Debug)]
pub struct Idle;

/// Training data is attached and validated.
#[derive(Debug)]
pub struct Loaded {
    inputs: Tensor,
    targets: Tensor,
}

/// The layer and optimizer exist; training can run.
pub struct Ready {
    inputs: Tensor,
    targets: Tensor,
    layer: Linear,
    optimizer: Box<dyn Optimizer>,
}

/// Sealed trait for trainer states.
pub trait TrainerState {}
impl TrainerState for Idle {}
impl TrainerState for Loaded {}
impl TrainerState for Ready {}

// ── Trainer ────────────────────────────────────────────────────

/// Full-batch gradient-descent trainer for a [`Linear`] layer.
///
/// # Example
/// ```
/// use tensor_core::Tensor;
/// use trainer::{TrainConfig, Trainer};
///
/// let config = TrainConfig {
///     weights: Some(vec![1.0, 2.0]),
///     biases: Some(vec![0.5]),
///     ..Default::default()
/// };
/// let inputs = Tensor::matrix(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let targets = Tensor::matrix(&[[5.0], [11.0]]).unwrap();
///
/// let mut trainer = Trainer::new(config).load(inputs, targets)?.prepare()?;
/// let metrics = trainer.fit()?;
/// assert_eq!(metrics.epochs(), 100);
/// # Ok::<(), trainer::TrainError>(())
/// ```
pub struct Trainer<S: TrainerState = Idle> {
    config: TrainConfig,
    state: S,
}

// ── Idle → Loaded ──────────────────────────────────────────────

impl Trainer<Idle> {
    /// Creates a trainer from the given configuration.
    pub fn new(config: TrainConfig) -> Self {
        tracing::info!(
            "trainer created: {} epochs, learning rate {}",
            config.epochs,
            config.learning_rate
        );
        Self { config, state: Idle }
    }

    /// Attaches `[N, F]` inputs and `N` targets.
    ///
    /// Targets of any shape with exactly `N` elements are accepted and
    /// reshaped to the `[N, 1]` layout produced by the layer.
    pub fn load(self, inputs: Tensor, targets: Tensor) -> Result<Trainer<Loaded>, TrainError> {
        let Some((samples, features)) = inputs.shape().as_matrix() else {
            return Err(TrainError::InvalidData(format!(
                "inputs must be 2-D [samples, features], got shape {}",
                inputs.shape()
            )));
        };
        if samples == 0 || features == 0 {
            return Err(TrainError::InvalidData(format!(
                "inputs must be non-empty, got shape {}",
                inputs.shape()
            )));
        }
        if targets.num_elements() != samples {
            return Err(TrainError::InvalidData(format!(
                "{} targets for {samples} samples",
                targets.num_elements()
            )));
        }
        let targets = targets.reshape(Shape::matrix(samples, 1))?;

        tracing::info!("loaded {samples} samples with {features} features");
        Ok(Trainer {
            config: self.config,
            state: Loaded { inputs, targets },
        })
    }

    /// Loads inputs and targets from header-less CSV files.
    pub fn load_csv(
        self,
        inputs_path: &Path,
        targets_path: &Path,
    ) -> Result<Trainer<Loaded>, TrainError> {
        let inputs = data_io::load_csv(inputs_path)?;
        let targets = data_io::load_csv(targets_path)?;
        self.load(inputs, targets)
    }
}

// ── Loaded → Ready ─────────────────────────────────────────────

impl Trainer<Loaded> {
    /// Returns the training inputs.
    pub fn inputs(&self) -> &Tensor {
        &self.state.inputs
    }

    /// Returns the training targets, shaped `[N, 1]`.
    pub fn targets(&self) -> &Tensor {
        &self.state.targets
    }

    /// Builds the layer and optimizer from the configuration.
    pub fn prepare(self) -> Result<Trainer<Ready>, TrainError> {
        let features = self.state.inputs.shape().dim(1).unwrap_or(0);
        let layer = self.config.create_layer(features)?;
        self.prepare_with(layer)
    }

    /// Uses an existing layer instead of building one from the configuration.
    pub fn prepare_with(self, layer: Linear) -> Result<Trainer<Ready>, TrainError> {
        let features = self.state.inputs.shape().dim(1).unwrap_or(0);
        if layer.in_features() != features {
            return Err(TrainError::InvalidData(format!(
                "layer expects {} features, inputs have {features}",
                layer.in_features()
            )));
        }

        let optimizer = self.config.create_optimizer()?;
        tracing::info!("using optimizer: {}", optimizer.name());

        Ok(Trainer {
            config: self.config,
            state: Ready {
                inputs: self.state.inputs,
                targets: self.state.targets,
                layer,
                optimizer,
            },
        })
    }
}

// ── Ready: train and predict ───────────────────────────────────

impl Trainer<Ready> {
    /// Runs `epochs` full-batch updates.
    ///
    /// Each epoch performs forward, MSE loss, the loss gradient
    /// `2 * (pred - target) / N`, backward and one optimizer step. The loss
    /// is logged every `log_every` epochs. Calling `fit` again continues from
    /// the current parameters.
    pub fn fit(&mut self) -> Result<TrainMetrics, TrainError> {
        let start = Instant::now();
        let Ready {
            inputs,
            targets,
            layer,
            optimizer,
        } = &mut self.state;

        let (samples, features) = inputs.shape().as_matrix().unwrap_or((0, 0));
        let mut metrics = TrainMetrics::new(optimizer.name(), samples, features);

        for epoch in 0..self.config.epochs {
            let predictions = layer.forward(inputs)?;
            let loss = mse_loss(&predictions.view(), &targets.view())?.as_slice()[0];
            let grad_output = mse_loss_grad(&predictions.view(), &targets.view())?;
            layer.backward(inputs, &grad_output)?;
            optimizer.step(layer);

            metrics.record_epoch(loss);
            if epoch % self.config.log_every == 0 {
                tracing::info!("epoch {epoch}: loss = {loss:.6}");
            }
        }

        metrics.finalise(start.elapsed(), layer.weights(), layer.biases());
        tracing::info!("{}", metrics.summary());
        Ok(metrics)
    }

    /// Runs the trained layer on new `[batch, F]` data.
    pub fn predict(&self, input: &Tensor) -> Result<Tensor, TrainError> {
        Ok(self.state.layer.forward(input)?)
    }

    /// Returns the layer being trained.
    pub fn layer(&self) -> &Linear {
        &self.state.layer
    }

    /// Consumes the trainer and returns the trained layer.
    pub fn into_layer(self) -> Linear {
        self.state.layer
    }
}

impl<S: TrainerState> Trainer<S> {
    /// Returns the configuration.
    pub fn config(&self) -> &TrainConfig {
        &self.config
    }
}

impl<S: TrainerState> std::fmt::Debug for Trainer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trainer")
            .field("state", &std::any::type_name::<S>())
            .field("epochs", &self.config.epochs)
            .field("learning_rate", &self.config.learning_rate)
            .finish()
    }
}
