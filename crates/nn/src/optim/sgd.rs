// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Stochastic gradient descent.

use super::Optimizer;
use crate::Linear;

/// SGD with optional classical momentum.
///
/// Without momentum each parameter moves by `-learning_rate * grad`. With
/// momentum `mu` a velocity is kept per parameter:
///
/// ```text
/// v = mu * v + grad
/// p = p - learning_rate * v
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Sgd {
    learning_rate: f64,
    momentum: f64,
    /// Velocity buffers for weights and biases, sized on first use.
    velocities: [Vec<f64>; 2],
}

impl Sgd {
    /// Creates plain SGD.
    pub fn new(learning_rate: f64) -> Self {
        Self::with_momentum(learning_rate, 0.0)
    }

    /// Creates SGD with momentum coefficient `momentum`.
    ///
    /// `momentum` must lie in `[0, 1)`; zero selects plain SGD. Values outside
    /// that range (including NaN) trip a debug assertion.
    pub fn with_momentum(learning_rate: f64, momentum: f64) -> Self {
        debug_assert!(
            (0.0..1.0).contains(&momentum),
            "momentum must be in [0, 1), got {momentum}"
        );
        Self {
            learning_rate,
            momentum,
            velocities: [Vec::new(), Vec::new()],
        }
    }

    /// The step size.
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// The momentum coefficient; zero means plain SGD.
    pub fn momentum(&self) -> f64 {
        self.momentum
    }
}

impl Optimizer for Sgd {
    fn name(&self) -> &str {
        if self.momentum > 0.0 {
            "sgd-momentum"
        } else {
            "sgd"
        }
    }

    fn step(&mut self, layer: &mut Linear) {
        let lr = self.learning_rate;

        if self.momentum > 0.0 {
            let mu = self.momentum;
            let buffers = layer.parameters_mut().into_iter().zip(&mut self.velocities);
            for ((params, grads), velocity) in buffers {
                if velocity.len() != params.len() {
                    *velocity = vec![0.0; params.len()];
                }
                for ((p, &g), v) in params.iter_mut().zip(grads).zip(velocity.iter_mut()) {
                    *v = mu * *v + g;
                    *p -= lr * *v;
                }
            }
        } else {
            for (params, grads) in layer.parameters_mut() {
                for (p, &g) in params.iter_mut().zip(grads) {
                    *p -= lr * g;
                }
            }
        }
    }
}
