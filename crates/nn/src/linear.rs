// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Linear (fully connected) layer with a single output.
//!
//! The layer maps `[batch, F]` inputs to `[batch, 1]` outputs:
//!
//! ```text
//! output[i] = sum_j(weights[j] * input[i, j]) + biases[i % len(biases)]
//! ```
//!
//! Biases are cycled by row index. With the usual single bias every row gets
//! the same offset.

use crate::LayerError;
use rand::Rng;
use tensor_core::{matmul, Shape, Tensor};

/// A single-output linear layer holding its parameters and their gradients.
///
/// Gradients are owned by the layer: [`Linear::backward`] overwrites them and
/// an [`crate::Optimizer`] reads them to update the parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Linear {
    weights: Vec<f64>,
    biases: Vec<f64>,
    grad_weights: Vec<f64>,
    grad_biases: Vec<f64>,
}

impl Linear {
    /// Creates a layer from explicit weights (one per input feature) and biases.
    ///
    /// # Errors
    /// Returns [`LayerError::EmptyParameters`] if either vector is empty.
    ///
    /// # Examples
    /// ```
    /// use nn::Linear;
    /// use tensor_core::Tensor;
    /// let layer = Linear::new(vec![1.0, 2.0], vec![0.5]).unwrap();
    /// let y = layer.forward(&Tensor::matrix(&[[3.0, 4.0]]).unwrap()).unwrap();
    /// assert_eq!(y.as_slice(), &[11.5]);
    /// ```
    pub fn new(weights: Vec<f64>, biases: Vec<f64>) -> Result<Self, LayerError> {
        if weights.is_empty() {
            return Err(LayerError::EmptyParameters { what: "weight" });
        }
        if biases.is_empty() {
            return Err(LayerError::EmptyParameters { what: "bias" });
        }

        tracing::debug!(
            in_features = weights.len(),
            biases = biases.len(),
            "created linear layer"
        );

        Ok(Self {
            grad_weights: vec![0.0; weights.len()],
            grad_biases: vec![0.0; biases.len()],
            weights,
            biases,
        })
    }

    /// Creates a layer with uniformly initialized weights and a zero bias.
    ///
    /// Weights are drawn from `U[-s, s)` with `s = sqrt(2 / in_features)`.
    ///
    /// # Errors
    /// Returns [`LayerError::EmptyParameters`] if `in_features` is zero.
    pub fn random<R: Rng + ?Sized>(in_features: usize, rng: &mut R) -> Result<Self, LayerError> {
        if in_features == 0 {
            return Err(LayerError::EmptyParameters { what: "weight" });
        }
        let std = (2.0 / in_features as f64).sqrt();
        let weights = (0..in_features)
            .map(|_| rng.gen::<f64>() * std * 2.0 - std)
            .collect();
        Self::new(weights, vec![0.0])
    }

    /// Forward pass over a `[batch, F]` input, producing `[batch, 1]`.
    ///
    /// # Errors
    /// Returns [`LayerError::IncompatibleShape`] if the input is not 2-D or
    /// its second axis differs from the number of weights.
    pub fn forward(&self, input: &Tensor) -> Result<Tensor, LayerError> {
        self.check_input(input)?;

        let column = Tensor::from_shape(Shape::matrix(self.weights.len(), 1), self.weights.clone())?;
        let mut output = matmul(&input.view(), &column.view())?;

        let biases = &self.biases;
        for (i, y) in output.as_slice_mut().iter_mut().enumerate() {
            *y += biases[i % biases.len()];
        }

        Ok(output)
    }

    /// Backward pass: computes parameter gradients and the input gradient.
    ///
    /// `input` is the tensor given to [`Linear::forward`]; `grad_output` holds
    /// the loss gradient with respect to each output row. Gradients from any
    /// earlier call are discarded, not accumulated.
    ///
    /// Returns the gradient with respect to `input`, shaped `[batch, F]`.
    ///
    /// # Errors
    /// Returns [`LayerError::IncompatibleShape`] for a bad input and
    /// [`LayerError::IncompatibleGradient`] if `grad_output` does not have
    /// exactly `batch` elements.
    pub fn backward(&mut self, input: &Tensor, grad_output: &Tensor) -> Result<Tensor, LayerError> {
        let batch = self.check_input(input)?;
        let grad_out = grad_output.as_slice();
        if grad_out.len() != batch {
            return Err(LayerError::IncompatibleGradient {
                expected: batch,
                actual: grad_out.len(),
            });
        }

        self.grad_weights.fill(0.0);
        self.grad_biases.fill(0.0);

        let features = self.weights.len();
        let x = input.as_slice();
        let mut grad_input = vec![0.0; x.len()];

        for (i, &g) in grad_out.iter().enumerate() {
            let row = &x[i * features..(i + 1) * features];
            let grad_row = &mut grad_input[i * features..(i + 1) * features];
            for j in 0..features {
                self.grad_weights[j] += g * row[j];
                grad_row[j] = g * self.weights[j];
            }
            let k = i % self.grad_biases.len();
            self.grad_biases[k] += g;
        }

        Ok(Tensor::from_shape(Shape::matrix(batch, features), grad_input)?)
    }

    /// Number of input features, i.e. the weight count.
    pub fn in_features(&self) -> usize {
        self.weights.len()
    }

    /// Current weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Current biases.
    pub fn biases(&self) -> &[f64] {
        &self.biases
    }

    /// Weight gradients from the most recent backward pass.
    pub fn grad_weights(&self) -> &[f64] {
        &self.grad_weights
    }

    /// Bias gradients from the most recent backward pass.
    pub fn grad_biases(&self) -> &[f64] {
        &self.grad_biases
    }

    /// Each parameter buffer paired with its gradient: weights first, then biases.
    pub fn parameters_mut(&mut self) -> [(&mut [f64], &[f64]); 2] {
        [
            (self.weights.as_mut_slice(), self.grad_weights.as_slice()),
            (self.biases.as_mut_slice(), self.grad_biases.as_slice()),
        ]
    }

    /// Returns the batch size when `input` is `[batch, in_features]`.
    fn check_input(&self, input: &Tensor) -> Result<usize, LayerError> {
        match input.shape().as_matrix() {
            Some((batch, features)) if features == self.weights.len() => Ok(batch),
            _ => Err(LayerError::IncompatibleShape {
                shape: input.shape().clone(),
                weights: self.weights.len(),
            }),
        }
    }
}
