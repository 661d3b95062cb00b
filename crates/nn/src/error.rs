// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for layers.

use tensor_core::Shape;

/// Errors that can occur while building or running a layer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayerError {
    /// The input is not `[batch, features]` with one feature per weight.
    #[error("input shape {shape} is not compatible with {weights} weights")]
    IncompatibleShape { shape: Shape, weights: usize },

    /// The upstream gradient does not carry one value per batch row.
    #[error("gradient has {actual} elements, expected {expected} (one per batch row)")]
    IncompatibleGradient { expected: usize, actual: usize },

    /// A layer needs at least one weight and one bias.
    #[error("layer requires at least one {what}")]
    EmptyParameters { what: &'static str },

    /// A tensor operation failed inside the layer.
    #[error("tensor error: {0}")]
    Tensor(#[from] tensor_core::TensorError),
}
