// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`Optimizer`] trait and optimizer implementations.

pub mod sgd;

use crate::Linear;

/// Trait for parameter update rules.
///
/// An optimizer reads the gradients left on a [`Linear`] layer by its most
/// recent backward pass and updates the weights and biases in place.
pub trait Optimizer: Send + Sync {
    /// Human-readable name of this optimizer.
    fn name(&self) -> &str;

    /// Applies one update to the layer's parameters.
    fn step(&mut self, layer: &mut Linear);
}
