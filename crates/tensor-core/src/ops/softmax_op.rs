// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Softmax activation operation.

use crate::{Tensor, TensorView};

/// Computes softmax over every element: `output[i] = exp(x[i] - max) / sum(exp(x - max))`.
///
/// The whole tensor is one distribution whatever its shape, so the outputs
/// of a `[2, 3]` input sum to 1 together. Subtracting the maximum before
/// exponentiation keeps large logits from overflowing.
pub fn softmax(input: &TensorView<'_>) -> Tensor {
    let src = input.as_slice();
    let max_val = src.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut dst: Vec<f64> = src.iter().map(|&s| (s - max_val).exp()).collect();
    let sum: f64 = dst.iter().sum();
    if sum > 0.0 {
        let inv_sum = 1.0 / sum;
        for d in &mut dst {
            *d *= inv_sum;
        }
    }

    Tensor::from_parts(input.shape().clone(), dst)
}
