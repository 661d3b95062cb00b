// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tensor operations.
//!
//! Every operation reads its operands through [`crate::TensorView`] and
//! returns a freshly allocated [`crate::Tensor`]; inputs are never mutated.

mod activation_op;
mod elementwise_op;
mod loss_op;
mod matmul_op;
mod softmax_op;

pub use activation_op::{leaky_relu, relu, sigmoid, tanh, DEFAULT_LEAKY_SLOPE};
pub use elementwise_op::{add, div, mul, sub};
pub use loss_op::{binary_cross_entropy, categorical_cross_entropy, mse_loss, mse_loss_grad};
pub use matmul_op::matmul;
pub use softmax_op::softmax;
