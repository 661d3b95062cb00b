// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # tensor-core
//!
//! Dense, row-major `f64` tensors and the stateless operations built on them.
//!
//! This crate provides:
//! - [`Tensor`]: an owned n-dimensional tensor (flat buffer + [`Shape`]).
//! - [`TensorView`]: a borrowed, read-only view used by the operations.
//! - [`TensorPayload`]: scalar / flat / nested input accepted by
//!   [`Tensor::from_payload`], including dynamic JSON values.
//! - Elementwise arithmetic: [`add`], [`sub`], [`mul`], [`div`].
//! - Activations: [`relu`], [`leaky_relu`], [`sigmoid`], [`tanh`], [`softmax`].
//! - Losses: [`mse_loss`], [`mse_loss_grad`], [`binary_cross_entropy`],
//!   [`categorical_cross_entropy`].
//! - [`matmul`] for 2-D tensors.
//!
//! # Design Goals
//! - `product(shape) == len(data)` holds for every tensor that can be built.
//! - Operations never mutate or alias their inputs; results are fresh tensors.
//! - No broadcasting: binary operands must have identical shapes.
//! - Clean error types via `thiserror`.

mod error;
mod ops;
mod payload;
mod shape;
mod tensor;

pub use error::TensorError;
pub use ops::{
    add, binary_cross_entropy, categorical_cross_entropy, div, leaky_relu, matmul, mse_loss,
    mse_loss_grad, mul, relu, sigmoid, softmax, sub, tanh, DEFAULT_LEAKY_SLOPE,
};
pub use payload::TensorPayload;
pub use shape::Shape;
pub use tensor::{Tensor, TensorView};
