// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # nn
//!
//! A single-output [`Linear`] layer with hand-written forward and backward
//! passes, and the [`Optimizer`]s that update it.
//!
//! One training step is:
//! ```text
//! forward(x) → loss gradient → backward(x, grad) → optimizer.step(layer)
//! ```
//! The layer owns its gradients. `backward` overwrites them on every call and
//! the optimizer only reads them.

mod error;
mod linear;
pub mod optim;

pub use error::LayerError;
pub use linear::Linear;
pub use optim::{sgd::Sgd, Optimizer};
