// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # trainer
//!
//! Fits a [`nn::Linear`] layer to a dataset by full-batch gradient descent
//! on the mean squared error.
//!
//! The trainer takes:
//! - A [`TrainConfig`] (epochs, learning rate, momentum, initial parameters).
//! - `[N, F]` inputs and `N` targets, as tensors or CSV files.
//!
//! And runs forward, loss, backward and optimizer step once per epoch,
//! collecting a [`TrainMetrics`] report.
//!
//! # Type-State Pipeline
//! ```text
//! Trainer<Idle> → Trainer<Loaded> → Trainer<Ready>
//! ```
//! Transitions are compile-time checked.

mod config;
mod error;
mod metrics;
mod trainer;

pub use config::TrainConfig;
pub use error::TrainError;
pub use metrics::TrainMetrics;
pub use trainer::{Idle, Loaded, Ready, Trainer, TrainerState};
