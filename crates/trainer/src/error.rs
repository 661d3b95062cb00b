// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for training.

/// Errors that can occur while configuring or running training.
#[derive(Debug, thiserror::Error)]
pub enum TrainError {
    /// The configuration is unreadable or out of range.
    #[error("configuration error: {0}")]
    Config(String),

    /// Inputs and targets do not describe a usable dataset.
    #[error("invalid training data: {0}")]
    InvalidData(String),

    /// The layer rejected an input or gradient.
    #[error("layer error: {0}")]
    Layer(#[from] nn::LayerError),

    /// A tensor operation failed.
    #[error("tensor error: {0}")]
    Tensor(#[from] tensor_core::TensorError),

    /// Loading training data from disk failed.
    #[error("data error: {0}")]
    Data(#[from] data_io::DataError),
}
