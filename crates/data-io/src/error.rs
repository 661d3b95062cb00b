// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for CSV input and output.

use std::path::PathBuf;
use tensor_core::Shape;

/// Errors that can occur while reading or writing tensor data.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The file could not be opened or created.
    #[error("cannot open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing the underlying stream failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV is malformed, e.g. records of unequal length.
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    /// A field is not a floating-point number.
    #[error("row {row}, column {col}: cannot parse '{value}' as a number")]
    ParseFloat { row: usize, col: usize, value: String },

    /// The input contains no records.
    #[error("csv input contains no records")]
    Empty,

    /// Only 2-D tensors map onto rows and columns.
    #[error("expected a 2-D tensor, got shape {shape}")]
    NotAMatrix { shape: Shape },

    /// The parsed rows did not form a tensor.
    #[error("tensor error: {0}")]
    Tensor(#[from] tensor_core::TensorError),
}
