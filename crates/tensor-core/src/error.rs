// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for tensor construction and operations.

use crate::Shape;

/// Errors that can occur during tensor construction and operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TensorError {
    /// Two shapes disagree: operand shapes of a binary op, or a requested
    /// shape whose element count differs from the supplied data.
    #[error("incompatible shapes for {op}: {lhs} vs {rhs}")]
    ShapeMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },

    /// Rows of a nested (matrix) payload have different lengths.
    #[error("ragged rows: row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A dynamic payload is not a number, a flat list, or a list of lists.
    #[error("unsupported tensor payload: {kind}")]
    UnsupportedType { kind: &'static str },

    /// A random tensor was requested with a zero-sized axis.
    #[error("invalid dimensions {rows}x{cols}: rows and columns must be positive")]
    InvalidDimensions { rows: usize, cols: usize },
}
