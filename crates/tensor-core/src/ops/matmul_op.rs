// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix multiplication operation.

use crate::{Shape, Tensor, TensorError, TensorView};

/// Performs matrix multiplication: `lhs @ rhs`.
///
/// Both inputs must be 2-D tensors with compatible inner dimensions:
/// `lhs` is `[M, K]`, `rhs` is `[K, N]`, and the result is `[M, N]`.
///
/// # Errors
/// Returns [`TensorError::ShapeMismatch`] if either operand is not 2-D or the
/// inner dimensions differ.
pub fn matmul(lhs: &TensorView<'_>, rhs: &TensorView<'_>) -> Result<Tensor, TensorError> {
    let (Some((m, k)), Some((_, n))) = (lhs.shape().as_matrix(), rhs.shape().as_matrix()) else {
        return Err(mismatch(lhs, rhs));
    };
    if !lhs.shape().is_matmul_compatible(rhs.shape()) {
        return Err(mismatch(lhs, rhs));
    }

    let mut c = vec![0.0; m * n];
    matmul_f64(lhs.as_slice(), rhs.as_slice(), &mut c, m, k, n);

    Ok(Tensor::from_parts(Shape::matrix(m, n), c))
}

fn mismatch(lhs: &TensorView<'_>, rhs: &TensorView<'_>) -> TensorError {
    TensorError::ShapeMismatch {
        op: "matmul",
        lhs: lhs.shape().clone(),
        rhs: rhs.shape().clone(),
    }
}

/// Portable f64 matrix multiplication into a zeroed `c`.
///
/// Uses the ikj loop order so the inner loop walks a row of `b` and a row
/// of `c`, both sequential in memory.
fn matmul_f64(a: &[f64], b: &[f64], c: &mut [f64], m: usize, k: usize, n: usize) {
    for i in 0..m {
        let c_row = &mut c[i * n..(i + 1) * n];
        for p in 0..k {
            let a_ip = a[i * k + p];
            let b_row = &b[p * n..(p + 1) * n];
            for (c_ij, &b_pj) in c_row.iter_mut().zip(b_row) {
                *c_ij += a_ip * b_pj;
            }
        }
    }
}
