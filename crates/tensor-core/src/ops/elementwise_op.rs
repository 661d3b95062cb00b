// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Elementwise binary arithmetic.
//!
//! Operands must have exactly the same shape; there is no broadcasting.
//! Division follows IEEE-754 semantics, so dividing by zero yields
//! `±inf` or `NaN` rather than an error.

use crate::{Tensor, TensorError, TensorView};

/// Elementwise `lhs + rhs`.
///
/// # Errors
/// Returns [`TensorError::ShapeMismatch`] if the shapes differ.
///
/// # Examples
/// ```
/// use tensor_core::{add, Tensor};
/// let a = Tensor::vector(vec![1.0, 2.0]);
/// let b = Tensor::vector(vec![10.0, 20.0]);
/// assert_eq!(add(&a.view(), &b.view()).unwrap().as_slice(), &[11.0, 22.0]);
/// ```
pub fn add(lhs: &TensorView<'_>, rhs: &TensorView<'_>) -> Result<Tensor, TensorError> {
    zip_with("add", lhs, rhs, |a, b| a + b)
}

/// Elementwise `lhs - rhs`.
///
/// # Errors
/// Returns [`TensorError::ShapeMismatch`] if the shapes differ.
pub fn sub(lhs: &TensorView<'_>, rhs: &TensorView<'_>) -> Result<Tensor, TensorError> {
    zip_with("sub", lhs, rhs, |a, b| a - b)
}

/// Elementwise `lhs * rhs` (Hadamard product).
///
/// # Errors
/// Returns [`TensorError::ShapeMismatch`] if the shapes differ.
pub fn mul(lhs: &TensorView<'_>, rhs: &TensorView<'_>) -> Result<Tensor, TensorError> {
    zip_with("mul", lhs, rhs, |a, b| a * b)
}

/// Elementwise `lhs / rhs`.
///
/// # Errors
/// Returns [`TensorError::ShapeMismatch`] if the shapes differ.
pub fn div(lhs: &TensorView<'_>, rhs: &TensorView<'_>) -> Result<Tensor, TensorError> {
    zip_with("div", lhs, rhs, |a, b| a / b)
}

fn zip_with(
    op: &'static str,
    lhs: &TensorView<'_>,
    rhs: &TensorView<'_>,
    f: impl Fn(f64, f64) -> f64,
) -> Result<Tensor, TensorError> {
    if lhs.shape() != rhs.shape() {
        return Err(TensorError::ShapeMismatch {
            op,
            lhs: lhs.shape().clone(),
            rhs: rhs.shape().clone(),
        });
    }

    let data = lhs
        .as_slice()
        .iter()
        .zip(rhs.as_slice())
        .map(|(&a, &b)| f(a, b))
        .collect();

    Ok(Tensor::from_parts(lhs.shape().clone(), data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Shape;

    fn matrix(rows: &[[f64; 2]]) -> Tensor {
        Tensor::matrix(rows).unwrap()
    }

    #[test]
    fn test_add() {
        let a = matrix(&[[1.0, 2.0], [3.0, 4.0]]);
        let b = matrix(&[[0.5, 0.5], [-1.0, 10.0]]);
        let c = add(&a.view(), &b.view()).unwrap();
        assert_eq!(c.shape(), a.shape());
        assert_eq!(c.as_slice(), &[1.5, 2.5, 2.0, 14.0]);
    }

    #[test]
    fn test_add_commutative() {
        let a = Tensor::vector(vec![1.25, -2.0, 3.5]);
        let b = Tensor::vector(vec![0.1, 0.2, -7.0]);
        assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }

    #[test]
    fn test_sub_self_is_zero() {
        let tensors = [
            Tensor::scalar(4.0),
            Tensor::vector(vec![1.0, -2.0, 3.0]),
            matrix(&[[1.0, 2.0], [3.0, 4.0]]),
            Tensor::from_shape(Shape::new(vec![2, 1, 2]), vec![9.0, 8.0, 7.0, 6.0]).unwrap(),
        ];
        for t in &tensors {
            let z = t.sub(t).unwrap();
            assert_eq!(z.shape(), t.shape());
            assert!(z.as_slice().iter().all(|&x| x == 0.0));
        }
    }

    #[test]
    fn test_mul() {
        let a = Tensor::vector(vec![2.0, -3.0, 4.0]);
        let b = Tensor::vector(vec![0.5, 2.0, 0.0]);
        assert_eq!(a.mul(&b).unwrap().as_slice(), &[1.0, -6.0, 0.0]);
    }

    #[test]
    fn test_div() {
        let a = Tensor::vector(vec![1.0, 9.0]);
        let b = Tensor::vector(vec![4.0, 3.0]);
        assert_eq!(a.div(&b).unwrap().as_slice(), &[0.25, 3.0]);
    }

    #[test]
    fn test_div_by_zero_follows_ieee() {
        let a = Tensor::vector(vec![1.0, -1.0, 0.0]);
        let b = Tensor::vector(vec![0.0, 0.0, 0.0]);
        let c = a.div(&b).unwrap();
        assert_eq!(c.as_slice()[0], f64::INFINITY);
        assert_eq!(c.as_slice()[1], f64::NEG_INFINITY);
        assert!(c.as_slice()[2].is_nan());
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let a = Tensor::vector(vec![1.0, 2.0, 3.0, 4.0]);
        let b = matrix(&[[1.0, 2.0], [3.0, 4.0]]);
        for result in [a.add(&b), a.sub(&b), a.mul(&b), a.div(&b)] {
            assert!(matches!(result, Err(TensorError::ShapeMismatch { .. })));
        }
    }

    #[test]
    fn test_inputs_untouched() {
        let a = Tensor::vector(vec![1.0, 2.0]);
        let b = Tensor::vector(vec![3.0, 4.0]);
        let _ = a.add(&b).unwrap();
        assert_eq!(a.as_slice(), &[1.0, 2.0]);
        assert_eq!(b.as_slice(), &[3.0, 4.0]);
    }
}
