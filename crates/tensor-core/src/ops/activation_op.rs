// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Pointwise activation functions.
//!
//! Each activation returns a new tensor with the same shape as its input.

use crate::{Tensor, TensorView};

/// Negative-side slope commonly used with [`leaky_relu`].
pub const DEFAULT_LEAKY_SLOPE: f64 = 0.01;

/// Rectified linear unit: `max(0, x)`.
pub fn relu(input: &TensorView<'_>) -> Tensor {
    map(input, |x| if x < 0.0 { 0.0 } else { x })
}

/// Leaky ReLU: `x` for `x >= 0`, otherwise `slope * x`.
///
/// # Examples
/// ```
/// use tensor_core::{leaky_relu, Tensor, DEFAULT_LEAKY_SLOPE};
/// let t = Tensor::vector(vec![2.0, -4.0]);
/// assert_eq!(leaky_relu(&t.view(), 0.25).as_slice(), &[2.0, -1.0]);
/// assert!(leaky_relu(&t.view(), DEFAULT_LEAKY_SLOPE).as_slice()[1] < 0.0);
/// ```
pub fn leaky_relu(input: &TensorView<'_>, slope: f64) -> Tensor {
    map(input, |x| if x < 0.0 { x * slope } else { x })
}

/// Logistic sigmoid: `1 / (1 + e^-x)`.
pub fn sigmoid(input: &TensorView<'_>) -> Tensor {
    map(input, |x| 1.0 / (1.0 + (-x).exp()))
}

/// Hyperbolic tangent.
pub fn tanh(input: &TensorView<'_>) -> Tensor {
    map(input, f64::tanh)
}

#[inline]
fn map(input: &TensorView<'_>, f: impl Fn(f64) -> f64) -> Tensor {
    let data = input.as_slice().iter().map(|&x| f(x)).collect();
    Tensor::from_parts(input.shape().clone(), data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_relu() {
        let t = Tensor::vector(vec![2.0, -3.0, 4.0, -5.0]);
        let y = relu(&t.view());
        assert_eq!(y.as_slice(), &[2.0, 0.0, 4.0, 0.0]);
        assert_eq!(y.shape(), t.shape());
    }

    #[test]
    fn test_leaky_relu() {
        let t = Tensor::vector(vec![2.0, -3.0, 4.0, -5.0]);
        let y = leaky_relu(&t.view(), DEFAULT_LEAKY_SLOPE);
        let expected = [2.0, -0.03, 4.0, -0.05];
        for (&out, &e) in y.as_slice().iter().zip(&expected) {
            assert!(approx_eq(out, e, 1e-12));
        }
    }

    #[test]
    fn test_leaky_relu_custom_slope() {
        let t = Tensor::vector(vec![-2.0, 1.0]);
        let y = leaky_relu(&t.view(), 0.5);
        assert_eq!(y.as_slice(), &[-1.0, 1.0]);
    }

    #[test]
    fn test_sigmoid_scalar() {
        let y = sigmoid(&Tensor::scalar(2.0).view());
        assert!(approx_eq(y.as_slice()[0], 1.0 / (1.0 + (-2.0f64).exp()), 1e-12));
    }

    #[test]
    fn test_sigmoid_matrix() {
        let t = Tensor::matrix(&[[2.0, -3.0], [4.0, -5.0]]).unwrap();
        let y = sigmoid(&t.view());
        assert_eq!(y.shape(), t.shape());
        for (&out, &x) in y.as_slice().iter().zip(t.as_slice()) {
            assert!(approx_eq(out, 1.0 / (1.0 + (-x).exp()), 1e-12));
        }
        assert!(approx_eq(sigmoid(&Tensor::scalar(0.0).view()).as_slice()[0], 0.5, 1e-12));
    }

    #[test]
    fn test_tanh() {
        let t = Tensor::vector(vec![0.0, 1.0, -2.0]);
        let y = tanh(&t.view());
        assert!(approx_eq(y.as_slice()[0], 0.0, 1e-12));
        assert!(approx_eq(y.as_slice()[1], 0.761_594_155_955_764_9, 1e-12));
        assert!(approx_eq(y.as_slice()[2], -0.964_027_580_075_817, 1e-12));
    }
}
