// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Loss functions.
//!
//! Every loss compares predictions against targets element by element and
//! returns a shape-`[1]` tensor. Only the element counts must agree, so a
//! `[N]` target may be scored against an `[N, 1]` prediction.

use crate::{Tensor, TensorError, TensorView};

/// Mean squared error: `mean((p - t)^2)`.
///
/// # Errors
/// Returns [`TensorError::ShapeMismatch`] if the element counts differ.
///
/// # Examples
/// ```
/// use tensor_core::{mse_loss, Tensor};
/// let p = Tensor::vector(vec![1.0, 3.0]);
/// let t = Tensor::vector(vec![2.0, 1.0]);
/// assert_eq!(mse_loss(&p.view(), &t.view()).unwrap().as_slice(), &[2.5]);
/// ```
pub fn mse_loss(pred: &TensorView<'_>, target: &TensorView<'_>) -> Result<Tensor, TensorError> {
    check_counts("mse_loss", pred, target)?;
    let sum: f64 = pairs(pred, target).map(|(p, t)| (p - t) * (p - t)).sum();
    Ok(Tensor::scalar(sum / pred.as_slice().len() as f64))
}

/// Gradient of [`mse_loss`] with respect to the predictions: `2 * (p - t) / N`.
///
/// The result has the prediction's shape.
///
/// # Errors
/// Returns [`TensorError::ShapeMismatch`] if the element counts differ.
pub fn mse_loss_grad(
    pred: &TensorView<'_>,
    target: &TensorView<'_>,
) -> Result<Tensor, TensorError> {
    check_counts("mse_loss_grad", pred, target)?;
    let n = pred.as_slice().len() as f64;
    let data = pairs(pred, target).map(|(p, t)| 2.0 * (p - t) / n).collect();
    Ok(Tensor::from_parts(pred.shape().clone(), data))
}

/// Binary cross-entropy: `-mean(t * ln(p) + (1 - t) * ln(1 - p))`.
///
/// Predictions are probabilities and are not clamped, so a prediction of
/// exactly 0 or 1 against a disagreeing target yields `inf`.
///
/// # Errors
/// Returns [`TensorError::ShapeMismatch`] if the element counts differ.
pub fn binary_cross_entropy(
    pred: &TensorView<'_>,
    target: &TensorView<'_>,
) -> Result<Tensor, TensorError> {
    check_counts("binary_cross_entropy", pred, target)?;
    let sum: f64 = pairs(pred, target)
        .map(|(p, t)| -(t * p.ln() + (1.0 - t) * (1.0 - p).ln()))
        .sum();
    Ok(Tensor::scalar(sum / pred.as_slice().len() as f64))
}

/// Categorical cross-entropy: `-sum(t * ln(p)) / samples`.
///
/// A vector is one sample over all of its classes. For higher ranks the last
/// dimension holds the classes and every leading index is a sample.
///
/// # Errors
/// Returns [`TensorError::ShapeMismatch`] if the element counts differ.
pub fn categorical_cross_entropy(
    pred: &TensorView<'_>,
    target: &TensorView<'_>,
) -> Result<Tensor, TensorError> {
    check_counts("categorical_cross_entropy", pred, target)?;
    let len = pred.as_slice().len();
    let num_classes = match pred.shape().dims() {
        [_] => len,
        dims => dims.last().copied().unwrap_or(len),
    };
    let samples = if num_classes == 0 { 0 } else { len / num_classes };

    let sum: f64 = pairs(pred, target).map(|(p, t)| -t * p.ln()).sum();
    Ok(Tensor::scalar(sum / samples as f64))
}

fn check_counts(
    op: &'static str,
    pred: &TensorView<'_>,
    target: &TensorView<'_>,
) -> Result<(), TensorError> {
    if pred.as_slice().len() != target.as_slice().len() {
        return Err(TensorError::ShapeMismatch {
            op,
            lhs: pred.shape().clone(),
            rhs: target.shape().clone(),
        });
    }
    Ok(())
}

fn pairs<'a>(
    pred: &'a TensorView<'_>,
    target: &'a TensorView<'_>,
) -> impl Iterator<Item = (f64, f64)> + 'a {
    pred.as_slice()
        .iter()
        .copied()
        .zip(target.as_slice().iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Shape;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_mse_scalar() {
        let loss = mse_loss(&Tensor::scalar(4.0).view(), &Tensor::scalar(9.0).view()).unwrap();
        assert_eq!(loss.shape(), &Shape::scalar());
        assert!(approx_eq(loss.as_slice()[0], 25.0, 1e-12));
    }

    #[test]
    fn test_mse_vector() {
        let p = Tensor::vector(vec![2.0, -3.0, 4.0, -5.0]);
        let t = Tensor::vector(vec![6.0, 23.0, -2.0, 8.0]);
        let loss = mse_loss(&p.view(), &t.view()).unwrap();
        // (16 + 676 + 36 + 169) / 4
        assert!(approx_eq(loss.as_slice()[0], 224.25, 1e-12));
    }

    #[test]
    fn test_mse_matrix_matches_vector() {
        let p = Tensor::matrix(&[[2.0, -3.0], [4.0, -5.0]]).unwrap();
        let t = Tensor::matrix(&[[6.0, 23.0], [-2.0, 8.0]]).unwrap();
        let loss = mse_loss(&p.view(), &t.view()).unwrap();
        assert!(approx_eq(loss.as_slice()[0], 224.25, 1e-12));
    }

    #[test]
    fn test_mse_count_mismatch() {
        let p = Tensor::scalar(4.0);
        let t = Tensor::vector(vec![9.0, 2.0]);
        assert!(matches!(
            mse_loss(&p.view(), &t.view()),
            Err(TensorError::ShapeMismatch { op: "mse_loss", .. })
        ));
        assert!(binary_cross_entropy(&p.view(), &t.view()).is_err());
        assert!(categorical_cross_entropy(&p.view(), &t.view()).is_err());
        assert!(mse_loss_grad(&p.view(), &t.view()).is_err());
    }

    #[test]
    fn test_mse_grad() {
        let p = Tensor::from_shape(Shape::matrix(2, 1), vec![4.5, 6.0]).unwrap();
        let t = Tensor::vector(vec![5.0, 11.0]);
        let g = mse_loss_grad(&p.view(), &t.view()).unwrap();
        assert_eq!(g.shape(), p.shape());
        assert_eq!(g.as_slice(), &[-0.5, -5.0]);
    }

    #[test]
    fn test_binary_cross_entropy() {
        let p = Tensor::vector(vec![0.9, 0.2]);
        let t = Tensor::vector(vec![1.0, 0.0]);
        let loss = binary_cross_entropy(&p.view(), &t.view()).unwrap();
        let expected = -(0.9f64.ln() + 0.8f64.ln()) / 2.0;
        assert!(approx_eq(loss.as_slice()[0], expected, 1e-12));
    }

    #[test]
    fn test_categorical_cross_entropy_vector() {
        let p = Tensor::vector(vec![0.7, 0.2, 0.1]);
        let t = Tensor::vector(vec![1.0, 0.0, 0.0]);
        let loss = categorical_cross_entropy(&p.view(), &t.view()).unwrap();
        assert!(approx_eq(loss.as_slice()[0], -(0.7f64.ln()), 1e-12));
    }

    #[test]
    fn test_categorical_cross_entropy_batch() {
        let p = Tensor::matrix(&[[0.7, 0.3], [0.4, 0.6]]).unwrap();
        let t = Tensor::matrix(&[[1.0, 0.0], [0.0, 1.0]]).unwrap();
        let loss = categorical_cross_entropy(&p.view(), &t.view()).unwrap();
        let expected = -(0.7f64.ln() + 0.6f64.ln()) / 2.0;
        assert!(approx_eq(loss.as_slice()[0], expected, 1e-12));
    }
}
