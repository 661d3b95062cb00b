// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Core tensor type and view abstractions.

use crate::{ops, Shape, TensorError, TensorPayload};
use rand::Rng;
use std::fmt;

/// An owned, n-dimensional tensor of `f64` stored in contiguous memory.
///
/// `Tensor` is the data carrier for every operation in the workspace. It owns
/// its buffer exclusively and exposes immutable views via [`TensorView`].
///
/// # Memory Layout
/// Data is stored in row-major (C) order: element `[i, j]` of a `[r, c]`
/// matrix lives at `data[i * c + j]`.
///
/// # Invariant
/// `shape.num_elements() == data.len()` for every tensor. Constructors that
/// could break it return a [`TensorError`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    shape: Shape,
    data: Vec<f64>,
}

impl Tensor {
    /// Creates a new tensor filled with zeros.
    ///
    /// # Examples
    /// ```
    /// use tensor_core::{Tensor, Shape};
    /// let t = Tensor::zeros(Shape::matrix(2, 3));
    /// assert_eq!(t.num_elements(), 6);
    /// ```
    pub fn zeros(shape: Shape) -> Self {
        Self::full(shape, 0.0)
    }

    /// Creates a new tensor with every element set to `value`.
    pub fn full(shape: Shape, value: f64) -> Self {
        let n = shape.num_elements();
        Self {
            shape,
            data: vec![value; n],
        }
    }

    /// Creates a scalar tensor of shape `[1]`.
    pub fn scalar(value: f64) -> Self {
        Self {
            shape: Shape::scalar(),
            data: vec![value],
        }
    }

    /// Creates a vector tensor whose shape is inferred as `[len]`.
    pub fn vector(values: impl Into<Vec<f64>>) -> Self {
        let data = values.into();
        Self {
            shape: Shape::vector(data.len()),
            data,
        }
    }

    /// Creates a tensor from flat row-major data and an explicit shape.
    ///
    /// # Errors
    /// Returns [`TensorError::ShapeMismatch`] if the shape's element count
    /// differs from `values.len()`.
    ///
    /// # Examples
    /// ```
    /// use tensor_core::{Tensor, Shape};
    /// let t = Tensor::from_shape(Shape::matrix(2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(t.get(&[1, 0]), Some(3.0));
    /// assert!(Tensor::from_shape(Shape::matrix(2, 2), vec![1.0]).is_err());
    /// ```
    pub fn from_shape(shape: Shape, values: impl Into<Vec<f64>>) -> Result<Self, TensorError> {
        let data = values.into();
        if shape.num_elements() != data.len() {
            return Err(TensorError::ShapeMismatch {
                op: "from_shape",
                lhs: shape,
                rhs: Shape::vector(data.len()),
            });
        }
        Ok(Self { shape, data })
    }

    /// Creates a `[rows, cols]` matrix by flattening nested rows.
    ///
    /// An empty slice of rows produces a `[0, 0]` tensor.
    ///
    /// # Errors
    /// Returns [`TensorError::RaggedRows`] if the rows have different lengths.
    pub fn matrix<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, TensorError> {
        let Some(first) = rows.first() else {
            return Ok(Self {
                shape: Shape::matrix(0, 0),
                data: Vec::new(),
            });
        };

        let cols = first.as_ref().len();
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(TensorError::RaggedRows {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            shape: Shape::matrix(rows.len(), cols),
            data,
        })
    }

    /// Creates a tensor from a [`TensorPayload`], optionally reshaping it.
    ///
    /// Without an explicit shape, scalars become `[1]`, flat payloads become
    /// `[len]` and nested payloads become `[rows, cols]`. With an explicit
    /// shape the flattened data must have exactly that many elements.
    pub fn from_payload(payload: TensorPayload, shape: Option<Shape>) -> Result<Self, TensorError> {
        let tensor = match payload {
            TensorPayload::Scalar(v) => Self::scalar(v),
            TensorPayload::Flat(values) => Self::vector(values),
            TensorPayload::Nested(rows) => Self::matrix(rows.as_slice())?,
        };
        match shape {
            Some(shape) => tensor.reshape(shape),
            None => Ok(tensor),
        }
    }

    /// Creates a `[rows, cols]` tensor of independent samples from `U[0, 1)`
    /// using the thread-local RNG.
    ///
    /// # Errors
    /// Returns [`TensorError::InvalidDimensions`] if either axis is zero.
    pub fn rand(rows: usize, cols: usize) -> Result<Self, TensorError> {
        Self::rand_with(rows, cols, &mut rand::thread_rng())
    }

    /// Like [`Tensor::rand`], drawing from the supplied generator.
    pub fn rand_with<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<Self, TensorError> {
        if rows == 0 || cols == 0 {
            return Err(TensorError::InvalidDimensions { rows, cols });
        }
        let data = (0..rows * cols).map(|_| rng.gen::<f64>()).collect();
        Ok(Self {
            shape: Shape::matrix(rows, cols),
            data,
        })
    }

    /// Builds a tensor from parts already known to agree.
    pub(crate) fn from_parts(shape: Shape, data: Vec<f64>) -> Self {
        debug_assert_eq!(shape.num_elements(), data.len());
        Self { shape, data }
    }

    /// Returns the tensor's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the number of axes (not the element count).
    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Returns the number of elements.
    pub fn num_elements(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the tensor holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the element at a multi-dimensional index.
    pub fn get(&self, index: &[usize]) -> Option<f64> {
        self.shape.offset(index).map(|o| self.data[o])
    }

    /// Returns an immutable view over this tensor's data.
    pub fn view(&self) -> TensorView<'_> {
        TensorView {
            shape: &self.shape,
            data: &self.data,
        }
    }

    /// Returns the row-major data.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns the row-major data mutably. The shape cannot change through it.
    pub fn as_slice_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consumes the tensor, returning its data buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Reinterprets the data under a new shape with the same element count.
    pub fn reshape(self, shape: Shape) -> Result<Self, TensorError> {
        if shape.num_elements() != self.data.len() {
            return Err(TensorError::ShapeMismatch {
                op: "reshape",
                lhs: self.shape,
                rhs: shape,
            });
        }
        Ok(Self {
            shape,
            data: self.data,
        })
    }

    /// Fills the tensor with a constant value.
    pub fn fill(&mut self, value: f64) {
        self.data.iter_mut().for_each(|x| *x = value);
    }

    /// Elementwise `self + other`. See [`crate::add`].
    pub fn add(&self, other: &Tensor) -> Result<Tensor, TensorError> {
        ops::add(&self.view(), &other.view())
    }

    /// Elementwise `self - other`. See [`crate::sub`].
    pub fn sub(&self, other: &Tensor) -> Result<Tensor, TensorError> {
        ops::sub(&self.view(), &other.view())
    }

    /// Elementwise `self * other`. See [`crate::mul`].
    pub fn mul(&self, other: &Tensor) -> Result<Tensor, TensorError> {
        ops::mul(&self.view(), &other.view())
    }

    /// Elementwise `self / other`. See [`crate::div`].
    pub fn div(&self, other: &Tensor) -> Result<Tensor, TensorError> {
        ops::div(&self.view(), &other.view())
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.view().fmt(f)
    }
}

/// A borrowed, read-only view over a [`Tensor`]'s data.
///
/// Views are zero-copy and tied to the lifetime of the source tensor,
/// enforced by the borrow checker.
#[derive(Debug, Clone, Copy)]
pub struct TensorView<'a> {
    shape: &'a Shape,
    data: &'a [f64],
}

impl<'a> TensorView<'a> {
    /// Creates a view from raw parts.
    ///
    /// # Errors
    /// Returns [`TensorError::ShapeMismatch`] if `data` does not hold exactly
    /// `shape.num_elements()` values.
    pub fn from_parts(shape: &'a Shape, data: &'a [f64]) -> Result<Self, TensorError> {
        if shape.num_elements() != data.len() {
            return Err(TensorError::ShapeMismatch {
                op: "view",
                lhs: shape.clone(),
                rhs: Shape::vector(data.len()),
            });
        }
        Ok(Self { shape, data })
    }

    /// Returns the shape of the viewed tensor.
    pub fn shape(&self) -> &'a Shape {
        self.shape
    }

    /// Returns the number of axes.
    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Returns the row-major data.
    pub fn as_slice(&self) -> &'a [f64] {
        self.data
    }

    /// Copies the view into a new owned tensor.
    pub fn to_tensor(&self) -> Tensor {
        Tensor::from_parts(self.shape.clone(), self.data.to_vec())
    }
}

impl fmt::Display for TensorView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_nested(f, self.shape.dims(), self.data)
    }
}

/// Writes `data` as nested brackets, one level per axis.
fn fmt_nested(f: &mut fmt::Formatter<'_>, dims: &[usize], data: &[f64]) -> fmt::Result {
    let Some((&len, rest)) = dims.split_first() else {
        return match data.first() {
            Some(v) => write!(f, "{v}"),
            None => Ok(()),
        };
    };

    write!(f, "[")?;
    if len > 0 {
        let chunk = data.len() / len;
        for i in 0..len {
            if i > 0 {
                write!(f, ", ")?;
            }
            fmt_nested(f, rest, &data[i * chunk..(i + 1) * chunk])?;
        }
    }
    write!(f, "]")
}
