// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! CSV output of 2-D tensors.

use crate::DataError;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tensor_core::Tensor;

/// Writes a 2-D tensor as header-less CSV, one record per row.
///
/// Values use the shortest decimal that round-trips, never an exponent.
///
/// # Errors
/// [`DataError::NotAMatrix`] if the tensor is not 2-D, or a write error.
///
/// # Examples
/// ```
/// use data_io::write_csv;
/// use tensor_core::Tensor;
/// let mut out = Vec::new();
/// write_csv(&Tensor::matrix(&[[1.0, 2.5], [3.0, -4.0]]).unwrap(), &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "1,2.5\n3,-4\n");
/// ```
pub fn write_csv<W: Write>(tensor: &Tensor, writer: W) -> Result<(), DataError> {
    let Some((_, cols)) = tensor.shape().as_matrix() else {
        return Err(DataError::NotAMatrix {
            shape: tensor.shape().clone(),
        });
    };

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    if cols > 0 {
        for row in tensor.as_slice().chunks_exact(cols) {
            wtr.write_record(row.iter().map(f64::to_string))?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Saves a 2-D tensor to `path`, creating or truncating the file.
///
/// # Errors
/// [`DataError::Open`] if the file cannot be created, otherwise as [`write_csv`].
pub fn save_csv(tensor: &Tensor, path: impl AsRef<Path>) -> Result<(), DataError> {
    let path = path.as_ref();
    if tensor.rank() != 2 {
        return Err(DataError::NotAMatrix {
            shape: tensor.shape().clone(),
        });
    }
    let file = File::create(path).map_err(|source| DataError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    write_csv(tensor, file)?;
    tracing::info!(
        path = %path.display(),
        shape = %tensor.shape(),
        "saved csv"
    );
    Ok(())
}
