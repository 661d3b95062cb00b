// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! CSV loading into `[rows, cols]` tensors.

use crate::DataError;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tensor_core::Tensor;

/// Parses header-less CSV from `reader` into a `[rows, cols]` tensor.
///
/// Surrounding whitespace in a field is ignored. Every record must have the
/// same number of fields.
///
/// # Errors
/// - [`DataError::Csv`] for malformed input or records of unequal length.
/// - [`DataError::ParseFloat`] for a non-numeric field; `row` and `col`
///   are 1-based.
/// - [`DataError::Empty`] if there are no records.
///
/// # Examples
/// ```
/// use data_io::read_csv;
/// let t = read_csv("1,2\n3,4\n".as_bytes()).unwrap();
/// assert_eq!(t.shape().dims(), &[2, 2]);
/// assert_eq!(t.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
/// ```
pub fn read_csv<R: Read>(reader: R) -> Result<Tensor, DataError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = record
            .iter()
            .enumerate()
            .map(|(j, field)| {
                field.parse::<f64>().map_err(|_| DataError::ParseFloat {
                    row: i + 1,
                    col: j + 1,
                    value: field.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(DataError::Empty);
    }

    Ok(Tensor::matrix(rows.as_slice())?)
}

/// Loads a header-less CSV file into a `[rows, cols]` tensor.
///
/// # Errors
/// [`DataError::Open`] if the file cannot be opened, otherwise as [`read_csv`].
pub fn load_csv(path: impl AsRef<Path>) -> Result<Tensor, DataError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DataError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let tensor = read_csv(file)?;
    tracing::debug!(
        path = %path.display(),
        shape = %tensor.shape(),
        "loaded csv"
    );
    Ok(tensor)
}
