// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tagged tensor input: a scalar, a flat list, or a list of rows.
//!
//! [`TensorPayload`] deserializes untagged, so a config value written as
//! `0.5`, `[1.0, 2.0]` or `[[1.0], [2.0]]` gets the matching variant; the
//! trainer reads its `weights` and `biases` keys this way. Values arriving as
//! untyped JSON go through [`TensorPayload::from_json`], which rejects
//! anything outside those three forms.

use crate::TensorError;
use serde_json::Value;

/// The accepted forms of literal tensor data.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum TensorPayload {
    /// A single number; becomes shape `[1]`.
    Scalar(f64),
    /// A flat list; becomes shape `[len]` unless reshaped.
    Flat(Vec<f64>),
    /// A list of equal-length rows; becomes shape `[rows, cols]`.
    Nested(Vec<Vec<f64>>),
}

impl TensorPayload {
    /// Interprets a JSON value as tensor data.
    ///
    /// # Errors
    /// Returns [`TensorError::UnsupportedType`] for strings, booleans, nulls,
    /// objects, arrays mixing numbers and lists, or nesting deeper than two levels.
    ///
    /// # Examples
    /// ```
    /// use tensor_core::TensorPayload;
    /// let p = TensorPayload::from_json(&serde_json::json!([[1, 2], [3, 4]])).unwrap();
    /// assert_eq!(p, TensorPayload::Nested(vec![vec![1.0, 2.0], vec![3.0, 4.0]]));
    /// assert!(TensorPayload::from_json(&serde_json::json!("1.0")).is_err());
    /// ```
    pub fn from_json(value: &Value) -> Result<Self, TensorError> {
        match value {
            Value::Number(_) => number(value).map(Self::Scalar),
            Value::Array(items) if items.iter().all(Value::is_number) => items
                .iter()
                .map(number)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Flat),
            Value::Array(items) if items.iter().all(Value::is_array) => items
                .iter()
                .filter_map(Value::as_array)
                .map(|cells| cells.iter().map(number).collect::<Result<Vec<_>, _>>())
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Nested),
            Value::Array(_) => Err(TensorError::UnsupportedType {
                kind: "array mixing numbers and lists",
            }),
            other => Err(TensorError::UnsupportedType {
                kind: json_kind(other),
            }),
        }
    }

    /// Returns the number of scalar values carried by the payload.
    pub fn num_elements(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Flat(values) => values.len(),
            Self::Nested(rows) => rows.iter().map(Vec::len).sum(),
        }
    }
}

fn number(value: &Value) -> Result<f64, TensorError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or(TensorError::UnsupportedType {
            kind: "non-finite number",
        }),
        Value::Array(_) => Err(TensorError::UnsupportedType {
            kind: "array nested deeper than two levels",
        }),
        other => Err(TensorError::UnsupportedType {
            kind: json_kind(other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<f64> for TensorPayload {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<f64>> for TensorPayload {
    fn from(values: Vec<f64>) -> Self {
        Self::Flat(values)
    }
}

impl From<Vec<Vec<f64>>> for TensorPayload {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self::Nested(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_scalar() {
        assert_eq!(
            TensorPayload::from_json(&json!(2)).unwrap(),
            TensorPayload::Scalar(2.0)
        );
        assert_eq!(
            TensorPayload::from_json(&json!(-0.5)).unwrap(),
            TensorPayload::Scalar(-0.5)
        );
    }

    #[test]
    fn test_from_json_flat() {
        assert_eq!(
            TensorPayload::from_json(&json!([1.5, 2, -3])).unwrap(),
            TensorPayload::Flat(vec![1.5, 2.0, -3.0])
        );
    }

    #[test]
    fn test_from_json_nested() {
        let p = TensorPayload::from_json(&json!([[1, 2], [3, 4]])).unwrap();
        assert_eq!(p.num_elements(), 4);
        assert!(matches!(p, TensorPayload::Nested(_)));
    }

    #[test]
    fn test_from_json_unsupported() {
        for value in [
            json!("text"),
            json!(true),
            json!(null),
            json!({"a": 1}),
            json!([1, [2]]),
            json!([[1, "2"]]),
            json!([[[1.0]]]),
        ] {
            let err = TensorPayload::from_json(&value).unwrap_err();
            assert!(
                matches!(err, TensorError::UnsupportedType { .. }),
                "expected UnsupportedType for {value}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_untagged_deserialize() {
        #[derive(serde::Deserialize)]
        struct Doc {
            a: TensorPayload,
            b: TensorPayload,
            c: TensorPayload,
        }
        let doc: Doc = serde_json::from_str(r#"{"a": 1.0, "b": [1.0, 2.0], "c": [[1.0], [2.0]]}"#)
            .unwrap();
        assert_eq!(doc.a, TensorPayload::Scalar(1.0));
        assert_eq!(doc.b, TensorPayload::Flat(vec![1.0, 2.0]));
        assert_eq!(doc.c, TensorPayload::Nested(vec![vec![1.0], vec![2.0]]));
    }
}
