// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # data-io
//!
//! Moves 2-D tensors in and out of header-less CSV files.
//!
//! Every record is one row and every field one `f64`. Loading yields a
//! `[rows, cols]` tensor; saving accepts only 2-D tensors and writes each
//! value in its shortest round-trip decimal form.

mod error;
mod loader;
mod writer;

pub use error::DataError;
pub use loader::{load_csv, read_csv};
pub use writer::{save_csv, write_csv};
