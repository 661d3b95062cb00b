// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `lintensor inspect` command: load a CSV file and describe the tensor.

use std::path::PathBuf;

pub fn execute(file: PathBuf) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║              lintensor · CSV Inspector               ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let tensor = data_io::load_csv(&file)
        .map_err(|e| anyhow::anyhow!("failed to load '{}': {e}", file.display()))?;

    // ── Summary ────────────────────────────────────────────────
    println!("  File:     {}", file.display());
    println!("  Shape:    {}", tensor.shape());
    println!("  Rank:     {}", tensor.rank());
    println!("  Elements: {}", tensor.num_elements());

    if !tensor.is_empty() {
        let data = tensor.as_slice();
        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = data.iter().sum::<f64>() / data.len() as f64;
        println!("  Range:    [{min}, {max}], mean {mean:.6}");
    }
    println!();

    // ── Data ───────────────────────────────────────────────────
    println!("  {tensor}");

    Ok(())
}
