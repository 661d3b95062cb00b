// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: end-to-end training pipeline.
//!
//! These tests exercise the complete flow from CSV files or literal tensors →
//! loading → layer construction → training → prediction, proving that the
//! four library crates compose correctly.

use nn::{Linear, Optimizer, Sgd};
use std::path::PathBuf;
use tensor_core::{mse_loss, mse_loss_grad, Tensor};
use trainer::{TrainConfig, Trainer};

// ── Helpers ────────────────────────────────────────────────────

/// Noise-free samples of `y = 2*x0 - x1 + 1`.
fn affine_dataset() -> (Tensor, Tensor) {
    let rows = [
        [0.0, 0.0],
        [1.0, 0.0],
        [0.0, 1.0],
        [1.0, 1.0],
        [2.0, 1.0],
        [1.0, 2.0],
        [0.5, -0.5],
        [-1.0, 0.5],
    ];
    let targets: Vec<f64> = rows.iter().map(|r| 2.0 * r[0] - r[1] + 1.0).collect();
    (Tensor::matrix(&rows).unwrap(), Tensor::vector(targets))
}

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("lintensor-it-{}-{name}", std::process::id()))
}

// ── Tests ──────────────────────────────────────────────────────

#[test]
fn test_convergence_smoke() {
    let (x, y) = affine_dataset();
    let config = TrainConfig {
        epochs: 100,
        learning_rate: 0.05,
        seed: Some(11),
        ..Default::default()
    };

    let mut trainer = Trainer::new(config).load(x, y).unwrap().prepare().unwrap();
    let metrics = trainer.fit().unwrap();

    let first = metrics.initial_loss().unwrap();
    let last = metrics.final_loss().unwrap();
    assert_eq!(metrics.epochs(), 100);
    assert!(last < first, "loss did not decrease: {first} -> {last}");
}

#[test]
fn test_long_run_recovers_parameters() {
    let (x, y) = affine_dataset();
    let config = TrainConfig {
        epochs: 3000,
        learning_rate: 0.1,
        log_every: 500,
        weights: Some(vec![0.0, 0.0]),
        ..Default::default()
    };

    let mut trainer = Trainer::new(config).load(x, y).unwrap().prepare().unwrap();
    trainer.fit().unwrap();

    let layer = trainer.into_layer();
    assert!((layer.weights()[0] - 2.0).abs() < 1e-3);
    assert!((layer.weights()[1] + 1.0).abs() < 1e-3);
    assert!((layer.biases()[0] - 1.0).abs() < 1e-3);
}

#[test]
fn test_momentum_also_converges() {
    let (x, y) = affine_dataset();
    let config = TrainConfig {
        epochs: 200,
        learning_rate: 0.02,
        momentum: 0.9,
        seed: Some(5),
        ..Default::default()
    };

    let mut trainer = Trainer::new(config).load(x, y).unwrap().prepare().unwrap();
    let metrics = trainer.fit().unwrap();
    assert_eq!(metrics.optimizer, "sgd-momentum");
    assert!(metrics.final_loss().unwrap() < metrics.initial_loss().unwrap());
}

#[test]
fn test_trainer_matches_manual_loop() {
    let (x, y) = affine_dataset();
    let y = y.reshape(tensor_core::Shape::matrix(8, 1)).unwrap();
    let start = Linear::new(vec![0.3, -0.2], vec![0.1]).unwrap();

    let mut manual = start.clone();
    let mut opt = Sgd::new(0.05);
    for _ in 0..20 {
        let pred = manual.forward(&x).unwrap();
        let grad = mse_loss_grad(&pred.view(), &y.view()).unwrap();
        manual.backward(&x, &grad).unwrap();
        opt.step(&mut manual);
    }

    let config = TrainConfig {
        epochs: 20,
        learning_rate: 0.05,
        ..Default::default()
    };
    let mut trainer = Trainer::new(config)
        .load(x.clone(), y.clone())
        .unwrap()
        .prepare_with(start)
        .unwrap();
    trainer.fit().unwrap();

    assert_eq!(trainer.layer(), &manual);
    let final_pred = manual.forward(&x).unwrap();
    assert!(mse_loss(&final_pred.view(), &y.view()).unwrap().as_slice()[0].is_finite());
}

#[test]
fn test_csv_pipeline() {
    let inputs = temp_file("inputs.csv");
    let targets = temp_file("targets.csv");
    let output = temp_file("predictions.csv");
    std::fs::write(&inputs, "1,2\n3,4\n").unwrap();
    std::fs::write(&targets, "5\n11\n").unwrap();

    let config = TrainConfig {
        weights: Some(vec![1.0, 2.0]),
        biases: Some(vec![0.5]),
        ..Default::default()
    };
    let mut trainer = Trainer::new(config)
        .load_csv(&inputs, &targets)
        .unwrap()
        .prepare()
        .unwrap();
    let metrics = trainer.fit().unwrap();
    assert!(metrics.final_loss().unwrap() < metrics.initial_loss().unwrap());

    let sample = Tensor::matrix(&[[5.0, 6.0]]).unwrap();
    let prediction = trainer.predict(&sample).unwrap();
    data_io::save_csv(&prediction, &output).unwrap();
    assert_eq!(data_io::load_csv(&output).unwrap(), prediction);

    for path in [inputs, targets, output] {
        std::fs::remove_file(path).ok();
    }
}

#[test]
fn test_missing_csv_is_data_error() {
    let result = Trainer::new(TrainConfig::default())
        .load_csv(&temp_file("absent-x.csv"), &temp_file("absent-y.csv"));
    assert!(matches!(result, Err(trainer::TrainError::Data(_))));
}
