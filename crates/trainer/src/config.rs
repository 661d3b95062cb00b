// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Training configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! epochs = 100
//! learning_rate = 0.01
//! momentum = 0.0
//! log_every = 10
//! seed = 42
//! weights = [1.0, 2.0]
//! biases = [0.5]
//! ```
//!
//! Only `epochs` and `learning_rate` are required. Without `weights` the layer
//! is initialized randomly, reproducibly when `seed` is set.
//!
//! `weights` and `biases` accept any tensor literal: a bare number
//! (`biases = 0.5`), a list, or a list of rows such as a weight column
//! `weights = [[1.0], [2.0]]`. Each is flattened row-major.

use crate::TrainError;
use nn::{Linear, Optimizer, Sgd};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use tensor_core::{Tensor, TensorPayload};

/// Configuration for a training run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrainConfig {
    /// Number of full-batch epochs.
    pub epochs: usize,
    /// Gradient-descent step size.
    pub learning_rate: f64,
    /// Momentum coefficient in `[0, 1)`; zero selects plain SGD.
    #[serde(default)]
    pub momentum: f64,
    /// Log the loss every this many epochs.
    #[serde(default = "default_log_every")]
    pub log_every: usize,
    /// Seed for random weight initialization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Initial weights, one per input feature.
    #[serde(
        default,
        deserialize_with = "flattened_payload",
        skip_serializing_if = "Option::is_none"
    )]
    pub weights: Option<Vec<f64>>,
    /// Initial biases, cycled over batch rows.
    #[serde(
        default,
        deserialize_with = "flattened_payload",
        skip_serializing_if = "Option::is_none"
    )]
    pub biases: Option<Vec<f64>>,
}

fn default_log_every() -> usize {
    10
}

/// Reads a scalar, flat or nested tensor literal as a flat parameter list.
fn flattened_payload<'de, D>(deserializer: D) -> Result<Option<Vec<f64>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    Option::<TensorPayload>::deserialize(deserializer)?
        .map(|payload| Tensor::from_payload(payload, None).map(Tensor::into_vec))
        .transpose()
        .map_err(serde::de::Error::custom)
}

impl TrainConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, TrainError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TrainError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, TrainError> {
        toml::from_str(toml_str).map_err(|e| TrainError::Config(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, TrainError> {
        toml::to_string_pretty(self)
            .map_err(|e| TrainError::Config(format!("TOML serialise error: {e}")))
    }

    /// Checks that every setting is in range.
    pub fn validate(&self) -> Result<(), TrainError> {
        if self.epochs == 0 {
            return Err(TrainError::Config("epochs must be at least 1".into()));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(TrainError::Config(format!(
                "learning_rate must be finite and positive, got {}",
                self.learning_rate
            )));
        }
        if !(0.0..1.0).contains(&self.momentum) {
            return Err(TrainError::Config(format!(
                "momentum must be in [0, 1), got {}",
                self.momentum
            )));
        }
        if self.log_every == 0 {
            return Err(TrainError::Config("log_every must be at least 1".into()));
        }
        if matches!(&self.weights, Some(w) if w.is_empty()) {
            return Err(TrainError::Config("weights must not be empty".into()));
        }
        if matches!(&self.biases, Some(b) if b.is_empty()) {
            return Err(TrainError::Config("biases must not be empty".into()));
        }
        Ok(())
    }

    /// Creates the optimizer specified by this config.
    pub fn create_optimizer(&self) -> Result<Box<dyn Optimizer>, TrainError> {
        self.validate()?;
        Ok(Box::new(Sgd::with_momentum(self.learning_rate, self.momentum)))
    }

    /// Creates the initial layer for `in_features` input columns.
    ///
    /// Configured weights must match `in_features`. Missing weights are drawn
    /// at random and missing biases default to a single zero.
    pub fn create_layer(&self, in_features: usize) -> Result<Linear, TrainError> {
        self.validate()?;

        let weights = match &self.weights {
            Some(w) if w.len() != in_features => {
                return Err(TrainError::Config(format!(
                    "{} configured weights for {in_features} input features",
                    w.len()
                )));
            }
            Some(w) => w.clone(),
            None => {
                let random = match self.seed {
                    Some(seed) => Linear::random(in_features, &mut StdRng::seed_from_u64(seed)),
                    None => Linear::random(in_features, &mut rand::thread_rng()),
                }?;
                random.weights().to_vec()
            }
        };
        let biases = self.biases.clone().unwrap_or_else(|| vec![0.0]);

        Ok(Linear::new(weights, biases)?)
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            epochs: 100,
            learning_rate: 0.01,
            momentum: 0.0,
            log_every: default_log_every(),
            seed: None,
            weights: None,
            biases: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = TrainConfig::default();
        assert_eq!(c.epochs, 100);
        assert_eq!(c.learning_rate, 0.01);
        assert_eq!(c.log_every, 10);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
epochs = 250
learning_rate = 0.05
momentum = 0.5
seed = 7
weights = [1.0, 2.0]
biases = [0.5]
"#;
        let c = TrainConfig::from_toml(toml).unwrap();
        assert_eq!(c.epochs, 250);
        assert_eq!(c.learning_rate, 0.05);
        assert_eq!(c.momentum, 0.5);
        assert_eq!(c.log_every, 10);
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.weights, Some(vec![1.0, 2.0]));
        assert_eq!(c.biases, Some(vec![0.5]));
    }

    #[test]
    fn test_from_toml_parameter_literals() {
        let toml = r#"
epochs = 5
learning_rate = 0.1
weights = [[1.0], [2.0]]
biases = 0.5
"#;
        let c = TrainConfig::from_toml(toml).unwrap();
        assert_eq!(c.weights, Some(vec![1.0, 2.0]));
        assert_eq!(c.biases, Some(vec![0.5]));
        assert_eq!(c.create_layer(2).unwrap().weights(), &[1.0, 2.0]);
    }

    #[test]
    fn test_from_toml_ragged_weights() {
        let toml = "epochs = 5\nlearning_rate = 0.1\nweights = [[1.0, 2.0], [3.0]]\n";
        assert!(matches!(
            TrainConfig::from_toml(toml),
            Err(TrainError::Config(msg)) if msg.contains("ragged rows")
        ));
    }

    #[test]
    fn test_from_toml_minimal() {
        let c = TrainConfig::from_toml("epochs = 5\nlearning_rate = 0.1\n").unwrap();
        assert_eq!(c.momentum, 0.0);
        assert_eq!(c.weights, None);
    }

    #[test]
    fn test_from_toml_missing_field() {
        assert!(matches!(
            TrainConfig::from_toml("epochs = 5\n"),
            Err(TrainError::Config(_))
        ));
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let c = TrainConfig {
            seed: Some(3),
            weights: Some(vec![0.25, -1.0]),
            ..Default::default()
        };
        let toml = c.to_toml().unwrap();
        let back = TrainConfig::from_toml(&toml).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let bad = [
            TrainConfig { epochs: 0, ..Default::default() },
            TrainConfig { learning_rate: 0.0, ..Default::default() },
            TrainConfig { learning_rate: f64::NAN, ..Default::default() },
            TrainConfig { momentum: 1.0, ..Default::default() },
            TrainConfig { momentum: -0.1, ..Default::default() },
            TrainConfig { log_every: 0, ..Default::default() },
            TrainConfig { weights: Some(vec![]), ..Default::default() },
            TrainConfig { biases: Some(vec![]), ..Default::default() },
        ];
        for c in bad {
            assert!(c.validate().is_err(), "expected {c:?} to be rejected");
        }
    }

    #[test]
    fn test_create_optimizer() {
        let plain = TrainConfig::default().create_optimizer().unwrap();
        assert_eq!(plain.name(), "sgd");

        let c = TrainConfig { momentum: 0.9, ..Default::default() };
        assert_eq!(c.create_optimizer().unwrap().name(), "sgd-momentum");
    }

    #[test]
    fn test_create_layer_from_config() {
        let c = TrainConfig {
            weights: Some(vec![1.0, 2.0]),
            biases: Some(vec![0.5]),
            ..Default::default()
        };
        let layer = c.create_layer(2).unwrap();
        assert_eq!(layer.weights(), &[1.0, 2.0]);
        assert_eq!(layer.biases(), &[0.5]);
        assert!(c.create_layer(3).is_err());
    }

    #[test]
    fn test_create_layer_seeded() {
        let c = TrainConfig { seed: Some(42), ..Default::default() };
        let a = c.create_layer(4).unwrap();
        let b = c.create_layer(4).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.in_features(), 4);
        assert_eq!(a.biases(), &[0.0]);
    }
}
