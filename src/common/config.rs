//! Configuration file handling
//!
//! The sample inputs are hardcoded defaults; an optional `demo.toml` in the
//! working directory overrides them.

use serde::Deserialize;
use std::path::Path;

use super::{Error, Result};

/// Config file name, looked up in the working directory
const CONFIG_FILE: &str = "demo.toml";

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Sample inputs for the demo run
    #[serde(default)]
    pub samples: Samples,
}

/// Sample inputs
#[derive(Debug, Deserialize)]
pub struct Samples {
    /// Numbers fed to the square accumulator
    #[serde(default = "default_numbers")]
    pub numbers: Vec<f64>,

    /// How many Fibonacci terms to generate
    #[serde(default = "default_fib_count")]
    pub fib_count: i64,
}

impl Default for Samples {
    fn default() -> Self {
        Self {
            numbers: default_numbers(),
            fib_count: default_fib_count(),
        }
    }
}

fn default_numbers() -> Vec<f64> {
    vec![2.0, 3.0, 4.0, 5.0]
}

fn default_fib_count() -> i64 {
    8
}

impl Config {
    /// Load configuration from `demo.toml`
    ///
    /// Returns default configuration if the file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
                path: path.display().to_string(),
                error: e.to_string(),
            })?;
            return toml::from_str(&content).map_err(|e| Error::ConfigParse(e.to_string()));
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.samples.numbers, vec![2.0, 3.0, 4.0, 5.0]);
        assert_eq!(config.samples.fib_count, 8);
    }

    #[test]
    fn test_override_samples() {
        let config: Config =
            toml::from_str("[samples]\nnumbers = [1.5, 2.5]\nfib_count = 3\n").unwrap();
        assert_eq!(config.samples.numbers, vec![1.5, 2.5]);
        assert_eq!(config.samples.fib_count, 3);
    }

    #[test]
    fn test_integer_numbers_accepted() {
        let config: Config = toml::from_str("[samples]\nnumbers = [2, 3]\n").unwrap();
        assert_eq!(config.samples.numbers, vec![2.0, 3.0]);
        assert_eq!(config.samples.fib_count, 8);
    }
}
