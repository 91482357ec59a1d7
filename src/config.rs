//! Instance configuration.
//!
//! Describes how to generate a random instance. Loaded from JSON; every
//! field is optional and falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{TspError, TspResult};
use crate::models::{generate_points, Point};

/// Parameters for a randomly generated instance.
///
/// # Examples
///
/// ```
/// use tsp_construct::config::InstanceConfig;
///
/// let config: InstanceConfig = serde_json::from_str(r#"{ "num_cities": 25 }"#).unwrap();
/// assert_eq!(config.num_cities, 25);
/// assert_eq!(config.width, 100.0);
/// assert!(config.seed.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstanceConfig {
    /// Number of cities to generate.
    pub num_cities: usize,
    /// Width of the generation area.
    pub width: f64,
    /// Height of the generation area.
    pub height: f64,
    /// RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            num_cities: 10,
            width: 100.0,
            height: 100.0,
            seed: None,
        }
    }
}

impl InstanceConfig {
    /// Reads a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> TspResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the number of cities.
    pub fn with_num_cities(mut self, n: usize) -> Self {
        self.num_cities = n;
        self
    }

    /// Sets the generation area.
    pub fn with_area(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the generation area is a positive finite rectangle.
    pub fn validate(&self) -> TspResult<()> {
        if !(self.width.is_finite() && self.width > 0.0)
            || !(self.height.is_finite() && self.height > 0.0)
        {
            return Err(TspError::invalid_input(format!(
                "area {}x{} must be positive and finite",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Generates the configured instance.
    pub fn generate(&self) -> TspResult<Vec<Point>> {
        self.validate()?;
        generate_points(self.num_cities, self.width, self.height, self.seed)
    }
}
