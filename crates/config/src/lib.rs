//! Configuration models and loaders for the lunar lander simulation.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lander and environment parameters for a single run.
///
/// Missing fields fall back to [`LanderConfig::default`], which is the classic
/// 500 m descent over the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LanderConfig {
    pub initial_altitude_m: f64,
    /// Negative = downward.
    pub initial_velocity_m_s: f64,
    /// Total mass at start, propellant included.
    pub lander_mass_kg: f64,
    pub dry_mass_kg: f64,
    pub exhaust_velocity_m_s: f64,
    /// Negative = downward.
    pub gravity_m_s2: f64,
    pub time_step_s: f64,
}

impl Default for LanderConfig {
    fn default() -> Self {
        Self {
            initial_altitude_m: 500.0,
            initial_velocity_m_s: -50.0,
            lander_mass_kg: 1000.0,
            dry_mass_kg: 800.0,
            exhaust_velocity_m_s: 2500.0,
            gravity_m_s2: -1.62,
            time_step_s: 1.0,
        }
    }
}

impl LanderConfig {
    /// Propellant carried at start.
    pub fn propellant_mass_kg(&self) -> f64 {
        self.lander_mass_kg - self.dry_mass_kg
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to render TOML: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Load a lander configuration from a TOML or YAML file, chosen by extension.
pub fn load_lander_config<P: AsRef<Path>>(path: P) -> Result<LanderConfig, ConfigError> {
    let path = path.as_ref();
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

/// Render a configuration as TOML, suitable for feeding back through [`load_lander_config`].
pub fn to_toml_string(config: &LanderConfig) -> Result<String, ConfigError> {
    Ok(toml::to_string(config)?)
}
