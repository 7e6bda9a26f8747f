//! Trip script loading and parsing

use crate::trip::Step;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use vehicle_core::VehicleSpec;

/// Main application configuration (loaded from a trip script)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub vehicle: VehicleSpec,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub stop_on_error: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Txt,
    Json,
}

/// Load a trip script from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read trip script: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse trip script: {:?}", path))?;

    if config.steps.is_empty() {
        log::warn!("Trip script {:?} has no steps", path);
    }

    Ok(config)
}
