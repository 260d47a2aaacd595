use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub building: BuildingConfig,
    pub elevator: ElevatorConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BuildingConfig {
    pub floors: usize,
    /// Reject requests for floors the building does not have.
    pub strict_floors: bool,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            floors: 10,
            strict_floors: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ElevatorConfig {
    pub model: String,
    pub inspected_by: String,
    /// RFC 3339, e.g. "2024-03-01T09:00:00Z". Unset means now.
    pub inspection_date: Option<DateTime<Utc>>,
}

impl Default for ElevatorConfig {
    fn default() -> Self {
        Self {
            model: "Model1".to_string(),
            inspected_by: "Inspector".to_string(),
            inspection_date: None,
        }
    }
}

pub fn parse_config(raw: &str) -> anyhow::Result<Config> {
    toml::from_str(raw).context("failed to parse configuration")
}

pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<Config> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration file {}", path.display()))?;
    parse_config(&raw).with_context(|| format!("in {}", path.display()))
}
