use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,
    /// Week selected at startup; latest week when unset.
    #[serde(default)]
    pub default_week: Option<String>,
    #[serde(default)]
    pub heatmap: HeatmapConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

fn default_dataset_path() -> String {
    "grid-data.json".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct HeatmapConfig {
    #[serde(default = "default_low_color")]
    pub low_color: String,
    #[serde(default = "default_high_color")]
    pub high_color: String,
}

fn default_low_color() -> String {
    "#1e293b".to_string()
}

fn default_high_color() -> String {
    "#22c55e".to_string()
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            low_color: default_low_color(),
            high_color: default_high_color(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    /// Cap on rows printed per team table.
    #[serde(default = "default_max_team_rows")]
    pub max_team_rows: usize,
}

fn default_max_team_rows() -> usize {
    10
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_team_rows: default_max_team_rows(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| "Failed to parse config TOML")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parses() {
        let config = Config::load(Path::new("config.toml")).unwrap();
        assert_eq!(config.dataset_path, "grid-data.json");
        assert!(config.heatmap.low_color.starts_with('#'));
        assert_eq!(config.report.max_team_rows, 10);
    }

    #[test]
    fn test_defaults_from_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.dataset_path, "grid-data.json");
        assert!(config.default_week.is_none());
        assert_eq!(config.heatmap.high_color, "#22c55e");
    }
}
