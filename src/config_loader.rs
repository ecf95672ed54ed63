use anyhow::{anyhow, Result};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration structure containing all config sections
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub app: AppInfo,
}

/// Where the price catalog and recipe files live
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_prices_file")]
    pub prices_file: PathBuf,

    #[serde(default = "default_recipes_dir")]
    pub recipes_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            prices_file: default_prices_file(),
            recipes_dir: default_recipes_dir(),
        }
    }
}

fn default_prices_file() -> PathBuf {
    PathBuf::from("ingredient_prices.yaml")
}

fn default_recipes_dir() -> PathBuf {
    PathBuf::from("recipes")
}

/// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppInfo {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Recipes priced below this fraction of their ingredients are flagged
    #[serde(default = "default_low_coverage_threshold")]
    pub low_coverage_threshold: f64,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            low_coverage_threshold: default_low_coverage_threshold(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_low_coverage_threshold() -> f64 {
    0.5
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Read the file
        let config_str = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file '{}': {}", path.display(), e))?;

        // Parse the TOML
        let config = Self::from_toml_str(&config_str)
            .map_err(|e| anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;

        info!("Loaded configuration from {}", path.display());
        debug!(
            "Prices: {}, recipes: {}",
            config.paths.prices_file.display(),
            config.paths.recipes_dir.display()
        );

        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the explicit path if given, otherwise `./config.toml` when present,
    /// otherwise the built-in defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let local = Path::new("./config.toml");
        if local.is_file() {
            Self::from_file(local)
        } else {
            debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Log filter derived from the configured level
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.app.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    fn validate(&self) -> Result<()> {
        let threshold = self.app.low_coverage_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(anyhow!(
                "low_coverage_threshold must be between 0 and 1, got {}",
                threshold
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_empty_file() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.paths.prices_file, PathBuf::from("ingredient_prices.yaml"));
        assert_eq!(config.paths.recipes_dir, PathBuf::from("recipes"));
        assert_eq!(config.app.log_level, "info");
        assert_eq!(config.app.low_coverage_threshold, 0.5);
    }

    #[test]
    fn test_sections_override_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
[paths]
prices_file = "data/preise.yaml"

[app]
log_level = "debug"
low_coverage_threshold = 0.8
"#,
        )
        .unwrap();
        assert_eq!(config.paths.prices_file, PathBuf::from("data/preise.yaml"));
        assert_eq!(config.paths.recipes_dir, PathBuf::from("recipes"));
        assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);
        assert_eq!(config.app.low_coverage_threshold, 0.8);
    }

    #[test]
    fn test_threshold_out_of_range() {
        assert!(AppConfig::from_toml_str("[app]\nlow_coverage_threshold = 1.5\n").is_err());
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_info() {
        let config = AppConfig::from_toml_str("[app]\nlog_level = \"loud\"\n").unwrap();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
    }
}
