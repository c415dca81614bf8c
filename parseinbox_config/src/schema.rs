use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

// Label overrides are owned by the extraction crate
use parseinbox_extract::LabelSet;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub labels: LabelSet,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Text shown in place of a field that was not found.
    #[serde(default = "DisplayConfig::default_absent_marker")]
    pub absent_marker: String,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            absent_marker: Self::default_absent_marker(),
            format: OutputFormat::default(),
        }
    }
}

impl DisplayConfig {
    fn default_absent_marker() -> String {
        "N/A".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("parseinbox"))
    }

    pub fn path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'parseinbox init' to create config.",
                config_path.display()
            );
        }

        Self::load_from(&config_path)
    }

    /// Load the config file if there is one, otherwise use defaults.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let config_path = Self::path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            debug!(path = %config_path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        Self::default().write_to(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - labels: label text for each field and user section");
        println!("   - labels.section_terminators: extra labels that end a user section");
        println!("   - display.absent_marker: text shown for fields that were not found");
        println!("   - display.format: default output format (text or json)");
        println!();
        Ok(())
    }

    pub fn write_to(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").expect("empty config should deserialize");
        assert_eq!(config, Config::default());
        assert_eq!(config.display.absent_marker, "N/A");
        assert_eq!(config.display.format, OutputFormat::Text);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_partial_display_section() {
        let config: Config = serde_json::from_str(r#"{"display": {"format": "json"}}"#)
            .expect("partial config should deserialize");
        assert_eq!(config.display.format, OutputFormat::Json);
        assert_eq!(config.display.absent_marker, "N/A");
        assert_eq!(config.labels.user_names, "User Full Name");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_write_then_load() {
        let path = std::env::temp_dir().join(format!(
            "parseinbox-config-test-{}.json",
            std::process::id()
        ));

        let mut config = Config::default();
        config.display.absent_marker = "-".to_string();
        config.labels.contract_id = "Contract Number".to_string();
        config.write_to(&path).expect("config should write");

        let loaded = Config::load_from(&path).expect("config should load");
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_from_rejects_bad_json() {
        let path = std::env::temp_dir().join(format!(
            "parseinbox-config-bad-{}.json",
            std::process::id()
        ));
        let _ = std::fs::write(&path, "{ not json");
        let result = Config::load_from(&path);
        let _ = std::fs::remove_file(&path);
        assert!(result.is_err());
    }
}
