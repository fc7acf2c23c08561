use crate::config::NslogConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads [`NslogConfig`] from files or strings
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<NslogConfig> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read YAML file: {:?}", path.as_ref()))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<NslogConfig> {
        let config: NslogConfig = serde_yaml::from_str(content)
            .with_context(|| "Failed to parse YAML content")?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<NslogConfig> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read JSON file: {:?}", path.as_ref()))?;
        Self::from_json_str(&content)
    }

    /// Load configuration from a JSON string
    pub fn from_json_str(content: &str) -> Result<NslogConfig> {
        let config: NslogConfig = serde_json::from_str(content)
            .with_context(|| "Failed to parse JSON content")?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Check that the configuration can be used
    pub fn validate(config: &NslogConfig) -> Result<()> {
        if config.env_var.is_empty() {
            return Err(anyhow::anyhow!("Environment variable name cannot be empty"));
        }

        if config.env_var.contains(['=', '\0']) {
            return Err(anyhow::anyhow!("Invalid environment variable name: {:?}", config.env_var));
        }

        Ok(())
    }
}
