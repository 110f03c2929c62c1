// File: src/config.rs
// Purpose: Configurable length bounds, parsed from insert-form.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "insert-form.toml";

/// Form configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FormConfig {
    /// Bounds shared by first name, last name, street and city
    #[serde(default)]
    pub text: TextConfig,

    #[serde(default)]
    pub email: EmailConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextConfig {
    #[serde(default = "default_text_min")]
    pub min_length: usize,

    #[serde(default = "default_text_max")]
    pub max_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailConfig {
    #[serde(default = "default_email_min")]
    pub min_length: usize,

    #[serde(default = "default_email_max")]
    pub max_length: usize,
}

// Default values
fn default_text_min() -> usize {
    0
}

fn default_text_max() -> usize {
    50
}

fn default_email_min() -> usize {
    4
}

fn default_email_max() -> usize {
    256
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            min_length: default_text_min(),
            max_length: default_text_max(),
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            min_length: default_email_min(),
            max_length: default_email_max(),
        }
    }
}

impl FormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./insert-form.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.text.min_length, 0);
        assert_eq!(config.text.max_length, 50);
        assert_eq!(config.email.min_length, 4);
        assert_eq!(config.email.max_length, 256);
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<FormConfig>("").unwrap_or_default();
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_partial_section() {
        let toml = r#"
            [text]
            min_length = 1
        "#;
        let config: FormConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.text.min_length, 1);
        assert_eq!(config.text.max_length, 50);
        assert_eq!(config.email, EmailConfig::default());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = FormConfig::load("does/not/exist/insert-form.toml").unwrap();
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("insert-form-{}.toml", std::process::id()));
        fs::write(&path, "[email]\nmax_length = 64\n").unwrap();
        let config = FormConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.email.min_length, 4);
        assert_eq!(config.email.max_length, 64);
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let path = std::env::temp_dir().join(format!("insert-form-bad-{}.toml", std::process::id()));
        fs::write(&path, "[text\nmin_length = ").unwrap();
        let err = FormConfig::load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
