//! Quill demo configuration
//!
//! Loads demo settings from `quill.toml` as an alternative to
//! environment variables. The library crates carry no configuration
//! surface; only the demo binary reads this.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration for the demo binary
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QuillConfig {
    /// Demo application settings
    pub demo: DemoConfig,
    /// Text rendering settings
    pub text: TextConfig,
}

/// Demo application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Sample sentence to display
    pub sample_text: Option<String>,
    /// Output image path
    pub output: Option<PathBuf>,
}

/// Text rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Path to custom font file (.ttf)
    pub font: Option<PathBuf>,
    /// Text size in points
    pub text_size: Option<f32>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sample_text: None,
            output: None,
        }
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font: None,
            text_size: None,
        }
    }
}

impl QuillConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (quill.toml in the
    /// current directory) or return default configuration if the file
    /// doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("quill.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file
    /// values, allowing temporary overrides without editing the file.
    pub fn merge_with_env(&mut self) {
        if let Ok(text) = std::env::var("QUILL_SAMPLE_TEXT") {
            self.demo.sample_text = Some(text);
        }
        if let Ok(path) = std::env::var("QUILL_OUTPUT") {
            self.demo.output = Some(PathBuf::from(path));
        }
        if let Ok(font) = std::env::var("QUILL_FONT") {
            self.text.font = Some(PathBuf::from(font));
        }
        if let Ok(val) = std::env::var("QUILL_TEXT_SIZE") {
            if let Ok(size) = val.parse::<f32>() {
                self.text.text_size = Some(size);
            }
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from quill.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QuillConfig::default();
        assert!(config.demo.sample_text.is_none());
        assert!(config.text.font.is_none());
        assert!(config.text.text_size.is_none());
    }

    #[test]
    fn test_toml_serialization() {
        let mut config = QuillConfig::default();
        config.text.text_size = Some(24.0);
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: QuillConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.text.text_size, Some(24.0));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: QuillConfig = toml::from_str(
            r#"
            [text]
            text_size = 18.0
            "#,
        )
        .unwrap();
        assert_eq!(config.text.text_size, Some(18.0));
        assert!(config.demo.sample_text.is_none());
    }

    #[test]
    fn test_load_or_default() {
        // Should not panic even if quill.toml doesn't exist
        let config = QuillConfig::load_or_default();
        assert!(config.demo.output.is_none());
    }

    #[test]
    fn test_merge_with_env() {
        unsafe {
            std::env::set_var("QUILL_SAMPLE_TEXT", "env sample");
            std::env::set_var("QUILL_TEXT_SIZE", "40");
        }

        let mut config = QuillConfig::default();
        config.merge_with_env();

        assert_eq!(config.demo.sample_text.as_deref(), Some("env sample"));
        assert_eq!(config.text.text_size, Some(40.0));

        unsafe {
            std::env::remove_var("QUILL_SAMPLE_TEXT");
            std::env::remove_var("QUILL_TEXT_SIZE");
        }
    }
}
