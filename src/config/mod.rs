// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Application configuration.
//!
//! Settings live in an optional `fretwork.toml` in the working
//! directory. Everything has a sensible default, so the file is only
//! needed to change how diagrams are rendered or where they land.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fretboard::Fret;
use crate::render::{Diagram, LabelMode};

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "fretwork.toml";

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    /// Diagram rendering settings
    #[serde(default)]
    pub render: RenderConfig,
}

impl AppConfig {
    /// Load `fretwork.toml` from the working directory, or defaults when absent
    pub fn load() -> Result<Self> {
        if Path::new(CONFIG_FILE).exists() {
            Self::load_from(CONFIG_FILE)
        } else {
            debug!("No {} found, using defaults", CONFIG_FILE);
            Ok(Self::default())
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = self.to_toml()?;
        fs::write(path.as_ref(), text)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }
}

/// Diagram rendering settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderConfig {
    /// Minimum window width in frets
    #[serde(default = "default_min_frets")]
    pub min_frets: Fret,
    /// What to print at each position
    #[serde(default)]
    pub labels: LabelMode,
    /// Draw diagrams vertically, strings as columns
    #[serde(default)]
    pub vertical: bool,
    /// Directory song diagrams are written to
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

fn default_min_frets() -> Fret {
    3
}
fn default_out_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            min_frets: default_min_frets(),
            labels: LabelMode::default(),
            vertical: false,
            out_dir: default_out_dir(),
        }
    }
}

impl RenderConfig {
    /// Build a diagram renderer from these settings
    pub fn diagram(&self) -> Diagram {
        Diagram::new(self.min_frets, self.labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_config() {
        let text = r#"
[render]
min_frets = 4
labels = "degree"
vertical = true
out_dir = "diagrams"
"#;

        let config = AppConfig::from_toml(text).unwrap();
        assert_eq!(config.render.min_frets, 4);
        assert_eq!(config.render.labels, LabelMode::Degree);
        assert!(config.render.vertical);
        assert_eq!(config.render.out_dir, PathBuf::from("diagrams"));
    }

    #[test]
    fn test_default_values() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.render.min_frets, 3);
        assert_eq!(config.render.labels, LabelMode::None);
        assert!(!config.render.vertical);
        assert_eq!(config.render.out_dir, PathBuf::from("."));
    }

    #[test]
    fn test_partial_section() {
        let config = AppConfig::from_toml("[render]\nlabels = \"note\"\n").unwrap();
        assert_eq!(config.render.labels, LabelMode::Note);
        assert_eq!(config.render.min_frets, 3);
    }

    #[test]
    fn test_round_trip() {
        let original = AppConfig {
            render: RenderConfig {
                min_frets: 5,
                labels: LabelMode::Finger,
                vertical: true,
                out_dir: PathBuf::from("out"),
            },
        };

        let text = original.to_toml().unwrap();
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let config = AppConfig {
            render: RenderConfig {
                min_frets: 4,
                ..RenderConfig::default()
            },
        };
        config.save(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(AppConfig::load_from("/nonexistent/fretwork.toml").is_err());
    }
}
