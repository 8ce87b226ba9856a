//! Application configuration file.
//!
//! ```yaml
//! boards_dir: boards
//! game:
//!   bonus_turn_on_max: true
//! render:
//!   format: png
//!   style: { kind: outline, width: 5 }
//! ```
//!
//! Every section is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::GameOptions;
use crate::render::RenderOptions;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Root of the board catalog.
    #[serde(default = "default_boards_dir")]
    pub boards_dir: PathBuf,

    #[serde(default)]
    pub game: GameOptions,

    #[serde(default)]
    pub render: RenderOptions,
}

fn default_boards_dir() -> PathBuf {
    PathBuf::from("boards")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            boards_dir: default_boards_dir(),
            game: GameOptions::default(),
            render: RenderOptions::default(),
        }
    }
}

impl AppConfig {
    /// Load from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Parse from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{ImageFormat, TokenStyle};

    #[test]
    fn test_empty_yaml_is_default() {
        let config = AppConfig::from_yaml("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.boards_dir, PathBuf::from("boards"));
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
boards_dir: /srv/boards
game:
  bonus_turn_on_max: true
  max_roll: 8
render:
  format: png
  style:
    kind: outline
    width: 5
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.boards_dir, PathBuf::from("/srv/boards"));
        assert!(config.game.bonus_turn_on_max);
        assert_eq!(config.game.max_roll, 8);
        assert_eq!(config.render.format, ImageFormat::Png);
        assert_eq!(config.render.style, TokenStyle::Outline { width: 5 });
    }

    #[test]
    fn test_bad_yaml() {
        assert!(matches!(
            AppConfig::from_yaml("game: [1, 2"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            AppConfig::load("/nonexistent/sal.yaml"),
            Err(ConfigError::Io(_))
        ));
    }
}
