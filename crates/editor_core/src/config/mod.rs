//! Configuration system
//!
//! Editor settings load from TOML or RON files, chosen by extension. Scene
//! content is never persisted here; configuration covers editor behavior and
//! the advisory bounds the input widgets use.

use std::path::Path;

pub use serde::{Deserialize, Serialize};

use crate::inspector;
use crate::scene::TransformMode;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Ron,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "ron" => Some(Self::Ron),
            _ => None,
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from a file, picking the format by extension
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;
        let contents = std::fs::read_to_string(path)?;

        match format {
            ConfigFormat::Toml => {
                toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            ConfigFormat::Ron => {
                ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
            }
        }
    }

    /// Save configuration to a file, picking the format by extension
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;

        let contents = match format {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Editor behavior settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Transform mode active when the editor starts
    pub default_transform_mode: TransformMode,

    /// Lower bound the scale input widget enforces (advisory, see `inspector`)
    pub min_scale: f32,

    /// Step size of the opacity slider widget
    pub opacity_step: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_transform_mode: TransformMode::default(),
            min_scale: inspector::MIN_SCALE,
            opacity_step: inspector::OPACITY_STEP,
        }
    }
}

impl Config for EditorConfig {}

impl EditorConfig {
    /// Load from a file, falling back to defaults when it is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("using default editor config, could not load {}: {e}", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("editor.toml")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("presets/editor.ron")),
            Some(ConfigFormat::Ron)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("editor.yaml")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("editor")), None);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EditorConfig {
            default_transform_mode: TransformMode::Rotate,
            min_scale: 0.25,
            opacity_step: 0.05,
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let restored: EditorConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(restored, config);
    }

    #[test]
    fn test_ron_round_trip() {
        let config = EditorConfig {
            default_transform_mode: TransformMode::Scale,
            ..Default::default()
        };

        let serialized = ron::to_string(&config).unwrap();
        let restored: EditorConfig = ron::from_str(&serialized).unwrap();

        assert_eq!(restored, config);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let restored: EditorConfig = toml::from_str("default_transform_mode = \"rotate\"").unwrap();

        assert_eq!(restored.default_transform_mode, TransformMode::Rotate);
        assert_eq!(restored.min_scale, EditorConfig::default().min_scale);
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = EditorConfig::load_or_default("does/not/exist.toml");

        assert_eq!(config, EditorConfig::default());
    }
}
