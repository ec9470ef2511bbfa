//! Viewport navigation settings.
//!
//! Persisted as TOML:
//!
//! ```toml
//! orbit_method = "Trackball"
//! rotate_step = 0.008   # radians per pixel (turntable)
//! zoom_step = 0.9       # zoom factor per wheel notch
//! drag_threshold = 2    # pixels before a left press stops being a click
//! ```
//!
//! Missing keys take their default values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::viewport::OrbitMode;

/// Errors from loading or saving settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Navigation settings for a viewport.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub orbit_method: OrbitMode,
    /// Turntable rotation in radians per pixel of pointer movement
    pub rotate_step: f64,
    /// Wheel zoom factor for scrolling away; the inverse is used towards
    pub zoom_step: f64,
    /// Pixels a left press may travel on either axis and still select
    pub drag_threshold: i32,
}

impl ViewportConfig {
    pub const DEFAULT_ROTATE_STEP: f64 = 0.008;
    pub const DEFAULT_ZOOM_STEP: f64 = 0.9;
    pub const DEFAULT_DRAG_THRESHOLD: i32 = 2;

    /// Parse settings from a TOML string.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load settings from a file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::info!("Loaded viewport settings from {:?}", path);
        Ok(config)
    }

    /// Load settings from a file, falling back to defaults if it is absent.
    pub fn load_or_default(path: impl AsRef<Path>) -> ConfigResult<Self> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            other => other,
        }
    }

    /// Save settings to a file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        log::info!("Saved viewport settings to {:?}", path);
        Ok(())
    }

    /// Get the default settings path.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("cadview");
            p.push("viewport.toml");
            p
        })
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !self.rotate_step.is_finite() || self.rotate_step <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "rotate_step must be positive, got {}",
                self.rotate_step
            )));
        }
        if !self.zoom_step.is_finite() || self.zoom_step <= 0.0 || self.zoom_step == 1.0 {
            return Err(ConfigError::Invalid(format!(
                "zoom_step must be positive and not 1, got {}",
                self.zoom_step
            )));
        }
        if self.drag_threshold < 0 {
            return Err(ConfigError::Invalid(format!(
                "drag_threshold must not be negative, got {}",
                self.drag_threshold
            )));
        }
        Ok(())
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            orbit_method: OrbitMode::Turntable,
            rotate_step: Self::DEFAULT_ROTATE_STEP,
            zoom_step: Self::DEFAULT_ZOOM_STEP,
            drag_threshold: Self::DEFAULT_DRAG_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = ViewportConfig::from_toml_str("").unwrap();
        assert_eq!(config, ViewportConfig::default());
        assert_eq!(config.rotate_step, 0.008);
        assert_eq!(config.zoom_step, 0.9);
        assert_eq!(config.drag_threshold, 2);
    }

    #[test]
    fn test_partial_document() {
        let config = ViewportConfig::from_toml_str(
            r#"
            orbit_method = "Trackball"
            drag_threshold = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.orbit_method, OrbitMode::Trackball);
        assert_eq!(config.drag_threshold, 5);
        assert_eq!(config.zoom_step, ViewportConfig::DEFAULT_ZOOM_STEP);
    }

    #[test]
    fn test_unknown_orbit_method_is_parse_error() {
        let result = ViewportConfig::from_toml_str(r#"orbit_method = "Fly""#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validation() {
        let mut config = ViewportConfig::default();
        config.zoom_step = 1.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ViewportConfig::default();
        config.rotate_step = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = ViewportConfig::default();
        config.drag_threshold = -1;
        assert!(config.validate().is_err());

        assert!(ViewportConfig::from_toml_str("zoom_step = -0.5").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("cadview_config_test_{}", std::process::id()));
        let path = dir.join("nested").join("viewport.toml");

        let config = ViewportConfig {
            orbit_method: OrbitMode::Trackball,
            rotate_step: 0.01,
            zoom_step: 0.8,
            drag_threshold: 4,
        };
        config.save(&path).unwrap();
        assert_eq!(ViewportConfig::load(&path).unwrap(), config);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let path = std::env::temp_dir().join("cadview_config_test_missing").join("none.toml");
        assert_eq!(ViewportConfig::load_or_default(&path).unwrap(), ViewportConfig::default());
    }

    #[test]
    fn test_default_path_file_name() {
        if let Some(path) = ViewportConfig::default_path() {
            assert!(path.ends_with("cadview/viewport.toml"));
        }
    }
}
