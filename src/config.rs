use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::brush::{DEFAULT_BRUSH_SIZE, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use crate::canvas::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use crate::error::{PaintError, PaintResult};

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "SIMPLE_PAINT_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to the defaults below
pub struct PaintConfig {
    pub window_title: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub initial_brush_size: f32,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            window_title: "My Paint App".to_owned(),
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            initial_brush_size: DEFAULT_BRUSH_SIZE,
        }
    }
}

impl PaintConfig {
    pub fn from_json(json: &str) -> PaintResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    pub fn load(path: &Path) -> PaintResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], falling back to defaults
    /// when it is unset or unusable.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        let path = Path::new(&path);
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(err) => {
                log::error!("Ignoring configuration {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Rejects an empty canvas and brings the brush size into slider range.
    pub fn validate(mut self) -> PaintResult<Self> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(PaintError::InvalidDimensions {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if !self.initial_brush_size.is_finite() {
            return Err(PaintError::Config(format!(
                "initial_brush_size must be finite, got {}",
                self.initial_brush_size
            )));
        }
        self.initial_brush_size = self.initial_brush_size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_window() {
        let config = PaintConfig::default();
        assert_eq!(config.window_title, "My Paint App");
        assert_eq!((config.canvas_width, config.canvas_height), (900, 600));
        assert_eq!(config.initial_brush_size, 4.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PaintConfig::from_json(r#"{ "window_title": "Sketch" }"#).unwrap();
        assert_eq!(config.window_title, "Sketch");
        assert_eq!(config.canvas_width, 900);
    }

    #[test]
    fn test_brush_size_is_clamped() {
        let config = PaintConfig::from_json(r#"{ "initial_brush_size": 99.0 }"#).unwrap();
        assert_eq!(config.initial_brush_size, 30.0);
    }

    #[test]
    fn test_zero_canvas_rejected() {
        let err = PaintConfig::from_json(r#"{ "canvas_width": 0 }"#).unwrap_err();
        assert!(matches!(err, PaintError::InvalidDimensions { width: 0, .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = PaintConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, PaintError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = PaintConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, PaintError::ConfigIo(_)));
    }
}
