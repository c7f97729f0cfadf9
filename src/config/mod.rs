//! Configuration file support for swift-doodle.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/swift-doodle/config.toml`. Settings include canvas geometry,
//! pen style, hand-drawn shape styling, and rendering performance.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, PerformanceConfig, RoughConfig, StrokeConfig};

use crate::draw::{RoughOptions, StrokeStyle};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// background = "white"
///
/// [stroke]
/// width = 5.0
/// color = "black"
///
/// [rough]
/// bowing = 1.0
/// seed = 42
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Page styling around the raster
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Freehand pen settings
    #[serde(default)]
    pub stroke: StrokeConfig,

    /// Hand-drawn shape settings
    #[serde(default)]
    pub rough: RoughConfig,

    /// Drawing behavior
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Performance tuning options
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.border_width`: 0.0 - 20.0
    /// - `stroke.width`: 1.0 - 50.0
    /// - `rough.bowing`: 0.0 - 10.0
    /// - `rough.stroke_width`: 0.5 - 20.0
    /// - `buffer_count`: 2 - 4
    pub fn validate_and_clamp(&mut self) {
        if !(0.0..=20.0).contains(&self.canvas.border_width) {
            log::warn!(
                "Invalid border_width {:.1}, clamping to 0.0-20.0 range",
                self.canvas.border_width
            );
            self.canvas.border_width = clamp_or(self.canvas.border_width, 0.0, 20.0, 1.0);
        }

        if !(1.0..=50.0).contains(&self.stroke.width) {
            log::warn!(
                "Invalid stroke width {:.1}, clamping to 1.0-50.0 range",
                self.stroke.width
            );
            self.stroke.width = clamp_or(self.stroke.width, 1.0, 50.0, 5.0);
        }

        if !(0.0..=10.0).contains(&self.rough.bowing) {
            log::warn!(
                "Invalid bowing {:.1}, clamping to 0.0-10.0 range",
                self.rough.bowing
            );
            self.rough.bowing = clamp_or(self.rough.bowing, 0.0, 10.0, 1.0);
        }

        if !(0.5..=20.0).contains(&self.rough.stroke_width) {
            log::warn!(
                "Invalid rough stroke_width {:.1}, clamping to 0.5-20.0 range",
                self.rough.stroke_width
            );
            self.rough.stroke_width = clamp_or(self.rough.stroke_width, 0.5, 20.0, 1.0);
        }

        if !(2..=4).contains(&self.performance.buffer_count) {
            log::warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(2, 4);
        }
    }

    /// Pen style for freehand strokes.
    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            width: self.stroke.width,
            color: self.stroke.color.to_color(),
        }
    }

    /// Options handed to the hand-drawn renderer for every shape.
    pub fn shape_options(&self) -> RoughOptions {
        RoughOptions {
            bowing: self.rough.bowing,
            stroke_width: self.rough.stroke_width,
            stroke: self.rough.color.to_color(),
            ..RoughOptions::default()
        }
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/swift-doodle/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("swift-doodle");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at `~/.config/swift-doodle/config.toml`.
    /// If the file doesn't exist, returns a Config with default values. All loaded values
    /// are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, falling back to defaults if it is missing.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config directory
    /// and returns the path written.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }
}

/// Clamps `value` into `[min, max]`, substituting `fallback` for NaN.
fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, WHITE};
    use crate::input::ShapeMode;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_canvas_constants() {
        let config = Config::default();
        assert_eq!(config.canvas.border_width, 1.0);
        assert_eq!(config.stroke.width, 5.0);
        assert_eq!(config.rough.bowing, 1.0);
        assert_eq!(config.rough.seed, None);
        assert_eq!(config.drawing.initial_mode, ShapeMode::Freehand);
        assert_eq!(config.performance.buffer_count, 2);
    }

    #[test]
    fn derived_styles_follow_config() {
        let config = Config::default();
        let style = config.stroke_style();
        assert_eq!(style.width, 5.0);
        assert_eq!(style.color, BLACK);

        let options = config.shape_options();
        assert_eq!(options.roughness, 1.0);
        assert_eq!(options.stroke_width, 1.0);
        assert_eq!(options, RoughOptions::default());
    }

    #[test]
    fn validate_clamps_out_of_range_values() {
        let mut config = Config::default();
        config.canvas.border_width = 40.0;
        config.stroke.width = 0.0;
        config.rough.bowing = f64::NAN;
        config.performance.buffer_count = 9;

        config.validate_and_clamp();

        assert_eq!(config.canvas.border_width, 20.0);
        assert_eq!(config.stroke.width, 1.0);
        assert_eq!(config.rough.bowing, 1.0);
        assert_eq!(config.performance.buffer_count, 4);
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config.stroke.width, 5.0);
    }

    #[test]
    fn load_from_parses_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[canvas]
background = [0, 0, 0]

[stroke]
width = 80.0
color = "white"

[rough]
seed = 7

[drawing]
initial_mode = "ellipse"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.canvas.border_width, 1.0);
        assert_eq!(config.canvas.background, ColorSpec::Rgb([0, 0, 0]));
        assert_eq!(config.stroke.width, 50.0);
        assert_eq!(config.stroke_style().color, WHITE);
        assert_eq!(config.rough.seed, Some(7));
        assert_eq!(config.drawing.initial_mode, ShapeMode::Ellipse);
    }

    #[test]
    fn roughness_and_raster_size_keys_are_ignored() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[canvas]\nwidth = 300\nheight = 200\n\n[rough]\nroughness = 5.0\nbowing = 2.0\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        let options = config.shape_options();
        assert_eq!(options.roughness, 1.0);
        assert_eq!(options.bowing, 2.0);

        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let defs = schema.get("$defs").or_else(|| schema.get("definitions")).unwrap();
        let canvas = defs["CanvasConfig"]["properties"].as_object().unwrap();
        assert!(!canvas.contains_key("width"));
        assert!(!canvas.contains_key("height"));
        let rough = defs["RoughConfig"]["properties"].as_object().unwrap();
        assert!(!rough.contains_key("roughness"));
    }

    #[test]
    fn load_from_rejects_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[drawing]\ninitial_mode = \"hexagon\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn example_file_parses_to_defaults() {
        let mut config: Config = toml::from_str(include_str!("../../config.example.toml")).unwrap();
        config.validate_and_clamp();
        assert_eq!(config.canvas.border_width, 1.0);
        assert_eq!(config.stroke.width, 5.0);
        assert_eq!(config.drawing.initial_mode, ShapeMode::Freehand);
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for section in ["canvas", "stroke", "rough", "drawing", "performance"] {
            assert!(properties.contains_key(section), "missing {section}");
        }
    }
}
