//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::ShapeMode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Page styling around the raster.
///
/// The raster itself is always 800x600 and does not follow the output
/// resolution; only what surrounds it is configurable.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Page color shown behind the transparent raster
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Border color drawn around the raster
    #[serde(default = "default_border_color")]
    pub border_color: ColorSpec,

    /// Border width in pixels (valid range: 0.0 - 20.0, 0 disables the border)
    #[serde(default = "default_border_width")]
    pub border_width: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            border_color: default_border_color(),
            border_width: default_border_width(),
        }
    }
}

/// Freehand pen settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StrokeConfig {
    /// Pen width in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_stroke_width")]
    pub width: f64,

    /// Pen color - either a named color (red, green, blue, gray, white, black)
    /// or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_ink")]
    pub color: ColorSpec,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            width: default_stroke_width(),
            color: default_ink(),
        }
    }
}

/// Hand-drawn shape rendering settings.
///
/// Roughness is not configurable: every shape is drawn at roughness 1.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RoughConfig {
    /// How strongly outline segments bend (valid range: 0.0 - 10.0)
    #[serde(default = "default_bowing")]
    pub bowing: f64,

    /// Outline width in pixels (valid range: 0.5 - 20.0)
    #[serde(default = "default_rough_stroke_width")]
    pub stroke_width: f64,

    /// Outline color
    #[serde(default = "default_ink")]
    pub color: ColorSpec,

    /// Fixed random seed for reproducible outlines (random when unset)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RoughConfig {
    fn default() -> Self {
        Self {
            bowing: default_bowing(),
            stroke_width: default_rough_stroke_width(),
            color: default_ink(),
            seed: None,
        }
    }
}

/// Drawing behavior settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Shape mode active when the surface opens
    #[serde(default)]
    pub initial_mode: ShapeMode,
}

/// Performance tuning options.
///
/// These settings control rendering performance and smoothness. Most users
/// won't need to change these from their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PerformanceConfig {
    /// Number of shared-memory buffers (valid range: 2 - 4)
    #[serde(default = "default_buffer_count")]
    pub buffer_count: u32,

    /// Wait for frame callbacks between renders
    /// Set to false for lower latency at the cost of potential screen tearing
    #[serde(default = "default_enable_vsync")]
    pub enable_vsync: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            buffer_count: default_buffer_count(),
            enable_vsync: default_enable_vsync(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_border_color() -> ColorSpec {
    ColorSpec::Name("gray".to_string())
}

fn default_border_width() -> f64 {
    1.0
}

fn default_stroke_width() -> f64 {
    5.0
}

fn default_ink() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_bowing() -> f64 {
    1.0
}

fn default_rough_stroke_width() -> f64 {
    1.0
}

fn default_buffer_count() -> u32 {
    2
}

fn default_enable_vsync() -> bool {
    true
}
