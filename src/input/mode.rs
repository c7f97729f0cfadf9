//! Shape mode selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a drag on the surface produces.
///
/// Exactly one mode is active at a time. Clicking the surface advances to the
/// next mode in [`ShapeMode::ORDER`], wrapping from triangle back to freehand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ShapeMode {
    /// Free path following the pointer; strokes accumulate
    #[default]
    Freehand,
    /// Rectangle from the anchor corner to the pointer
    Rectangle,
    /// Circle centered between anchor and pointer
    Circle,
    /// Ellipse bounded by anchor and pointer
    Ellipse,
    /// Upward-pointing triangle with its base at the pointer's row
    Triangle,
}

impl ShapeMode {
    /// Fixed cycling order, starting from the initial mode.
    pub const ORDER: [ShapeMode; 5] = [
        ShapeMode::Freehand,
        ShapeMode::Rectangle,
        ShapeMode::Circle,
        ShapeMode::Ellipse,
        ShapeMode::Triangle,
    ];

    /// Returns the mode that follows this one in [`ShapeMode::ORDER`].
    pub fn next(self) -> Self {
        let index = Self::ORDER
            .iter()
            .position(|mode| *mode == self)
            .unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    /// Lowercase name used by the CLI and config file.
    pub fn name(self) -> &'static str {
        match self {
            Self::Freehand => "freehand",
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
            Self::Triangle => "triangle",
        }
    }

    /// Whether this mode clears the raster and redraws a single shape on every move.
    pub fn is_shape(self) -> bool {
        self != Self::Freehand
    }
}

impl fmt::Display for ShapeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ShapeMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ORDER
            .into_iter()
            .find(|mode| mode.name() == s.trim().to_lowercase())
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_mode_is_freehand() {
        assert_eq!(ShapeMode::default(), ShapeMode::Freehand);
    }

    #[test]
    fn test_next_wraps_around() {
        assert_eq!(ShapeMode::Freehand.next(), ShapeMode::Rectangle);
        assert_eq!(ShapeMode::Rectangle.next(), ShapeMode::Circle);
        assert_eq!(ShapeMode::Circle.next(), ShapeMode::Ellipse);
        assert_eq!(ShapeMode::Ellipse.next(), ShapeMode::Triangle);
        assert_eq!(ShapeMode::Triangle.next(), ShapeMode::Freehand);
    }

    #[test]
    fn test_n_steps_land_on_order_index() {
        let mut mode = ShapeMode::Freehand;
        for n in 1..=23 {
            mode = mode.next();
            assert_eq!(mode, ShapeMode::ORDER[n % 5]);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(ShapeMode::from_str("rectangle"), Ok(ShapeMode::Rectangle));
        assert_eq!(ShapeMode::from_str("Circle"), Ok(ShapeMode::Circle));
        assert_eq!(ShapeMode::from_str(" triangle "), Ok(ShapeMode::Triangle));
        assert_eq!(ShapeMode::from_str("hexagon"), Err(()));
        assert_eq!(ShapeMode::from_str(""), Err(()));
    }

    #[test]
    fn test_display_matches_name() {
        for mode in ShapeMode::ORDER {
            assert_eq!(mode.to_string().parse::<ShapeMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_is_shape() {
        assert!(!ShapeMode::Freehand.is_shape());
        assert!(ShapeMode::Ellipse.is_shape());
    }
}
