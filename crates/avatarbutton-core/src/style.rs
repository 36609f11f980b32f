//! Button configuration.

use crate::color::SerializableColor;
use crate::geometry::{ButtonGeometry, DEFAULT_ASPECT_RATIO, DEFAULT_HEIGHT};
use crate::regions::SecondaryAnchor;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default gap between the image circle and the primary square, in logical units.
pub const DEFAULT_IMAGE_INSET: f64 = 10.0;

/// Errors from loading or saving a style.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("failed to read style file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid style JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Inputs that drive one render of the button.
///
/// `height` is never validated: zero or negative values are accepted and give
/// undefined visual output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonStyle {
    /// Overall button height.
    pub height: f64,
    /// Fill color shared by all background shapes.
    pub color: SerializableColor,
    /// Width-to-height ratio of the bounding box.
    pub aspect_ratio: f64,
    /// The image circle's diameter is `height - image_inset`.
    pub image_inset: f64,
    /// Where the secondary region is measured from.
    pub secondary_anchor: SecondaryAnchor,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            color: SerializableColor::DEFAULT_BUTTON,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            image_inset: DEFAULT_IMAGE_INSET,
            secondary_anchor: SecondaryAnchor::default(),
        }
    }
}

impl ButtonStyle {
    /// Default style at the given height.
    pub fn with_height(height: f64) -> Self {
        Self {
            height,
            ..Default::default()
        }
    }

    /// Set the fill color.
    pub fn color(mut self, color: SerializableColor) -> Self {
        self.color = color;
        self
    }

    /// Geometry for this style.
    pub fn geometry(&self) -> ButtonGeometry {
        ButtonGeometry::new(self.height, self.aspect_ratio)
    }

    /// Parse a style from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, StyleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a style from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let style = Self::from_json(&json)?;
        log::debug!("Loaded button style from {}", path.display());
        Ok(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let style = ButtonStyle::default();
        assert!((style.height - 50.0).abs() < f64::EPSILON);
        assert!((style.aspect_ratio - 1.4).abs() < f64::EPSILON);
        assert_eq!(style.color, SerializableColor::from_argb(0xFFD0E0E7));
        assert_eq!(style.secondary_anchor, SecondaryAnchor::PrimarySquare);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let style = ButtonStyle::from_json(r#"{ "height": 100.0 }"#).unwrap();
        assert!((style.height - 100.0).abs() < f64::EPSILON);
        assert_eq!(style.color, SerializableColor::DEFAULT_BUTTON);
        assert!((style.image_inset - DEFAULT_IMAGE_INSET).abs() < f64::EPSILON);
    }

    #[test]
    fn test_json_roundtrip_with_anchor() {
        let mut style = ButtonStyle::with_height(80.0).color(SerializableColor::black());
        style.secondary_anchor = SecondaryAnchor::BoundingBox;
        let json = style.to_json().unwrap();
        assert_eq!(ButtonStyle::from_json(&json).unwrap(), style);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = ButtonStyle::from_json("{ height: }").unwrap_err();
        assert!(matches!(err, StyleError::Parse(_)));
    }

    #[test]
    fn test_negative_height_is_accepted() {
        let style = ButtonStyle::from_json(r#"{ "height": -20.0 }"#).unwrap();
        assert!(style.geometry().body_width < 0.0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "height": 64.0, "color": {{ "r": 1, "g": 2, "b": 3, "a": 255 }} }}"#).unwrap();
        let style = ButtonStyle::load(file.path()).unwrap();
        assert!((style.height - 64.0).abs() < f64::EPSILON);
        assert_eq!(style.color, SerializableColor::new(1, 2, 3, 255));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ButtonStyle::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, StyleError::Io(_)));
    }
}
