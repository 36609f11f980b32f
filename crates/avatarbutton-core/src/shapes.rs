//! Filled primitives that make up the button background.

use crate::color::SerializableColor;
use crate::geometry::{elliptical_rounded_rect, PATH_TOLERANCE};
use kurbo::{BezPath, Circle, Point, Rect, Shape as KurboShape, Vec2};

/// One background primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum BackgroundShape {
    /// The body circle under the image.
    Circle(Circle),
    /// The rounded tail; `radii` are already fitted to `rect`.
    RoundedRect { rect: Rect, radii: Vec2 },
    /// The pointed accent, a closed quadratic path.
    Accent(BezPath),
}

impl BackgroundShape {
    /// Get the path representation for rendering.
    pub fn to_path(&self) -> BezPath {
        match self {
            BackgroundShape::Circle(circle) => circle.to_path(PATH_TOLERANCE),
            BackgroundShape::RoundedRect { rect, radii } => elliptical_rounded_rect(*rect, *radii),
            BackgroundShape::Accent(path) => path.clone(),
        }
    }

    /// Bounding box in button-local coordinates.
    pub fn bounds(&self) -> Rect {
        match self {
            BackgroundShape::Circle(circle) => circle.bounding_box(),
            BackgroundShape::RoundedRect { rect, .. } => *rect,
            BackgroundShape::Accent(path) => path.bounding_box(),
        }
    }

    /// Check if a point falls inside the filled area.
    pub fn contains(&self, point: Point) -> bool {
        match self {
            BackgroundShape::Circle(circle) => circle.contains(point),
            _ => self.to_path().contains(point),
        }
    }

    /// Short name, used in logs and SVG ids.
    pub fn name(&self) -> &'static str {
        match self {
            BackgroundShape::Circle(_) => "body",
            BackgroundShape::RoundedRect { .. } => "tail",
            BackgroundShape::Accent(_) => "accent",
        }
    }
}

/// A "fill this shape with this color" draw command.
#[derive(Debug, Clone, PartialEq)]
pub struct FillCommand {
    pub shape: BackgroundShape,
    pub color: SerializableColor,
}

impl FillCommand {
    pub fn new(shape: BackgroundShape, color: SerializableColor) -> Self {
        Self { shape, color }
    }
}

/// Check whether any fill covers `point`, i.e. whether it lies on the silhouette.
pub fn silhouette_contains(fills: &[FillCommand], point: Point) -> bool {
    fills.iter().any(|fill| fill.shape.contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ButtonGeometry;

    #[test]
    fn test_circle_contains() {
        let shape = BackgroundShape::Circle(Circle::new(Point::new(50.0, 50.0), 50.0));
        assert!(shape.contains(Point::new(50.0, 50.0)));
        assert!(!shape.contains(Point::new(1.0, 1.0)));
    }

    #[test]
    fn test_rounded_rect_bounds() {
        let rect = Rect::new(35.0, 50.0, 140.0, 100.0);
        let shape = BackgroundShape::RoundedRect { rect, radii: Vec2::new(23.0, 25.0) };
        assert_eq!(shape.bounds(), rect);
        assert!(shape.contains(Point::new(100.0, 75.0)));
        assert!(!shape.contains(Point::new(139.5, 99.5)));
    }

    #[test]
    fn test_accent_bounds_follow_geometry() {
        let g = ButtonGeometry::from_height(100.0);
        let shape = BackgroundShape::Accent(g.accent_path());
        let bounds = shape.bounds();
        assert!((bounds.x0 - g.accent_start.x).abs() < 1e-9);
        assert!((bounds.y0 - g.accent_start.y).abs() < 1e-9);
        assert!((bounds.x1 - g.accent_end.x).abs() < 1e-9);
        assert!((bounds.y1 - g.accent_end.y).abs() < 1e-9);
    }

    #[test]
    fn test_names() {
        let g = ButtonGeometry::default();
        assert_eq!(BackgroundShape::Circle(g.body_circle()).name(), "body");
        assert_eq!(BackgroundShape::Accent(g.accent_path()).name(), "accent");
    }
}
