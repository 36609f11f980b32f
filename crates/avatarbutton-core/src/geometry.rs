//! Per-render geometry of the composite button.
//!
//! Every field is a pure function of the button height and the aspect ratio.
//! Nothing here is cached between renders: callers rebuild a [`ButtonGeometry`]
//! whenever the height changes.

use kurbo::{Arc, BezPath, Circle, Point, Rect, Vec2};
use std::f64::consts::{FRAC_PI_2, PI};

/// Width-to-height ratio of the button's bounding box.
pub const DEFAULT_ASPECT_RATIO: f64 = 1.4;

/// Default button height in logical units.
pub const DEFAULT_HEIGHT: f64 = 50.0;

/// Flattening tolerance used when curves are converted to paths.
pub const PATH_TOLERANCE: f64 = 0.1;

/// Fixed distance the accent dips below the centre line so it fuses with the tail.
///
/// This is an absolute offset, not a proportion of the height.
pub const ACCENT_SEAM: f64 = 0.5;

/// Derived geometry for one render pass.
///
/// Heights of zero or below are not rejected. The resulting geometry is
/// degenerate and what it looks like is undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonGeometry {
    /// Requested button height (`h`).
    pub height: f64,
    /// Width-to-height ratio of the bounding box.
    pub aspect_ratio: f64,
    /// `h / 2`, also the radius of the body circle.
    pub half_height: f64,
    /// Bounding box width (`aspect_ratio * h`).
    pub body_width: f64,
    /// Bounding box height (`h`).
    pub body_height: f64,
    /// Top-left corner of the rounded tail.
    pub tail_origin: Point,
    /// Corner radii requested for the tail before any clamping.
    pub tail_corner_radii: Vec2,
    /// First point of the accent path.
    pub accent_start: Point,
    /// Quadratic control point of the accent curve.
    pub accent_control: Point,
    /// End point of the accent curve.
    pub accent_end: Point,
    /// Corner the accent closes through, `(accent_start.x, accent_end.y)`.
    pub accent_corner: Point,
}

impl ButtonGeometry {
    /// Compute the geometry for a button of the given height and aspect ratio.
    pub fn new(height: f64, aspect_ratio: f64) -> Self {
        let w = height * aspect_ratio;
        let h = height;
        let half_height = h / 2.0;

        let accent_start = Point::new(w - (w / 24.0) * 8.0, h - (h / 4.0) * 3.0);
        let accent_control = Point::new(w - (w / 8.0) * 2.0, h - (h / 8.0) * 4.0);
        let accent_end = Point::new(w - (w / 16.0) * 2.0, half_height + ACCENT_SEAM);

        Self {
            height,
            aspect_ratio,
            half_height,
            body_width: w,
            body_height: h,
            tail_origin: Point::new(w / 4.0, half_height),
            tail_corner_radii: Vec2::new(w / 1.5, h),
            accent_start,
            accent_control,
            accent_end,
            accent_corner: Point::new(accent_start.x, accent_end.y),
        }
    }

    /// Geometry at the default aspect ratio.
    pub fn from_height(height: f64) -> Self {
        Self::new(height, DEFAULT_ASPECT_RATIO)
    }

    /// Same proportions at `height * factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.height * factor, self.aspect_ratio)
    }

    /// Bounding box of the whole button, anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.body_width, self.body_height)
    }

    /// Vertical centre of the bounding box.
    pub fn center_y(&self) -> f64 {
        self.body_height / 2.0
    }

    /// Circle whose left edge touches the left edge of the bounding box.
    pub fn body_circle(&self) -> Circle {
        Circle::new(Point::new(self.half_height, self.center_y()), self.half_height)
    }

    /// Rounded tail: from `(w/4, centre)` to the bottom-right corner.
    pub fn tail_rect(&self) -> Rect {
        Rect::from_points(self.tail_origin, Point::new(self.body_width, self.body_height))
    }

    /// Tail corner radii after scaling them down to fit the tail rect.
    ///
    /// Oversized radii shrink uniformly by `min(1, w / 2rx, h / 2ry)`, so the
    /// corners stay elliptical instead of being clamped per axis.
    pub fn effective_tail_radii(&self) -> Vec2 {
        clamp_corner_radii(self.tail_rect(), self.tail_corner_radii)
    }

    /// Closed path of the pointed accent near the bottom-right corner.
    pub fn accent_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.accent_start);
        path.quad_to(self.accent_control, self.accent_end);
        path.line_to(self.accent_corner);
        path.close_path();
        path
    }
}

impl Default for ButtonGeometry {
    fn default() -> Self {
        Self::from_height(DEFAULT_HEIGHT)
    }
}

/// Shrink `radii` uniformly until opposite corners no longer overlap.
pub fn clamp_corner_radii(rect: Rect, radii: Vec2) -> Vec2 {
    let mut scale: f64 = 1.0;
    if radii.x > 0.0 {
        scale = scale.min(rect.width() / (2.0 * radii.x));
    }
    if radii.y > 0.0 {
        scale = scale.min(rect.height() / (2.0 * radii.y));
    }
    radii * scale
}

/// Path of a rectangle whose four corners are quarter ellipses.
pub fn elliptical_rounded_rect(rect: Rect, radii: Vec2) -> BezPath {
    let (rx, ry) = (radii.x, radii.y);
    let mut path = BezPath::new();
    if rx <= 0.0 || ry <= 0.0 {
        path.move_to(Point::new(rect.x0, rect.y0));
        path.line_to(Point::new(rect.x1, rect.y0));
        path.line_to(Point::new(rect.x1, rect.y1));
        path.line_to(Point::new(rect.x0, rect.y1));
        path.close_path();
        return path;
    }

    let corner = |center: Point, start_angle: f64| Arc {
        center,
        radii,
        start_angle,
        sweep_angle: FRAC_PI_2,
        x_rotation: 0.0,
    };

    path.move_to(Point::new(rect.x0 + rx, rect.y0));
    path.line_to(Point::new(rect.x1 - rx, rect.y0));
    path.extend(corner(Point::new(rect.x1 - rx, rect.y0 + ry), -FRAC_PI_2).append_iter(PATH_TOLERANCE));
    path.line_to(Point::new(rect.x1, rect.y1 - ry));
    path.extend(corner(Point::new(rect.x1 - rx, rect.y1 - ry), 0.0).append_iter(PATH_TOLERANCE));
    path.line_to(Point::new(rect.x0 + rx, rect.y1));
    path.extend(corner(Point::new(rect.x0 + rx, rect.y1 - ry), FRAC_PI_2).append_iter(PATH_TOLERANCE));
    path.line_to(Point::new(rect.x0, rect.y0 + ry));
    path.extend(corner(Point::new(rect.x0 + rx, rect.y0 + ry), PI).append_iter(PATH_TOLERANCE));
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Shape;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Every derived coordinate except the fixed accent seam.
    fn points(g: &ButtonGeometry) -> Vec<Point> {
        let unseamed = |p: Point| Point::new(p.x, p.y - ACCENT_SEAM);
        vec![
            g.tail_origin,
            g.accent_start,
            g.accent_control,
            unseamed(g.accent_end),
            unseamed(g.accent_corner),
            g.body_circle().center,
            Point::new(g.tail_corner_radii.x, g.tail_corner_radii.y),
            Point::new(g.body_width, g.body_height),
        ]
    }

    #[test]
    fn test_geometry_at_height_100() {
        let g = ButtonGeometry::from_height(100.0);
        assert!(approx(g.half_height, 50.0));
        assert!(approx(g.body_width, 140.0));
        assert!(approx(g.body_height, 100.0));
        assert!(approx(g.tail_origin.x, 35.0));
        assert!(approx(g.tail_origin.y, 50.0));
        assert!(approx(g.accent_start.x, 140.0 - 140.0 / 3.0));
        assert!(approx(g.accent_start.y, 25.0));
        assert!(approx(g.accent_control.x, 105.0));
        assert!(approx(g.accent_control.y, 50.0));
        assert!(approx(g.accent_end.x, 122.5));
        assert!(approx(g.accent_end.y, 50.5));
        assert!(approx(g.accent_corner.x, g.accent_start.x));
        assert!(approx(g.accent_corner.y, g.accent_end.y));
    }

    #[test]
    fn test_seam_is_half_unit_at_any_height() {
        for h in [50.0, 100.0, 640.0] {
            let g = ButtonGeometry::from_height(h);
            assert!(approx(g.accent_end.y, g.half_height + 0.5));
            assert!(approx(g.accent_corner.y, g.half_height + 0.5));
        }
    }

    #[test]
    fn test_body_circle_touches_left_edge() {
        let g = ButtonGeometry::from_height(80.0);
        let circle = g.body_circle();
        assert!(approx(circle.center.x - circle.radius, 0.0));
        assert!(approx(circle.center.y, 40.0));
        assert!(approx(circle.radius, 40.0));
    }

    #[test]
    fn test_every_coordinate_scales_by_two() {
        let small = ButtonGeometry::from_height(50.0);
        let large = ButtonGeometry::from_height(100.0);
        for (a, b) in points(&small).into_iter().zip(points(&large)) {
            assert!(approx(a.x * 2.0, b.x), "{a:?} vs {b:?}");
            assert!(approx(a.y * 2.0, b.y), "{a:?} vs {b:?}");
        }
        assert!(approx(small.half_height * 2.0, large.half_height));
        let r1 = small.effective_tail_radii();
        let r2 = large.effective_tail_radii();
        assert!(approx(r1.x * 2.0, r2.x));
        assert!(approx(r1.y * 2.0, r2.y));
    }

    #[test]
    fn test_scaled_matches_new() {
        let g = ButtonGeometry::from_height(50.0).scaled(2.0);
        assert_eq!(g, ButtonGeometry::from_height(100.0));
    }

    #[test]
    fn test_tail_radii_shrink_uniformly() {
        let g = ButtonGeometry::from_height(100.0);
        let rect = g.tail_rect();
        assert!(approx(rect.width(), 105.0));
        assert!(approx(rect.height(), 50.0));
        let radii = g.effective_tail_radii();
        // Height is the limiting side: 50 / (2 * 100) = 0.25.
        assert!(approx(radii.x, (140.0 / 1.5) * 0.25));
        assert!(approx(radii.y, 25.0));
    }

    #[test]
    fn test_clamp_keeps_small_radii() {
        let radii = clamp_corner_radii(Rect::new(0.0, 0.0, 100.0, 100.0), Vec2::new(10.0, 5.0));
        assert!(approx(radii.x, 10.0));
        assert!(approx(radii.y, 5.0));
    }

    #[test]
    fn test_rounded_rect_path_bounds() {
        let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
        let path = elliptical_rounded_rect(rect, Vec2::new(20.0, 10.0));
        let bounds = path.bounding_box();
        assert!((bounds.x0 - 10.0).abs() < 1e-6);
        assert!((bounds.y0 - 20.0).abs() < 1e-6);
        assert!((bounds.x1 - 110.0).abs() < 1e-6);
        assert!((bounds.y1 - 70.0).abs() < 1e-6);
        assert!(path.contains(Point::new(60.0, 45.0)));
        // The very corner is cut away by the ellipse.
        assert!(!path.contains(Point::new(10.5, 20.5)));
    }

    #[test]
    fn test_accent_path_is_closed_and_contains_interior() {
        let g = ButtonGeometry::from_height(100.0);
        let path = g.accent_path();
        assert!(matches!(path.elements().last(), Some(kurbo::PathEl::ClosePath)));
        // Just above the closing corner, inside the notch.
        let inside = Point::new(g.accent_corner.x + 1.0, g.accent_corner.y - 1.0);
        assert!(path.contains(inside));
        assert!(!path.contains(Point::new(g.body_width - 1.0, 1.0)));
    }

    #[test]
    fn test_non_positive_height_is_not_rejected() {
        // Degenerate heights are the caller's problem; the geometry is computed as-is.
        let zero = ButtonGeometry::from_height(0.0);
        assert!(approx(zero.body_width, 0.0));
        assert!(zero.bounds().is_zero_area());

        let negative = ButtonGeometry::from_height(-10.0);
        assert!(approx(negative.half_height, -5.0));
        assert!(negative.body_width < 0.0);
    }
}
