//! Paints button fills with egui's painter.

use avatarbutton_core::BackgroundShape;
use avatarbutton_render::ScenePainter;
use egui::epaint::Vertex;
use egui::{Color32, Mesh, Painter, Pos2, Rect, Shape, Stroke, TextureId};
use kurbo::{Affine, BezPath, Circle, PathEl, Point, Shape as KurboShape};
use peniko::Color;

/// Flattening tolerance in screen points.
const FLATTEN_TOLERANCE: f64 = 0.25;

/// [`ScenePainter`] on top of an egui [`Painter`].
///
/// The circle and the tail are convex and go through egui's anti-aliased
/// shapes. The accent is concave but star-shaped around its closing corner,
/// so it is filled as a triangle fan around that corner.
pub struct EguiPainter<'p> {
    painter: &'p Painter,
}

impl<'p> EguiPainter<'p> {
    pub fn new(painter: &'p Painter) -> Self {
        Self { painter }
    }
}

impl ScenePainter for EguiPainter<'_> {
    fn fill_shape(&mut self, shape: &BackgroundShape, color: Color, transform: Affine) {
        let color = to_color32(color);
        match shape {
            BackgroundShape::Circle(circle) => {
                let center = transform * circle.center;
                let edge = transform * (circle.center + kurbo::Vec2::new(circle.radius, 0.0));
                self.painter
                    .circle_filled(to_pos2(center), (edge - center).hypot() as f32, color);
            }
            BackgroundShape::RoundedRect { .. } => {
                let points = flatten_polygon(&(transform * shape.to_path()));
                self.painter
                    .add(Shape::convex_polygon(points, color, Stroke::NONE));
            }
            BackgroundShape::Accent(path) => {
                let points = flatten_polygon(&(transform * path.clone()));
                self.painter.add(Shape::mesh(fan_mesh(&points, color)));
            }
        }
    }
}

/// Convert a peniko color to egui's unmultiplied sRGBA.
pub fn to_color32(color: Color) -> Color32 {
    let rgba = color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

pub fn to_pos2(point: Point) -> Pos2 {
    Pos2::new(point.x as f32, point.y as f32)
}

/// Outline of the first subpath as a polygon, without the repeated closing point.
pub fn flatten_polygon(path: &BezPath) -> Vec<Pos2> {
    let mut points: Vec<Pos2> = Vec::new();
    let mut done = false;
    kurbo::flatten(path.elements().iter().copied(), FLATTEN_TOLERANCE, |el| {
        if done {
            return;
        }
        match el {
            PathEl::MoveTo(p) if points.is_empty() => points.push(to_pos2(p)),
            PathEl::MoveTo(_) | PathEl::ClosePath => done = true,
            PathEl::LineTo(p) => points.push(to_pos2(p)),
            _ => {}
        }
    });
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}

/// Triangle fan around the last point of `points`.
pub fn fan_mesh(points: &[Pos2], color: Color32) -> Mesh {
    let mut mesh = Mesh::default();
    if points.len() < 3 {
        return mesh;
    }
    for &p in points {
        mesh.colored_vertex(p, color);
    }
    let pivot = (points.len() - 1) as u32;
    for i in 0..pivot - 1 {
        mesh.add_triangle(pivot, i, i + 1);
    }
    mesh
}

/// Texture mapped onto the circle inscribed in `rect`, as a fan around its centre.
pub fn textured_circle_mesh(rect: Rect, texture: TextureId) -> Mesh {
    let mut mesh = Mesh::with_texture(texture);
    let center = rect.center();
    let radius = f64::from(rect.width().min(rect.height()) / 2.0);
    if radius <= 0.0 {
        return mesh;
    }
    let circle = Circle::new((f64::from(center.x), f64::from(center.y)), radius);
    let rim = flatten_polygon(&circle.to_path(FLATTEN_TOLERANCE));
    if rim.len() < 3 {
        return mesh;
    }

    let uv = |p: Pos2| {
        Pos2::new(
            (p.x - rect.min.x) / rect.width(),
            (p.y - rect.min.y) / rect.height(),
        )
    };
    for p in std::iter::once(center).chain(rim.iter().copied()) {
        mesh.vertices.push(Vertex {
            pos: p,
            uv: uv(p),
            color: Color32::WHITE,
        });
    }
    let count = rim.len() as u32;
    for i in 0..count {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % count);
    }
    mesh
}
