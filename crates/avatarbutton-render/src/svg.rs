//! SVG export of the button background.

use crate::renderer::{paint_button, RenderResult, ScenePainter};
use avatarbutton_core::{BackgroundShape, ButtonScene};
use kurbo::{Affine, Size};
use peniko::Color;
use std::path::Path;

/// Collects fills as `<path>` elements.
#[derive(Debug, Default)]
pub struct SvgPainter {
    paths: Vec<String>,
}

impl SvgPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of paths collected so far.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Wrap the collected paths in an `<svg>` document of the given size.
    pub fn finish(&self, size: Size) -> String {
        let mut out = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = size.width,
            h = size.height,
        );
        out.push('\n');
        for path in &self.paths {
            out.push_str(&format!("  {path}\n"));
        }
        out.push_str("</svg>\n");
        out
    }
}

impl ScenePainter for SvgPainter {
    fn fill_shape(&mut self, shape: &BackgroundShape, color: Color, transform: Affine) {
        let path = transform * shape.to_path();
        let rgba = color.to_rgba8();
        self.paths.push(format!(
            r##"<path id="{}" d="{}" fill="#{:02x}{:02x}{:02x}" fill-opacity="{:.3}"/>"##,
            shape.name(),
            path.to_svg(),
            rgba.r,
            rgba.g,
            rgba.b,
            f64::from(rgba.a) / 255.0,
        ));
    }
}

/// Render a scene's background to a standalone SVG document.
pub fn scene_to_svg(scene: &ButtonScene) -> String {
    let mut painter = SvgPainter::new();
    paint_button(&mut painter, scene, Affine::IDENTITY);
    painter.finish(scene.size())
}

/// Write a scene's background to an SVG file.
pub fn export_svg(scene: &ButtonScene, path: impl AsRef<Path>) -> RenderResult<()> {
    let path = path.as_ref();
    std::fs::write(path, scene_to_svg(scene))?;
    log::info!("Exported button background to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use avatarbutton_core::ButtonStyle;

    #[test]
    fn test_svg_has_one_path_per_fill() {
        let scene = ButtonScene::compose(&ButtonStyle::with_height(100.0));
        let svg = scene_to_svg(&scene);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="140""#));
        assert!(svg.contains(r#"height="100""#));
        assert_eq!(svg.matches("<path").count(), 3);
        assert_eq!(svg.matches(r##"fill="#d0e0e7""##).count(), 3);
        for id in ["body", "tail", "accent"] {
            assert!(svg.contains(&format!(r#"id="{id}""#)));
        }
    }

    #[test]
    fn test_document_has_one_line_per_element() {
        let scene = ButtonScene::compose(&ButtonStyle::default());
        let svg = scene_to_svg(&scene);
        let lines: Vec<_> = svg.lines().collect();
        assert_eq!(lines.len(), scene.fills.len() + 2);
        assert!(lines[0].starts_with("<svg") && lines[0].ends_with('>'));
        for line in &lines[1..lines.len() - 1] {
            assert!(line.starts_with("  <path") && line.ends_with("/>"), "{line}");
        }
        assert_eq!(lines[lines.len() - 1], "</svg>");
        assert!(svg.ends_with('\n'));
    }

    #[test]
    fn test_transform_is_applied() {
        let scene = ButtonScene::compose(&ButtonStyle::with_height(10.0));
        let mut painter = SvgPainter::new();
        painter.fill_shape(&scene.fills[2].shape, Color::from_rgba8(0, 0, 0, 255), Affine::translate((1000.0, 0.0)));
        assert_eq!(painter.len(), 1);
        let svg = painter.finish(Size::new(10.0, 10.0));
        assert!(svg.contains("M100"));
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("button.svg");
        let scene = ButtonScene::compose(&ButtonStyle::default());
        export_svg(&scene, &out).unwrap();
        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written, scene_to_svg(&scene));
    }
}
