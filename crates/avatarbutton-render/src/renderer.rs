//! Painter trait abstraction.

use avatarbutton_core::{BackgroundShape, ButtonScene};
use kurbo::Affine;
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Trait for drawing backends that can fill the button's primitives.
///
/// Implementations can target Vello, an SVG document, or anything else that
/// fills paths.
pub trait ScenePainter {
    /// Fill one background shape with a solid color.
    fn fill_shape(&mut self, shape: &BackgroundShape, color: Color, transform: Affine);
}

/// Paint the button background, bottom fill first.
///
/// Slot content is not painted here; hosts draw it on top using
/// `scene.image_slot` and `scene.icon_slot`.
pub fn paint_button(painter: &mut impl ScenePainter, scene: &ButtonScene, transform: Affine) {
    for fill in &scene.fills {
        painter.fill_shape(&fill.shape, fill.color.into(), transform);
    }
}
