//! Vello-based painter implementation.

use crate::renderer::{paint_button, ScenePainter};
use avatarbutton_core::{BackgroundShape, ButtonScene};
use kurbo::Affine;
use peniko::{Color, Fill};
use vello::Scene;

/// Builds a Vello scene for GPU-accelerated rendering of the button.
pub struct VelloPainter {
    /// The Vello scene being built.
    scene: Scene,
}

impl Default for VelloPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloPainter {
    /// Create a new painter with an empty scene.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
        }
    }

    /// Get the built scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the built scene, leaving an empty one behind.
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    /// Clear the scene and paint `button` at `transform`.
    ///
    /// Called once per frame: nothing from the previous frame is kept.
    pub fn build_scene(&mut self, button: &ButtonScene, transform: Affine) {
        self.scene.reset();
        paint_button(self, button, transform);
    }
}

impl ScenePainter for VelloPainter {
    fn fill_shape(&mut self, shape: &BackgroundShape, color: Color, transform: Affine) {
        match shape {
            BackgroundShape::Circle(circle) => {
                self.scene.fill(Fill::NonZero, transform, color, None, circle);
            }
            _ => {
                let path = shape.to_path();
                self.scene.fill(Fill::NonZero, transform, color, None, &path);
            }
        }
    }
}
