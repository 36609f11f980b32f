//! Composition of one button render: fills, tap regions and slot areas.

use crate::geometry::ButtonGeometry;
use crate::regions::{RegionRole, TapRegions};
use crate::shapes::{BackgroundShape, FillCommand};
use crate::style::ButtonStyle;
use kurbo::{Circle, Point, Rect};

/// Everything a host needs to draw the button and wire up its taps.
///
/// Rebuilt from scratch on every render; it holds no state of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonScene {
    pub geometry: ButtonGeometry,
    /// Background fills, bottom to top: body circle, tail, accent.
    pub fills: Vec<FillCommand>,
    pub regions: TapRegions,
    /// Clip circle for the image slot, centred in the primary square.
    pub image_slot: Circle,
    /// Area handed to the icon slot.
    pub icon_slot: Rect,
}

impl ButtonScene {
    /// Compose the scene for a style.
    pub fn compose(style: &ButtonStyle) -> Self {
        let geometry = style.geometry();
        let color = style.color;

        let fills = vec![
            FillCommand::new(BackgroundShape::Circle(geometry.body_circle()), color),
            FillCommand::new(
                BackgroundShape::RoundedRect {
                    rect: geometry.tail_rect(),
                    radii: geometry.effective_tail_radii(),
                },
                color,
            ),
            FillCommand::new(BackgroundShape::Accent(geometry.accent_path()), color),
        ];

        let regions = TapRegions::new(&geometry, style.secondary_anchor);
        let h = geometry.height;
        let image_slot = Circle::new(Point::new(h / 2.0, h / 2.0), (h - style.image_inset) / 2.0);
        let icon_slot = regions.secondary.rect;

        log::trace!(
            "Composed button scene: height={} size={}x{}",
            h,
            geometry.body_width,
            geometry.body_height
        );

        Self {
            geometry,
            fills,
            regions,
            image_slot,
            icon_slot,
        }
    }

    /// Size of the bounding box.
    pub fn size(&self) -> kurbo::Size {
        self.geometry.bounds().size()
    }

    /// Which callback a tap at `point` belongs to.
    pub fn resolve_tap(&self, point: Point) -> Option<RegionRole> {
        self.regions.resolve(point)
    }
}
