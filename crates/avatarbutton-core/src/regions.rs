//! Tap regions layered over the button.
//!
//! Hit-testing does not follow the irregular silhouette. Each region is a
//! plain square, which is friendlier to thumbs than the exact outline.

use crate::geometry::ButtonGeometry;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Divisor applied to the height to get the secondary region's side.
pub const SECONDARY_SIZE_DIVISOR: f64 = 2.2;

/// Divisor applied to the height to get the secondary region's inset.
pub const SECONDARY_INSET_DIVISOR: f64 = 25.0;

/// Which callback a region dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionRole {
    /// The main image area.
    Primary,
    /// The corner icon.
    Secondary,
}

/// Corner the secondary region is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SecondaryAnchor {
    /// Bottom-right corner of the primary square, `(h, h)`.
    #[default]
    PrimarySquare,
    /// A `h / 2.2` box aligned to the bottom-right corner of the full bounding
    /// box, `(aspect * h, h)`, with the `h / 25` inset taken from inside it.
    /// The hit square is `h / 2.2 - h / 25` on a side.
    BoundingBox,
}

/// A rectangular area bound to one role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapRegion {
    pub role: RegionRole,
    pub rect: Rect,
}

impl TapRegion {
    pub fn new(role: RegionRole, rect: Rect) -> Self {
        Self { role, rect }
    }

    /// Check if a point hits this region. The right and bottom edges are exclusive.
    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains(point)
    }
}

/// The two regions of one button, in z-order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapRegions {
    pub primary: TapRegion,
    /// Drawn above `primary`.
    pub secondary: TapRegion,
}

impl TapRegions {
    /// Build both regions for the given geometry.
    pub fn new(geometry: &ButtonGeometry, anchor: SecondaryAnchor) -> Self {
        let h = geometry.height;
        let primary = TapRegion::new(RegionRole::Primary, Rect::new(0.0, 0.0, h, h));

        let side = h / SECONDARY_SIZE_DIVISOR;
        let inset = h / SECONDARY_INSET_DIVISOR;
        let rect = match anchor {
            SecondaryAnchor::PrimarySquare => {
                Rect::new(h - inset - side, h - inset - side, h - inset, h - inset)
            }
            SecondaryAnchor::BoundingBox => {
                let (w, bottom) = (geometry.body_width, geometry.body_height);
                Rect::new(w - side, bottom - side, w - inset, bottom - inset)
            }
        };
        let secondary = TapRegion::new(RegionRole::Secondary, rect);

        Self { primary, secondary }
    }

    /// Regions from topmost to bottommost.
    pub fn topmost_first(&self) -> [TapRegion; 2] {
        [self.secondary, self.primary]
    }

    /// Look up a region by role.
    pub fn get(&self, role: RegionRole) -> &TapRegion {
        match role {
            RegionRole::Primary => &self.primary,
            RegionRole::Secondary => &self.secondary,
        }
    }

    /// Resolve a tap position to exactly one role.
    ///
    /// Where the regions overlap the topmost one wins, matching how a layered
    /// UI toolkit delivers a tap to the child drawn last.
    pub fn resolve(&self, point: Point) -> Option<RegionRole> {
        self.topmost_first()
            .into_iter()
            .find(|region| region.contains(point))
            .map(|region| region.role)
    }

    /// Area shared by both regions, if any.
    pub fn overlap(&self) -> Option<Rect> {
        let shared = self.primary.rect.intersect(self.secondary.rect);
        (shared.area() > 0.0).then_some(shared)
    }
}
