//! avatarbutton core library
//!
//! Toolkit-independent geometry and interaction logic for a circular
//! profile-picture button with a corner action icon: the fused background
//! silhouette as fill commands, the two tap regions, and single-tap
//! recognition on top of them.

pub mod color;
pub mod geometry;
pub mod gesture;
pub mod regions;
pub mod scene;
pub mod shapes;
pub mod style;

pub use color::SerializableColor;
pub use geometry::{ButtonGeometry, ACCENT_SEAM, DEFAULT_ASPECT_RATIO, DEFAULT_HEIGHT};
pub use gesture::{PointerEvent, PointerId, TapDispatcher, TapRecognizer, TOUCH_SLOP};
pub use regions::{RegionRole, SecondaryAnchor, TapRegion, TapRegions};
pub use scene::ButtonScene;
pub use shapes::{BackgroundShape, FillCommand};
pub use style::{ButtonStyle, StyleError};
