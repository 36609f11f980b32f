//! egui widget for the avatar image/icon button.
//!
//! - **ImageIconButton**: profile picture with a corner action icon and two
//!   independent tap regions
//! - **Slots**: helpers that paint an egui image into the image or icon slot
//! - **Painter**: egui backend for the background fills

pub mod image_icon_button;
pub mod painter;

pub use image_icon_button::{
    icon_slot, image_slot, ImageIconButton, ImageIconButtonResponse, Slot,
};
pub use painter::EguiPainter;

/// Standard colors used by the widget and its demo.
pub mod theme {
    use egui::Color32;

    /// Default button background (pale blue-grey).
    pub const BUTTON_BG: Color32 = Color32::from_rgb(0xD0, 0xE0, 0xE7);
    /// Icon tint used when the caller has no preference.
    pub const ICON_TINT: Color32 = Color32::BLACK;
}
