//! avatarbutton render library
//!
//! Painters that turn a composed button scene into pixels or markup.
//! The default implementation uses Vello for GPU-accelerated rendering.

mod renderer;
mod svg;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{paint_button, RenderResult, RendererError, ScenePainter};
pub use svg::{export_svg, scene_to_svg, SvgPainter};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloPainter;
