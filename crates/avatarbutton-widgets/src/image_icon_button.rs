//! Profile-picture button with a corner action icon.

use crate::painter::{textured_circle_mesh, EguiPainter};
use avatarbutton_core::{ButtonScene, ButtonStyle, RegionRole, SerializableColor};
use avatarbutton_render::paint_button;
use egui::load::TexturePoll;
use egui::{
    pos2, vec2, Color32, CornerRadius, CursorIcon, Image, ImageSource, Pos2, Rect, Response,
    Sense, Shape, Ui,
};
use kurbo::{Affine, Shape as KurboShape};

/// Caller-supplied content drawn into a reserved area of the button.
///
/// The widget never owns, caches or inspects what a slot draws.
pub type Slot<'a> = Box<dyn FnOnce(&mut Ui, Rect) + 'a>;

/// Responses of the two tap regions.
pub struct ImageIconButtonResponse {
    /// Allocated bounding rect of the whole button.
    pub rect: Rect,
    /// Primary region (the image square).
    pub image: Response,
    /// Secondary region (the corner icon).
    pub icon: Response,
}

impl ImageIconButtonResponse {
    /// The region clicked this frame, if any.
    pub fn clicked(&self) -> Option<RegionRole> {
        if self.icon.clicked() {
            Some(RegionRole::Secondary)
        } else if self.image.clicked() {
            Some(RegionRole::Primary)
        } else {
            None
        }
    }
}

/// A circular image button with a secondary icon in its bottom-right notch.
///
/// The background is one silhouette built from a circle, a rounded tail and a
/// pointed accent, all in the same color. Two tap regions sit on top of it:
/// the full `height × height` square for the image and a small square in the
/// corner for the icon. The icon region is registered last, so where the
/// two overlap it wins.
pub struct ImageIconButton<'a> {
    image: Slot<'a>,
    on_image_click: Box<dyn FnMut() + 'a>,
    icon: Slot<'a>,
    on_icon_click: Box<dyn FnMut() + 'a>,
    style: ButtonStyle,
}

impl<'a> ImageIconButton<'a> {
    /// Create a new button from its two slots and two callbacks.
    pub fn new(
        image: impl FnOnce(&mut Ui, Rect) + 'a,
        on_image_click: impl FnMut() + 'a,
        icon: impl FnOnce(&mut Ui, Rect) + 'a,
        on_icon_click: impl FnMut() + 'a,
    ) -> Self {
        Self {
            image: Box::new(image),
            on_image_click: Box::new(on_image_click),
            icon: Box::new(icon),
            on_icon_click: Box::new(on_icon_click),
            style: ButtonStyle::default(),
        }
    }

    /// Set the background color.
    pub fn color(mut self, color: Color32) -> Self {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        self.style.color = SerializableColor::new(r, g, b, a);
        self
    }

    /// Set the button height. The width follows from the aspect ratio.
    pub fn height(mut self, height: f32) -> Self {
        self.style.height = f64::from(height);
        self
    }

    /// Replace the whole style.
    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// Show the button. Callbacks run during this call, at most one per frame.
    pub fn show(mut self, ui: &mut Ui) -> ImageIconButtonResponse {
        let scene = ButtonScene::compose(&self.style);
        let size = scene.size();
        let (rect, response) =
            ui.allocate_exact_size(vec2(size.width as f32, size.height as f32), Sense::hover());
        let origin = rect.min;

        if ui.is_rect_visible(rect) {
            let mut painter = EguiPainter::new(ui.painter());
            paint_button(
                &mut painter,
                &scene,
                Affine::translate((f64::from(origin.x), f64::from(origin.y))),
            );
        }

        (self.image)(ui, to_screen(scene.image_slot.bounding_box(), origin));
        (self.icon)(ui, to_screen(scene.icon_slot, origin));

        // Registration order is z-order: the icon goes last so it is on top.
        let image = ui
            .interact(
                to_screen(scene.regions.primary.rect, origin),
                response.id.with("image"),
                Sense::click(),
            )
            .on_hover_cursor(CursorIcon::PointingHand);
        let icon = ui
            .interact(
                to_screen(scene.regions.secondary.rect, origin),
                response.id.with("icon"),
                Sense::click(),
            )
            .on_hover_cursor(CursorIcon::PointingHand);

        let result = ImageIconButtonResponse { rect, image, icon };
        match result.clicked() {
            Some(RegionRole::Primary) => {
                log::debug!("Image region clicked");
                (self.on_image_click)();
            }
            Some(RegionRole::Secondary) => {
                log::debug!("Icon region clicked");
                (self.on_icon_click)();
            }
            None => {}
        }
        result
    }
}

/// Move a button-local rect into screen space.
fn to_screen(rect: kurbo::Rect, origin: Pos2) -> Rect {
    Rect::from_min_max(
        pos2(origin.x + rect.x0 as f32, origin.y + rect.y0 as f32),
        pos2(origin.x + rect.x1 as f32, origin.y + rect.y1 as f32),
    )
}

/// Image slot: paints `source` clipped to the slot's circle.
///
/// egui corner radii stop at `u8::MAX`, so slots wider than 510 points are
/// drawn as a textured circle mesh instead.
pub fn image_slot<'a>(source: ImageSource<'a>) -> impl FnOnce(&mut Ui, Rect) + 'a {
    move |ui: &mut Ui, rect: Rect| {
        let image = Image::new(source).fit_to_exact_size(rect.size());
        let radius = rect.width() / 2.0;
        if radius <= f32::from(u8::MAX) {
            image
                .corner_radius(CornerRadius::same(radius.max(0.0) as u8))
                .paint_at(ui, rect);
            return;
        }
        match image.load_for_size(ui.ctx(), rect.size()) {
            Ok(TexturePoll::Ready { texture }) => {
                ui.painter().add(Shape::mesh(textured_circle_mesh(rect, texture.id)));
            }
            // Still loading or failed: let egui draw its placeholder.
            _ => image.paint_at(ui, rect),
        }
    }
}

/// Icon slot: paints `source` tinted, filling the slot rect.
pub fn icon_slot<'a>(source: ImageSource<'a>, tint: Color32) -> impl FnOnce(&mut Ui, Rect) + 'a {
    move |ui: &mut Ui, rect: Rect| {
        Image::new(source)
            .fit_to_exact_size(rect.size())
            .tint(tint)
            .paint_at(ui, rect);
    }
}
