//! Demo window: one button at height 100 and two click counters.

use avatarbutton_core::ButtonStyle;
use avatarbutton_widgets::{icon_slot, image_slot, theme, ImageIconButton};
use egui::{include_image, Align, Layout, RichText};

pub struct DemoApp {
    style: ButtonStyle,
    image_clicks: u32,
    icon_clicks: u32,
}

impl DemoApp {
    pub fn new(style: ButtonStyle) -> Self {
        Self {
            style,
            image_clicks: 0,
            icon_clicks: 0,
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                ui.add_space(24.0);

                let image_clicks = &mut self.image_clicks;
                let icon_clicks = &mut self.icon_clicks;
                ImageIconButton::new(
                    image_slot(include_image!("../assets/avatar.svg")),
                    || {
                        log::info!("Image clicked");
                        *image_clicks += 1;
                    },
                    icon_slot(include_image!("../assets/menu.svg"), theme::ICON_TINT),
                    || {
                        log::info!("Icon clicked");
                        *icon_clicks += 1;
                    },
                )
                .style(self.style.clone())
                .show(ui);

                ui.add_space(16.0);
                ui.label(RichText::new(format!("Image clicks: {}", self.image_clicks)).size(14.0));
                ui.label(RichText::new(format!("Icon clicks: {}", self.icon_clicks)).size(14.0));
            });
        });
    }
}
