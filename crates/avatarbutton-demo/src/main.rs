//! Demo application entry point (native).

mod app;
mod config;

use app::DemoApp;
use avatarbutton_core::ButtonScene;
use config::{DemoConfig, USAGE};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = match DemoConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    if let Some(out) = &config.svg_out {
        let scene = ButtonScene::compose(&config.style);
        if let Err(e) = avatarbutton_render::export_svg(&scene, out) {
            log::error!("Failed to export SVG: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    log::info!("Starting avatarbutton demo");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size([config.width, config.height]),
        ..Default::default()
    };
    let style = config.style.clone();
    eframe::run_native(
        &config.title,
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(DemoApp::new(style)))
        }),
    )
}
