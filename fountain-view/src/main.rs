//! Application entry point for the oil fountains overlay.
//!
//! This binary sets up logging and a fullscreen, transparent eframe window,
//! then delegates simulation and painting to [`Overlay`].

mod error;
mod overlay;

use error::OverlayError;
use fountain_core::config::Config;
use overlay::Overlay;

/// Starts the native overlay window.
///
/// The window is borderless, always on top and has no background, so only
/// the fountains are visible. It closes on Escape or a left click.
///
/// ### Returns
/// - `Ok(())` once the window has been closed.
/// - `Err` if the configuration is invalid or eframe cannot create the
///   native window or event loop.
fn main() -> Result<(), OverlayError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cfg = Config::default();
    cfg.validate()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Oil Fountains")
            .with_fullscreen(true)
            .with_decorations(false)
            .with_transparent(true)
            .with_window_level(egui::WindowLevel::AlwaysOnTop),
        ..Default::default()
    };

    println!("Oil Fountains - click or press Escape to exit");

    eframe::run_native(
        "Oil Fountains",
        options,
        Box::new(move |cc| {
            let size = cc
                .egui_ctx
                .input(|i| i.viewport().monitor_size)
                .unwrap_or_else(|| cc.egui_ctx.screen_rect().size());
            Ok(Box::new(Overlay::new(cfg, size)))
        }),
    )?;

    Ok(())
}
