#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use simple_paint::{PaintApp, PaintConfig, PaintError};

/// Room for the toolbar and status bar around the canvas.
const CHROME_HEIGHT: f32 = 80.0;

fn main() -> Result<(), PaintError> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = PaintConfig::from_env();
    let inner_size = [
        config.canvas_width as f32,
        config.canvas_height as f32 + CHROME_HEIGHT,
    ];

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(inner_size)
            .with_min_inner_size(inner_size),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| Ok(Box::new(PaintApp::new(cc, &config).map_err(|err| err.to_string())?))),
    )?;
    Ok(())
}
