use eframe::egui;

use crate::PaintApp;

pub fn status_bar(app: &PaintApp, ctx: &egui::Context) {
    let surface = app.surface();
    let brush = surface.brush();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("{} · size {:.0}", brush.tool().name(), brush.size()));
            ui.separator();
            ui.label(surface.stroke_state().name());
            ui.separator();
            ui.label(format!("{} segments", surface.segments_rendered()));
            if let Some(event) = app.recent_events().last() {
                ui.separator();
                ui.weak(format!("last: {}", event.name()));
            }
        });
    });
}
