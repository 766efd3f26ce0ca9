use eframe::egui;

use crate::PaintApp;

pub fn canvas_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(ctx.style().visuals.panel_fill))
        .show(ctx, |ui| {
            let [width, height] = app.surface().canvas().size();
            let desired_size = egui::vec2(width as f32, height as f32);
            let (rect, _response) = ui.allocate_exact_size(desired_size, egui::Sense::click_and_drag());

            // Handle input before painting so this frame shows the new segments
            app.handle_input(ctx, rect);

            let painter = ui.painter_at(rect);
            app.render_canvas(&painter, rect);
        });

    if app.surface().is_stroking() {
        ctx.request_repaint();
    }
}
