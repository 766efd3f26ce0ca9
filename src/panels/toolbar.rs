use eframe::egui::{self, Color32};

use crate::PaintApp;
use crate::brush::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, Tool};
use crate::components::{ColorSwatchButton, ToolButton};
use crate::palette::PALETTE;

/// What the user asked for through the toolbar this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolbarAction {
    SelectColor(Color32),
    SelectTool(Tool),
    SetSize(f32),
    Clear,
}

pub fn toolbar(app: &mut PaintApp, ctx: &egui::Context) {
    let brush = *app.surface().brush();
    let mut actions = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 10.0;

            ui.label("Color:");
            for entry in PALETTE {
                let selected = !brush.is_eraser() && brush.color() == entry.color;
                if ColorSwatchButton::new(entry, selected).show(ui).clicked() {
                    actions.push(ToolbarAction::SelectColor(entry.color));
                }
            }

            ui.separator();

            for tool in [Tool::Brush, Tool::Eraser] {
                if ToolButton::new(tool, brush.tool() == tool).show(ui).clicked() {
                    actions.push(ToolbarAction::SelectTool(tool));
                }
            }

            ui.separator();

            ui.label("Size:");
            let mut size = brush.size();
            let slider = egui::Slider::new(&mut size, MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE);
            if ui.add_sized([140.0, 20.0], slider).changed() {
                actions.push(ToolbarAction::SetSize(size));
            }

            ui.separator();

            if ui.button("Restart (Clear)").clicked() {
                actions.push(ToolbarAction::Clear);
            }
        });
        ui.add_space(6.0);
    });

    for action in actions {
        app.apply_toolbar_action(action);
    }
}
