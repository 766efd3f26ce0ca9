use eframe::egui;

use crate::palette::PaletteEntry;

/// Palette button: a filled swatch labelled with the colour name.
pub struct ColorSwatchButton {
    pub entry: PaletteEntry,
    pub selected: bool,
}

impl ColorSwatchButton {
    pub fn new(entry: PaletteEntry, selected: bool) -> Self {
        Self { entry, selected }
    }

    /// Black or white, whichever reads better on the swatch.
    fn label_color(&self) -> egui::Color32 {
        let [r, g, b, _] = self.entry.color.to_array();
        let luma = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
        if luma > 140.0 {
            egui::Color32::BLACK
        } else {
            egui::Color32::WHITE
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(56.0, 28.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let fill = if response.hovered() {
                self.entry.color.gamma_multiply(0.85)
            } else {
                self.entry.color
            };
            ui.painter().rect_filled(rect, 4.0, fill);

            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.entry.name,
                egui::FontId::proportional(13.0),
                self.label_color(),
            );

            if self.selected {
                ui.painter().rect_stroke(
                    rect.expand(1.0),
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response.on_hover_text(format!("Paint with {}", self.entry.name))
    }
}
