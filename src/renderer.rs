// src/renderer.rs
use eframe::egui::{self, Color32, TextureHandle, TextureOptions};

use crate::canvas::Canvas;

/// Keeps an egui texture in sync with the canvas raster and paints it.
pub struct Renderer {
    texture: Option<TextureHandle>,
    /// Canvas version currently held by `texture`
    uploaded_version: Option<u64>,
    ctx: egui::Context,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .field("uploaded_version", &self.uploaded_version)
            .finish()
    }
}

impl Renderer {
    /// Creates a renderer bound to the app's egui context
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_context(cc.egui_ctx.clone())
    }

    pub fn with_context(ctx: egui::Context) -> Self {
        Self {
            texture: None,
            uploaded_version: None,
            ctx,
        }
    }

    pub fn uploaded_version(&self) -> Option<u64> {
        self.uploaded_version
    }

    /// Uploads the canvas if it changed since the last upload.
    ///
    /// Returns true when a new upload happened.
    pub fn sync(&mut self, canvas: &Canvas) -> bool {
        if self.texture.is_some() && self.uploaded_version == Some(canvas.version()) {
            return false;
        }

        let image = canvas.to_color_image();
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(self.ctx.load_texture("canvas", image, TextureOptions::NEAREST));
            }
        }
        self.uploaded_version = Some(canvas.version());
        true
    }

    /// Renders the canvas into `rect`
    pub fn render(&mut self, painter: &egui::Painter, rect: egui::Rect, canvas: &Canvas) {
        self.sync(canvas);

        if let Some(texture) = &self.texture {
            painter.image(
                texture.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::Segment;

    #[test]
    fn test_sync_uploads_only_on_change() {
        let mut renderer = Renderer::with_context(egui::Context::default());
        let mut canvas = Canvas::new(32, 32).unwrap();

        assert!(renderer.sync(&canvas));
        assert_eq!(renderer.uploaded_version(), Some(canvas.version()));
        assert!(!renderer.sync(&canvas));

        canvas.draw_segment(&Segment::dot(egui::pos2(4.0, 4.0), Color32::RED, 3.0));
        assert!(renderer.sync(&canvas));
    }

    #[test]
    fn test_render_basics() {
        let mut renderer = Renderer::with_context(egui::Context::default());
        let canvas = Canvas::new(100, 100).unwrap();
        let ctx = egui::Context::default();
        let layer_id = egui::LayerId::background();
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = egui::Painter::new(ctx.clone(), layer_id, rect);

        renderer.render(&painter, rect, &canvas);
        assert!(renderer.uploaded_version().is_some());
    }
}
