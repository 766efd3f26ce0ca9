use eframe::egui;

use crate::config::PaintConfig;
use crate::error::PaintResult;
use crate::event::{EventLog, LogHandler};
use crate::input::InputHandler;
use crate::panels::{self, ToolbarAction};
use crate::renderer::Renderer;
use crate::surface::DrawingSurface;

/// How many recent surface events the app keeps around.
const RECENT_EVENTS: usize = 64;

pub struct PaintApp {
    surface: DrawingSurface,
    // No renderer until there is an egui context to upload into
    renderer: Option<Renderer>,
    input: InputHandler,
    recent_events: EventLog,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &PaintConfig) -> PaintResult<Self> {
        let mut app = Self::headless(config)?;
        app.renderer = Some(Renderer::new(cc));
        Ok(app)
    }

    /// The app without a window attached; input and toolbar actions still
    /// work, nothing is uploaded for display.
    pub fn headless(config: &PaintConfig) -> PaintResult<Self> {
        let surface = DrawingSurface::with_config(config)?;
        let recent_events = EventLog::with_capacity(RECENT_EVENTS);
        surface.subscribe(Box::new(LogHandler));
        surface.subscribe(Box::new(recent_events.clone()));

        log::info!(
            "Created {}x{} canvas",
            surface.canvas().width(),
            surface.canvas().height()
        );

        Ok(Self {
            surface,
            renderer: None,
            input: InputHandler::new(egui::Rect::NOTHING),
            recent_events,
        })
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    pub fn recent_events(&self) -> &EventLog {
        &self.recent_events
    }

    pub fn apply_toolbar_action(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::SelectColor(color) => {
                log::info!("Color selected from toolbar: {:?}", color);
                self.surface.select_palette_color(color);
            }
            ToolbarAction::SelectTool(tool) => {
                log::info!("Tool selected from toolbar: {}", tool.name());
                self.surface.set_tool(tool);
            }
            ToolbarAction::SetSize(size) => self.surface.set_size(size),
            ToolbarAction::Clear => self.surface.clear(),
        }
    }

    /// Feeds this frame's pointer events for the canvas at `canvas_rect`
    /// into the surface.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.input.set_canvas_rect(canvas_rect);
        for event in self.input.process_input(ctx) {
            self.surface.handle_input(event);
        }
    }

    pub fn render_canvas(&mut self, painter: &egui::Painter, rect: egui::Rect) {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(painter, rect, self.surface.canvas());
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::toolbar(self, ctx);
        panels::status_bar(self, ctx);
        panels::canvas_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::Tool;
    use crate::event::SurfaceEvent;
    use eframe::egui::Color32;

    #[test]
    fn test_toolbar_actions_drive_surface() {
        let mut app = PaintApp::headless(&PaintConfig::default()).unwrap();

        app.apply_toolbar_action(ToolbarAction::SelectTool(Tool::Eraser));
        assert!(app.surface().brush().is_eraser());

        app.apply_toolbar_action(ToolbarAction::SelectColor(Color32::from_rgb(0, 0, 255)));
        assert!(!app.surface().brush().is_eraser());
        assert_eq!(app.surface().brush().color(), Color32::from_rgb(0, 0, 255));

        app.apply_toolbar_action(ToolbarAction::SetSize(17.0));
        assert_eq!(app.surface().brush().size(), 17.0);

        app.apply_toolbar_action(ToolbarAction::Clear);
        assert_eq!(app.recent_events().last(), Some(SurfaceEvent::Cleared));
    }

    #[test]
    fn test_headless_rejects_bad_config() {
        let config = PaintConfig {
            canvas_height: 0,
            ..PaintConfig::default()
        };
        assert!(PaintApp::headless(&config).is_err());
    }
}
