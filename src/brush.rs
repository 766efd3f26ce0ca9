use egui::Color32;

pub const MIN_BRUSH_SIZE: f32 = 1.0;
pub const MAX_BRUSH_SIZE: f32 = 30.0;
pub const DEFAULT_BRUSH_SIZE: f32 = 4.0;

/// Colour painted by the eraser.
pub const ERASER_COLOR: Color32 = Color32::WHITE;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Tool {
    #[default]
    Brush,
    Eraser,
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Brush => "Brush",
            Tool::Eraser => "Eraser",
        }
    }
}

/// Settings applied to the next rendered segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushState {
    color: Color32,
    size: f32,
    eraser: bool,
}

impl Default for BrushState {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            size: DEFAULT_BRUSH_SIZE,
            eraser: false,
        }
    }
}

impl BrushState {
    pub fn new(color: Color32, size: f32) -> Self {
        let mut brush = Self {
            color,
            ..Self::default()
        };
        brush.set_size(size);
        brush
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Clamps into the slider range. Non-finite sizes are ignored.
    pub fn set_size(&mut self, size: f32) {
        if size.is_finite() {
            self.size = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
        }
    }

    pub fn is_eraser(&self) -> bool {
        self.eraser
    }

    pub fn set_eraser(&mut self, eraser: bool) {
        self.eraser = eraser;
    }

    pub fn tool(&self) -> Tool {
        if self.eraser { Tool::Eraser } else { Tool::Brush }
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.eraser = tool == Tool::Eraser;
    }

    /// The colour a segment rendered right now would use.
    pub fn effective_color(&self) -> Color32 {
        if self.eraser { ERASER_COLOR } else { self.color }
    }
}
