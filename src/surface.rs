//! The drawing surface: a raster canvas plus the brush settings used to
//! paint on it.
//!
//! Pointer input drives a simple state machine:
//!
//! ```text
//! Idle --pointer down--> Stroking --pointer move--> Stroking --pointer up--> Idle
//! ```
//!
//! Every pointer-down renders a dot and every pointer-move while stroking
//! renders one segment from the previous pen position. Brush settings are
//! read when each segment is rendered, so changing them mid-stroke affects
//! the next segment only. [`DrawingSurface::clear`] is valid in both states
//! and leaves the stroke state untouched.

use egui::{Color32, Pos2};

use crate::brush::{BrushState, Tool};
use crate::canvas::Canvas;
use crate::config::PaintConfig;
use crate::error::PaintResult;
use crate::event::{EventBus, EventHandler, SurfaceEvent};
use crate::input::InputEvent;
use crate::state::StrokeState;
use crate::stroke::Segment;

fn is_finite(pos: Pos2) -> bool {
    pos.x.is_finite() && pos.y.is_finite()
}

#[derive(Debug, Default)]
pub struct DrawingSurface {
    canvas: Canvas,
    brush: BrushState,
    stroke: StrokeState,
    /// Segments rendered since creation, dots included
    segments_rendered: u64,
    events: EventBus,
}

impl DrawingSurface {
    pub fn new(width: u32, height: u32) -> PaintResult<Self> {
        Ok(Self {
            canvas: Canvas::new(width, height)?,
            ..Self::default()
        })
    }

    pub fn with_config(config: &PaintConfig) -> PaintResult<Self> {
        let mut surface = Self::new(config.canvas_width, config.canvas_height)?;
        surface.brush.set_size(config.initial_brush_size);
        Ok(surface)
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn brush(&self) -> &BrushState {
        &self.brush
    }

    pub fn stroke_state(&self) -> StrokeState {
        self.stroke
    }

    pub fn is_stroking(&self) -> bool {
        self.stroke.is_stroking()
    }

    pub fn segments_rendered(&self) -> u64 {
        self.segments_rendered
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    fn render(&mut self, segment: Segment) {
        self.canvas.draw_segment(&segment);
        self.segments_rendered += 1;
        self.events.emit(SurfaceEvent::SegmentRendered(segment));
    }

    /// Starts a stroke at `pos` and leaves a dot there, so a click without
    /// a drag still marks the canvas.
    pub fn on_pointer_down(&mut self, pos: Pos2) {
        if !is_finite(pos) {
            log::warn!("Ignoring pointer down at non-finite position {:?}", pos);
            return;
        }
        if self.stroke.is_stroking() {
            log::debug!("Pointer down while stroking; starting a new stroke");
        }

        self.stroke.begin(pos);
        self.events.emit(SurfaceEvent::StrokeStarted { at: pos });
        log::debug!("Stroke started at {:?} with {:?}", pos, self.brush);

        let segment = Segment::dot(pos, self.brush.effective_color(), self.brush.size());
        self.render(segment);
    }

    /// Extends the current stroke to `pos`. Does nothing while idle.
    pub fn on_pointer_move(&mut self, pos: Pos2) {
        if !is_finite(pos) {
            log::warn!("Ignoring pointer move to non-finite position {:?}", pos);
            return;
        }
        let Some(from) = self.stroke.advance(pos) else {
            return;
        };

        let segment = Segment::new(from, pos, self.brush.effective_color(), self.brush.size());
        self.render(segment);
    }

    pub fn on_pointer_up(&mut self) {
        if self.stroke.end() {
            self.events.emit(SurfaceEvent::StrokeEnded);
            log::debug!("Stroke ended ({} segments so far)", self.segments_rendered);
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { location } => self.on_pointer_down(location.position),
            InputEvent::PointerMove { location } => self.on_pointer_move(location.position),
            InputEvent::PointerUp { .. } => self.on_pointer_up(),
        }
    }

    /// Wipes the canvas to white. An in-progress stroke keeps going from
    /// its last position.
    pub fn clear(&mut self) {
        self.canvas.clear();
        self.events.emit(SurfaceEvent::Cleared);
        log::info!("Canvas cleared");
    }

    fn brush_changed(&self) {
        self.events.emit(SurfaceEvent::BrushChanged(self.brush));
    }

    pub fn set_color(&mut self, color: Color32) {
        self.brush.set_color(color);
        self.brush_changed();
    }

    pub fn set_size(&mut self, size: f32) {
        self.brush.set_size(size);
        self.brush_changed();
    }

    pub fn set_eraser(&mut self, eraser: bool) {
        self.brush.set_eraser(eraser);
        self.brush_changed();
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.set_eraser(tool == Tool::Eraser);
    }

    /// What a palette button does: pick the colour and go back to the brush.
    pub fn select_palette_color(&mut self, color: Color32) {
        self.brush.set_color(color);
        self.brush.set_eraser(false);
        self.brush_changed();
    }
}
