use egui::{Context, Event, PointerButton, Pos2, Rect};

/// Where a pointer event happened, in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// Position relative to the canvas' top-left corner
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Pointer input the drawing surface understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown { location: InputLocation },
    /// Pointer moved while the primary button is held
    PointerMove { location: InputLocation },
    /// Primary button released, or the pointer left the window mid-drag
    PointerUp { location: Option<InputLocation> },
}

impl InputEvent {
    pub fn location(&self) -> Option<InputLocation> {
        match self {
            InputEvent::PointerDown { location } | InputEvent::PointerMove { location } => {
                Some(*location)
            }
            InputEvent::PointerUp { location } => *location,
        }
    }
}

/// Turns raw egui events into [`InputEvent`]s for the canvas.
///
/// Works on the ordered event list of a frame rather than the pointer
/// snapshot, so several moves within one frame each produce a segment.
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
    /// A drag that started on the canvas is in progress
    pressed: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            pressed: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: Pos2::ZERO + (pos - self.canvas_rect.min),
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Translate a single raw event. Returns `None` for anything that does
    /// not affect drawing.
    pub fn translate(&mut self, event: &Event) -> Option<InputEvent> {
        match event {
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: true,
                ..
            } => {
                let location = self.make_location(*pos);
                if !location.is_in_canvas {
                    return None;
                }
                self.pressed = true;
                Some(InputEvent::PointerDown { location })
            }
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: false,
                ..
            } if self.pressed => {
                self.pressed = false;
                Some(InputEvent::PointerUp {
                    location: Some(self.make_location(*pos)),
                })
            }
            // Drags keep going outside the canvas; rendering clips them.
            Event::PointerMoved(pos) if self.pressed => Some(InputEvent::PointerMove {
                location: self.make_location(*pos),
            }),
            Event::PointerGone if self.pressed => {
                self.pressed = false;
                Some(InputEvent::PointerUp { location: None })
            }
            _ => None,
        }
    }

    pub fn process_events(&mut self, events: &[Event]) -> Vec<InputEvent> {
        events.iter().filter_map(|event| self.translate(event)).collect()
    }

    /// Process this frame's egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|input| self.process_events(&input.events))
    }
}
