use egui::Pos2;

use crate::brush::BrushState;
use crate::stroke::Segment;

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    StrokeStarted {
        at: Pos2,
    },
    SegmentRendered(Segment),
    StrokeEnded,
    Cleared,
    BrushChanged(BrushState),
}

impl SurfaceEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::StrokeStarted { .. } => "StrokeStarted",
            Self::SegmentRendered(_) => "SegmentRendered",
            Self::StrokeEnded => "StrokeEnded",
            Self::Cleared => "Cleared",
            Self::BrushChanged(_) => "BrushChanged",
        }
    }
}
