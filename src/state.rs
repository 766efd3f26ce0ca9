use egui::Pos2;

/// Whether a stroke is in progress, and where its pen currently is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StrokeState {
    #[default]
    Idle,
    Stroking {
        /// Pen position the next segment starts from
        last: Pos2,
    },
}

impl StrokeState {
    pub fn begin(&mut self, at: Pos2) {
        *self = Self::Stroking { last: at };
    }

    /// Moves the pen, returning where it was. `None` while idle.
    pub fn advance(&mut self, to: Pos2) -> Option<Pos2> {
        match self {
            Self::Stroking { last } => Some(std::mem::replace(last, to)),
            Self::Idle => None,
        }
    }

    /// Returns true if a stroke was actually ended.
    pub fn end(&mut self) -> bool {
        let was_stroking = self.is_stroking();
        *self = Self::Idle;
        was_stroking
    }

    pub fn last_position(&self) -> Option<Pos2> {
        match self {
            Self::Stroking { last } => Some(*last),
            Self::Idle => None,
        }
    }

    pub fn is_stroking(&self) -> bool {
        matches!(self, Self::Stroking { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Stroking { .. } => "Stroking",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_lifecycle() {
        let mut state = StrokeState::default();
        assert!(!state.is_stroking());
        assert_eq!(state.advance(pos2(1.0, 1.0)), None);

        state.begin(pos2(10.0, 10.0));
        assert_eq!(state.name(), "Stroking");
        assert_eq!(state.advance(pos2(20.0, 15.0)), Some(pos2(10.0, 10.0)));
        assert_eq!(state.last_position(), Some(pos2(20.0, 15.0)));

        assert!(state.end());
        assert!(!state.end());
        assert_eq!(state, StrokeState::Idle);
    }
}
