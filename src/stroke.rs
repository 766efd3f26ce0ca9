use egui::{Color32, Pos2};

/// One rendered primitive of a stroke: a straight line, or a dot when
/// `from == to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    from: Pos2,
    to: Pos2,
    color: Color32,
    width: f32,
}

impl Segment {
    pub fn new(from: Pos2, to: Pos2, color: Color32, width: f32) -> Self {
        Self {
            from,
            to,
            color,
            width,
        }
    }

    pub fn dot(at: Pos2, color: Color32, width: f32) -> Self {
        Self::new(at, at, color, width)
    }

    pub fn from(&self) -> Pos2 {
        self.from
    }

    pub fn to(&self) -> Pos2 {
        self.to
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn is_dot(&self) -> bool {
        self.from == self.to
    }

    pub fn is_finite(&self) -> bool {
        self.from.x.is_finite()
            && self.from.y.is_finite()
            && self.to.x.is_finite()
            && self.to.y.is_finite()
            && self.width.is_finite()
    }

    /// Distance from `p` to the closest point of the segment.
    pub fn distance_to(&self, p: Pos2) -> f32 {
        let along = self.to - self.from;
        let len_sq = along.length_sq();
        if len_sq <= f32::EPSILON {
            return p.distance(self.from);
        }
        let t = ((p - self.from).dot(along) / len_sq).clamp(0.0, 1.0);
        p.distance(self.from + along * t)
    }
}
