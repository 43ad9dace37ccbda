use glam::Vec2;

use crate::input::PaddleKeys;

/// Which edge of the window a paddle sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Player component - a paddle moving along the vertical axis
///
/// The paddle is a segment of half-length `margin` centred on `position`,
/// so `position ± margin` is kept inside [-1, 1].
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub side: Side,
    pub keys: PaddleKeys,
    position: f32,
    margin: f32,
}

impl Player {
    /// `margin` is limited to [0, 1] and `position` pulled inside the bounds it allows.
    pub fn new(side: Side, position: f32, margin: f32, keys: PaddleKeys) -> Self {
        let margin = margin.max(0.0).min(1.0);
        let position = position.max(-1.0 + margin).min(1.0 - margin);
        Self {
            side,
            keys,
            position,
            margin,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn upper_bound(&self) -> f32 {
        self.position + self.margin
    }

    pub fn lower_bound(&self) -> f32 {
        self.position - self.margin
    }

    /// Move up by `step`, snapping to `1.0 - margin` if the step would overshoot.
    /// Returns true when the position was snapped.
    pub fn move_up(&mut self, step: f32) -> bool {
        if self.position + step + self.margin > 1.0 {
            self.position = 1.0 - self.margin;
            true
        } else {
            self.position += step;
            false
        }
    }

    /// Move down by `step`, snapping to `-1.0 + margin` if the step would overshoot.
    /// Returns true when the position was snapped.
    pub fn move_down(&mut self, step: f32) -> bool {
        if self.position - step - self.margin < -1.0 {
            self.position = -1.0 + self.margin;
            true
        } else {
            self.position -= step;
            false
        }
    }
}

/// Ball component
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Most rim points a ball mesh can index with u16 alongside its centre
    pub const MAX_SEGMENTS: u32 = u16::MAX as u32 - 1;

    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self { pos, radius }
    }

    /// Points on the rim, counter-clockwise, starting at angle 0.
    /// `segments` is kept within [3, `MAX_SEGMENTS`].
    pub fn outline(&self, segments: u32) -> Vec<Vec2> {
        let segments = segments.clamp(3, Self::MAX_SEGMENTS);
        (0..segments)
            .map(|i| {
                let angle = std::f32::consts::TAU * i as f32 / segments as f32;
                self.pos + Vec2::new(angle.cos(), angle.sin()) * self.radius
            })
            .collect()
    }
}
