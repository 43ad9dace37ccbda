/// Direction the oscillating offset is travelling in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increasing,
    Decreasing,
}

/// Triangle-wave offset that moves one `step` per frame between `-limit` and `limit`
#[derive(Debug, Clone, Copy)]
pub struct Oscillator {
    offset: f32,
    step: f32,
    limit: f32,
    direction: Direction,
}

impl Oscillator {
    pub fn new(offset: f32, step: f32, limit: f32, direction: Direction) -> Self {
        Self {
            offset,
            step,
            limit,
            direction,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn limit(&self) -> f32 {
        self.limit
    }

    /// Move one step, then flip direction if a limit was reached or crossed.
    ///
    /// Steps accumulate in f32, so the offset may not land on the limit exactly
    /// and the flip can happen one step past it (0.51 with the defaults).
    pub fn advance(&mut self) -> f32 {
        match self.direction {
            Direction::Increasing => self.offset += self.step,
            Direction::Decreasing => self.offset -= self.step,
        }

        if self.offset <= -self.limit {
            self.direction = Direction::Increasing;
        } else if self.offset >= self.limit {
            self.direction = Direction::Decreasing;
        }

        self.offset
    }
}
