use crate::{Blend, Direction, Oscillator, PaddleKeys, Params, Side};

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_margin: f32,
    pub paddle_step: f32,
    pub paddle_x: f32,
    pub paddle_start: f32,
    pub oscillation_start: f32,
    pub oscillation_step: f32,
    pub oscillation_limit: f32,
    pub ball_radius: f32,
    pub ball_segments: u32,
    pub mix_alpha: f32,
    pub mix_alpha_step: f32,
    pub blend_keys: PaddleKeys, // raise/lower the mix factor
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_step: Params::PADDLE_STEP,
            paddle_x: Params::PADDLE_X,
            paddle_start: Params::PADDLE_START,
            oscillation_start: Params::OSCILLATION_START,
            oscillation_step: Params::OSCILLATION_STEP,
            oscillation_limit: Params::OSCILLATION_LIMIT,
            ball_radius: Params::BALL_RADIUS,
            ball_segments: Params::BALL_SEGMENTS,
            mix_alpha: Params::MIX_ALPHA,
            mix_alpha_step: Params::MIX_ALPHA_STEP,
            blend_keys: PaddleKeys::arrows(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for paddle based on side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => -self.paddle_x,
            Side::Right => self.paddle_x,
        }
    }

    /// Build the quad's oscillator. It starts at the positive limit heading down.
    pub fn oscillator(&self) -> Oscillator {
        Oscillator::new(
            self.oscillation_start,
            self.oscillation_step,
            self.oscillation_limit,
            Direction::Decreasing,
        )
    }

    pub fn blend(&self) -> Blend {
        Blend::new(self.mix_alpha)
    }
}
