/// Tuning parameters for the paddle demo
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Paddle
    pub const PADDLE_MARGIN: f32 = 0.2; // half-length of the paddle segment
    pub const PADDLE_STEP: f32 = 0.01; // per rendered frame
    pub const PADDLE_X: f32 = 0.98; // distance of each paddle from the center
    pub const PADDLE_START: f32 = 0.0;

    // Quad translation
    pub const OSCILLATION_START: f32 = 0.5;
    pub const OSCILLATION_STEP: f32 = 0.01;
    pub const OSCILLATION_LIMIT: f32 = 0.5;

    // Ball
    pub const BALL_RADIUS: f32 = 0.05;
    pub const BALL_SEGMENTS: u32 = 32;

    // Texture blend between the two quad textures
    pub const MIX_ALPHA: f32 = 0.2;
    pub const MIX_ALPHA_STEP: f32 = 0.01; // per frame while Up/Down is held
}
