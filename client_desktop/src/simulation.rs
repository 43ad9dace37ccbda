use game_core::{
    create_ball, create_player, step, Ball, Blend, Config, Events, InputState, Oscillator, PaddleKeys,
    Player, Side, Time,
};
use glam::Vec2;
use hecs::World;

/// Where a paddle is this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleState {
    pub side: Side,
    pub position: f32,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    pub quad_offset: f32,
    pub rotation: f32, // radians, equal to elapsed seconds
    pub alpha: f32,
    pub paddles: Vec<PaddleState>,
    pub ball: Option<Ball>,
    pub exit_requested: bool,
}

/// Per-frame state of the demo, held in one place instead of globals
pub struct Simulation {
    pub world: World,
    pub time: Time,
    pub oscillator: Oscillator,
    pub blend: Blend,
    pub config: Config,
    pub events: Events,
}

impl Simulation {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();

        create_player(
            &mut world,
            Side::Left,
            config.paddle_start,
            PaddleKeys::wasd(),
            config.paddle_margin,
        );
        create_player(
            &mut world,
            Side::Right,
            config.paddle_start,
            PaddleKeys::arrows(),
            config.paddle_margin,
        );
        create_ball(&mut world, Vec2::ZERO, config.ball_radius);

        Self {
            world,
            time: Time::new(),
            oscillator: config.oscillator(),
            blend: config.blend(),
            config,
            events: Events::new(),
        }
    }

    /// Advance one frame. `now` is seconds since startup.
    pub fn step(&mut self, input: &InputState, now: f32) -> FrameSnapshot {
        self.time.now = now;

        step(
            &mut self.world,
            &mut self.time,
            input,
            &mut self.oscillator,
            &mut self.blend,
            &self.config,
            &mut self.events,
        );

        for side in &self.events.clamped {
            tracing::trace!(?side, "paddle held at bound");
        }

        self.snapshot()
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let mut paddles: Vec<PaddleState> = self
            .world
            .query::<&Player>()
            .iter()
            .map(|(_e, player)| PaddleState {
                side: player.side,
                position: player.position(),
            })
            .collect();
        paddles.sort_by_key(|p| p.side == Side::Right);

        let ball = self
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball);

        FrameSnapshot {
            quad_offset: self.oscillator.offset(),
            rotation: self.time.now,
            alpha: self.blend.alpha,
            paddles,
            ball,
            exit_requested: self.events.exit_requested,
        }
    }
}
