pub mod components;
pub mod config;
pub mod input;
pub mod oscillator;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use input::*;
pub use oscillator::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one frame of the simulation
///
/// Movement is per frame, not per second: nothing here reads `time.now`.
pub fn step(
    world: &mut World,
    time: &mut Time,
    input: &InputState,
    oscillator: &mut Oscillator,
    blend: &mut Blend,
    config: &Config,
    events: &mut Events,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Apply held keys to paddles and the blend
    process_input(world, input, blend, config, events);

    // 2. Slide the quad
    advance_oscillator(oscillator);

    time.frame += 1;
}

/// Helper to create a player entity
pub fn create_player(
    world: &mut World,
    side: Side,
    position: f32,
    keys: PaddleKeys,
    margin: f32,
) -> hecs::Entity {
    world.spawn((Player::new(side, position, margin, keys),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, radius: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, radius),))
}
