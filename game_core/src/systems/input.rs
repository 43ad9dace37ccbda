use hecs::World;

use crate::components::*;
use crate::input::{InputState, Key};
use crate::resources::*;
use crate::Config;

/// Apply held keys: Escape requests exit, blend keys nudge the mix factor,
/// paddle keys move their player
pub fn process_input(
    world: &mut World,
    input: &InputState,
    blend: &mut Blend,
    config: &Config,
    events: &mut Events,
) {
    if input.is_held(Key::Escape) {
        events.exit_requested = true;
    }

    // Unclamped: the shader extrapolates outside [0, 1]
    if input.is_held(config.blend_keys.up) {
        blend.alpha += config.mix_alpha_step;
    }
    if input.is_held(config.blend_keys.down) {
        blend.alpha -= config.mix_alpha_step;
    }

    for (_entity, player) in world.query_mut::<&mut Player>() {
        let mut clamped = false;
        if input.is_held(player.keys.up) {
            clamped |= player.move_up(config.paddle_step);
        }
        if input.is_held(player.keys.down) {
            clamped |= player.move_down(config.paddle_step);
        }
        if clamped {
            events.clamped.push(player.side);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_player, PaddleKeys};

    fn setup() -> (World, Config, Events) {
        (World::new(), Config::new(), Events::new())
    }

    fn run(world: &mut World, input: &InputState, config: &Config, events: &mut Events) -> Blend {
        let mut blend = config.blend();
        process_input(world, input, &mut blend, config, events);
        blend
    }

    #[test]
    fn test_only_bound_keys_move_a_player() {
        let (mut world, config, mut events) = setup();
        let left = create_player(&mut world, Side::Left, 0.0, PaddleKeys::wasd(), 0.2);
        let right = create_player(&mut world, Side::Right, 0.0, PaddleKeys::arrows(), 0.2);

        let mut input = InputState::new();
        input.press(Key::W);
        run(&mut world, &input, &config, &mut events);

        let left_pos = world.get::<&Player>(left).unwrap().position();
        let right_pos = world.get::<&Player>(right).unwrap().position();
        assert!((left_pos - config.paddle_step).abs() < 1e-6);
        assert_eq!(right_pos, 0.0);
        assert!(!events.exit_requested);
    }

    #[test]
    fn test_escape_requests_exit() {
        let (mut world, config, mut events) = setup();
        let mut input = InputState::new();
        input.press(Key::Escape);
        run(&mut world, &input, &config, &mut events);
        assert!(events.exit_requested);
    }

    #[test]
    fn test_clamp_is_reported() {
        let (mut world, config, mut events) = setup();
        create_player(&mut world, Side::Right, 0.8, PaddleKeys::arrows(), 0.2);
        let mut input = InputState::new();
        input.press(Key::Up);
        run(&mut world, &input, &config, &mut events);
        assert_eq!(events.clamped, vec![Side::Right]);
    }

    #[test]
    fn test_both_keys_cancel_out() {
        let (mut world, config, mut events) = setup();
        let e = create_player(&mut world, Side::Left, 0.0, PaddleKeys::wasd(), 0.2);
        let mut input = InputState::new();
        input.press(Key::W);
        input.press(Key::S);
        run(&mut world, &input, &config, &mut events);
        let pos = world.get::<&Player>(e).unwrap().position();
        assert!(pos.abs() < 1e-6);
    }

    #[test]
    fn test_arrow_keys_nudge_the_blend() {
        let (mut world, config, mut events) = setup();
        let mut blend = config.blend();

        let mut input = InputState::new();
        input.press(Key::Up);
        for _ in 0..10 {
            process_input(&mut world, &input, &mut blend, &config, &mut events);
        }
        assert!((blend.alpha - 0.3).abs() < 1e-5, "alpha {}", blend.alpha);

        input.release(Key::Up);
        input.press(Key::Down);
        for _ in 0..20 {
            process_input(&mut world, &input, &mut blend, &config, &mut events);
        }
        assert!((blend.alpha - 0.1).abs() < 1e-5, "alpha {}", blend.alpha);
    }

    #[test]
    fn test_wasd_leaves_the_blend_alone() {
        let (mut world, config, mut events) = setup();
        let mut input = InputState::new();
        input.press(Key::W);
        let blend = run(&mut world, &input, &config, &mut events);
        assert_eq!(blend.alpha, config.mix_alpha);

        input.release(Key::W);
        input.press(Key::S);
        let blend = run(&mut world, &input, &config, &mut events);
        assert_eq!(blend.alpha, config.mix_alpha);
    }
}
