use game_core::*;
use glam::Vec2;
use hecs::World;

struct Frame {
    world: World,
    time: Time,
    input: InputState,
    osc: Oscillator,
    blend: Blend,
    config: Config,
    events: Events,
}

impl Frame {
    fn new() -> Self {
        let config = Config::new();
        Self {
            world: World::new(),
            time: Time::new(),
            input: InputState::new(),
            osc: config.oscillator(),
            blend: config.blend(),
            config,
            events: Events::new(),
        }
    }

    fn step(&mut self) {
        step(
            &mut self.world,
            &mut self.time,
            &self.input,
            &mut self.osc,
            &mut self.blend,
            &self.config,
            &mut self.events,
        );
    }
}

#[test]
fn test_moving_up_never_exceeds_upper_bound() {
    let margin = Params::PADDLE_MARGIN;
    for start_tenths in -8..=8 {
        for &step in &[0.001_f32, 0.01, 0.05, 0.1, 0.3, 1.7] {
            let start = start_tenths as f32 / 10.0;
            let mut player = Player::new(Side::Right, start, margin, PaddleKeys::arrows());
            for _ in 0..2000 {
                player.move_up(step);
                assert!(
                    player.upper_bound() <= 1.0 + 1e-6,
                    "start {start} step {step} overshot to {}",
                    player.position()
                );
            }
            assert_eq!(player.position(), 1.0 - margin, "start {start} step {step}");
        }
    }
}

#[test]
fn test_moving_down_never_exceeds_lower_bound() {
    let margin = Params::PADDLE_MARGIN;
    for start_tenths in -8..=8 {
        for &step in &[0.001_f32, 0.01, 0.05, 0.1, 0.3, 1.7] {
            let start = start_tenths as f32 / 10.0;
            let mut player = Player::new(Side::Left, start, margin, PaddleKeys::wasd());
            for _ in 0..2000 {
                player.move_down(step);
                assert!(
                    player.lower_bound() >= -1.0 - 1e-6,
                    "start {start} step {step} overshot to {}",
                    player.position()
                );
            }
            assert_eq!(player.position(), -1.0 + margin, "start {start} step {step}");
        }
    }
}

#[test]
fn test_snap_example_from_three_quarters() {
    let mut player = Player::new(Side::Right, 0.75, 0.2, PaddleKeys::arrows());
    player.move_up(0.1);
    assert_eq!(player.position(), 0.8, "should snap to 0.8, not 0.85");
}

#[test]
fn test_oscillator_is_a_triangle_wave() {
    let mut osc = Config::new().oscillator();
    let step = Params::OSCILLATION_STEP;
    let limit = Params::OSCILLATION_LIMIT;

    let mut previous = osc.offset();
    let mut descending = true;
    let mut turns = 0;

    for _ in 0..1000 {
        let before = osc.direction();
        let offset = osc.advance();

        if descending {
            assert!(offset < previous, "should fall: {previous} -> {offset}");
        } else {
            assert!(offset > previous, "should rise: {previous} -> {offset}");
        }
        assert!(offset.abs() <= limit + step + 1e-5, "left range: {offset}");

        if osc.direction() != before {
            turns += 1;
            descending = osc.direction() == Direction::Decreasing;
            if descending {
                assert!(offset >= limit);
            } else {
                assert!(offset <= -limit);
            }
        }
        previous = offset;
    }

    // ~100 frames per half period
    assert!(turns >= 8, "only {turns} turns in 1000 frames");
}

#[test]
fn test_oscillator_period_is_independent_of_phase() {
    fn turn_frames(mut osc: Oscillator) -> Vec<u32> {
        let mut frames = Vec::new();
        let mut last = osc.direction();
        for frame in 0..1000 {
            osc.advance();
            if osc.direction() != last {
                frames.push(frame);
                last = osc.direction();
            }
        }
        frames
    }

    let a = turn_frames(Oscillator::new(0.5, 0.01, 0.5, Direction::Decreasing));
    let b = turn_frames(Oscillator::new(0.0, 0.01, 0.5, Direction::Increasing));

    let period = |turns: &[u32]| turns[3] - turns[1];
    let (pa, pb) = (period(&a), period(&b));
    assert!(pa.abs_diff(pb) <= 1, "periods differ: {pa} vs {pb}");
}

#[test]
fn test_oscillator_boundary_example() {
    let mut osc = Oscillator::new(0.49, 0.01, 0.5, Direction::Increasing);
    let offset = osc.advance();
    assert!((offset - 0.50).abs() < 1e-6);
    assert_eq!(osc.direction(), Direction::Decreasing);

    let next = osc.advance();
    assert!(next < offset);
}

#[test]
fn test_step_moves_players_and_quad() {
    let mut f = Frame::new();
    let left = create_player(&mut f.world, Side::Left, 0.0, PaddleKeys::wasd(), 0.2);
    let right = create_player(&mut f.world, Side::Right, 0.0, PaddleKeys::arrows(), 0.2);

    f.input.press(Key::S);
    f.input.press(Key::Up);
    for _ in 0..10 {
        f.step();
    }

    let left_pos = f.world.get::<&Player>(left).unwrap().position();
    let right_pos = f.world.get::<&Player>(right).unwrap().position();
    assert!((left_pos + 0.1).abs() < 1e-5);
    assert!((right_pos - 0.1).abs() < 1e-5);
    assert!((f.osc.offset() - 0.4).abs() < 1e-5);
    assert!((f.blend.alpha - 0.3).abs() < 1e-5);
    assert_eq!(f.time.frame, 10);
}

#[test]
fn test_step_clears_events_each_frame() {
    let mut f = Frame::new();

    f.input.press(Key::Escape);
    f.step();
    assert!(f.events.exit_requested);

    f.input.release(Key::Escape);
    f.step();
    assert!(!f.events.exit_requested);
}

#[test]
fn test_holding_a_key_pins_the_paddle() {
    let mut f = Frame::new();
    let e = create_player(&mut f.world, Side::Right, 0.0, PaddleKeys::arrows(), 0.2);

    f.input.press(Key::Down);
    for _ in 0..200 {
        f.step();
    }

    let player = *f.world.get::<&Player>(e).unwrap();
    assert_eq!(player.position(), -0.8);
    assert!((player.lower_bound() + 1.0).abs() < 1e-6);
    assert_eq!(f.events.clamped, vec![Side::Right]);
    // The blend keeps moving after the paddle is pinned
    assert!((f.blend.alpha - (0.2 - 200.0 * 0.01)).abs() < 1e-3);
}

#[test]
fn test_ball_is_left_alone_by_step() {
    let mut f = Frame::new();
    let ball = create_ball(&mut f.world, Vec2::new(0.25, 0.0), f.config.ball_radius);

    f.step();

    let b = *f.world.get::<&Ball>(ball).unwrap();
    assert_eq!(b.pos, Vec2::new(0.25, 0.0));
    assert_eq!(b.outline(f.config.ball_segments).len(), 32);
}

#[test]
fn test_out_of_range_start_is_clamped() {
    let mut f = Frame::new();
    let e = create_player(&mut f.world, Side::Right, 0.95, PaddleKeys::arrows(), 0.2);

    let player = *f.world.get::<&Player>(e).unwrap();
    assert_eq!(player.position(), 0.8);
    assert!(player.upper_bound() <= 1.0 + 1e-6);
}
